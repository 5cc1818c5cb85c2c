use embassy_usb::driver::EndpointIn;

use crate::hid::HidWriter;

/// HID consumer page usages for the media keys the keypad sends.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerCode {
    ScanNextTrack = 0xb5,
    ScanPreviousTrack = 0xb6,
    Stop = 0xb7,
    PlayPause = 0xcd,
    Mute = 0xe2,
    VolumeIncrement = 0xe9,
    VolumeDecrement = 0xea,
}

impl ConsumerCode {
    pub const fn usage(self) -> u16 {
        self as u16
    }
}

pub const CONSUMER_REPORT_LEN: usize = 2;

/// One 16 bit consumer usage per report, no report id.
#[rustfmt::skip]
pub const CONSUMER_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x0c,       // usage page (consumer)
    0x09, 0x01,       // usage (consumer control)
    0xa1, 0x01,       // collection (application)
    0x15, 0x00,       //   logical minimum (0)
    0x26, 0xff, 0x03, //   logical maximum (0x3ff)
    0x19, 0x00,       //   usage minimum (0)
    0x2a, 0xff, 0x03, //   usage maximum (0x3ff)
    0x75, 0x10,       //   report size (16)
    0x95, 0x01,       //   report count (1)
    0x81, 0x00,       //   input (data, array, absolute)
    0xc0,             // end collection
];

pub struct ConsumerReporter<E: EndpointIn> {
    hid_writer: HidWriter<E, CONSUMER_REPORT_LEN>,
}

impl<E: EndpointIn> ConsumerReporter<E> {
    pub fn new(hid_writer: HidWriter<E, CONSUMER_REPORT_LEN>) -> Self {
        Self { hid_writer }
    }

    async fn write_report(&mut self, usage: u16) {
        if let Err(e) = self.hid_writer.write(&usage.to_le_bytes()).await {
            crate::warn!("Failed to send report: {:?}", e);
        }
    }

    pub async fn press(&mut self, code: ConsumerCode) {
        self.write_report(code.usage()).await;
    }

    /// Releases whatever usage is held.
    pub async fn release(&mut self) {
        self.write_report(0).await;
    }
}

#[cfg(test)]
#[path = "consumer_test.rs"]
mod test;
