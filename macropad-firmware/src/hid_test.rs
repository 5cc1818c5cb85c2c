use embassy_futures::block_on;

use crate::usb_test_stub::MyEndpointIn;

use super::*;

extern crate std;
use std::vec;

#[test]
fn short_report() {
    block_on(async {
        let ep_in = MyEndpointIn::default();
        let messages = ep_in.messages.clone();
        let mut writer = HidWriter::<_, 2>::new(ep_in);

        writer.write(&[0xcd, 0x00]).await.unwrap();
        assert_eq!(messages.take(), vec![vec![0xcd, 0x00]]);
    });
}

#[test]
fn chunks_and_zero_length_packet() {
    block_on(async {
        let ep_in = MyEndpointIn::with_max_packet_size(4);
        let messages = ep_in.messages.clone();
        let mut writer = HidWriter::<_, 10>::new(ep_in);

        writer.write(&[1, 2, 3, 4, 5, 6, 7, 8]).await.unwrap();
        assert_eq!(
            messages.take(),
            vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![]]
        );

        writer.write(&[1, 2, 3, 4, 5]).await.unwrap();
        assert_eq!(messages.take(), vec![vec![1, 2, 3, 4], vec![5]]);
    });
}

#[test]
fn endpoint_error() {
    block_on(async {
        let ep_in = MyEndpointIn::default();
        ep_in.disabled.set(true);
        let mut writer = HidWriter::<_, 2>::new(ep_in);

        assert_eq!(writer.write(&[1, 0]).await, Err(EndpointError::Disabled));
    });
}
