extern crate std;

use core::cell::{Cell, RefCell};
use embassy_usb::driver::{
    Endpoint, EndpointAddress, EndpointError, EndpointIn, EndpointInfo, EndpointType,
};
use std::rc::Rc;
use std::vec::Vec;

#[derive(Clone, Default)]
pub struct Messages(Rc<RefCell<Vec<Vec<u8>>>>);

impl Messages {
    pub fn take(&self) -> Vec<Vec<u8>> {
        self.0.take()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Records every packet written to it. Set `disabled` to make writes fail.
pub struct MyEndpointIn {
    pub messages: Messages,
    pub disabled: Rc<Cell<bool>>,
    pub info: EndpointInfo,
}

impl MyEndpointIn {
    pub fn with_max_packet_size(max_packet_size: u16) -> Self {
        let mut ep = Self::default();
        ep.info.max_packet_size = max_packet_size;
        ep
    }
}

impl Endpoint for MyEndpointIn {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}

impl EndpointIn for MyEndpointIn {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        if self.disabled.get() {
            return Err(EndpointError::Disabled);
        }
        self.messages.0.borrow_mut().push(Vec::from(buf));
        Ok(())
    }
}

impl Default for MyEndpointIn {
    fn default() -> Self {
        Self {
            messages: Messages::default(),
            disabled: Rc::new(Cell::new(false)),
            info: EndpointInfo {
                addr: EndpointAddress::from(0x81),
                ep_type: EndpointType::Interrupt,
                max_packet_size: 8,
                interval_ms: 1,
            },
        }
    }
}
