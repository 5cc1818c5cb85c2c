extern crate std;

use core::cell::Cell;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Low,
    High,
    Broken,
}

#[derive(Debug)]
pub struct TestError;

impl Error for TestError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// An input pin whose level is set by the test. Clones share the same level.
#[derive(Clone)]
pub struct Pin(Rc<Cell<Level>>);

impl Default for Pin {
    fn default() -> Self {
        Self(Rc::new(Cell::new(Level::Low)))
    }
}

impl core::fmt::Debug for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Pin").field(&self.0.get()).finish()
    }
}

impl Pin {
    pub fn press(&self) {
        self.0.set(Level::High);
    }

    pub fn release(&self) {
        self.0.set(Level::Low);
    }

    /// Reads fail until the pin is pressed or released again.
    pub fn break_pin(&self) {
        self.0.set(Level::Broken);
    }
}

impl ErrorType for Pin {
    type Error = TestError;
}

impl InputPin for Pin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        match self.0.get() {
            Level::High => Ok(true),
            Level::Low => Ok(false),
            Level::Broken => Err(TestError),
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|h| !h)
    }
}
