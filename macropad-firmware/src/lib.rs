#![no_std]
extern crate alloc;

pub mod actions;
pub mod button;
pub mod config;
pub mod consumer;
pub mod hid;
pub mod keypad;
pub mod screen;
pub mod status;

#[cfg(any(test, feature = "test-utils"))]
pub mod pin_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod usb_test_stub;

#[macro_use]
mod macros;
