use core::fmt;

use embassy_time::{Duration, Instant, Timer};
use embassy_usb::driver::EndpointIn;
use embedded_hal::digital::InputPin;
use macropad_shapes::ShapeError;

use crate::{
    actions::Action,
    button::{Button, Edge},
    config::KeypadConfig,
    consumer::ConsumerReporter,
    screen::{Placed, StatusScreen},
    status::{Status, ERROR},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// Reading the pin of the button at this index failed.
    Pin(u8),
    Shape(ShapeError),
}

impl From<ShapeError> for KeypadError {
    fn from(value: ShapeError) -> Self {
        KeypadError::Shape(value)
    }
}

impl fmt::Display for KeypadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeypadError::Pin(i) => write!(f, "failed to read button {}", i),
            KeypadError::Shape(err) => write!(f, "status screen: {}", err),
        }
    }
}

impl core::error::Error for KeypadError {}

/// Buttons bound one to one with consumer control actions.
pub struct Keypad<'a, P: InputPin, E: EndpointIn, const N: usize> {
    buttons: [Button<P>; N],
    actions: &'a [Action; N],
    reporter: ConsumerReporter<E>,
    status: Status,
    config: KeypadConfig,
}

impl<'a, P: InputPin, E: EndpointIn, const N: usize> Keypad<'a, P, E, N> {
    pub fn new(
        pins: [P; N],
        actions: &'a [Action; N],
        reporter: ConsumerReporter<E>,
        config: KeypadConfig,
        now: Instant,
    ) -> Self {
        Self {
            buttons: pins.map(Button::new),
            actions,
            reporter,
            status: Status::new(config.status_timeout, now),
            config,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Reads every button once and reports any edges. A press sends the action's usage code; a
    /// release clears it and shows the action's label. Returns true if the status label changed.
    ///
    /// Buttons before a failed pin have already been handled when the error is returned.
    pub async fn poll(&mut self, now: Instant) -> Result<bool, KeypadError> {
        let mut changed = self.status.tick(now);
        for (i, (button, action)) in self.buttons.iter_mut().zip(self.actions).enumerate() {
            let edge = button.poll().map_err(|_| KeypadError::Pin(i as u8))?;
            match edge {
                Some(Edge::Pressed) => {
                    crate::debug!("pressed {}", action.label);
                    self.reporter.press(action.code).await;
                }
                Some(Edge::Released) => {
                    self.reporter.release().await;
                    changed |= self.status.show(action.label, now);
                }
                None => {}
            }
        }
        Ok(changed)
    }

    /// One pass of [`Keypad::run`]. `redraw` is called with the label and screen layers whenever
    /// either changed. Returns how long to wait before the next pass.
    pub async fn step(
        &mut self,
        screen: &mut StatusScreen<'_>,
        now: Instant,
        redraw: &mut impl FnMut(&str, Placed<'_>),
    ) -> Duration {
        let (result, wait) = match self.poll(now).await {
            Ok(changed) => (
                screen.update(&self.status, now).map(|moved| changed | moved),
                self.config.poll_period,
            ),
            Err(err) => {
                crate::warn!("keypad: {}", err);
                self.status.show(ERROR, now);
                (
                    screen.update(&self.status, now).map(|_| true),
                    self.config.error_backoff,
                )
            }
        };

        match result {
            Ok(true) => redraw(self.status.label(), screen.layers()),
            Ok(false) => {}
            Err(err) => crate::warn!("keypad: {}", err),
        }
        wait
    }

    /// Polls forever, pausing [`KeypadConfig::poll_period`] between passes, or
    /// [`KeypadConfig::error_backoff`] after a failure.
    pub async fn run(
        &mut self,
        screen: &mut StatusScreen<'_>,
        mut redraw: impl FnMut(&str, Placed<'_>),
    ) -> ! {
        crate::info!("keypad running with {} buttons", N);
        redraw(self.status.label(), screen.layers());
        loop {
            let wait = self.step(screen, Instant::now(), &mut redraw).await;
            Timer::after(wait).await;
        }
    }
}

#[cfg(test)]
#[path = "keypad_test.rs"]
mod test;
