use embedded_hal::digital::InputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// A switch between an input pin and the supply rail, with the pin pulled down; it reads high
/// while held.
pub struct Button<P: InputPin> {
    pin: P,
    was_down: bool,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            was_down: false,
        }
    }

    pub fn is_down(&self) -> bool {
        self.was_down
    }

    /// Reads the pin once and reports a change since the previous poll.
    pub fn poll(&mut self) -> Result<Option<Edge>, P::Error> {
        let down = self.pin.is_high()?;
        let edge = match (self.was_down, down) {
            (false, true) => Some(Edge::Pressed),
            (true, false) => Some(Edge::Released),
            _ => None,
        };
        self.was_down = down;
        Ok(edge)
    }
}

#[cfg(test)]
#[path = "button_test.rs"]
mod test;
