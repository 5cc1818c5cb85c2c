use embassy_time::{Duration, Instant};
use heapless::String;

pub const LABEL_LEN: usize = 8;

pub const IDLE: &str = "READY";
pub const ERROR: &str = "ERROR";

/// The word on the status display. Anything other than [`IDLE`] reverts to it once the timeout
/// has passed without a newer label.
#[derive(Debug, Clone)]
pub struct Status {
    label: String<LABEL_LEN>,
    shown_at: Instant,
    timeout: Duration,
}

impl Status {
    pub fn new(timeout: Duration, now: Instant) -> Self {
        let mut status = Self {
            label: String::new(),
            shown_at: now,
            timeout,
        };
        status.set_label(IDLE);
        status
    }

    fn set_label(&mut self, label: &str) {
        self.label.clear();
        for c in label.chars() {
            if self.label.push(c).is_err() {
                break;
            }
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn is_idle(&self) -> bool {
        self.label.as_str() == IDLE
    }

    /// Shows `label`, truncated to [`LABEL_LEN`] bytes. The timeout restarts only if the displayed
    /// text changed, which is what this returns.
    pub fn show(&mut self, label: &str, now: Instant) -> bool {
        let old = self.label.clone();
        self.set_label(label);
        if old == self.label {
            return false;
        }
        self.shown_at = now;
        true
    }

    /// Time left before the label reverts; zero when idle.
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.is_idle() {
            return Duration::from_ticks(0);
        }
        self.timeout
            .checked_sub(now.saturating_duration_since(self.shown_at))
            .unwrap_or(Duration::from_ticks(0))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Reverts to [`IDLE`] once the timeout has passed. Returns true if that happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_idle() && now.saturating_duration_since(self.shown_at) > self.timeout {
            self.show(IDLE, now)
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod test;
