use embassy_time::Duration;
use macropad_shapes::Color;

pub const DISPLAY_WIDTH: i32 = 128;
pub const DISPLAY_HEIGHT: i32 = 64;
/// I²C address of the SSD1306 status display.
pub const DISPLAY_ADDRESS: u8 = 0x3c;

pub const POLL_PERIOD_MS: u64 = 50;
pub const ERROR_BACKOFF_MS: u64 = 500;
pub const STATUS_TIMEOUT_MS: u64 = 2_000;

pub const WHITE: Color = 0xffffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub width: i32,
    pub height: i32,
    pub address: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            address: DISPLAY_ADDRESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadConfig {
    /// Time between button scans; long enough to ride out switch bounce.
    pub poll_period: Duration,
    /// Pause after a failed scan before trying again.
    pub error_backoff: Duration,
    /// How long an action label stays up before the status returns to idle.
    pub status_timeout: Duration,
    pub display: DisplayConfig,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            poll_period: Duration::from_millis(POLL_PERIOD_MS),
            error_backoff: Duration::from_millis(ERROR_BACKOFF_MS),
            status_timeout: Duration::from_millis(STATUS_TIMEOUT_MS),
            display: DisplayConfig::default(),
        }
    }
}
