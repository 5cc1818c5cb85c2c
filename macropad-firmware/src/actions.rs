use crate::consumer::ConsumerCode;

/// What a button sends and the label shown once it is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Action {
    pub code: ConsumerCode,
    pub label: &'static str,
}

impl Action {
    pub const fn new(code: ConsumerCode, label: &'static str) -> Self {
        Self { code, label }
    }
}

/// Media controls in button order.
pub const DEFAULT_ACTIONS: [Action; 5] = [
    Action::new(ConsumerCode::ScanPreviousTrack, "PREV"),
    Action::new(ConsumerCode::PlayPause, "PLAY"),
    Action::new(ConsumerCode::ScanNextTrack, "NEXT"),
    Action::new(ConsumerCode::VolumeDecrement, "VOL-"),
    Action::new(ConsumerCode::VolumeIncrement, "VOL+"),
];
