use thiserror::Error;

use crate::models::slot::SlotTime;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotError {
    #[error("Hour out of range: {hour} (expected 1..=12)")]
    InvalidHour { hour: u8 },

    #[error("Visibility window is half-specified: an hour limit needs a matching phase")]
    HalfSpecifiedWindow,

    #[error("Visibility window start {start} does not precede its end {end}")]
    InvalidWindow { start: SlotTime, end: SlotTime },

    #[error("Hourly rate must be positive, got {rate}")]
    InvalidRate { rate: f64 },

    #[error("No slot at index {index}")]
    UnknownSlot { index: usize },

    #[error("Slot {slot} is unavailable")]
    SlotUnavailable { slot: SlotTime },

    #[error("Slot {slot} is outside the visible window")]
    SlotHidden { slot: SlotTime },
}

pub type SlotResult<T> = Result<T, SlotError>;
