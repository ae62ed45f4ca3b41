use std::fmt;

use serde::{Deserialize, Serialize};

/// Half-day designator on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Am,
    Pm,
}

impl Phase {
    pub fn opposite(self) -> Self {
        match self {
            Phase::Am => Phase::Pm,
            Phase::Pm => Phase::Am,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Am => write!(f, "AM"),
            Phase::Pm => write!(f, "PM"),
        }
    }
}

/// A clock position, e.g. `9 AM`. Hours run 1..=12; equality is slot identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotTime {
    pub hour: u8,
    pub phase: Phase,
}

impl SlotTime {
    pub fn new(hour: u8, phase: Phase) -> Self {
        Self { hour, phase }
    }

    /// Absolute hour index counted from midnight: 12 AM is 0, 12 PM is 12.
    ///
    /// Only meaningful for hours in 1..=12; callers validate first.
    pub fn day_index(&self) -> usize {
        let hour = (self.hour % 12) as usize;
        match self.phase {
            Phase::Am => hour,
            Phase::Pm => hour + 12,
        }
    }

    /// Inverse of [`day_index`](Self::day_index), wrapping past the end of
    /// the day so index 24 is 12 AM again.
    pub fn from_day_index(index: usize) -> Self {
        let wrapped = index % 24;
        let hour = (wrapped % 12) as u8;
        let phase = if wrapped < 12 { Phase::Am } else { Phase::Pm };
        Self::new(if hour == 0 { 12 } else { hour }, phase)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hour, self.phase)
    }
}

/// One bookable hour segment of the day grid.
///
/// `highlighted` is the transient user selection for the current session,
/// `enabled` is false once the slot is reserved or booked (terminal), and
/// `visible` marks membership in the configured display window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: SlotTime,
    pub end: SlotTime,
    pub highlighted: bool,
    pub enabled: bool,
    pub visible: bool,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    /// Value snapshot of the slot's interval, detached from the live flags.
    pub fn range(&self) -> SlotRange {
        SlotRange {
            start: self.start,
            end: self.end,
        }
    }
}

/// An immutable hour interval as it appears in an emitted booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRange {
    pub start: SlotTime,
    pub end: SlotTime,
}
