use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

use super::slot::{Phase, SlotTime};

/// Resolved visibility window over the day grid, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub start: SlotTime,
    pub end: SlotTime,
}

/// Input contract supplied once by the embedding host.
///
/// Serialized field names follow the host-facing JSON wire form:
///
/// ```json
/// {
///   "date": "2018-07-17",
///   "startingHourLimit": 9,
///   "startingPhase": "am",
///   "endingHourLimit": 5,
///   "endingPhase": "pm",
///   "selectedTimeRanges": [{ "hour": 9, "phase": "am" }],
///   "hourlyRate": 100,
///   "currency": "AED"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfig {
    pub date: NaiveDate,
    #[serde(default)]
    pub starting_hour_limit: Option<u8>,
    #[serde(default)]
    pub starting_phase: Option<Phase>,
    #[serde(default)]
    pub ending_hour_limit: Option<u8>,
    #[serde(default)]
    pub ending_phase: Option<Phase>,
    /// Slots already booked elsewhere, pre-marked unavailable.
    #[serde(rename = "selectedTimeRanges", default)]
    pub reserved: Vec<SlotTime>,
    pub hourly_rate: f64,
    pub currency: String,
}

impl BookingConfig {
    /// Resolves the optional hour limits into a visibility window.
    ///
    /// Either limit absent means no window (every slot visible). An hour
    /// limit of 0 is a legacy sentinel with the same meaning.
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        let start_hour = self.starting_hour_limit.filter(|&hour| hour != 0)?;
        let end_hour = self.ending_hour_limit.filter(|&hour| hour != 0)?;
        let start_phase = self.starting_phase?;
        let end_phase = self.ending_phase?;

        Some(VisibleWindow {
            start: SlotTime::new(start_hour, start_phase),
            end: SlotTime::new(end_hour, end_phase),
        })
    }

    /// Checks the contract the host is supposed to uphold.
    ///
    /// Rejects a non-positive rate, hours outside 1..=12 (window limits and
    /// reserved entries alike), an hour limit whose phase is missing, and a
    /// window whose start does not precede its end in grid order. The grid
    /// passes themselves stay total; this is the one place bad input turns
    /// into an error instead of a silently empty grid.
    pub fn validate(&self) -> Result<(), SlotError> {
        if !(self.hourly_rate > 0.0) {
            return Err(SlotError::InvalidRate {
                rate: self.hourly_rate,
            });
        }

        for hour in [self.starting_hour_limit, self.ending_hour_limit]
            .into_iter()
            .flatten()
        {
            if hour > 12 {
                return Err(SlotError::InvalidHour { hour });
            }
        }

        if self.starting_hour_limit.is_some_and(|hour| hour != 0) && self.starting_phase.is_none() {
            return Err(SlotError::HalfSpecifiedWindow);
        }
        if self.ending_hour_limit.is_some_and(|hour| hour != 0) && self.ending_phase.is_none() {
            return Err(SlotError::HalfSpecifiedWindow);
        }

        if let Some(window) = self.visible_window() {
            if window.start.day_index() >= window.end.day_index() {
                return Err(SlotError::InvalidWindow {
                    start: window.start,
                    end: window.end,
                });
            }
        }

        for entry in &self.reserved {
            if entry.hour == 0 || entry.hour > 12 {
                return Err(SlotError::InvalidHour { hour: entry.hour });
            }
        }

        Ok(())
    }

    /// A ready-made business-day configuration: 9 AM - 5 PM with the
    /// first two hours already taken. Used by tests and the demo binary
    /// only; real hosts pass their own configuration.
    pub fn demo_preset() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2018, 7, 17).expect("literal date is valid"),
            starting_hour_limit: Some(9),
            starting_phase: Some(Phase::Am),
            ending_hour_limit: Some(5),
            ending_phase: Some(Phase::Pm),
            reserved: vec![
                SlotTime::new(9, Phase::Am),
                SlotTime::new(10, Phase::Am),
            ],
            hourly_rate: 100.0,
            currency: "AED".to_string(),
        }
    }
}
