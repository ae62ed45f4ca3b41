//! # Day-Grid Derivation
//!
//! The three passes that turn a booking configuration into a renderable
//! day grid:
//!
//! 1. [`generate_day`] produces the canonical 24-slot sequence.
//! 2. [`apply_visibility`] marks the slots inside the configured window.
//! 3. [`apply_reservations`] disables slots already booked elsewhere.
//!
//! The generated order is part of the contract: 12 AM, 1 AM, .., 11 AM,
//! 12 PM, .., 11 PM. Consumers index slots by position, so all passes
//! preserve order and length. Each pass is a total function; contract
//! violations in the inputs are rejected upstream by
//! [`BookingConfig::validate`](crate::models::config::BookingConfig::validate),
//! never here.

use crate::models::{
    config::VisibleWindow,
    slot::{SlotTime, TimeSlot},
};

/// One slot per hour on a 12-hour AM/PM clock, twice around.
pub const SLOTS_PER_DAY: usize = 24;

/// Produces the canonical ordered day grid.
///
/// Pure and deterministic: each slot's bounds are a function of its index
/// alone, so the 12-o'clock wraps (11 AM -> 12 PM, 11 PM -> 12 AM) fall
/// out of the index arithmetic instead of mutable phase-flip bookkeeping.
/// Every slot starts unhighlighted, enabled, and visible.
pub fn generate_day() -> Vec<TimeSlot> {
    (0..SLOTS_PER_DAY)
        .map(|index| TimeSlot {
            start: SlotTime::from_day_index(index),
            end: SlotTime::from_day_index(index + 1),
            highlighted: false,
            enabled: true,
            visible: true,
        })
        .collect()
}

/// Marks each slot visible or hidden against the configured window.
///
/// No window means everything is visible. Otherwise the slots are scanned
/// in order with a cursor that turns on at the slot starting at
/// `window.start` and off at the slot starting at `window.end`, making the
/// window half-open: the ending slot itself is hidden. A window whose
/// start never fires before its end leaves those slots hidden; validated
/// configurations never produce one.
pub fn apply_visibility(slots: &mut [TimeSlot], window: Option<&VisibleWindow>) {
    let Some(window) = window else {
        for slot in slots.iter_mut() {
            slot.visible = true;
        }
        return;
    };

    let mut inside = false;
    for slot in slots.iter_mut() {
        if slot.start == window.start {
            inside = true;
        }
        if slot.start == window.end {
            inside = false;
        }
        slot.visible = inside;
    }
}

/// Disables every slot whose start matches a reserved entry.
///
/// Slots not named keep their current flag; an empty list is a no-op, and
/// entries matching no slot are ignored.
pub fn apply_reservations(slots: &mut [TimeSlot], reserved: &[SlotTime]) {
    if reserved.is_empty() {
        return;
    }

    for slot in slots.iter_mut() {
        if reserved.contains(&slot.start) {
            slot.enabled = false;
        }
    }
}
