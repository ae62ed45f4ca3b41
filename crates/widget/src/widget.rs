use std::fmt;

use chrono::NaiveDate;
use slotbook_core::{
    errors::{SlotError, SlotResult},
    grid,
    models::{
        booking::BookingRequest,
        config::BookingConfig,
        slot::{SlotRange, TimeSlot},
    },
};
use tracing::{debug, info};
use uuid::Uuid;

type BookingHandler = Box<dyn FnMut(&BookingRequest)>;

/// The hourly booking widget.
///
/// Owns the 24-slot day grid and the session's selection state. A host
/// constructs it with an explicit [`BookingConfig`], registers a handler
/// with [`on_booking`](Self::on_booking), and drives it with
/// [`toggle`](Self::toggle) and [`submit`](Self::submit) from its UI
/// event loop.
///
/// Per-slot lifecycle: a disabled slot is terminal, whether it arrived
/// that way (pre-reserved) or was booked by a submit. Enabled, visible
/// slots oscillate between unselected and selected via `toggle` until a
/// submit books them.
pub struct BookingWidget {
    config: BookingConfig,
    slots: Vec<TimeSlot>,
    date: NaiveDate,
    total_charges: f64,
    on_booking: Option<BookingHandler>,
}

impl BookingWidget {
    /// Validates the configuration and derives the initial day grid:
    /// generation, then the visibility pass, then the availability pass.
    pub fn new(config: BookingConfig) -> SlotResult<Self> {
        config.validate()?;

        let mut slots = grid::generate_day();
        grid::apply_visibility(&mut slots, config.visible_window().as_ref());
        grid::apply_reservations(&mut slots, &config.reserved);

        Ok(Self {
            date: config.date,
            slots,
            total_charges: 0.0,
            on_booking: None,
            config,
        })
    }

    /// All 24 slots in contract order; positions are stable for the
    /// lifetime of the widget.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// The slots inside the configured display window, in contract order.
    pub fn visible_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|slot| slot.visible)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    pub fn hourly_rate(&self) -> f64 {
        self.config.hourly_rate
    }

    /// Running charge total for the current session.
    pub fn total_charges(&self) -> f64 {
        self.total_charges
    }

    /// Registers the host callback invoked once per submission.
    pub fn on_booking(&mut self, handler: impl FnMut(&BookingRequest) + 'static) {
        self.on_booking = Some(Box::new(handler));
    }

    /// Flips the selection mark on the slot at `index` and adjusts the
    /// running total by the hourly rate. Returns the new highlighted
    /// state.
    ///
    /// Disabled and hidden slots are not interactable: toggling one is
    /// rejected with [`SlotError::SlotUnavailable`] or
    /// [`SlotError::SlotHidden`] and changes nothing.
    pub fn toggle(&mut self, index: usize) -> SlotResult<bool> {
        let rate = self.config.hourly_rate;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SlotError::UnknownSlot { index })?;

        if !slot.enabled {
            return Err(SlotError::SlotUnavailable { slot: slot.start });
        }
        if !slot.visible {
            return Err(SlotError::SlotHidden { slot: slot.start });
        }

        slot.highlighted = !slot.highlighted;
        if slot.highlighted {
            self.total_charges += rate;
        } else {
            self.total_charges -= rate;
        }

        debug!(
            slot = %slot.start,
            highlighted = slot.highlighted,
            total = self.total_charges,
            "slot toggled"
        );

        Ok(slot.highlighted)
    }

    /// Replaces the date carried by the next submission.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Packages the current selection into a [`BookingRequest`], hands it
    /// to the registered host callback, and starts a fresh session.
    ///
    /// The request's slot list is derived fresh from the slots highlighted
    /// right now, as value snapshots; repeated toggling earlier in the
    /// session leaves no stale entries behind. Afterwards every selected
    /// slot is booked (highlight off, disabled for good) and the running
    /// total returns to zero. Submitting with nothing selected emits an
    /// empty request and books nothing.
    pub fn submit(&mut self) -> BookingRequest {
        let time_slots: Vec<SlotRange> = self
            .slots
            .iter()
            .filter(|slot| slot.highlighted)
            .map(TimeSlot::range)
            .collect();

        let request = BookingRequest {
            booking_id: Uuid::new_v4(),
            date: self.date,
            time_slots,
            total_charges: self.total_charges,
            currency: self.config.currency.clone(),
        };

        info!(
            booking_id = %request.booking_id,
            slots = request.time_slots.len(),
            total = request.total_charges,
            "booking submitted"
        );

        if let Some(handler) = self.on_booking.as_mut() {
            handler(&request);
        }

        for slot in &mut self.slots {
            if slot.highlighted {
                slot.highlighted = false;
                slot.enabled = false;
            }
        }
        self.total_charges = 0.0;

        request
    }
}

impl fmt::Debug for BookingWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingWidget")
            .field("date", &self.date)
            .field("total_charges", &self.total_charges)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}
