use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slot::SlotRange;

/// The notification emitted to the host on submission. Slot entries are
/// value snapshots; the host cannot reach back into live widget state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Fresh per submission, for host-side correlation.
    pub booking_id: Uuid,
    pub date: NaiveDate,
    pub time_slots: Vec<SlotRange>,
    pub total_charges: f64,
    pub currency: String,
}
