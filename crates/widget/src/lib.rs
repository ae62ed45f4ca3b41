//! # Slotbook Widget
//!
//! The stateful half of the booking widget: it owns the day grid derived
//! by `slotbook-core`, tracks the user's selection and running charge
//! total, and emits a [`BookingRequest`](slotbook_core::models::booking::BookingRequest)
//! to the host on submission.
//!
//! ## Architecture
//!
//! - **Widget**: the mutable view-state container driving toggle/submit
//! - **Config**: loading the host-supplied configuration from disk
//!
//! Everything is single-threaded and synchronous; a widget instance
//! exclusively owns its slots, so there is no locking anywhere.

/// Configuration loading for embedding hosts
pub mod config;
/// The mutable booking widget itself
pub mod widget;

pub use widget::BookingWidget;
