//! # Slotbook Core
//!
//! Pure models and slot-grid logic for the slotbook booking widget.
//!
//! This crate carries no state of its own: it defines the wire contracts
//! (configuration in, booking request out), the error taxonomy, and the
//! three derivation passes that turn a configuration into a renderable
//! day grid (generation, visibility, availability). The stateful widget
//! that drives user interaction lives in `slotbook-widget`.

pub mod errors;
pub mod grid;
pub mod models;
