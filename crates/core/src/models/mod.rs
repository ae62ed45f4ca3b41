pub mod booking;
pub mod config;
pub mod slot;
