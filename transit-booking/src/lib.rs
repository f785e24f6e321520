pub mod engine;
pub mod ledger;
pub mod models;
pub mod settings;

pub use engine::{BookingError, ReservationEngine};
pub use ledger::{BookingLedger, LedgerError};
pub use models::Booking;
pub use settings::BookingSettings;

#[cfg(test)]
mod engine_tests;
