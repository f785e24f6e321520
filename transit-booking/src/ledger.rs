use crate::models::Booking;
use crate::settings::BookingSettings;
use transit_shared::RiderRole;

/// Append-only store of confirmed bookings, in creation order. Codes are the
/// configured prefix plus a 1-based sequence; allocation rides on the `&mut
/// self` borrow, so a single-caller session cannot mint duplicates.
pub struct BookingLedger {
    bookings: Vec<Booking>,
    code_prefix: String,
    /// Optional hard cap emulating the historical 200-entry store.
    capacity: Option<usize>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::with_settings(&BookingSettings::default())
    }

    pub fn with_settings(settings: &BookingSettings) -> Self {
        Self {
            bookings: Vec::new(),
            code_prefix: settings.code_prefix.clone(),
            capacity: settings.ledger_capacity,
        }
    }

    /// Append a confirmed reservation and return the finished record.
    pub fn record(
        &mut self,
        rider_id: &str,
        rider_role: RiderRole,
        vehicle_id: &str,
        seat_index: usize,
        fare: i32,
    ) -> Result<Booking, LedgerError> {
        if self.is_full() {
            return Err(LedgerError::Full {
                capacity: self.bookings.len(),
            });
        }

        let code = format!("{}{}", self.code_prefix, self.bookings.len() + 1);
        let booking = Booking::new(
            code,
            rider_id.to_string(),
            rider_role,
            vehicle_id.to_string(),
            seat_index,
            fare,
        );

        tracing::info!(
            "Booking {} confirmed: {} on {} seat {} for {}",
            booking.code,
            booking.rider_id,
            booking.vehicle_id,
            booking.seat_index,
            booking.fare
        );

        self.bookings.push(booking.clone());
        Ok(booking)
    }

    /// Confirmed bookings in insertion order. Restartable: each call yields a
    /// fresh pass over the full ledger.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Capacity probe, so callers can refuse a booking before mutating any
    /// seat state.
    pub fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.bookings.len() >= capacity,
            None => false,
        }
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Booking ledger is full at {capacity} entries")]
    Full { capacity: usize },
}
