use crate::ledger::{BookingLedger, LedgerError};
use crate::models::Booking;
use crate::settings::BookingSettings;
use transit_core::rider::RiderRegistry;
use transit_fleet::compute_fare;
use transit_fleet::provider::Provider;
use transit_fleet::seat_map::SeatError;
use transit_fleet::vehicle::Vehicle;

/// Session context for reservations: owns the rider registry, the provider
/// fleet, and the booking ledger. One engine instance is one booking session;
/// every operation resolves synchronously before the next begins.
pub struct ReservationEngine {
    riders: RiderRegistry,
    providers: Vec<Provider>,
    ledger: BookingLedger,
}

impl ReservationEngine {
    pub fn new() -> Self {
        Self::with_settings(&BookingSettings::default())
    }

    pub fn with_settings(settings: &BookingSettings) -> Self {
        Self {
            riders: RiderRegistry::new(),
            providers: Vec::new(),
            ledger: BookingLedger::with_settings(settings),
        }
    }

    pub fn riders(&self) -> &RiderRegistry {
        &self.riders
    }

    pub fn riders_mut(&mut self) -> &mut RiderRegistry {
        &mut self.riders
    }

    pub fn add_provider(&mut self, provider: Provider) {
        tracing::debug!(
            "Added provider {} with {} vehicle(s)",
            provider.name,
            provider.vehicles().len()
        );
        self.providers.push(provider);
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn provider_by_name(&self, name: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.name == name)
    }

    pub fn provider_by_name_mut(&mut self, name: &str) -> Option<&mut Provider> {
        self.providers.iter_mut().find(|p| p.name == name)
    }

    /// Fleet-wide vehicle lookup across every provider.
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.providers.iter().find_map(|p| p.vehicle(id))
    }

    fn vehicle_mut(&mut self, id: &str) -> Option<&mut Vehicle> {
        self.providers.iter_mut().find_map(|p| p.vehicle_mut(id))
    }

    /// The sole mutating entry point. Validates the rider, the payment
    /// precondition, and the vehicle, then delegates the atomic seat
    /// check-and-set and records the booking with the fare frozen in.
    ///
    /// Everything before the seat flip is a pure read, so a rejection never
    /// leaves partial state behind.
    pub fn book_seat(
        &mut self,
        rider_id: &str,
        vehicle_id: &str,
        seat_index: usize,
    ) -> Result<Booking, BookingError> {
        let rider = self
            .riders
            .get(rider_id)
            .ok_or_else(|| BookingError::RiderNotFound(rider_id.to_string()))?;
        if !rider.has_paid() {
            return Err(BookingError::PaymentIncomplete);
        }
        let role = rider.role;

        // A full ledger must reject before the seat flips, or the seat would
        // be gone with no booking to show for it.
        if self.ledger.is_full() {
            return Err(BookingError::LedgerFull);
        }

        let vehicle = self
            .vehicle_mut(vehicle_id)
            .ok_or_else(|| BookingError::VehicleNotFound(vehicle_id.to_string()))?;
        let air_conditioned = vehicle.air_conditioned;

        vehicle.seats.try_book(seat_index, role).map_err(|e| match e {
            SeatError::InvalidSeatIndex(seat) | SeatError::SeatAlreadyBooked(seat) => {
                BookingError::SeatUnavailable(seat)
            }
            SeatError::RoleMismatch { .. } => BookingError::RoleMismatch,
        })?;

        let fare = compute_fare(role, air_conditioned);
        let booking = self.ledger.record(rider_id, role, vehicle_id, seat_index, fare)?;
        Ok(booking)
    }

    /// Read-only reporting hook: confirmed bookings in creation order.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.ledger.iter()
    }
}

impl Default for ReservationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Rider not found: {0}")]
    RiderNotFound(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Payment not completed")]
    PaymentIncomplete,

    #[error("Seat already booked or invalid: {0}")]
    SeatUnavailable(usize),

    #[error("Role-based seat violation")]
    RoleMismatch,

    #[error("Booking ledger is full")]
    LedgerFull,
}

impl From<LedgerError> for BookingError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::Full { .. } => BookingError::LedgerFull,
        }
    }
}
