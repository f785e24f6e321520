use serde::{Deserialize, Serialize};
use transit_shared::RiderRole;

/// One seat's state: whether it has been taken this session, and which role,
/// if any, it is reserved for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatSlot {
    booked: bool,
    restricted_to: Option<RiderRole>,
}

/// Per-vehicle seat inventory. Capacity is fixed at construction; the only
/// mutations are the setup-phase restriction mark and the booking
/// check-and-set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    slots: Vec<SeatSlot>,
}

impl SeatMap {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![SeatSlot::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_booked(&self, seat: usize) -> bool {
        self.slots.get(seat).map(|s| s.booked).unwrap_or(false)
    }

    pub fn restriction(&self, seat: usize) -> Option<RiderRole> {
        self.slots.get(seat).and_then(|s| s.restricted_to)
    }

    /// Reserve a seat for one role. Setup-phase only: call before any seat on
    /// this vehicle has been booked.
    pub fn mark_restricted(&mut self, seat: usize, role: RiderRole) -> Result<(), SeatError> {
        let slot = self
            .slots
            .get_mut(seat)
            .ok_or(SeatError::InvalidSeatIndex(seat))?;
        slot.restricted_to = Some(role);
        Ok(())
    }

    /// Check-and-book in one exclusive step. The `&mut self` borrow is the
    /// critical section: no other seat mutation can interleave between the
    /// availability check and the flag flip.
    pub fn try_book(&mut self, seat: usize, role: RiderRole) -> Result<(), SeatError> {
        let slot = self
            .slots
            .get_mut(seat)
            .ok_or(SeatError::InvalidSeatIndex(seat))?;

        if slot.booked {
            return Err(SeatError::SeatAlreadyBooked(seat));
        }

        // Every seat is role-exclusive: a marked seat admits only its role,
        // and an unmarked seat admits only roles without reserved seating.
        let admitted = match slot.restricted_to {
            Some(required) => required == role,
            None => !role.has_reserved_seating(),
        };
        if !admitted {
            return Err(SeatError::RoleMismatch { seat });
        }

        slot.booked = true;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeatError {
    #[error("Seat index out of range: {0}")]
    InvalidSeatIndex(usize),

    #[error("Seat already booked: {0}")]
    SeatAlreadyBooked(usize),

    #[error("Role-based seat violation at seat {seat}")]
    RoleMismatch { seat: usize },
}
