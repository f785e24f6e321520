use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use transit_shared::RiderRole;
use uuid::Uuid;

/// Immutable record of one confirmed seat reservation. The fare is frozen at
/// creation time; later schedule changes never touch existing bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Sequential caller-facing code, e.g. "BK1".
    pub code: String,
    pub rider_id: String,
    pub rider_role: RiderRole,
    pub vehicle_id: String,
    pub seat_index: usize,
    /// Smallest currency unit.
    pub fare: i32,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        code: String,
        rider_id: String,
        rider_role: RiderRole,
        vehicle_id: String,
        seat_index: usize,
        fare: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            rider_id,
            rider_role,
            vehicle_id,
            seat_index,
            fare,
            created_at: Utc::now(),
        }
    }
}
