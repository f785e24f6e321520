use transit_shared::RiderRole;

/// Fare for one seat in the smallest currency unit, from the rider's role
/// and the vehicle's air-conditioning amenity:
///
/// | role    | AC   | non-AC |
/// |---------|------|--------|
/// | Student | 7000 | 5000   |
/// | Faculty | 5000 | 3000   |
///
/// Total over the closed role set; callers freeze the result into the
/// booking record at reservation time.
pub fn compute_fare(role: RiderRole, air_conditioned: bool) -> i32 {
    match role {
        RiderRole::Student => {
            if air_conditioned {
                7000
            } else {
                5000
            }
        }
        RiderRole::Faculty => {
            if air_conditioned {
                5000
            } else {
                3000
            }
        }
    }
}
