pub mod fare;
pub mod provider;
pub mod roster;
pub mod seat_map;
pub mod vehicle;

pub use fare::compute_fare;
pub use provider::Provider;
pub use roster::{Driver, Route};
pub use seat_map::{SeatError, SeatMap};
pub use vehicle::Vehicle;
