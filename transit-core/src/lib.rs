pub mod rider;

pub use rider::{PaymentStatus, Rider, RiderRegistry};
