use crate::roster::{Driver, Route};
use crate::seat_map::SeatMap;
use serde::{Deserialize, Serialize};

/// A fleet unit: fixed seat capacity plus the amenity flag that feeds fare
/// computation. Driver and route assignments are setup-phase data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Caller-assigned id, e.g. "VH001".
    pub id: String,
    pub air_conditioned: bool,
    pub seats: SeatMap,
    pub driver: Option<Driver>,
    pub route: Option<Route>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, air_conditioned: bool, capacity: usize) -> Self {
        Self {
            id: id.into(),
            air_conditioned,
            seats: SeatMap::new(capacity),
            driver: None,
            route: None,
        }
    }

    pub fn assign_driver(&mut self, driver: Driver) {
        self.driver = Some(driver);
    }

    pub fn assign_route(&mut self, route: Route) {
        self.route = Some(route);
    }
}
