use crate::roster::{Driver, Route};
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owner/operator of a set of vehicles, drivers, and routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    drivers: Vec<Driver>,
    routes: Vec<Route>,
    vehicles: Vec<Vehicle>,
}

impl Provider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            drivers: Vec::new(),
            routes: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    pub fn add_driver(&mut self, driver: Driver) {
        self.drivers.push(driver);
    }

    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Absence is not an error at this layer; the reservation engine decides
    /// what a fleet-wide miss means.
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn vehicle_mut(&mut self, id: &str) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_lookup() {
        let mut provider = Provider::new("Jadoon Transport");
        provider.add_vehicle(Vehicle::new("VH001", true, 32));
        provider.add_vehicle(Vehicle::new("VH002", false, 48));

        assert_eq!(provider.vehicles().len(), 2);
        assert!(provider.vehicle("VH002").is_some());
        assert!(provider.vehicle("VH999").is_none());
    }
}
