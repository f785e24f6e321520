use serde::{Deserialize, Serialize};
use transit_shared::Masked;

/// A provider-employed driver. The licence number is masked in log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub licence: Masked<String>,
}

impl Driver {
    pub fn new(name: impl Into<String>, licence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            licence: Masked(licence.into()),
        }
    }
}

/// A fixed service route between two stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub distance_km: f32,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, distance_km: f32) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance_km,
        }
    }

    /// Routes above 15 km run as long-haul service.
    pub fn is_long_route(&self) -> bool {
        self.distance_km > 15.0
    }
}
