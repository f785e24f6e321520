use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use transit_shared::RiderRole;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

/// A person eligible to book a seat, carrying a role and payment status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rider {
    /// Caller-assigned id, e.g. "STU301".
    pub id: String,
    pub full_name: String,
    pub role: RiderRole,
    pub payment: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Rider {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>, role: RiderRole) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            role,
            payment: PaymentStatus::Pending,
            paid_at: None,
        }
    }

    /// Settle the session fare. One-way: once completed the status never
    /// reverts, and the settlement timestamp is kept from the first call.
    pub fn make_payment(&mut self) {
        if self.payment == PaymentStatus::Completed {
            return;
        }
        self.payment = PaymentStatus::Completed;
        self.paid_at = Some(Utc::now());
    }

    pub fn has_paid(&self) -> bool {
        self.payment == PaymentStatus::Completed
    }
}

/// Session-scoped rider store, keyed by rider id.
pub struct RiderRegistry {
    riders: HashMap<String, Rider>,
}

impl RiderRegistry {
    pub fn new() -> Self {
        Self {
            riders: HashMap::new(),
        }
    }

    /// Register a rider. Re-registering an id replaces the earlier entry.
    pub fn register(&mut self, rider: Rider) {
        if self.riders.contains_key(&rider.id) {
            tracing::warn!("Replacing existing rider registration: {}", rider.id);
        } else {
            tracing::debug!("Registered rider {} ({})", rider.id, rider.role);
        }
        self.riders.insert(rider.id.clone(), rider);
    }

    pub fn get(&self, id: &str) -> Option<&Rider> {
        self.riders.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Rider> {
        self.riders.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}

impl Default for RiderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_is_one_way() {
        let mut rider = Rider::new("STU301", "Bilal Qureshi", RiderRole::Student);
        assert!(!rider.has_paid());
        assert!(rider.paid_at.is_none());

        rider.make_payment();
        assert!(rider.has_paid());
        let first_paid_at = rider.paid_at;
        assert!(first_paid_at.is_some());

        // A second call must not move the settlement timestamp.
        rider.make_payment();
        assert!(rider.has_paid());
        assert_eq!(rider.paid_at, first_paid_at);
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = RiderRegistry::new();
        registry.register(Rider::new("FAC404", "Prof. Hina Siddiqui", RiderRole::Faculty));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("FAC404").map(|r| r.role), Some(RiderRole::Faculty));
        assert!(registry.get("STU301").is_none());
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = RiderRegistry::new();
        registry.register(Rider::new("STU301", "Bilal Qureshi", RiderRole::Student));
        registry.register(Rider::new("STU301", "Bilal Q.", RiderRole::Student));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("STU301").map(|r| r.full_name.as_str()), Some("Bilal Q."));
    }
}
