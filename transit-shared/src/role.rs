use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification of riders. The variant decides the fare tier and
/// which seats the rider may take.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiderRole {
    Student,
    Faculty,
}

impl RiderRole {
    /// Whether members of this role sit in reserved seats. Seats carrying no
    /// restriction mark admit every other role.
    pub fn has_reserved_seating(&self) -> bool {
        matches!(self, RiderRole::Faculty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiderRole::Student => "Student",
            RiderRole::Faculty => "Faculty",
        }
    }
}

impl fmt::Display for RiderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
