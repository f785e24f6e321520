use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wrapper for operator-sensitive values (driver licence numbers) that hides
/// the inner value from `Debug` and `Display` output, so log macros cannot
/// leak it. Serialization passes the real value through for callers that
/// need it.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    /// Read access for callers that legitimately need the raw value.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_is_masked() {
        let licence = Masked("L-786".to_string());
        assert_eq!(format!("{:?}", licence), "********");
        assert_eq!(format!("{}", licence), "********");
        assert_eq!(licence.expose(), "L-786");
    }
}
