//! Refinement run identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for one refinement run, based on UUIDv7.
///
/// UUIDv7 gives chronological sortability for free, so traces from a batch
/// of runs can be ordered by id without carrying a separate timestamp.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct RunId(u128);

impl RunId {
    /// Generate a new UUIDv7-based RunId
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::RunId;
    ///
    /// let id = RunId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RunId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a RunId from its UUID string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl From<RunId> for String {
    fn from(id: RunId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for RunId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RunId::from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_ordering() {
        let id1 = RunId::from_value(1000);
        let id2 = RunId::from_value(2000);

        assert!(id1 < id2);
    }

    #[test]
    fn test_run_id_chronological() {
        let id1 = RunId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = RunId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should be less than later UUIDv7");
        assert!(id1.timestamp() <= id2.timestamp());
    }

    #[test]
    fn test_display_and_parse() {
        let id = RunId::new();
        let id_str = id.to_string();

        assert_eq!(id_str.len(), 36);
        assert_eq!(RunId::from_string(&id_str).unwrap(), id);
    }

    #[test]
    fn test_invalid_string() {
        assert!(RunId::from_string("not-a-valid-uuid").is_err());
        assert!(RunId::from_string("").is_err());
    }
}
