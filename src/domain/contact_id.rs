//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for contact IDs.
///
/// IDs are assigned by the contact store and never change once a contact
/// exists.
///
/// # Example
///
/// ```
/// use contact_manager::domain::ContactId;
///
/// let id: ContactId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// Wrap a raw numeric ID.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric ID.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The ID following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_parse() {
        let id: ContactId = "7".parse().unwrap();
        assert_eq!(id, ContactId::new(7));
        assert_eq!(" 12 ".parse::<ContactId>().unwrap().get(), 12);
    }

    #[test]
    fn test_contact_id_parse_rejects_garbage() {
        assert!("abc".parse::<ContactId>().is_err());
        assert!("-1".parse::<ContactId>().is_err());
        assert!("".parse::<ContactId>().is_err());
    }

    #[test]
    fn test_contact_id_next_and_ordering() {
        let id = ContactId::new(8);
        assert_eq!(id.next(), ContactId::new(9));
        assert!(id < id.next());
    }

    #[test]
    fn test_contact_id_display() {
        assert_eq!(format!("{}", ContactId::new(3)), "3");
    }

    #[test]
    fn test_contact_id_serializes_as_number() {
        let json = serde_json::to_string(&ContactId::new(5)).unwrap();
        assert_eq!(json, "5");
        let id: ContactId = serde_json::from_str("5").unwrap();
        assert_eq!(id.get(), 5);
    }
}
