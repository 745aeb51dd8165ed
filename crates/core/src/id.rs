//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a placement record.
///
/// Placements are created by the matching backend, which hands out either
/// numeric or opaque string ids. Both are kept verbatim as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawId", into = "String")]
pub struct PlacementId(String);

impl PlacementId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("placement", "empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlacementId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for PlacementId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<PlacementId> for String {
    fn from(value: PlacementId) -> Self {
        value.0
    }
}

impl FromStr for PlacementId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Wire shape accepted for ids: `7` or `"pl-7"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl TryFrom<RawId> for PlacementId {
    type Error = DomainError;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        match raw {
            RawId::Number(n) => Ok(Self::from(n)),
            RawId::Text(s) => Self::new(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_deserialize() {
        let n: PlacementId = serde_json::from_str("7").unwrap();
        assert_eq!(n.as_str(), "7");

        let s: PlacementId = serde_json::from_str("\"pl-7\"").unwrap();
        assert_eq!(s.to_string(), "pl-7");
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(PlacementId::new("  ").is_err());
        assert!(serde_json::from_str::<PlacementId>("\"\"").is_err());
    }

    #[test]
    fn ids_serialize_as_text() {
        let id = PlacementId::from(12);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12\"");
    }
}
