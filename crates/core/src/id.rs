//! Strongly-typed identifiers used across the warehouse crates.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a persisted supply record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplyId(Uuid);

impl SupplyId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered), so ids sort in append order.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SupplyId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SupplyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SupplyId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("SupplyId: {e}")))?;
        Ok(Self(uuid))
    }
}
