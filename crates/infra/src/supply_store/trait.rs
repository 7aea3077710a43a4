use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use warehouse_core::SupplyId;
use warehouse_products::Product;

/// One recorded supply (immutable once written).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyRecord {
    pub id: SupplyId,
    pub product_name: String,
    pub quantity: u64,
    pub recorded_at: DateTime<Utc>,
}

impl SupplyRecord {
    pub fn new(product: &Product, quantity: u64) -> Self {
        Self {
            id: SupplyId::new(),
            product_name: product.name().to_string(),
            quantity,
            recorded_at: Utc::now(),
        }
    }
}

/// Supply store operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SupplyStoreError {
    #[error("supply store lock poisoned")]
    LockPoisoned,

    #[error("supply rejected by store: {0}")]
    Rejected(String),
}

/// Append-only supply log.
///
/// Implementations must:
/// - never modify or remove a record once it is saved
/// - return records in the order they were saved
pub trait SupplyStore: Send + Sync {
    /// Record a supply; returns the stored record.
    fn save_supply(
        &self,
        product: &Product,
        quantity: u64,
    ) -> Result<SupplyRecord, SupplyStoreError>;

    /// The raw log, oldest first.
    fn records(&self) -> Result<Vec<SupplyRecord>, SupplyStoreError>;
}

impl<S> SupplyStore for Arc<S>
where
    S: SupplyStore + ?Sized,
{
    fn save_supply(
        &self,
        product: &Product,
        quantity: u64,
    ) -> Result<SupplyRecord, SupplyStoreError> {
        (**self).save_supply(product, quantity)
    }

    fn records(&self) -> Result<Vec<SupplyRecord>, SupplyStoreError> {
        (**self).records()
    }
}
