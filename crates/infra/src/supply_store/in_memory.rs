use std::sync::RwLock;

use warehouse_products::Product;

use super::r#trait::{SupplyRecord, SupplyStore, SupplyStoreError};

/// In-memory append-only supply log.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemorySupplyStore {
    records: RwLock<Vec<SupplyRecord>>,
}

impl InMemorySupplyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SupplyStore for InMemorySupplyStore {
    fn save_supply(
        &self,
        product: &Product,
        quantity: u64,
    ) -> Result<SupplyRecord, SupplyStoreError> {
        let record = SupplyRecord::new(product, quantity);

        let mut records = self
            .records
            .write()
            .map_err(|_| SupplyStoreError::LockPoisoned)?;
        records.push(record.clone());

        tracing::info!(
            supply_id = %record.id,
            name = %record.product_name,
            quantity,
            "supply saved to database: {} x{quantity}",
            record.product_name
        );
        Ok(record)
    }

    fn records(&self) -> Result<Vec<SupplyRecord>, SupplyStoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| SupplyStoreError::LockPoisoned)?;
        Ok(records.clone())
    }
}
