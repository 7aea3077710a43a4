//! Single entry point for supply processing.

use std::sync::Arc;

use thiserror::Error;

use warehouse_inventory::{Inventory, InventoryError};
use warehouse_products::Product;

use crate::supply_store::{SupplyRecord, SupplyStore, SupplyStoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FacadeError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    SupplyStore(#[from] SupplyStoreError),
}

/// What [`WarehouseFacade::process_supply`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedSupply {
    /// On-hand quantity read back after registration.
    pub on_hand: u64,
    pub record: SupplyRecord,
}

/// Sequences the three supply steps behind one call.
///
/// The sequence is **not atomic**: if persisting fails, the stock already
/// registered stays registered and the error is returned as is.
#[derive(Debug)]
pub struct WarehouseFacade<S> {
    inventory: Arc<Inventory>,
    store: S,
}

impl<S> WarehouseFacade<S>
where
    S: SupplyStore,
{
    pub fn new(inventory: Arc<Inventory>, store: S) -> Self {
        Self { inventory, store }
    }

    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register, inspect, persist.
    pub fn process_supply(
        &self,
        product: &Product,
        quantity: u64,
    ) -> Result<ProcessedSupply, FacadeError> {
        tracing::info!(
            name = product.name(),
            quantity,
            "processing supply: {}, quantity: {quantity}",
            product.name()
        );

        self.register_supply(product, quantity)?;
        let on_hand = self.check_inventory(product)?;
        let record = self.save_to_database(product, quantity)?;

        tracing::info!(name = product.name(), "supply processed");
        Ok(ProcessedSupply { on_hand, record })
    }

    pub fn register_supply(&self, product: &Product, quantity: u64) -> Result<u64, FacadeError> {
        tracing::info!(
            name = product.name(),
            quantity,
            "registering supply: {} x{quantity}",
            product.name()
        );
        Ok(self.inventory.add_stock(product, quantity)?)
    }

    /// Read back current stock and log it.
    pub fn check_inventory(&self, product: &Product) -> Result<u64, FacadeError> {
        let on_hand = self.inventory.get_stock(product)?;
        tracing::info!(
            name = product.name(),
            on_hand,
            "stock check for '{}': {on_hand} unit(s)",
            product.name()
        );
        Ok(on_hand)
    }

    pub fn save_to_database(
        &self,
        product: &Product,
        quantity: u64,
    ) -> Result<SupplyRecord, FacadeError> {
        Ok(self.store.save_supply(product, quantity)?)
    }
}
