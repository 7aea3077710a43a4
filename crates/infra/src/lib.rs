//! Infrastructure layer: supply persistence, the supply facade, config.

pub mod config;
pub mod facade;
pub mod supply_store;

pub use config::WarehouseConfig;
pub use facade::{FacadeError, ProcessedSupply, WarehouseFacade};
pub use supply_store::{InMemorySupplyStore, SupplyRecord, SupplyStore, SupplyStoreError};
