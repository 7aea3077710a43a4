//! Append-only supply log.
//!
//! Stands in for the warehouse database: every processed supply is recorded
//! once and never updated or deleted.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemorySupplyStore;
pub use r#trait::{SupplyRecord, SupplyStore, SupplyStoreError};
