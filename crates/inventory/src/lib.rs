//! Inventory domain module.
//!
//! The stock ledger and the receiving procedure that feeds it. State lives in
//! memory only; there is no storage backend.

pub mod ledger;
pub mod receiving;

pub use ledger::{Inventory, InventoryError, StockEntry, StockKey};
pub use receiving::{
    ReceiptOutcome, ReceivingPolicy, StorekeeperPolicy, log_placement, receive_product,
};
