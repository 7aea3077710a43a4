//! Warehouse application layer: staff roles and the end-to-end walkthrough.

pub mod demo;
pub mod roles;

pub use demo::{DemoSummary, run_demo};
pub use roles::{Administrator, RoleError, Storekeeper, WarehouseManager};
