//! Orders domain module.
//!
//! Step-by-step order assembly. Orders only reference products; they never
//! own or alter them.

pub mod order;

pub use order::{Order, OrderBuilder};
