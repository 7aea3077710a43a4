//! Products domain module.
//!
//! Product creation (factory), product trees (composite) and the read-only
//! operations applied over them (visitors). Pure domain logic: no IO, no storage.

pub mod component;
pub mod product;
pub mod visitor;

pub use component::{ProductComponent, ProductGroup};
pub use product::{Product, ProductFactory, ProductKind};
pub use visitor::{CostCalculator, ProductVisitor, ReportGenerator, apply_visitor};
