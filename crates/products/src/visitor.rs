//! Read-only operations over products and product trees.
//!
//! New operations implement [`ProductVisitor`]; `Product`, `ProductComponent`
//! and `ProductGroup` never need to change for them.

use crate::product::Product;

/// Operation applied to one product at a time during a traversal.
pub trait ProductVisitor {
    fn visit(&mut self, product: &Product);
}

/// Free-function form of `product.accept(visitor)`.
pub fn apply_visitor<V>(product: &Product, visitor: &mut V)
where
    V: ProductVisitor + ?Sized,
{
    product.accept(visitor);
}

/// Sums the price of every visited product.
///
/// The total saturates at `u64::MAX` instead of overflowing. There is no
/// reset: use a fresh calculator per traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CostCalculator {
    total: u64,
}

impl CostCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl ProductVisitor for CostCalculator {
    fn visit(&mut self, product: &Product) {
        self.total = self.total.saturating_add(product.price());
    }
}

/// Collects one report line per visited product, in visitation order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportGenerator {
    lines: Vec<String>,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined with `\n` (no trailing newline).
    pub fn report(&self) -> String {
        self.lines.join("\n")
    }
}

impl ProductVisitor for ReportGenerator {
    fn visit(&mut self, product: &Product) {
        self.lines.push(format!(
            "Product: {}, Category: {}, Price: {}",
            product.name(),
            product.category(),
            product.price()
        ));
    }
}
