use warehouse_products::Product;

/// Completed order: borrowed products in the order they were added, plus an
/// optional packaging label.
///
/// Duplicates are allowed; adding the same product twice lists it twice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order<'a> {
    products: Vec<&'a Product>,
    packaging: Option<String>,
}

impl<'a> Order<'a> {
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn packaging(&self) -> Option<&str> {
        self.packaging.as_deref()
    }

    /// Sum of product prices (smallest currency unit), saturating at `u64::MAX`.
    pub fn total_price(&self) -> u64 {
        self.products
            .iter()
            .map(|p| p.price())
            .fold(0, u64::saturating_add)
    }
}

impl core::fmt::Display for Order<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Order: [")?;
        for (idx, product) in self.products.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(product.name())?;
        }
        f.write_str("], Packaging: ")?;
        match &self.packaging {
            Some(label) => f.write_str(label),
            None => f.write_str("none"),
        }
    }
}

/// Incremental order assembly.
///
/// Every step takes the builder by value so calls chain, and [`OrderBuilder::build`]
/// consumes it: a builder produces exactly one order and cannot leak items
/// from one order into the next.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct OrderBuilder<'a> {
    draft: Order<'a>,
}

impl<'a> OrderBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(mut self, product: &'a Product) -> Self {
        self.draft.products.push(product);
        self
    }

    /// Set the packaging label; a later call replaces an earlier one.
    pub fn set_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.draft.packaging = Some(packaging.into());
        self
    }

    pub fn build(self) -> Order<'a> {
        tracing::debug!(
            products = self.draft.products.len(),
            packaging = self.draft.packaging.as_deref(),
            "order built"
        );
        self.draft
    }
}
