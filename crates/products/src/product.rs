use core::str::FromStr;

use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult};

use crate::visitor::ProductVisitor;

/// Product kind (closed set).
///
/// The factory only knows these three kinds; the category label shown in
/// reports and used as part of the inventory key is derived from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Clothing,
    Electronics,
    Food,
}

impl ProductKind {
    pub const ALL: [ProductKind; 3] = [
        ProductKind::Clothing,
        ProductKind::Electronics,
        ProductKind::Food,
    ];

    /// Factory tag accepted by [`ProductFactory::create_product`].
    pub fn tag(self) -> &'static str {
        match self {
            ProductKind::Clothing => "clothing",
            ProductKind::Electronics => "electronics",
            ProductKind::Food => "food",
        }
    }

    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            ProductKind::Clothing => "Clothing",
            ProductKind::Electronics => "Electronics",
            ProductKind::Food => "Food",
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| DomainError::invalid_kind(s))
    }
}

/// A named, priced item.
///
/// Immutable after construction: there are no setters, and the kind (and so
/// the category) is fixed by the factory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    /// Price in smallest currency unit.
    price: u64,
    kind: ProductKind,
}

impl Product {
    fn new(kind: ProductKind, name: String, price: u64) -> Self {
        Self { name, price, kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.label()
    }

    /// Hand this product to a visitor's single-item operation.
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: ProductVisitor + ?Sized,
    {
        visitor.visit(self);
    }
}

/// Factory for products of every supported kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFactory;

impl ProductFactory {
    /// Create a product from a kind tag (`clothing`, `electronics`, `food`).
    ///
    /// Any other tag fails with [`DomainError::InvalidKind`].
    pub fn create_product(
        kind: &str,
        name: impl Into<String>,
        price: u64,
    ) -> DomainResult<Product> {
        let kind = kind.parse::<ProductKind>().inspect_err(|err| {
            tracing::warn!(error = %err, "product creation rejected");
        })?;
        Ok(Self::create(kind, name, price))
    }

    /// Typed variant of [`ProductFactory::create_product`]; cannot fail.
    pub fn create(kind: ProductKind, name: impl Into<String>, price: u64) -> Product {
        let product = Product::new(kind, name.into(), price);
        tracing::debug!(
            name = product.name(),
            category = product.category(),
            price = product.price(),
            "product created"
        );
        product
    }
}
