//! Product trees: single products and named groups behind one interface.

use crate::product::Product;
use crate::visitor::ProductVisitor;

/// Node of a product tree.
///
/// A group exclusively owns its children, so a tree can never share nodes or
/// contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductComponent {
    Single(Product),
    Group(ProductGroup),
}

impl ProductComponent {
    /// Price of this node. Groups are summed on every call; nothing is cached.
    /// Sums saturate at `u64::MAX`.
    pub fn price(&self) -> u64 {
        match self {
            ProductComponent::Single(product) => product.price(),
            ProductComponent::Group(group) => group.price(),
        }
    }

    /// Pre-order traversal in insertion order.
    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: ProductVisitor + ?Sized,
    {
        match self {
            ProductComponent::Single(product) => product.accept(visitor),
            ProductComponent::Group(group) => group.accept(visitor),
        }
    }
}

impl From<Product> for ProductComponent {
    fn from(product: Product) -> Self {
        ProductComponent::Single(product)
    }
}

impl From<ProductGroup> for ProductComponent {
    fn from(group: ProductGroup) -> Self {
        ProductComponent::Group(group)
    }
}

/// Named, ordered group of product tree nodes (a box, a shipment, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductGroup {
    name: String,
    children: Vec<ProductComponent>,
}

impl ProductGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[ProductComponent] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn add(&mut self, component: impl Into<ProductComponent>) {
        self.children.push(component.into());
    }

    /// Chaining form of [`ProductGroup::add`].
    pub fn with(mut self, component: impl Into<ProductComponent>) -> Self {
        self.add(component);
        self
    }

    /// Remove the first child equal to `component`.
    ///
    /// Removing a component that is not a direct child is a no-op and returns
    /// `None`.
    pub fn remove(&mut self, component: &ProductComponent) -> Option<ProductComponent> {
        let idx = self.children.iter().position(|child| child == component)?;
        Some(self.children.remove(idx))
    }

    pub fn price(&self) -> u64 {
        self.children
            .iter()
            .map(ProductComponent::price)
            .fold(0, u64::saturating_add)
    }

    pub fn accept<V>(&self, visitor: &mut V)
    where
        V: ProductVisitor + ?Sized,
    {
        for child in &self.children {
            child.accept(visitor);
        }
    }
}
