use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use thiserror::Error;

use warehouse_products::{Product, ProductKind};

/// Ledger key: one entry per (category, product name).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StockKey {
    pub kind: ProductKind,
    pub name: String,
}

impl StockKey {
    pub fn of(product: &Product) -> Self {
        Self {
            kind: product.kind(),
            name: product.name().to_string(),
        }
    }

    pub fn category(&self) -> &'static str {
        self.kind.label()
    }
}

/// Snapshot row returned by [`Inventory::entries`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockEntry {
    pub key: StockKey,
    pub quantity: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("inventory lock poisoned")]
    LockPoisoned,

    #[error("stock for '{name}' would exceed the ledger capacity")]
    QuantityOverflow { name: String },
}

/// In-memory stock ledger.
///
/// Quantities only grow: there is no remove or decrement operation, so an
/// entry can never go below zero. Missing keys read as zero stock.
#[derive(Debug, Default)]
pub struct Inventory {
    stock: RwLock<HashMap<StockKey, u64>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`; returns the new on-hand quantity.
    pub fn add_stock(&self, product: &Product, quantity: u64) -> Result<u64, InventoryError> {
        let mut stock = self
            .stock
            .write()
            .map_err(|_| InventoryError::LockPoisoned)?;

        let entry = stock.entry(StockKey::of(product)).or_insert(0);
        *entry = entry
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::QuantityOverflow {
                name: product.name().to_string(),
            })?;

        tracing::debug!(
            name = product.name(),
            category = product.category(),
            added = quantity,
            on_hand = *entry,
            "stock added"
        );
        Ok(*entry)
    }

    /// Current on-hand quantity, zero for products never stocked.
    pub fn get_stock(&self, product: &Product) -> Result<u64, InventoryError> {
        let stock = self
            .stock
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;

        Ok(stock.get(&StockKey::of(product)).copied().unwrap_or(0))
    }

    /// All ledger entries, ordered by category then name.
    pub fn entries(&self) -> Result<Vec<StockEntry>, InventoryError> {
        let stock = self
            .stock
            .read()
            .map_err(|_| InventoryError::LockPoisoned)?;

        let mut entries: Vec<StockEntry> = stock
            .iter()
            .map(|(key, quantity)| StockEntry {
                key: key.clone(),
                quantity: *quantity,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use warehouse_products::ProductFactory;

    #[test]
    fn unknown_product_has_zero_stock() {
        let inventory = Inventory::new();
        let apple = ProductFactory::create_product("food", "Apple", 50).unwrap();
        assert_eq!(inventory.get_stock(&apple).unwrap(), 0);
        assert!(inventory.entries().unwrap().is_empty());
    }

    #[test]
    fn stock_accumulates_across_additions() {
        let inventory = Inventory::new();
        let apple = ProductFactory::create_product("food", "Apple", 50).unwrap();

        assert_eq!(inventory.add_stock(&apple, 100).unwrap(), 100);
        assert_eq!(inventory.get_stock(&apple).unwrap(), 100);

        assert_eq!(inventory.add_stock(&apple, 5).unwrap(), 105);
        assert_eq!(inventory.get_stock(&apple).unwrap(), 105);
    }

    #[test]
    fn same_name_in_different_categories_is_tracked_separately() {
        let inventory = Inventory::new();
        let food = ProductFactory::create_product("food", "Orange", 10).unwrap();
        let shirt = ProductFactory::create_product("clothing", "Orange", 900).unwrap();

        inventory.add_stock(&food, 3).unwrap();
        inventory.add_stock(&shirt, 7).unwrap();

        assert_eq!(inventory.get_stock(&food).unwrap(), 3);
        assert_eq!(inventory.get_stock(&shirt).unwrap(), 7);
    }

    #[test]
    fn price_is_not_part_of_the_key() {
        let inventory = Inventory::new();
        let cheap = ProductFactory::create_product("food", "Apple", 50).unwrap();
        let pricey = ProductFactory::create_product("food", "Apple", 70).unwrap();

        inventory.add_stock(&cheap, 1).unwrap();
        inventory.add_stock(&pricey, 2).unwrap();
        assert_eq!(inventory.get_stock(&cheap).unwrap(), 3);
    }

    #[test]
    fn entries_are_sorted_by_category_then_name() {
        let inventory = Inventory::new();
        let apple = ProductFactory::create_product("food", "Apple", 50).unwrap();
        let laptop = ProductFactory::create_product("electronics", "Laptop", 50_000).unwrap();
        let shirt = ProductFactory::create_product("clothing", "T-shirt", 500).unwrap();
        inventory.add_stock(&apple, 100).unwrap();
        inventory.add_stock(&laptop, 5).unwrap();
        inventory.add_stock(&shirt, 15).unwrap();

        let rows: Vec<(&str, String, u64)> = inventory
            .entries()
            .unwrap()
            .into_iter()
            .map(|e| (e.key.category(), e.key.name, e.quantity))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Clothing", "T-shirt".to_string(), 15),
                ("Electronics", "Laptop".to_string(), 5),
                ("Food", "Apple".to_string(), 100),
            ]
        );
    }

    #[test]
    fn overflow_is_reported_and_leaves_stock_untouched() {
        let inventory = Inventory::new();
        let apple = ProductFactory::create_product("food", "Apple", 50).unwrap();
        inventory.add_stock(&apple, u64::MAX).unwrap();

        let err = inventory.add_stock(&apple, 1).unwrap_err();
        assert_eq!(
            err,
            InventoryError::QuantityOverflow {
                name: "Apple".to_string()
            }
        );
        assert_eq!(inventory.get_stock(&apple).unwrap(), u64::MAX);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: on-hand stock equals the sum of every addition.
        #[test]
        fn stock_is_sum_of_additions(
            additions in prop::collection::vec(0u64..1_000_000, 0..50)
        ) {
            let inventory = Inventory::new();
            let apple = ProductFactory::create_product("food", "Apple", 50).unwrap();

            let mut previous = 0u64;
            for qty in &additions {
                let on_hand = inventory.add_stock(&apple, *qty).unwrap();
                prop_assert!(on_hand >= previous);
                previous = on_hand;
            }

            prop_assert_eq!(inventory.get_stock(&apple).unwrap(), additions.iter().sum::<u64>());
        }
    }
}
