//! Goods receiving.
//!
//! [`receive_product`] is the fixed procedure every operator follows:
//!
//! 1. scan (always)
//! 2. check (policy)
//! 3. store, then maintenance (policy), only when the check passed
//!
//! Roles customize the procedure by supplying a [`ReceivingPolicy`]; the order
//! of steps cannot be changed by a policy.

use std::sync::Arc;

use warehouse_products::Product;

use crate::ledger::{Inventory, InventoryError};

/// Result of one pass through the receiving procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptOutcome {
    /// Check passed; the goods were stored and maintenance ran.
    Accepted { quantity: u64 },
    /// Check failed; nothing was stored.
    Rejected { quantity: i64 },
}

impl ReceiptOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ReceiptOutcome::Accepted { .. })
    }
}

/// Role-specific steps of the receiving procedure.
pub trait ReceivingPolicy {
    /// Decide whether the delivery may be stored.
    fn check(&self, product: &Product, quantity: i64) -> bool;

    /// Put accepted goods away. Defaults to [`log_placement`] only.
    fn store(&self, product: &Product, quantity: u64) -> Result<(), InventoryError> {
        log_placement(product, quantity);
        Ok(())
    }

    /// Runs after a successful store. No-op by default.
    fn maintenance(&self) {}
}

impl<P> ReceivingPolicy for Arc<P>
where
    P: ReceivingPolicy + ?Sized,
{
    fn check(&self, product: &Product, quantity: i64) -> bool {
        (**self).check(product, quantity)
    }

    fn store(&self, product: &Product, quantity: u64) -> Result<(), InventoryError> {
        (**self).store(product, quantity)
    }

    fn maintenance(&self) {
        (**self).maintenance()
    }
}

/// Base placement step shared by every policy's `store`.
pub fn log_placement(product: &Product, quantity: u64) {
    tracing::info!(
        name = product.name(),
        quantity,
        "placing {quantity} unit(s) of '{}' in the warehouse",
        product.name()
    );
}

fn scan(product: &Product) {
    tracing::info!(
        name = product.name(),
        category = product.category(),
        "scanning product '{}'",
        product.name()
    );
}

/// Run the receiving procedure for one delivery.
///
/// A failed check is not an error: it yields [`ReceiptOutcome::Rejected`]
/// and leaves inventory untouched. A policy that accepts a negative quantity
/// is treated the same way, since negative stock cannot be stored.
pub fn receive_product<P>(
    policy: &P,
    product: &Product,
    quantity: i64,
) -> Result<ReceiptOutcome, InventoryError>
where
    P: ReceivingPolicy + ?Sized,
{
    scan(product);

    let accepted = if policy.check(product, quantity) {
        u64::try_from(quantity).ok()
    } else {
        None
    };

    let Some(accepted) = accepted else {
        tracing::warn!(
            name = product.name(),
            quantity,
            "receiving failed for '{}'",
            product.name()
        );
        return Ok(ReceiptOutcome::Rejected { quantity });
    };

    policy.store(product, accepted)?;
    policy.maintenance();

    Ok(ReceiptOutcome::Accepted { quantity: accepted })
}

/// Storekeeper rules: only positive quantities pass, and accepted goods are
/// added to the shared inventory.
#[derive(Debug, Clone)]
pub struct StorekeeperPolicy {
    inventory: Arc<Inventory>,
}

impl StorekeeperPolicy {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }
}

impl ReceivingPolicy for StorekeeperPolicy {
    fn check(&self, product: &Product, quantity: i64) -> bool {
        if quantity > 0 {
            tracing::info!(name = product.name(), quantity, "check passed");
            true
        } else {
            tracing::warn!(
                name = product.name(),
                quantity,
                "check failed: quantity must be positive"
            );
            false
        }
    }

    fn store(&self, product: &Product, quantity: u64) -> Result<(), InventoryError> {
        log_placement(product, quantity);
        self.inventory.add_stock(product, quantity)?;
        Ok(())
    }

    fn maintenance(&self) {
        tracing::info!("post-receipt maintenance (if needed)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use warehouse_products::ProductFactory;

    fn apple() -> Product {
        ProductFactory::create_product("food", "Apple", 50).unwrap()
    }

    /// Records which policy steps ran, in order.
    #[derive(Default)]
    struct Recording {
        verdict: bool,
        steps: RefCell<Vec<&'static str>>,
    }

    impl Recording {
        fn passing() -> Self {
            Self {
                verdict: true,
                ..Self::default()
            }
        }

        fn steps(&self) -> Vec<&'static str> {
            self.steps.borrow().clone()
        }
    }

    impl ReceivingPolicy for Recording {
        fn check(&self, _product: &Product, _quantity: i64) -> bool {
            self.steps.borrow_mut().push("check");
            self.verdict
        }

        fn store(&self, _product: &Product, _quantity: u64) -> Result<(), InventoryError> {
            self.steps.borrow_mut().push("store");
            Ok(())
        }

        fn maintenance(&self) {
            self.steps.borrow_mut().push("maintenance");
        }
    }

    /// Only supplies `check`; `store` and `maintenance` use the defaults.
    struct AcceptAll;

    impl ReceivingPolicy for AcceptAll {
        fn check(&self, _product: &Product, _quantity: i64) -> bool {
            true
        }
    }

    #[test]
    fn positive_quantity_is_stored() {
        let inventory = Arc::new(Inventory::new());
        let policy = StorekeeperPolicy::new(inventory.clone());

        let outcome = receive_product(&policy, &apple(), 10).unwrap();

        assert_eq!(outcome, ReceiptOutcome::Accepted { quantity: 10 });
        assert!(outcome.is_accepted());
        assert_eq!(inventory.get_stock(&apple()).unwrap(), 10);
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected_without_side_effects() {
        let inventory = Arc::new(Inventory::new());
        let policy = StorekeeperPolicy::new(inventory.clone());
        inventory.add_stock(&apple(), 7).unwrap();

        for qty in [0, -1, -100] {
            let outcome = receive_product(&policy, &apple(), qty).unwrap();
            assert_eq!(outcome, ReceiptOutcome::Rejected { quantity: qty });
            assert!(!outcome.is_accepted());
        }
        assert_eq!(inventory.get_stock(&apple()).unwrap(), 7);
    }

    #[test]
    fn steps_run_in_fixed_order_on_success() {
        let policy = Recording::passing();
        receive_product(&policy, &apple(), 3).unwrap();
        assert_eq!(policy.steps(), vec!["check", "store", "maintenance"]);
    }

    #[test]
    fn failed_check_skips_store_and_maintenance() {
        let policy = Recording::default();
        let outcome = receive_product(&policy, &apple(), 3).unwrap();
        assert_eq!(outcome, ReceiptOutcome::Rejected { quantity: 3 });
        assert_eq!(policy.steps(), vec!["check"]);
    }

    #[test]
    fn default_steps_only_log() {
        let outcome = receive_product(&AcceptAll, &apple(), 0).unwrap();
        assert_eq!(outcome, ReceiptOutcome::Accepted { quantity: 0 });
    }

    #[test]
    fn negative_quantity_cannot_be_stored_even_if_policy_accepts() {
        let outcome = receive_product(&AcceptAll, &apple(), -4).unwrap();
        assert_eq!(outcome, ReceiptOutcome::Rejected { quantity: -4 });
    }

    #[test]
    fn policy_can_be_used_as_trait_object() {
        let inventory = Arc::new(Inventory::new());
        let policy: Arc<dyn ReceivingPolicy> = Arc::new(StorekeeperPolicy::new(inventory.clone()));

        receive_product(&policy, &apple(), 2).unwrap();
        receive_product(policy.as_ref(), &apple(), 3).unwrap();
        assert_eq!(inventory.get_stock(&apple()).unwrap(), 5);
    }
}
