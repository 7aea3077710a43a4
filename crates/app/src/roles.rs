//! Warehouse staff: thin orchestrators over the domain and infra crates.

use std::sync::Arc;

use thiserror::Error;

use warehouse_infra::{FacadeError, SupplyStore, WarehouseFacade};
use warehouse_inventory::{
    Inventory, InventoryError, ReceiptOutcome, StockEntry, StorekeeperPolicy, receive_product,
};
use warehouse_products::{Product, ProductComponent, ReportGenerator};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Facade(#[from] FacadeError),
}

/// Receives deliveries and answers availability questions.
#[derive(Debug)]
pub struct Storekeeper<S> {
    facade: WarehouseFacade<S>,
    policy: StorekeeperPolicy,
}

impl<S> Storekeeper<S>
where
    S: SupplyStore,
{
    pub fn new(facade: WarehouseFacade<S>, policy: StorekeeperPolicy) -> Self {
        Self { facade, policy }
    }

    pub fn facade(&self) -> &WarehouseFacade<S> {
        &self.facade
    }

    /// Run the receiving procedure, then inspect and persist accepted goods.
    ///
    /// Stock is registered once, by the receiving procedure's store step; the
    /// facade is only used for the read-back and the supply record. Rejected
    /// deliveries are neither stocked nor recorded.
    ///
    /// This intentionally differs from running the receiving procedure followed
    /// by [`WarehouseFacade::process_supply`], which would register accepted
    /// stock twice and record rejected deliveries. As a result the demo
    /// walkthrough ends with 15 T-shirts (10 received + 5 from the
    /// administrator), not 25.
    pub fn receive_supply(
        &self,
        product: &Product,
        quantity: i64,
    ) -> Result<ReceiptOutcome, RoleError> {
        tracing::info!(name = product.name(), quantity, "storekeeper starts receiving a supply");

        let outcome = receive_product(&self.policy, product, quantity)?;
        if let ReceiptOutcome::Accepted { quantity } = outcome {
            self.facade.check_inventory(product)?;
            self.facade.save_to_database(product, quantity)?;
        }
        Ok(outcome)
    }

    pub fn check_product_availability(&self, product: &Product) -> Result<u64, RoleError> {
        Ok(self.facade.check_inventory(product)?)
    }
}

/// Corrects stock figures and manages staff accounts.
#[derive(Debug, Clone)]
pub struct Administrator {
    inventory: Arc<Inventory>,
}

impl Administrator {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    /// Add stock directly, bypassing the receiving procedure.
    pub fn update_stock(&self, product: &Product, quantity: u64) -> Result<u64, RoleError> {
        tracing::info!(
            name = product.name(),
            quantity,
            "administrator updates stock: {} x{quantity}",
            product.name()
        );
        Ok(self.inventory.add_stock(product, quantity)?)
    }

    pub fn manage_accounts(&self) {
        tracing::info!("administrator manages user accounts");
    }
}

/// Oversees stock levels and produces warehouse reports.
#[derive(Debug, Clone)]
pub struct WarehouseManager {
    inventory: Arc<Inventory>,
}

impl WarehouseManager {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    /// Log and return every ledger entry.
    pub fn control_stock(&self) -> Result<Vec<StockEntry>, RoleError> {
        let entries = self.inventory.entries()?;
        tracing::info!(entries = entries.len(), "manager reviews stock");
        for entry in &entries {
            tracing::info!(
                " - {} ({}): {} unit(s)",
                entry.key.name,
                entry.key.category(),
                entry.quantity
            );
        }
        Ok(entries)
    }

    /// Report over several trees, in the order given.
    pub fn generate_report(&self, components: &[ProductComponent]) -> String {
        let mut visitor = ReportGenerator::new();
        for component in components {
            component.accept(&mut visitor);
        }
        let report = visitor.report();
        tracing::info!("manager's warehouse report:\n{report}");
        report
    }

    pub fn perform_maintenance(&self) {
        tracing::info!("manager performs warehouse maintenance");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_infra::{InMemorySupplyStore, SupplyStore};
    use warehouse_products::{ProductFactory, ProductGroup};

    type SharedStore = Arc<InMemorySupplyStore>;

    fn setup() -> (Arc<Inventory>, SharedStore, Storekeeper<SharedStore>) {
        let inventory = Arc::new(Inventory::new());
        let store = Arc::new(InMemorySupplyStore::new());
        let facade = WarehouseFacade::new(inventory.clone(), store.clone());
        let storekeeper = Storekeeper::new(facade, StorekeeperPolicy::new(inventory.clone()));
        (inventory, store, storekeeper)
    }

    fn laptop() -> Product {
        ProductFactory::create_product("electronics", "Laptop", 50_000).unwrap()
    }

    #[test]
    fn accepted_supply_is_stocked_once_and_recorded_once() {
        let (inventory, store, storekeeper) = setup();

        let outcome = storekeeper.receive_supply(&laptop(), 5).unwrap();

        assert_eq!(outcome, ReceiptOutcome::Accepted { quantity: 5 });
        assert_eq!(inventory.get_stock(&laptop()).unwrap(), 5);
        let records = store.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!((records[0].product_name.as_str(), records[0].quantity), ("Laptop", 5));
    }

    #[test]
    fn rejected_supply_is_neither_stocked_nor_recorded() {
        let (inventory, store, storekeeper) = setup();

        let outcome = storekeeper.receive_supply(&laptop(), 0).unwrap();

        assert_eq!(outcome, ReceiptOutcome::Rejected { quantity: 0 });
        assert_eq!(inventory.get_stock(&laptop()).unwrap(), 0);
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn availability_reads_current_stock() {
        let (_inventory, _store, storekeeper) = setup();
        storekeeper.receive_supply(&laptop(), 2).unwrap();
        storekeeper.receive_supply(&laptop(), 3).unwrap();
        assert_eq!(storekeeper.check_product_availability(&laptop()).unwrap(), 5);
    }

    #[test]
    fn administrator_adds_stock_directly() {
        let (inventory, store, _storekeeper) = setup();
        let admin = Administrator::new(inventory.clone());

        assert_eq!(admin.update_stock(&laptop(), 4).unwrap(), 4);
        assert_eq!(inventory.get_stock(&laptop()).unwrap(), 4);
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn manager_lists_stock_and_reports_trees_in_order() {
        let (inventory, _store, storekeeper) = setup();
        let manager = WarehouseManager::new(inventory);
        let apple = ProductFactory::create_product("food", "Apple", 50).unwrap();
        storekeeper.receive_supply(&apple, 100).unwrap();
        storekeeper.receive_supply(&laptop(), 5).unwrap();

        let entries = manager.control_stock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key.name, "Laptop");
        assert_eq!(entries[1].quantity, 100);

        let first = ProductComponent::from(ProductGroup::new("A").with(laptop()));
        let second = ProductComponent::from(apple);
        let report = manager.generate_report(&[first, second]);
        assert_eq!(
            report,
            "Product: Laptop, Category: Electronics, Price: 50000\n\
             Product: Apple, Category: Food, Price: 50"
        );
    }
}
