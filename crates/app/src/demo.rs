//! Scripted walkthrough of a warehouse day.

use std::sync::Arc;

use anyhow::Context;

use warehouse_infra::{InMemorySupplyStore, SupplyStore, WarehouseConfig, WarehouseFacade};
use warehouse_inventory::{Inventory, StockEntry, StorekeeperPolicy};
use warehouse_products::{CostCalculator, ProductComponent, ProductFactory, ProductGroup};
use warehouse_sales::OrderBuilder;

use crate::roles::{Administrator, Storekeeper, WarehouseManager};

/// Observable results of [`run_demo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub stock: Vec<StockEntry>,
    pub order: String,
    pub report: String,
    pub shipment_cost: u64,
    pub supplies_recorded: usize,
}

/// Create products, receive supplies, top up stock, build an order, then
/// report on and cost a shipment.
///
/// Each accepted supply is stocked once (see [`Storekeeper::receive_supply`]),
/// so the final stock is T-shirt 15, Laptop 5, Apple 100.
pub fn run_demo(config: &WarehouseConfig) -> anyhow::Result<DemoSummary> {
    let tshirt = ProductFactory::create_product("clothing", "T-shirt", 500)?;
    let laptop = ProductFactory::create_product("electronics", "Laptop", 50_000)?;
    let apple = ProductFactory::create_product("food", "Apple", 50)?;

    let inventory = Arc::new(Inventory::new());
    let database = Arc::new(InMemorySupplyStore::new());
    let facade = WarehouseFacade::new(inventory.clone(), database.clone());

    let storekeeper = Storekeeper::new(facade, StorekeeperPolicy::new(inventory.clone()));
    let admin = Administrator::new(inventory.clone());
    let manager = WarehouseManager::new(inventory.clone());

    for (product, quantity) in [(&tshirt, 10), (&laptop, 5), (&apple, 100)] {
        storekeeper
            .receive_supply(product, quantity)
            .with_context(|| format!("receiving {}", product.name()))?;
    }

    admin.update_stock(&tshirt, 5)?;
    admin.manage_accounts();

    let stock = manager.control_stock()?;

    let order = OrderBuilder::new()
        .add_product(&tshirt)
        .add_product(&apple)
        .set_packaging(config.default_packaging.clone())
        .build();
    tracing::info!("{order}");

    let box1 = ProductGroup::new("Box 1")
        .with(tshirt.clone())
        .with(apple.clone());
    let box2 = ProductGroup::new("Box 2").with(laptop.clone());
    let shipment = ProductComponent::from(ProductGroup::new("Shipment").with(box1).with(box2));

    let report = manager.generate_report(std::slice::from_ref(&shipment));
    manager.perform_maintenance();

    let mut cost = CostCalculator::new();
    shipment.accept(&mut cost);
    tracing::info!(
        "total shipment cost: {} {}",
        cost.total(),
        config.currency
    );

    let records = database.records()?;
    tracing::debug!(
        "supply log: {}",
        serde_json::to_string_pretty(&records).context("serializing supply log")?
    );

    Ok(DemoSummary {
        stock,
        order: order.to_string(),
        report,
        shipment_cost: cost.total(),
        supplies_recorded: records.len(),
    })
}
