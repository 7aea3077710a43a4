use warehouse_infra::WarehouseConfig;

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = WarehouseConfig::from_env();
    let summary = warehouse_app::run_demo(&config)?;

    tracing::info!(
        supplies = summary.supplies_recorded,
        "demo finished; shipment cost {} {}",
        summary.shipment_cost,
        config.currency
    );
    Ok(())
}
