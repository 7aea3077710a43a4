//! Warehouse configuration loaded from the environment.

pub const CURRENCY_VAR: &str = "WAREHOUSE_CURRENCY";
pub const DEFAULT_PACKAGING_VAR: &str = "WAREHOUSE_DEFAULT_PACKAGING";

const DEFAULT_CURRENCY: &str = "RUB";
const DEFAULT_PACKAGING: &str = "Box No. 1";

/// Display and ordering defaults for the warehouse front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseConfig {
    /// Currency label used when printing prices and totals.
    pub currency: String,
    /// Packaging label used when an order does not specify one.
    pub default_packaging: String,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            default_packaging: DEFAULT_PACKAGING.to_string(),
        }
    }
}

impl WarehouseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            currency: read_or(&lookup, CURRENCY_VAR, defaults.currency),
            default_packaging: read_or(&lookup, DEFAULT_PACKAGING_VAR, defaults.default_packaging),
        }
    }
}

fn read_or<F>(lookup: &F, key: &str, fallback: String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        Some(_) => {
            tracing::warn!("{key} is blank; using default '{fallback}'");
            fallback
        }
        None => {
            tracing::debug!("{key} not set; using default '{fallback}'");
            fallback
        }
    }
}
