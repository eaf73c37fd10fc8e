//! Domain model for the store configuration singleton.

use serde::{Deserialize, Serialize};

use crate::domain::commands::config::UpdateConfigCommand;

/// The single record describing the store, its product, pricing and target.
///
/// Serialized field names (camelCase) are part of the persisted-record
/// contract. Prices are whole rupiah; the sale price may legitimately sit
/// below the cost price, the ledger only surfaces the resulting negative
/// margin rather than forbidding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub store_name: String,
    pub owner_name: String,
    pub product_name: String,
    pub unit_sale_price: i64,
    pub unit_cost_price: i64,
    pub initial_stock: i64,
    pub monthly_target: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Toko Saya".to_string(),
            owner_name: String::new(),
            product_name: "Produk A".to_string(),
            unit_sale_price: 50_000,
            unit_cost_price: 30_000,
            initial_stock: 100,
            monthly_target: 200,
        }
    }
}

impl StoreConfig {
    /// Shallow-merge an update into this configuration: provided fields
    /// replace, unspecified fields keep their prior values.
    pub fn merged(&self, update: &UpdateConfigCommand) -> StoreConfig {
        StoreConfig {
            store_name: update.store_name.clone().unwrap_or_else(|| self.store_name.clone()),
            owner_name: update.owner_name.clone().unwrap_or_else(|| self.owner_name.clone()),
            product_name: update
                .product_name
                .clone()
                .unwrap_or_else(|| self.product_name.clone()),
            unit_sale_price: update.unit_sale_price.unwrap_or(self.unit_sale_price),
            unit_cost_price: update.unit_cost_price.unwrap_or(self.unit_cost_price),
            initial_stock: update.initial_stock.unwrap_or(self.initial_stock),
            monthly_target: update.monthly_target.unwrap_or(self.monthly_target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unspecified_fields() {
        let config = StoreConfig::default();
        let update = UpdateConfigCommand {
            unit_sale_price: Some(75_000),
            owner_name: Some("Budi".to_string()),
            ..Default::default()
        };

        let merged = config.merged(&update);

        assert_eq!(merged.unit_sale_price, 75_000);
        assert_eq!(merged.owner_name, "Budi");
        assert_eq!(merged.unit_cost_price, config.unit_cost_price);
        assert_eq!(merged.store_name, config.store_name);
        assert_eq!(merged.monthly_target, config.monthly_target);
    }

    #[test]
    fn empty_update_is_identity() {
        let config = StoreConfig::default();
        assert_eq!(config.merged(&UpdateConfigCommand::default()), config);
    }
}
