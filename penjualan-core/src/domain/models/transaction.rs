//! Domain model for a recorded sale.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::financials::Financials;

/// A single recorded sale.
///
/// The two unit prices are a snapshot of the configuration at creation
/// time; later configuration changes never touch them. The four derived
/// fields are recomputed together whenever `quantity` changes and are
/// persisted alongside the source fields so the snapshot survives
/// round-trips. Serialized field names (camelCase) are part of the
/// persisted-record contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// `TRX-YYMMDD-NNN`; assigned at creation, never renumbered
    pub transaction_code: String,
    /// Calendar date the sale is attributed to (user-editable)
    pub date: NaiveDate,
    #[serde(default)]
    pub buyer: Option<String>,
    pub quantity: u32,
    pub unit_sale_price: i64,
    pub unit_cost_price: i64,
    pub total_revenue: i64,
    pub total_cost: i64,
    pub profit: i64,
    pub margin_percent: f64,
    #[serde(default)]
    pub note: Option<String>,
    /// Creation timestamp; immutable
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Generate a transaction ID from the creation timestamp plus a random
    /// suffix. Format: `trx-<epoch_millis>-<hex suffix>`, e.g.
    /// `trx-1770336000123-9f3ac1d2`. Unique within this store's history
    /// with overwhelming probability.
    pub fn generate_id(epoch_millis: i64) -> String {
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
        format!("trx-{}-{}", epoch_millis, suffix)
    }

    /// Build the human-readable transaction code from a 1-based sequence
    /// index and the creation date (not the attributed sale date).
    ///
    /// The index is zero-padded to three digits and grows unbounded past
    /// 999. It is a count-based ordinal taken at creation time, so codes
    /// are not re-issued or renumbered when transactions are later deleted.
    pub fn transaction_code(sequence_index: usize, creation_date: NaiveDate) -> String {
        format!(
            "TRX-{}-{:03}",
            creation_date.format("%y%m%d"),
            sequence_index
        )
    }

    /// Overwrite the four derived fields from a fresh computation.
    pub fn apply_financials(&mut self, financials: Financials) {
        self.total_revenue = financials.total_revenue;
        self.total_cost = financials.total_cost;
        self.profit = financials.profit;
        self.margin_percent = financials.margin_percent;
    }
}
