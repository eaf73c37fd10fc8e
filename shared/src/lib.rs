use serde::{Deserialize, Serialize};

/// A recorded sale, as exposed to the UI layer.
///
/// All monetary amounts are whole rupiah (`i64`); `margin_percent` is a
/// percentage value (40.0 means 40%). The four derived fields are always
/// computed together from `quantity` and the two unit prices and are never
/// individually editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Human-readable code in the form `TRX-YYMMDD-NNN`
    pub transaction_code: String,
    /// Calendar date the sale is attributed to (`YYYY-MM-DD`)
    pub date: String,
    /// Optional buyer label
    pub buyer: Option<String>,
    pub quantity: u32,
    /// Unit sale price captured from the configuration at creation time
    pub unit_sale_price: i64,
    /// Unit cost price captured from the configuration at creation time
    pub unit_cost_price: i64,
    pub total_revenue: i64,
    pub total_cost: i64,
    pub profit: i64,
    pub margin_percent: f64,
    /// Optional free-text note
    pub note: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

/// The single store/product configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    pub store_name: String,
    pub owner_name: String,
    pub product_name: String,
    /// Unit sale price in rupiah (non-negative)
    pub unit_sale_price: i64,
    /// Unit cost price in rupiah (non-negative)
    pub unit_cost_price: i64,
    pub initial_stock: i64,
    /// Monthly sales target in units
    pub monthly_target: i64,
}

/// Request to create a new transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Number of units sold (must be positive)
    pub quantity: u32,
    pub buyer: Option<String>,
    /// Optional sale date override (`YYYY-MM-DD`) - defaults to today
    pub date: Option<String>,
    pub note: Option<String>,
}

/// Request to edit an existing transaction.
///
/// Unset fields keep their current values. Unit prices are intentionally
/// absent from this request: a transaction keeps the prices captured at its
/// creation time, edits never re-snapshot pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EditTransactionRequest {
    pub quantity: Option<u32>,
    pub date: Option<String>,
    pub buyer: Option<String>,
    pub note: Option<String>,
}

/// Request to merge fields into the store configuration.
///
/// Unset fields keep their current values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigRequest {
    pub store_name: Option<String>,
    pub owner_name: Option<String>,
    pub product_name: Option<String>,
    pub unit_sale_price: Option<i64>,
    pub unit_cost_price: Option<i64>,
    pub initial_stock: Option<i64>,
    pub monthly_target: Option<i64>,
}

/// One month of aggregated sales figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecap {
    /// `YYYY-MM` period key; lexicographic order matches chronological order
    pub period_key: String,
    pub year: i32,
    /// 1-indexed calendar month
    pub month: u32,
    pub total_quantity: i64,
    pub total_revenue: i64,
    pub total_cost: i64,
    pub total_profit: i64,
    pub transaction_count: usize,
    /// Display label, e.g. "Agustus 2026"
    pub label: String,
}

/// Process-wide derived statistics, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    pub total_quantity: i64,
    pub total_revenue: i64,
    pub total_cost: i64,
    pub total_profit: i64,
    pub transaction_count: usize,
    /// `initial_stock - total_quantity`; may go negative, callers clamp for display
    pub remaining_stock: i64,
    /// Blended margin across all sales (0 when there is no revenue)
    pub margin_percent: f64,
    /// Percent of the monthly unit target covered, clamped to 100
    pub monthly_target_progress: f64,
    /// True when remaining stock has dropped below the warning threshold
    pub low_stock: bool,
}

/// Validation result for raw transaction form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFormValidation {
    pub is_valid: bool,
    pub errors: Vec<TransactionFormError>,
    /// Parsed quantity, present when the quantity field validated
    pub quantity: Option<u32>,
    /// Normalized sale date (`YYYY-MM-DD`), present when the date field validated
    pub date: Option<String>,
}

/// Specific validation errors for the transaction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionFormError {
    QuantityEmpty,
    QuantityInvalid(String),
    QuantityNotPositive,
    QuantityTooLarge,
    DateInvalid(String),
    BuyerTooLong(usize),
    NoteTooLong(usize),
}

/// In-memory export artifact produced by the export service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub content: String,
    pub filename: String,
    pub transaction_count: usize,
}

/// Outcome of writing an export artifact to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub transaction_count: usize,
}
