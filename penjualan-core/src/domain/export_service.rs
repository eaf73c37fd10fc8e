//! Export domain logic for the sales ledger.
//!
//! Produces the tabular CSV export and the full-fidelity JSON backup, and
//! writes either to disk on request. Export never touches ledger state; a
//! failed export leaves nothing to roll back.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use log::{error, info};
use serde::{Deserialize, Serialize};

use shared::{ExportData, ExportToPathResponse};

use crate::domain::models::{StoreConfig, Transaction};
use crate::error::{LedgerError, LedgerResult};

/// CSV column headers. Column order and names are an external contract;
/// consumers import these files into spreadsheets keyed on them.
const CSV_HEADERS: [&str; 9] = [
    "No",
    "Tanggal",
    "No Transaksi",
    "Pembeli",
    "Qty",
    "Harga Satuan",
    "Total Penjualan",
    "Total Modal",
    "Keuntungan",
];

/// Full-fidelity backup document: the two persisted records side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    #[serde(rename = "pengaturan")]
    pub config: StoreConfig,
    #[serde(rename = "transaksi")]
    pub transactions: Vec<Transaction>,
}

/// Export service that handles all export-related business logic.
#[derive(Clone)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Encode the transaction collection as CSV, one row per transaction
    /// in the collection's current order (most recent first, no re-sort).
    ///
    /// The row index is 1-based and independent of transaction codes.
    /// Fields containing the delimiter or quotes are quoted per standard
    /// CSV rules; numeric fields stay raw, with no currency symbol or
    /// grouping. A missing buyer renders as `-`.
    pub fn export_transactions_csv(
        &self,
        transactions: &[Transaction],
    ) -> LedgerResult<ExportData> {
        self.csv_export_on(transactions, Local::now().date_naive())
    }

    fn csv_export_on(
        &self,
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> LedgerResult<ExportData> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(CSV_HEADERS)
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for (index, transaction) in transactions.iter().enumerate() {
            writer
                .write_record(&[
                    (index + 1).to_string(),
                    transaction.date.to_string(),
                    transaction.transaction_code.clone(),
                    transaction.buyer.clone().unwrap_or_else(|| "-".to_string()),
                    transaction.quantity.to_string(),
                    transaction.unit_sale_price.to_string(),
                    transaction.total_revenue.to_string(),
                    transaction.total_cost.to_string(),
                    transaction.profit.to_string(),
                ])
                .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        let content =
            String::from_utf8(bytes).map_err(|e| LedgerError::Export(e.to_string()))?;

        info!("Encoded {} transactions as CSV", transactions.len());

        Ok(ExportData {
            content,
            filename: format!("catatan_penjualan_{}.csv", today),
            transaction_count: transactions.len(),
        })
    }

    /// Encode the full ledger state as a pretty-printed JSON backup
    /// sufficient for exact restoration.
    pub fn export_backup_json(
        &self,
        config: &StoreConfig,
        transactions: &[Transaction],
    ) -> LedgerResult<ExportData> {
        self.backup_on(config, transactions, Local::now().date_naive())
    }

    fn backup_on(
        &self,
        config: &StoreConfig,
        transactions: &[Transaction],
        today: NaiveDate,
    ) -> LedgerResult<ExportData> {
        let document = BackupDocument {
            config: config.clone(),
            transactions: transactions.to_vec(),
        };

        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(ExportData {
            content,
            filename: format!("backup_penjualan_{}.json", today),
            transaction_count: transactions.len(),
        })
    }

    /// Parse a backup document back into the two ledger records.
    pub fn restore_backup(&self, content: &str) -> LedgerResult<BackupDocument> {
        serde_json::from_str(content)
            .map_err(|e| LedgerError::Export(format!("invalid backup document: {}", e)))
    }

    /// Write an export artifact to `custom_path`, or to the Documents
    /// folder (home directory as fallback) when no path is given.
    pub fn export_to_path(
        &self,
        data: &ExportData,
        custom_path: Option<&str>,
    ) -> LedgerResult<ExportToPathResponse> {
        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(sanitize_path(path)),
            _ => dirs::document_dir()
                .or_else(dirs::home_dir)
                .ok_or_else(|| {
                    LedgerError::Export("could not determine export directory".to_string())
                })?,
        };

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("Failed to create export directory {:?}: {}", export_dir, e);
            return Err(LedgerError::Export(format!(
                "failed to create export directory: {}",
                e
            )));
        }

        let file_path = export_dir.join(&data.filename);
        if let Err(e) = fs::write(&file_path, &data.content) {
            error!("Failed to write export file {:?}: {}", file_path, e);
            return Err(LedgerError::Export(format!(
                "failed to write export file: {}",
                e
            )));
        }

        let file_path = file_path.to_string_lossy().to_string();
        info!(
            "Exported {} transactions to {}",
            data.transaction_count, file_path
        );

        Ok(ExportToPathResponse {
            success: true,
            message: format!("File exported successfully to: {}", file_path),
            file_path,
            transaction_count: data.transaction_count,
        })
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Basic path sanitization for user-supplied export directories: strip
/// surrounding quotes, unescape spaces, drop trailing separators, expand
/// a leading tilde.
fn sanitize_path(path: &str) -> String {
    let mut cleaned = path.trim().to_string();

    if (cleaned.starts_with('"') && cleaned.ends_with('"') && cleaned.len() >= 2)
        || (cleaned.starts_with('\'') && cleaned.ends_with('\'') && cleaned.len() >= 2)
    {
        cleaned = cleaned[1..cleaned.len() - 1].to_string();
    }

    cleaned = cleaned.trim().replace("\\ ", " ");

    while cleaned.ends_with('/') || cleaned.ends_with('\\') {
        cleaned.pop();
    }

    if cleaned.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            if cleaned == "~" {
                cleaned = home.to_string_lossy().to_string();
            } else if cleaned.starts_with("~/") {
                cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
            }
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    use crate::domain::financials::compute_financials;

    fn sale(
        code_index: usize,
        date: &str,
        buyer: Option<&str>,
        quantity: u32,
    ) -> Transaction {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let financials = compute_financials(quantity, 50_000, 30_000);
        Transaction {
            id: format!("trx-1770336000000-{:04x}", code_index),
            transaction_code: Transaction::transaction_code(code_index, date),
            date,
            buyer: buyer.map(str::to_string),
            quantity,
            unit_sale_price: 50_000,
            unit_cost_price: 30_000,
            total_revenue: financials.total_revenue,
            total_cost: financials.total_cost,
            profit: financials.profit,
            margin_percent: financials.margin_percent,
            note: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 5, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn csv_matches_the_column_contract() {
        let service = ExportService::new();
        let transactions = vec![
            sale(2, "2026-08-05", Some("Budi"), 3),
            sale(1, "2026-08-01", None, 1),
        ];

        let export = service
            .csv_export_on(&transactions, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap())
            .unwrap();

        let lines: Vec<&str> = export.content.lines().collect();
        assert_eq!(
            lines[0],
            "No,Tanggal,No Transaksi,Pembeli,Qty,Harga Satuan,Total Penjualan,Total Modal,Keuntungan"
        );
        assert_eq!(
            lines[1],
            "1,2026-08-05,TRX-260805-002,Budi,3,50000,150000,90000,60000"
        );
        // Missing buyer renders as "-"
        assert_eq!(
            lines[2],
            "2,2026-08-01,TRX-260801-001,-,1,50000,50000,30000,20000"
        );
        assert_eq!(export.filename, "catatan_penjualan_2026-08-06.csv");
        assert_eq!(export.transaction_count, 2);
    }

    #[test]
    fn csv_quotes_fields_containing_the_delimiter() {
        let service = ExportService::new();
        let transactions = vec![sale(1, "2026-08-05", Some("Budi, Warung Kopi"), 2)];

        let export = service
            .csv_export_on(&transactions, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap())
            .unwrap();

        let lines: Vec<&str> = export.content.lines().collect();
        assert_eq!(
            lines[1],
            "1,2026-08-05,TRX-260805-001,\"Budi, Warung Kopi\",2,50000,100000,60000,40000"
        );
    }

    #[test]
    fn csv_rows_keep_the_collection_order() {
        let service = ExportService::new();
        // Deliberately not sorted by date: export must not re-sort
        let transactions = vec![
            sale(3, "2026-07-10", None, 1),
            sale(2, "2026-08-02", None, 1),
            sale(1, "2026-06-20", None, 1),
        ];

        let export = service
            .csv_export_on(&transactions, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap())
            .unwrap();

        let dates: Vec<&str> = export
            .content
            .lines()
            .skip(1)
            .map(|line| line.split(',').nth(1).unwrap())
            .collect();
        assert_eq!(dates, vec!["2026-07-10", "2026-08-02", "2026-06-20"]);
    }

    #[test]
    fn backup_round_trips_exactly() {
        let service = ExportService::new();
        let config = StoreConfig {
            store_name: "Warung Berkah".to_string(),
            owner_name: "Siti".to_string(),
            product_name: "Keripik".to_string(),
            unit_sale_price: 15_000,
            unit_cost_price: 9_000,
            initial_stock: 500,
            monthly_target: 300,
        };
        let transactions = vec![
            sale(2, "2026-08-05", Some("Budi"), 3),
            sale(1, "2026-08-01", None, 1),
        ];

        let export = service
            .backup_on(
                &config,
                &transactions,
                NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            )
            .unwrap();
        assert_eq!(export.filename, "backup_penjualan_2026-08-06.json");

        let restored = service.restore_backup(&export.content).unwrap();
        assert_eq!(restored.config, config);
        assert_eq!(restored.transactions, transactions);
    }

    #[test]
    fn backup_uses_the_indonesian_record_keys() {
        let service = ExportService::new();
        let export = service
            .backup_on(
                &StoreConfig::default(),
                &[],
                NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            )
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&export.content).unwrap();
        assert!(value.get("pengaturan").is_some());
        assert!(value.get("transaksi").is_some());
    }

    #[test]
    fn restore_rejects_garbage() {
        let service = ExportService::new();
        let outcome = service.restore_backup("definitely not json");
        assert!(matches!(outcome, Err(LedgerError::Export(_))));
    }

    #[test]
    fn export_to_path_writes_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let service = ExportService::new();
        let data = ExportData {
            content: "No,Tanggal\n".to_string(),
            filename: "catatan_penjualan_2026-08-06.csv".to_string(),
            transaction_count: 0,
        };

        let target = temp_dir.path().to_string_lossy().to_string();
        let response = service.export_to_path(&data, Some(target.as_str())).unwrap();

        assert!(response.success);
        let written = fs::read_to_string(temp_dir.path().join(&data.filename)).unwrap();
        assert_eq!(written, data.content);
    }

    #[test]
    fn sanitize_path_strips_quotes_and_trailing_separators() {
        assert_eq!(sanitize_path("\"/data/export\""), "/data/export");
        assert_eq!(sanitize_path("  /data/export/  "), "/data/export");
        assert_eq!(sanitize_path("/data\\ with\\ spaces"), "/data with spaces");
    }
}
