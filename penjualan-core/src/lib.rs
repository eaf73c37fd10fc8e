//! # Catatan Penjualan ledger engine
//!
//! Records per-unit sales for a single product, keeps the derived
//! financial figures consistent across edits and deletes, aggregates the
//! history into monthly recaps, and exports the whole ledger as CSV or a
//! JSON backup.
//!
//! The crate is UI-agnostic: screens call the services assembled in
//! [`AppState`] and read snapshots or subscribe to change events, nothing
//! more. Layering follows storage ← domain ← io:
//!
//! - [`storage`] persists the two ledger records (configuration and
//!   transaction collection) behind swappable traits
//! - [`domain`] owns the business rules: the ledger store, money
//!   arithmetic, monthly recaps, export encoding
//! - [`io`] adapts raw form strings and public DTOs to domain commands
//!
//! Every mutating operation persists before it commits, so a storage
//! failure leaves both memory and disk unchanged.

pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use std::sync::Arc;

use log::info;

use crate::domain::{ExportService, LedgerService, RecapService};
use crate::io::TransactionFormService;
use crate::storage::Connection;

pub use crate::error::{LedgerError, LedgerResult};

/// Main application state that holds all services.
#[derive(Clone)]
pub struct AppState<C: Connection> {
    pub ledger_service: LedgerService<C>,
    pub recap_service: RecapService,
    pub export_service: ExportService,
    pub form_service: TransactionFormService,
}

/// Initialize the backend with all required services.
///
/// Loads persisted state through the given connection; missing or
/// malformed records fall back to defaults, so initialization itself
/// cannot fail.
pub async fn initialize_backend<C: Connection>(connection: Arc<C>) -> AppState<C> {
    info!("Setting up ledger services");
    let ledger_service = LedgerService::init(connection).await;

    AppState {
        ledger_service,
        recap_service: RecapService::new(),
        export_service: ExportService::new(),
        form_service: TransactionFormService::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::storage::JsonConnection;

    /// End-to-end pass through the whole surface: form input to recorded
    /// transaction to recap to export.
    #[tokio::test]
    async fn records_recaps_and_exports_a_sale() {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let state = initialize_backend(connection).await;

        let command = state
            .form_service
            .parse_new_transaction("3", "2026-08-05", "Budi", "")
            .unwrap();
        let created = state.ledger_service.add_transaction(command).await.unwrap();
        assert_eq!(created.total_revenue, 150_000);

        let transactions = state.ledger_service.transactions().await;
        let recaps = state.recap_service.monthly_recap(&transactions);
        assert_eq!(recaps.len(), 1);
        assert_eq!(recaps[0].period_key, "2026-08");
        assert_eq!(recaps[0].total_revenue, 150_000);

        let export = state
            .export_service
            .export_transactions_csv(&transactions)
            .unwrap();
        assert!(export.content.contains("TRX-"));
        assert_eq!(export.transaction_count, 1);

        let config = state.ledger_service.config().await;
        let backup = state
            .export_service
            .export_backup_json(&config, &transactions)
            .unwrap();
        let restored = state.export_service.restore_backup(&backup.content).unwrap();
        assert_eq!(restored.transactions, transactions);
        assert_eq!(restored.config, config);
    }
}
