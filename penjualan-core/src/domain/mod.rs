//! # Domain Module
//!
//! Business logic for the sales ledger.
//!
//! The ledger service owns all mutable state; the recap and export
//! services are pure projections over snapshots it hands out. Nothing in
//! this module talks to the file system except through the storage traits.
//!
//! ## Module Organization
//!
//! - **models**: the `StoreConfig` and `Transaction` records
//! - **financials**: money/quantity arithmetic for a single sale
//! - **ledger_service**: transaction CRUD, configuration, derived stats
//! - **recap_service**: monthly rollups and month drill-downs
//! - **export_service**: CSV export and JSON backup/restore
//! - **format**: id-ID presentation formatting helpers
//! - **commands**: internal command types the io layer maps DTOs onto

pub mod commands;
pub mod export_service;
pub mod financials;
pub mod format;
pub mod ledger_service;
pub mod models;
pub mod recap_service;

pub use export_service::{BackupDocument, ExportService};
pub use financials::{compute_financials, Financials};
pub use ledger_service::{LedgerEvent, LedgerService, LedgerStats, LOW_STOCK_THRESHOLD};
pub use recap_service::{MonthlyRecap, RecapService};
