//! JSON file storage backend.
//!
//! Persists the two ledger records as JSON files under a data directory:
//! the configuration object and the transaction collection array, each
//! under its own namespaced key.

pub mod config_repository;
pub mod connection;
pub mod transaction_repository;

pub use config_repository::ConfigRepository;
pub use connection::{JsonConnection, PENGATURAN_KEY, TRANSAKSI_KEY};
pub use transaction_repository::TransactionRepository;
