//! Domain models owned by the ledger.

pub mod config;
pub mod transaction;

pub use config::StoreConfig;
pub use transaction::Transaction;
