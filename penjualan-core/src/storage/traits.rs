//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{StoreConfig, Transaction};

/// Interface for persisting the configuration record.
///
/// `load_config` distinguishes an absent record (`Ok(None)`, first run)
/// from a malformed or unreadable one (`Err`); the ledger falls back to
/// defaults in both cases but only logs the latter.
#[async_trait]
pub trait ConfigStorage: Send + Sync {
    /// Load the stored configuration, if any.
    async fn load_config(&self) -> Result<Option<StoreConfig>>;

    /// Persist the full configuration record.
    async fn save_config(&self, config: &StoreConfig) -> Result<()>;
}

/// Interface for persisting the transaction collection.
///
/// The collection is stored as a single record in its canonical in-memory
/// order (most recent first); there is no per-row storage.
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Load the stored collection, if any.
    async fn load_transactions(&self) -> Result<Option<Vec<Transaction>>>;

    /// Persist the full collection, replacing the stored record.
    async fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
}

/// Factory abstraction over a storage backend.
///
/// The domain layer works against this trait so the backend (JSON files,
/// a database, an in-memory fake for tests) can be swapped without
/// touching the services.
pub trait Connection: Send + Sync + Clone {
    type ConfigRepository: ConfigStorage + Clone;
    type TransactionRepository: TransactionStorage + Clone;

    fn create_config_repository(&self) -> Self::ConfigRepository;

    fn create_transaction_repository(&self) -> Self::TransactionRepository;
}
