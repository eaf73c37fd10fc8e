//! JSON-backed transaction collection repository.

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::connection::{JsonConnection, TRANSAKSI_KEY};
use crate::domain::models::Transaction;
use crate::storage::traits::TransactionStorage;

#[derive(Clone)]
pub struct TransactionRepository {
    connection: JsonConnection,
}

impl TransactionRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TransactionStorage for TransactionRepository {
    async fn load_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        match self.connection.read_record(TRANSAKSI_KEY)? {
            Some(contents) => {
                let transactions: Vec<Transaction> = serde_json::from_str(&contents)
                    .context("malformed transaction collection record")?;
                Ok(Some(transactions))
            }
            None => Ok(None),
        }
    }

    async fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let contents = serde_json::to_string(transactions)?;
        self.connection.write_record(TRANSAKSI_KEY, &contents)
    }
}
