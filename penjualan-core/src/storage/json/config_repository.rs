//! JSON-backed configuration repository.

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::connection::{JsonConnection, PENGATURAN_KEY};
use crate::domain::models::StoreConfig;
use crate::storage::traits::ConfigStorage;

#[derive(Clone)]
pub struct ConfigRepository {
    connection: JsonConnection,
}

impl ConfigRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl ConfigStorage for ConfigRepository {
    async fn load_config(&self) -> Result<Option<StoreConfig>> {
        match self.connection.read_record(PENGATURAN_KEY)? {
            Some(contents) => {
                let config: StoreConfig = serde_json::from_str(&contents)
                    .context("malformed configuration record")?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    async fn save_config(&self, config: &StoreConfig) -> Result<()> {
        let contents = serde_json::to_string(config)?;
        self.connection.write_record(PENGATURAN_KEY, &contents)
    }
}
