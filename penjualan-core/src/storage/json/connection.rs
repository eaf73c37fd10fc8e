//! File-backed JSON record store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::storage::traits::Connection;

/// Storage key for the configuration record.
pub const PENGATURAN_KEY: &str = "catatan_penjualan:pengaturan";
/// Storage key for the transaction collection record.
pub const TRANSAKSI_KEY: &str = "catatan_penjualan:transaksi";

/// JsonConnection maps namespaced record keys to JSON files under a data
/// directory and hands out the repositories that read and write them.
///
/// A key like `catatan_penjualan:pengaturan` becomes
/// `<base>/catatan_penjualan/pengaturan.json`. Writes go to a temp file in
/// the same directory followed by a rename, so a crashed write never
/// leaves a half-written record behind.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at `base_directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory,
    /// `~/Documents/Catatan Penjualan`.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Catatan Penjualan");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base directory path.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Resolve a namespaced key to its file path. The namespace segment
    /// becomes a subdirectory, the record name becomes `<name>.json`.
    pub fn record_path(&self, key: &str) -> PathBuf {
        let mut path = self.base_directory.clone();
        for segment in key.split(':') {
            path.push(segment);
        }
        path.set_extension("json");
        path
    }

    /// Read a record's raw contents. `Ok(None)` when the record has never
    /// been written.
    pub fn read_record(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Write a record atomically: temp file in the target directory, then
    /// rename over the final path.
    pub fn write_record(&self, key: &str, contents: &str) -> Result<()> {
        let path = self.record_path(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

impl Connection for JsonConnection {
    type ConfigRepository = super::config_repository::ConfigRepository;
    type TransactionRepository = super::transaction_repository::TransactionRepository;

    fn create_config_repository(&self) -> Self::ConfigRepository {
        super::config_repository::ConfigRepository::new(self.clone())
    }

    fn create_transaction_repository(&self) -> Self::TransactionRepository {
        super::transaction_repository::TransactionRepository::new(self.clone())
    }
}
