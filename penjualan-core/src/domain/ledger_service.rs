//! Ledger store: the authoritative owner of the transaction collection
//! and the configuration record.
//!
//! Every mutation follows the same protocol: take the commit lock, build
//! the next state from a snapshot of the current one, persist the full
//! record, and only then swap the new state in. A failed write therefore
//! leaves both memory and disk exactly as they were, and readers never
//! observe a collection mid-mutation. Committed changes are announced on a
//! broadcast channel so observers can refresh their snapshots.

use std::sync::Arc;

use chrono::Utc;
use log::{error, info};
use tokio::sync::{broadcast, Mutex};

use crate::domain::commands::config::UpdateConfigCommand;
use crate::domain::commands::transactions::{CreateTransactionCommand, EditTransactionCommand};
use crate::domain::financials::compute_financials;
use crate::domain::models::{StoreConfig, Transaction};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::traits::{ConfigStorage, Connection, TransactionStorage};

/// Remaining-stock level below which the dashboard shows a warning.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Change notifications published after each committed mutation.
///
/// Events carry no transaction payload; observers pull a fresh snapshot
/// from the service when notified.
#[derive(Debug, Clone)]
pub enum LedgerEvent {
    ConfigUpdated(StoreConfig),
    TransactionsChanged,
    Reset,
}

/// Process-wide derived statistics. Recomputed from the live collection on
/// every read, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStats {
    pub total_quantity: i64,
    pub total_revenue: i64,
    pub total_cost: i64,
    pub total_profit: i64,
    pub transaction_count: usize,
    /// May go negative when sales exceed the configured initial stock;
    /// callers clamp for display.
    pub remaining_stock: i64,
    pub margin_percent: f64,
    /// Percent of the monthly unit target covered, clamped to 100.
    pub monthly_target_progress: f64,
    pub low_stock: bool,
}

struct LedgerState {
    config: StoreConfig,
    transactions: Vec<Transaction>,
}

#[derive(Clone)]
pub struct LedgerService<C: Connection> {
    config_repository: C::ConfigRepository,
    transaction_repository: C::TransactionRepository,
    state: Arc<Mutex<LedgerState>>,
    events: broadcast::Sender<LedgerEvent>,
}

impl<C: Connection> LedgerService<C> {
    /// Load persisted state and build the service.
    ///
    /// Startup never fails: a missing record means first run and a
    /// malformed or unreadable one is logged and replaced with defaults.
    pub async fn init(connection: Arc<C>) -> Self {
        let config_repository = connection.create_config_repository();
        let transaction_repository = connection.create_transaction_repository();

        let config = match config_repository.load_config().await {
            Ok(Some(config)) => config,
            Ok(None) => {
                info!("No stored configuration found, starting with defaults");
                StoreConfig::default()
            }
            Err(e) => {
                error!("Failed to load configuration, falling back to defaults: {:#}", e);
                StoreConfig::default()
            }
        };

        let transactions = match transaction_repository.load_transactions().await {
            Ok(Some(transactions)) => {
                info!("Loaded {} stored transactions", transactions.len());
                transactions
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("Failed to load transactions, starting with an empty ledger: {:#}", e);
                Vec::new()
            }
        };

        let (events, _) = broadcast::channel(32);

        Self {
            config_repository,
            transaction_repository,
            state: Arc::new(Mutex::new(LedgerState {
                config,
                transactions,
            })),
            events,
        }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current configuration.
    pub async fn config(&self) -> StoreConfig {
        self.state.lock().await.config.clone()
    }

    /// Snapshot of the transaction collection, most recent first.
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().await.transactions.clone()
    }

    /// Derived statistics over the current collection and configuration.
    pub async fn stats(&self) -> LedgerStats {
        let state = self.state.lock().await;
        compute_stats(&state.config, &state.transactions)
    }

    /// Merge the provided fields into the configuration and persist it.
    ///
    /// The merged record is written before the in-memory configuration is
    /// replaced, so a failed write leaves no memory/disk divergence.
    pub async fn update_config(&self, command: UpdateConfigCommand) -> LedgerResult<StoreConfig> {
        for (field, value) in [
            ("unitSalePrice", command.unit_sale_price),
            ("unitCostPrice", command.unit_cost_price),
            ("initialStock", command.initial_stock),
            ("monthlyTarget", command.monthly_target),
        ] {
            if value.is_some_and(|v| v < 0) {
                return Err(LedgerError::validation(field, "must not be negative"));
            }
        }

        let mut state = self.state.lock().await;
        let merged = state.config.merged(&command);

        self.config_repository.save_config(&merged).await?;
        state.config = merged.clone();

        info!("Configuration updated for store '{}'", merged.store_name);
        let _ = self.events.send(LedgerEvent::ConfigUpdated(merged.clone()));

        Ok(merged)
    }

    /// Record a new sale.
    ///
    /// Unit prices are snapshotted from the current configuration; the new
    /// record is prepended so the collection stays most-recent-first.
    pub async fn add_transaction(
        &self,
        command: CreateTransactionCommand,
    ) -> LedgerResult<Transaction> {
        if command.quantity == 0 {
            return Err(LedgerError::validation(
                "quantity",
                "quantity must be a positive number of units",
            ));
        }

        let mut state = self.state.lock().await;

        let now = Utc::now();
        let today = now.date_naive();
        let sequence_index = state.transactions.len() + 1;
        let financials = compute_financials(
            command.quantity,
            state.config.unit_sale_price,
            state.config.unit_cost_price,
        );

        let transaction = Transaction {
            id: Transaction::generate_id(now.timestamp_millis()),
            transaction_code: Transaction::transaction_code(sequence_index, today),
            date: command.date.unwrap_or(today),
            buyer: normalize_label(command.buyer),
            quantity: command.quantity,
            unit_sale_price: state.config.unit_sale_price,
            unit_cost_price: state.config.unit_cost_price,
            total_revenue: financials.total_revenue,
            total_cost: financials.total_cost,
            profit: financials.profit,
            margin_percent: financials.margin_percent,
            note: normalize_label(command.note),
            created_at: now,
        };

        let mut next = Vec::with_capacity(state.transactions.len() + 1);
        next.push(transaction.clone());
        next.extend_from_slice(&state.transactions);

        self.transaction_repository.save_transactions(&next).await?;
        state.transactions = next;

        info!(
            "Recorded sale {} ({} units)",
            transaction.transaction_code, transaction.quantity
        );
        let _ = self.events.send(LedgerEvent::TransactionsChanged);

        Ok(transaction)
    }

    /// Merge fields into an existing transaction and recompute its derived
    /// figures.
    ///
    /// Financials are recomputed against the prices captured at creation
    /// time; edits never re-snapshot configuration pricing. The code and
    /// creation timestamp are immutable.
    pub async fn edit_transaction(
        &self,
        id: &str,
        command: EditTransactionCommand,
    ) -> LedgerResult<Transaction> {
        if command.quantity == Some(0) {
            return Err(LedgerError::validation(
                "quantity",
                "quantity must be a positive number of units",
            ));
        }

        let mut state = self.state.lock().await;
        let position = state
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::NotFound { id: id.to_string() })?;

        let mut updated = state.transactions[position].clone();
        if let Some(quantity) = command.quantity {
            updated.quantity = quantity;
        }
        if let Some(date) = command.date {
            updated.date = date;
        }
        if let Some(buyer) = command.buyer {
            updated.buyer = normalize_label(Some(buyer));
        }
        if let Some(note) = command.note {
            updated.note = normalize_label(Some(note));
        }
        updated.apply_financials(compute_financials(
            updated.quantity,
            updated.unit_sale_price,
            updated.unit_cost_price,
        ));

        let mut next = state.transactions.clone();
        next[position] = updated.clone();

        self.transaction_repository.save_transactions(&next).await?;
        state.transactions = next;

        let _ = self.events.send(LedgerEvent::TransactionsChanged);

        Ok(updated)
    }

    /// Remove a transaction by id.
    ///
    /// Codes of the remaining transactions are never renumbered and the
    /// removed code is not reissued to them.
    pub async fn delete_transaction(&self, id: &str) -> LedgerResult<()> {
        let mut state = self.state.lock().await;

        if !state.transactions.iter().any(|t| t.id == id) {
            return Err(LedgerError::NotFound { id: id.to_string() });
        }

        let next: Vec<Transaction> = state
            .transactions
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();

        self.transaction_repository.save_transactions(&next).await?;
        state.transactions = next;

        info!("Deleted transaction {}", id);
        let _ = self.events.send(LedgerEvent::TransactionsChanged);

        Ok(())
    }

    /// Destructive full reset: default configuration, empty collection,
    /// both persisted. Confirming user intent is the caller's concern.
    pub async fn reset_all(&self) -> LedgerResult<()> {
        let mut state = self.state.lock().await;

        let defaults = StoreConfig::default();
        self.config_repository.save_config(&defaults).await?;
        self.transaction_repository.save_transactions(&[]).await?;

        state.config = defaults;
        state.transactions.clear();

        info!("Ledger reset to defaults");
        let _ = self.events.send(LedgerEvent::Reset);

        Ok(())
    }
}

fn normalize_label(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn compute_stats(config: &StoreConfig, transactions: &[Transaction]) -> LedgerStats {
    let total_quantity: i64 = transactions.iter().map(|t| i64::from(t.quantity)).sum();
    let total_revenue: i64 = transactions.iter().map(|t| t.total_revenue).sum();
    let total_cost: i64 = transactions.iter().map(|t| t.total_cost).sum();
    let total_profit: i64 = transactions.iter().map(|t| t.profit).sum();

    let margin_percent = if total_revenue > 0 {
        total_profit as f64 / total_revenue as f64 * 100.0
    } else {
        0.0
    };

    let remaining_stock = config.initial_stock - total_quantity;
    let monthly_target_progress = if config.monthly_target > 0 {
        (total_quantity as f64 / config.monthly_target as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    LedgerStats {
        total_quantity,
        total_revenue,
        total_cost,
        total_profit,
        transaction_count: transactions.len(),
        remaining_stock,
        margin_percent,
        monthly_target_progress,
        low_stock: remaining_stock < LOW_STOCK_THRESHOLD,
    }
}
