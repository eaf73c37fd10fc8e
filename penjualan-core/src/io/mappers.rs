//! Mappers between domain types and the public DTOs in the `shared` crate.

use chrono::NaiveDate;

use crate::domain::commands::config::UpdateConfigCommand;
use crate::domain::commands::transactions::{CreateTransactionCommand, EditTransactionCommand};
use crate::domain::ledger_service::LedgerStats;
use crate::domain::models::{StoreConfig, Transaction};
use crate::domain::recap_service::MonthlyRecap;
use crate::error::{LedgerError, LedgerResult};

pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(transaction: Transaction) -> shared::Transaction {
        shared::Transaction {
            id: transaction.id,
            transaction_code: transaction.transaction_code,
            date: transaction.date.to_string(),
            buyer: transaction.buyer,
            quantity: transaction.quantity,
            unit_sale_price: transaction.unit_sale_price,
            unit_cost_price: transaction.unit_cost_price,
            total_revenue: transaction.total_revenue,
            total_cost: transaction.total_cost,
            profit: transaction.profit,
            margin_percent: transaction.margin_percent,
            note: transaction.note,
            created_at: transaction.created_at.to_rfc3339(),
        }
    }

    pub fn create_command(
        request: shared::CreateTransactionRequest,
    ) -> LedgerResult<CreateTransactionCommand> {
        Ok(CreateTransactionCommand {
            quantity: request.quantity,
            buyer: request.buyer,
            date: request.date.as_deref().map(parse_date).transpose()?,
            note: request.note,
        })
    }

    pub fn edit_command(
        request: shared::EditTransactionRequest,
    ) -> LedgerResult<EditTransactionCommand> {
        Ok(EditTransactionCommand {
            quantity: request.quantity,
            date: request.date.as_deref().map(parse_date).transpose()?,
            buyer: request.buyer,
            note: request.note,
        })
    }
}

pub struct ConfigMapper;

impl ConfigMapper {
    pub fn to_dto(config: StoreConfig) -> shared::StoreConfig {
        shared::StoreConfig {
            store_name: config.store_name,
            owner_name: config.owner_name,
            product_name: config.product_name,
            unit_sale_price: config.unit_sale_price,
            unit_cost_price: config.unit_cost_price,
            initial_stock: config.initial_stock,
            monthly_target: config.monthly_target,
        }
    }

    pub fn update_command(request: shared::UpdateConfigRequest) -> UpdateConfigCommand {
        UpdateConfigCommand {
            store_name: request.store_name,
            owner_name: request.owner_name,
            product_name: request.product_name,
            unit_sale_price: request.unit_sale_price,
            unit_cost_price: request.unit_cost_price,
            initial_stock: request.initial_stock,
            monthly_target: request.monthly_target,
        }
    }
}

pub struct RecapMapper;

impl RecapMapper {
    pub fn to_dto(recap: MonthlyRecap) -> shared::MonthlyRecap {
        let label = recap.label();
        shared::MonthlyRecap {
            period_key: recap.period_key,
            year: recap.year,
            month: recap.month,
            total_quantity: recap.total_quantity,
            total_revenue: recap.total_revenue,
            total_cost: recap.total_cost,
            total_profit: recap.total_profit,
            transaction_count: recap.transaction_count,
            label,
        }
    }
}

pub struct StatsMapper;

impl StatsMapper {
    pub fn to_dto(stats: LedgerStats) -> shared::LedgerStats {
        shared::LedgerStats {
            total_quantity: stats.total_quantity,
            total_revenue: stats.total_revenue,
            total_cost: stats.total_cost,
            total_profit: stats.total_profit,
            transaction_count: stats.transaction_count,
            remaining_stock: stats.remaining_stock,
            margin_percent: stats.margin_percent,
            monthly_target_progress: stats.monthly_target_progress,
            low_stock: stats.low_stock,
        }
    }
}

fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| LedgerError::validation("date", format!("not a valid date: {}", input)))
}
