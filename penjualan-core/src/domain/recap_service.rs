//! Monthly recap domain logic.
//!
//! Buckets the transaction collection by the calendar month of each sale's
//! attributed date and sums the monetary fields. Recaps are derived data:
//! they are recomputed on demand and never persisted, so they cannot drift
//! from the transactions they summarize.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::format::MONTHS;
use crate::domain::models::Transaction;

/// One month of aggregated sales figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecap {
    /// `YYYY-MM`; lexicographic order matches chronological order
    pub period_key: String,
    pub year: i32,
    /// 1-indexed calendar month
    pub month: u32,
    pub total_quantity: i64,
    pub total_revenue: i64,
    pub total_cost: i64,
    pub total_profit: i64,
    pub transaction_count: usize,
}

impl MonthlyRecap {
    fn new(year: i32, month: u32) -> Self {
        Self {
            period_key: period_key_for(year, month),
            year,
            month,
            total_quantity: 0,
            total_revenue: 0,
            total_cost: 0,
            total_profit: 0,
            transaction_count: 0,
        }
    }

    /// Display label, e.g. "Agustus 2026".
    pub fn label(&self) -> String {
        format!("{} {}", MONTHS[self.month as usize - 1], self.year)
    }
}

/// The `YYYY-MM` period key for a sale date.
pub fn period_key(date: NaiveDate) -> String {
    period_key_for(date.year(), date.month())
}

fn period_key_for(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// Recap service that derives monthly rollups from the transaction
/// collection.
#[derive(Clone)]
pub struct RecapService;

impl RecapService {
    pub fn new() -> Self {
        Self
    }

    /// Bucket transactions by the calendar month of their attributed sale
    /// date (not their creation timestamp) and sum per bucket.
    ///
    /// Returns one recap per month that has at least one transaction,
    /// ordered most recent month first. Empty input yields an empty vec.
    pub fn monthly_recap(&self, transactions: &[Transaction]) -> Vec<MonthlyRecap> {
        let mut buckets: HashMap<String, MonthlyRecap> = HashMap::new();

        for transaction in transactions {
            let key = period_key(transaction.date);
            let recap = buckets
                .entry(key)
                .or_insert_with(|| MonthlyRecap::new(transaction.date.year(), transaction.date.month()));
            recap.total_quantity += i64::from(transaction.quantity);
            recap.total_revenue += transaction.total_revenue;
            recap.total_cost += transaction.total_cost;
            recap.total_profit += transaction.profit;
            recap.transaction_count += 1;
        }

        let mut recaps: Vec<MonthlyRecap> = buckets.into_values().collect();
        recaps.sort_by(|a, b| b.period_key.cmp(&a.period_key));
        recaps
    }

    /// Transactions attributed to one period, most recent sale date first.
    /// Used for month drill-down views.
    pub fn transactions_in_month(
        &self,
        transactions: &[Transaction],
        period: &str,
    ) -> Vec<Transaction> {
        let mut in_month: Vec<Transaction> = transactions
            .iter()
            .filter(|t| period_key(t.date) == period)
            .cloned()
            .collect();
        in_month.sort_by(|a, b| b.date.cmp(&a.date));
        in_month
    }
}

impl Default for RecapService {
    fn default() -> Self {
        Self::new()
    }
}
