//! # IO Module
//!
//! The thin boundary between the ledger engine and whatever UI consumes
//! it: raw form-string validation and DTO mapping. No business rules live
//! here; everything is delegated to the domain layer.

pub mod forms;
pub mod mappers;

pub use forms::TransactionFormService;
pub use mappers::{ConfigMapper, RecapMapper, StatsMapper, TransactionMapper};
