//! # Storage Module
//!
//! Handles all data persistence for the sales ledger.
//!
//! The domain layer talks to storage only through the traits in
//! [`traits`]; the shipped backend is the JSON record store in [`json`].
//! Both ledger records are written whole and atomically, there is no
//! partial-row persistence to reconcile.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{ConfigStorage, Connection, TransactionStorage};
