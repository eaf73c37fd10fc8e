//! Domain-level command types.
//!
//! These structs are used by services inside the domain layer and are not
//! exposed over the public API. The `io` layer maps the public DTOs from
//! the `shared` crate (and raw form strings) to these internal types.

pub mod transactions {
    use chrono::NaiveDate;

    /// Input for recording a new sale.
    #[derive(Debug, Clone)]
    pub struct CreateTransactionCommand {
        /// Units sold; must be positive
        pub quantity: u32,
        pub buyer: Option<String>,
        /// Attributed sale date; defaults to today when absent
        pub date: Option<NaiveDate>,
        pub note: Option<String>,
    }

    /// Input for editing an existing sale. Unset fields keep their current
    /// values; unit prices are never part of an edit.
    #[derive(Debug, Clone, Default)]
    pub struct EditTransactionCommand {
        pub quantity: Option<u32>,
        pub date: Option<NaiveDate>,
        pub buyer: Option<String>,
        pub note: Option<String>,
    }
}

pub mod config {
    /// Input for merge-updating the store configuration.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateConfigCommand {
        pub store_name: Option<String>,
        pub owner_name: Option<String>,
        pub product_name: Option<String>,
        pub unit_sale_price: Option<i64>,
        pub unit_cost_price: Option<i64>,
        pub initial_stock: Option<i64>,
        pub monthly_target: Option<i64>,
    }
}
