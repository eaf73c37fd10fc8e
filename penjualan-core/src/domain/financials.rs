//! Money/quantity arithmetic for sale transactions.
//!
//! Pure functions with no side effects and no rounding; formatting happens
//! only at presentation boundaries (`domain::format`). Inputs outside the
//! domain (zero quantity, negative prices) are rejected by the ledger
//! service before this module is ever called.

use serde::{Deserialize, Serialize};

/// The four derived monetary figures of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    pub total_revenue: i64,
    pub total_cost: i64,
    pub profit: i64,
    /// Percentage value, not a fraction: 40.0 means 40%
    pub margin_percent: f64,
}

/// Compute revenue, cost, profit and margin for a sale of `quantity` units
/// at the given unit prices.
///
/// The margin is 0 when revenue is 0, which also covers the
/// division-by-zero case of a free product.
pub fn compute_financials(quantity: u32, unit_sale_price: i64, unit_cost_price: i64) -> Financials {
    let total_revenue = i64::from(quantity) * unit_sale_price;
    let total_cost = i64::from(quantity) * unit_cost_price;
    let profit = total_revenue - total_cost;
    let margin_percent = if total_revenue > 0 {
        profit as f64 / total_revenue as f64 * 100.0
    } else {
        0.0
    };

    Financials {
        total_revenue,
        total_cost,
        profit,
        margin_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_expected_figures() {
        // 3 units at 50_000 sale / 30_000 cost
        let f = compute_financials(3, 50_000, 30_000);
        assert_eq!(f.total_revenue, 150_000);
        assert_eq!(f.total_cost, 90_000);
        assert_eq!(f.profit, 60_000);
        assert!((f.margin_percent - 40.0).abs() < 1e-9);
    }

    #[test]
    fn profit_is_revenue_minus_cost() {
        for (qty, sale, cost) in [(1, 0, 0), (7, 12_345, 6_789), (250, 1_000, 2_500)] {
            let f = compute_financials(qty, sale, cost);
            assert_eq!(f.profit, f.total_revenue - f.total_cost);
        }
    }

    #[test]
    fn zero_revenue_yields_zero_margin() {
        let f = compute_financials(5, 0, 1_000);
        assert_eq!(f.total_revenue, 0);
        assert_eq!(f.margin_percent, 0.0);
    }

    #[test]
    fn loss_making_sale_has_negative_margin() {
        let f = compute_financials(2, 1_000, 2_500);
        assert_eq!(f.profit, -3_000);
        assert!(f.margin_percent < 0.0);
        assert!((f.margin_percent - (-150.0)).abs() < 1e-9);
    }
}
