//! # Profit Module
//!
//! Per-item realized profit arithmetic. Pure functions, no side effects.
//!
//! ```text
//! profit = sale_price − purchase_price − platform_fees − shipping_cost
//! margin = profit / sale_price × 100      (0 when sale_price is 0)
//! roi    = profit / purchase_price × 100  (0 when purchase_price is 0)
//! ```
//!
//! Profit is only defined for sold items; for anything else it is "not
//! applicable" (`None`), which is distinct from a profit of zero. A
//! negative profit is a loss and perfectly valid output.
//!
//! Percentages are the one place money leaves integer arithmetic: they are
//! display-only ratios, never fed back into monetary math. The zero-price
//! guards keep NaN/Infinity from ever reaching callers.

use crate::money::Money;
use crate::types::Item;

/// Realized profit of a sold item. `None` unless the item is sold.
pub fn profit(item: &Item) -> Option<Money> {
    let sale = item.sale()?;
    Some(sale.sale_price - item.purchase_price - sale.platform_fees - sale.shipping_cost)
}

/// Profit as a percentage of sale price. 0 for unsold items and for a
/// sale price of zero (giveaways must not produce NaN).
pub fn margin(item: &Item) -> f64 {
    let Some(sale) = item.sale() else { return 0.0 };
    if sale.sale_price.is_zero() {
        return 0.0;
    }

    // profit() is Some whenever sale() is
    let profit = profit(item).unwrap_or(Money::zero());
    profit.cents() as f64 / sale.sale_price.cents() as f64 * 100.0
}

/// Profit as a percentage of purchase price. 0 for unsold items and for a
/// purchase price of zero (gifts / finds).
pub fn roi(item: &Item) -> f64 {
    if item.sale().is_none() || item.purchase_price.is_zero() {
        return 0.0;
    }

    let profit = profit(item).unwrap_or(Money::zero());
    profit.cents() as f64 / item.purchase_price.cents() as f64 * 100.0
}
