//! # Settlement Module
//!
//! Allocation of one aggregate bundle sale across N items.
//!
//! ## What a Settlement Is
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A buyer pays €100.00 (fees €2.50, shipping €4.00) for THREE items     │
//! │  as one commercial transaction. The ledger of record is the aggregate. │
//! │  Each item still needs its own sale facts for per-item profit, so the  │
//! │  aggregate is allocated:                                                │
//! │                                                                         │
//! │            price      fees     shipping                                 │
//! │  item #1   €33.34     €0.84    €1.34    ← remainder cents land here    │
//! │  item #2   €33.33     €0.83    €1.33                                   │
//! │  item #3   €33.33     €0.83    €1.33                                   │
//! │            ──────     ─────    ─────                                    │
//! │  sum       €100.00    €2.50    €4.00    ✓ cent-exact, independently    │
//! │                                                                         │
//! │  "First" is the first item in the CALLER-SUPPLIED order. The caller    │
//! │  decides which item absorbs the leftover cents.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three amounts are split independently (see [`Money::split_evenly`]),
//! so each column sums back to its aggregate exactly. One item's allocation
//! being a cent or two non-representative is accepted - the aggregate, not
//! the split, is what was actually paid.
//!
//! This module is pure: it computes allocations. Applying them to items
//! (and dealing with partial failure against storage) is the engine
//! service's job in flip-db.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::SaleRecord;
use crate::validation;

// =============================================================================
// Settlement Input / Output
// =============================================================================

/// One aggregate bundle sale: the commercial facts shared by every item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSale {
    /// Total price paid for the whole bundle.
    pub sale_price: Money,
    /// Total platform fees for the whole bundle.
    pub platform_fees: Money,
    /// Total shipping cost for the whole bundle.
    pub shipping_cost: Money,
    /// Date the sale was concluded.
    pub sale_date: NaiveDate,
    /// Sales channel, shared by all items in the bundle.
    pub channel: String,
    /// Optional buyer name, shared by all items in the bundle.
    pub buyer: Option<String>,
}

/// One item's monetary share of an aggregate sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub sale_price: Money,
    pub platform_fees: Money,
    pub shipping_cost: Money,
}

impl Allocation {
    /// Builds the per-item sale record: this allocation's amounts plus the
    /// shared facts (date, channel, buyer) from the aggregate.
    pub fn to_sale_record(&self, aggregate: &AggregateSale) -> SaleRecord {
        SaleRecord {
            sale_price: self.sale_price,
            sale_date: aggregate.sale_date,
            channel: aggregate.channel.clone(),
            platform_fees: self.platform_fees,
            shipping_cost: self.shipping_cost,
            buyer: aggregate.buyer.clone(),
        }
    }
}

// =============================================================================
// Allocation
// =============================================================================

/// Allocates an aggregate sale across `bundle_size` items.
///
/// ## Guarantees
/// - `sum(allocations.sale_price) == aggregate.sale_price`, and the same
///   for fees and shipping, independently, to the cent
/// - deterministic: same input, same output, every time
/// - the first allocation absorbs the remainder cents of each amount
///
/// ## Failure Modes
/// - [`CoreError::EmptyBundle`] if `bundle_size == 0`
/// - `InvalidInput` if any aggregate amount is negative or the channel is
///   empty - rejected here, before any item is touched
pub fn allocate(aggregate: &AggregateSale, bundle_size: usize) -> CoreResult<Vec<Allocation>> {
    if bundle_size == 0 {
        return Err(CoreError::EmptyBundle);
    }

    validation::validate_non_negative("sale_price", aggregate.sale_price)?;
    validation::validate_non_negative("platform_fees", aggregate.platform_fees)?;
    validation::validate_non_negative("shipping_cost", aggregate.shipping_cost)?;
    validation::validate_channel(&aggregate.channel)?;

    let prices = aggregate.sale_price.split_evenly(bundle_size);
    let fees = aggregate.platform_fees.split_evenly(bundle_size);
    let shipping = aggregate.shipping_cost.split_evenly(bundle_size);

    Ok(prices
        .into_iter()
        .zip(fees)
        .zip(shipping)
        .map(|((sale_price, platform_fees), shipping_cost)| Allocation {
            sale_price,
            platform_fees,
            shipping_cost,
        })
        .collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
