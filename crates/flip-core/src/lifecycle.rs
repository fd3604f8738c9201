//! # Lifecycle Module
//!
//! The item status state machine: validates and applies commercial status
//! transitions on a single item.
//!
//! ## The State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                    reserve(name, days)                                  │
//! │        ┌──────────┐ ──────────────────► ┌──────────┐                    │
//! │        │ in_stock │                     │ reserved │                    │
//! │        └──────────┘ ◄────────────────── └──────────┘                    │
//! │          ▲   │        cancel_reservation     │                          │
//! │          │   │                               │                          │
//! │          │   │ sell(terms)       sell(terms) │                          │
//! │          │   └───────────┐   ┌───────────────┘                          │
//! │          │               ▼   ▼                                          │
//! │          │             ┌────────┐                                       │
//! │          └──────────── │  sold  │                                       │
//! │           cancel_sale  └────────┘                                       │
//! │                                                                         │
//! │  No terminal state: every transition is reversible.                    │
//! │  Self-transitions and unrecognized targets fail (InvalidTransition).   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design
//! Transitions are pure functions `Item → Result<Item>`. The storage layer
//! fetches the item immediately before and persists the returned item
//! immediately after, as one atomic single-row update. Rejections happen
//! before anything is built, so an `Err` means the caller's item is
//! untouched and nothing was persisted.

use chrono::{DateTime, Duration, Utc};

use crate::error::{CoreError, CoreResult};
use crate::types::{CommercialState, Item, Reservation, SaleRecord};
use crate::validation;

// =============================================================================
// Transitions
// =============================================================================

/// `in_stock → reserved`: hold an item for a named customer.
///
/// ## Guards
/// - `reserved_for` must be non-empty (InvalidInput)
/// - `duration_days` must be ≥ 1 (InvalidInput)
/// - item must currently be in stock (InvalidTransition)
///
/// The hold expires at `now + duration_days`. Expiry is advisory - nothing
/// in the engine auto-releases an expired reservation; the UI surfaces it
/// and a human cancels.
pub fn reserve(
    item: Item,
    reserved_for: &str,
    duration_days: i64,
    now: DateTime<Utc>,
) -> CoreResult<Item> {
    validation::validate_reserved_for(reserved_for)?;
    validation::validate_duration_days(duration_days)?;

    match item.state {
        CommercialState::InStock => Ok(Item {
            state: CommercialState::Reserved(Reservation {
                reserved_for: reserved_for.trim().to_string(),
                reserved_until: now + Duration::days(duration_days),
            }),
            ..item
        }),
        ref state => Err(CoreError::InvalidTransition {
            status: state.status(),
            action: "reserve",
        }),
    }
}

/// `reserved → in_stock`: release a hold.
///
/// Clears both reservation fields. No guard beyond the current state.
pub fn cancel_reservation(item: Item) -> CoreResult<Item> {
    match item.state {
        CommercialState::Reserved(_) => Ok(Item {
            state: CommercialState::InStock,
            ..item
        }),
        ref state => Err(CoreError::InvalidTransition {
            status: state.status(),
            action: "cancel reservation on",
        }),
    }
}

/// `in_stock → sold` / `reserved → sold`: record a sale.
///
/// ## Guards
/// - sale price, fees and shipping must not be negative (InvalidInput)
/// - channel must be non-empty (InvalidInput)
/// - item must not already be sold (InvalidTransition)
///
/// Selling a reserved item clears the reservation as a side effect - the
/// hold is considered honored (or overridden by the operator).
pub fn sell(item: Item, sale: SaleRecord) -> CoreResult<Item> {
    validation::validate_non_negative("sale_price", sale.sale_price)?;
    validation::validate_non_negative("platform_fees", sale.platform_fees)?;
    validation::validate_non_negative("shipping_cost", sale.shipping_cost)?;
    validation::validate_channel(&sale.channel)?;

    match item.state {
        CommercialState::InStock | CommercialState::Reserved(_) => Ok(Item {
            state: CommercialState::Sold(sale),
            ..item
        }),
        ref state => Err(CoreError::InvalidTransition {
            status: state.status(),
            action: "sell",
        }),
    }
}

/// `sold → in_stock`: cancel a sale.
///
/// Clears all sale fields (price, date, channel, fees, shipping, buyer).
///
/// ## Lossy By Design
/// A reservation that existed before the sale is NOT restored - that
/// information was discarded when the sale replaced it. The item returns
/// to plain `in_stock` and must be re-reserved by hand if needed.
pub fn cancel_sale(item: Item) -> CoreResult<Item> {
    match item.state {
        CommercialState::Sold(_) => Ok(Item {
            state: CommercialState::InStock,
            ..item
        }),
        ref state => Err(CoreError::InvalidTransition {
            status: state.status(),
            action: "cancel sale on",
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
