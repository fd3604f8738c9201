//! # Domain Types
//!
//! Core domain types used throughout Flip POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │      Item       │   │   CommercialState    │   │   SaleRecord    │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  id (UUID)      │   │  InStock             │   │  sale_price     │  │
//! │  │  brand, model   │   │  Reserved(resv)      │   │  sale_date      │  │
//! │  │  purchase facts │   │  Sold(sale)          │   │  channel, fees  │  │
//! │  │  state ─────────┼──►│                      │   │  shipping,buyer │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Status      │   │    Category     │   │    Condition    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  InStock        │   │  Bag, Wallet    │   │  Mint, VeryGood │       │
//! │  │  Reserved       │   │  Accessory      │   │  Good, Fair     │       │
//! │  │  Sold           │   │  Lock, Other    │   │  Poor           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Status Invariant, Made Structural
//! The persisted model says: reservation fields exist iff status is
//! `reserved`, sale fields exist iff status is `sold`. Instead of policing
//! that with runtime checks on a bag of `Option`s, [`CommercialState`] makes
//! the variant OWN its facts. An in-stock item cannot carry a stale buyer
//! name because there is nowhere to put one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Classification Enums
// =============================================================================

/// Product category of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bag,
    Wallet,
    Accessory,
    Lock,
    Other,
}

/// Cosmetic condition grade, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Unworn, like new.
    Mint,
    VeryGood,
    Good,
    Fair,
    Poor,
}

// =============================================================================
// Status
// =============================================================================

/// Flat commercial status discriminant.
///
/// ## When To Use Which
/// - `Status` - database column, list filters, error messages
/// - [`CommercialState`] - the item itself; carries the facts of the state
///
/// Exactly one status holds at any time (mutually exclusive, not a bitmask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Available for sale or reservation.
    InStock,
    /// Held for a named customer until a deadline.
    Reserved,
    /// Sold; sale facts are recorded on the item.
    Sold,
}

impl Default for Status {
    fn default() -> Self {
        Status::InStock
    }
}

// =============================================================================
// State Payloads
// =============================================================================

/// Reservation facts, present only while an item is reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Who the item is held for.
    pub reserved_for: String,
    /// When the hold expires.
    pub reserved_until: DateTime<Utc>,
}

/// Sale facts, present only while an item is sold.
///
/// ## Snapshot Semantics
/// For bundle settlements these are the item's *allocated* share of the
/// aggregate transaction, not a price anyone paid for this item alone.
/// The aggregate is the ledger of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Sale price in cents (this item's share for bundles).
    pub sale_price: Money,
    /// Date the sale was concluded.
    pub sale_date: NaiveDate,
    /// Sales channel ("vinted", "ebay", "local", ...). Free text.
    pub channel: String,
    /// Platform fees allocated to this item. Defaults to zero.
    pub platform_fees: Money,
    /// Shipping cost allocated to this item. Defaults to zero.
    pub shipping_cost: Money,
    /// Optional buyer name.
    pub buyer: Option<String>,
}

/// The commercial state of an item: the status plus the facts it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommercialState {
    InStock,
    Reserved(Reservation),
    Sold(SaleRecord),
}

impl CommercialState {
    /// Returns the flat status discriminant.
    #[inline]
    pub fn status(&self) -> Status {
        match self {
            CommercialState::InStock => Status::InStock,
            CommercialState::Reserved(_) => Status::Reserved,
            CommercialState::Sold(_) => Status::Sold,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// One inventory unit, tracked from purchase to sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier (UUID v4). Assigned at creation, immutable.
    pub id: String,

    /// Organization this item belongs to.
    pub organization_id: String,

    /// Brand name (free text, required).
    pub brand: String,

    /// Model name (free text, may be empty).
    pub model: String,

    /// Product category.
    pub category: Category,

    /// Condition grade.
    pub condition: Condition,

    /// Commercial state (status + the facts it implies).
    pub state: CommercialState,

    /// Purchase price in cents. Never negative.
    pub purchase_price: Money,

    /// Date the item was acquired.
    pub purchase_date: NaiveDate,

    /// Where the item was acquired (free text).
    pub purchase_source: String,

    /// Ordered list of image URLs. May be empty.
    pub image_urls: Vec<String>,

    /// Free-text notes.
    pub notes: Option<String>,

    /// Creation timestamp. Immutable, used for default ordering.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Returns the flat status discriminant.
    #[inline]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Returns the reservation facts, if the item is reserved.
    pub fn reservation(&self) -> Option<&Reservation> {
        match &self.state {
            CommercialState::Reserved(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the sale facts, if the item is sold.
    pub fn sale(&self) -> Option<&SaleRecord> {
        match &self.state {
            CommercialState::Sold(s) => Some(s),
            _ => None,
        }
    }
}

/// Fields supplied by a purchase-entry action to create an item.
///
/// The created item always starts `in_stock`; there is no way to create an
/// item directly into a reserved or sold state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub organization_id: String,
    pub brand: String,
    pub model: String,
    pub category: Category,
    pub condition: Condition,
    pub purchase_price: Money,
    pub purchase_date: NaiveDate,
    pub purchase_source: String,
    pub image_urls: Vec<String>,
    pub notes: Option<String>,
}

// =============================================================================
// Timeframe
// =============================================================================

/// Reporting window for realized-sale metrics.
///
/// A timeframe filters by sale date for realized metrics (revenue, profit,
/// sales count, rollups) and is ignored for point-in-time inventory metrics
/// (stock count, inventory value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    /// The calendar month containing the anchor date.
    ThisMonth,
    /// The anchor month plus the two calendar months before it.
    LastThreeMonths,
    /// No lower bound.
    AllTime,
}

impl Timeframe {
    /// First day included in the window, anchored at `today`.
    ///
    /// `None` means unbounded (all time). Windows are calendar-month
    /// aligned so they compose with the monthly series buckets.
    pub fn window_start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Timeframe::ThisMonth => Some(month_start(today, 0)),
            Timeframe::LastThreeMonths => Some(month_start(today, -2)),
            Timeframe::AllTime => None,
        }
    }

    /// Whether a sale date falls inside the window anchored at `today`.
    ///
    /// Dates after `today` still count: a sale recorded with tomorrow's
    /// date is the caller's data-entry choice, not ours to drop.
    pub fn contains(&self, sale_date: NaiveDate, today: NaiveDate) -> bool {
        match self.window_start(today) {
            Some(start) => sale_date >= start,
            None => true,
        }
    }
}

/// First day of the month `offset` calendar months away from `date`.
///
/// `offset` of 0 is the current month, -1 the previous month, and so on.
pub(crate) fn month_start(date: NaiveDate, offset: i32) -> NaiveDate {
    use chrono::Datelike;

    let months = date.year() * 12 + date.month0() as i32 + offset;
    let year = months.div_euclid(12);
    let month0 = months.rem_euclid(12) as u32;

    // month0 is 0-11 and day 1 always exists, so this cannot fail
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_state_status_discriminant() {
        assert_eq!(CommercialState::InStock.status(), Status::InStock);

        let reserved = CommercialState::Reserved(Reservation {
            reserved_for: "Max".to_string(),
            reserved_until: Utc::now(),
        });
        assert_eq!(reserved.status(), Status::Reserved);

        let sold = CommercialState::Sold(SaleRecord {
            sale_price: Money::from_cents(10000),
            sale_date: date(2026, 8, 1),
            channel: "vinted".to_string(),
            platform_fees: Money::zero(),
            shipping_cost: Money::zero(),
            buyer: None,
        });
        assert_eq!(sold.status(), Status::Sold);
    }

    #[test]
    fn test_month_start_offsets() {
        let today = date(2026, 8, 30);
        assert_eq!(month_start(today, 0), date(2026, 8, 1));
        assert_eq!(month_start(today, -2), date(2026, 6, 1));
        assert_eq!(month_start(today, -8), date(2025, 12, 1));
        assert_eq!(month_start(today, -20), date(2024, 12, 1));
    }

    #[test]
    fn test_timeframe_windows() {
        let today = date(2026, 8, 30);

        assert_eq!(
            Timeframe::ThisMonth.window_start(today),
            Some(date(2026, 8, 1))
        );
        assert_eq!(
            Timeframe::LastThreeMonths.window_start(today),
            Some(date(2026, 6, 1))
        );
        assert_eq!(Timeframe::AllTime.window_start(today), None);

        assert!(Timeframe::ThisMonth.contains(date(2026, 8, 1), today));
        assert!(!Timeframe::ThisMonth.contains(date(2026, 7, 31), today));
        assert!(Timeframe::LastThreeMonths.contains(date(2026, 6, 1), today));
        assert!(!Timeframe::LastThreeMonths.contains(date(2026, 5, 31), today));
        assert!(Timeframe::AllTime.contains(date(1999, 1, 1), today));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Status::InStock).unwrap(),
            "\"in_stock\""
        );
        assert_eq!(
            serde_json::to_string(&Condition::VeryGood).unwrap(),
            "\"very_good\""
        );
    }
}
