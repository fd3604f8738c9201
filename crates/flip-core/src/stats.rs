//! # Stats Module
//!
//! Time-windowed dashboard statistics over an item snapshot.
//!
//! ## What Gets Windowed And What Doesn't
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       StatsSnapshot                                     │
//! │                                                                         │
//! │  WINDOWED by timeframe (realized, filtered on sale date)               │
//! │  ├── total_revenue / total_profit / total_sales                        │
//! │  ├── average_margin (unweighted mean of per-item margins)              │
//! │  ├── per-brand rollup + best_margin_brand / highest_profit_brand       │
//! │  └── per-channel rollup (channel share = count / total_sales)          │
//! │                                                                         │
//! │  POINT-IN-TIME (ignores timeframe entirely)                            │
//! │  ├── inventory_value (sum of purchase prices of in-stock items)        │
//! │  └── stock_count                                                       │
//! │                                                                         │
//! │  FIXED WIDTH (ignores timeframe, always 12 calendar months)            │
//! │  └── monthly series, oldest → newest, ending at the anchor month       │
//! │      (the UI slices it to 3 or 12 months client-side)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! [`compute`] is a pure function of `(items, timeframe, today)`. The
//! anchor date is a parameter, never read from the wall clock, so the same
//! snapshot always produces the same output - aggregates are reproducible
//! from raw records.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::profit;
use crate::types::{month_start, Item, SaleRecord, Status, Timeframe};

/// Width of the trailing monthly series.
pub const MONTHLY_SERIES_LEN: usize = 12;

// =============================================================================
// Snapshot Types
// =============================================================================

/// Rollup of windowed sales for one brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandStats {
    pub brand: String,
    pub count: u32,
    pub revenue: Money,
    pub profit: Money,
}

/// Rollup of windowed sales for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub channel: String,
    pub count: u32,
    pub revenue: Money,
    pub profit: Money,
}

/// One calendar month of the trailing series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Display label, e.g. "Aug 2026".
    pub label: String,
    pub revenue: Money,
    pub profit: Money,
}

/// The full dashboard payload. Fixed shape, explicit zero defaults - no
/// field is ever absent just because there were no sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    // Realized metrics over the window
    pub total_revenue: Money,
    pub total_profit: Money,
    pub total_sales: u32,
    /// Unweighted mean of per-item margins, 0 if no sales in the window.
    pub average_margin: f64,

    // Point-in-time inventory metrics
    pub inventory_value: Money,
    pub stock_count: u32,

    // Rollups, lexicographically ordered by key
    pub brands: Vec<BrandStats>,
    pub channels: Vec<ChannelStats>,
    /// Brand with the highest profit/revenue ratio among windowed sales.
    /// Ties break to the lexicographically smaller brand name.
    pub best_margin_brand: Option<String>,
    /// Brand with the highest absolute profit. Same tie-break.
    pub highest_profit_brand: Option<String>,

    /// Trailing 12 calendar months, oldest first, ending at the anchor
    /// month. Always 12 entries wide regardless of timeframe.
    pub monthly: Vec<MonthlyPoint>,
}

impl StatsSnapshot {
    /// Share of windowed sales that went through `channel` (0.0 - 1.0).
    pub fn channel_share(&self, channel: &str) -> f64 {
        if self.total_sales == 0 {
            return 0.0;
        }

        self.channels
            .iter()
            .find(|c| c.channel == channel)
            .map(|c| c.count as f64 / self.total_sales as f64)
            .unwrap_or(0.0)
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the full dashboard snapshot for one timeframe.
///
/// `today` anchors the window and the monthly series; pass the current
/// date at the call site (the engine service does).
pub fn compute(items: &[Item], timeframe: Timeframe, today: NaiveDate) -> StatsSnapshot {
    // Sold items, paired with their sale facts once
    let sold: Vec<(&Item, &SaleRecord)> = items
        .iter()
        .filter_map(|item| item.sale().map(|sale| (item, sale)))
        .collect();

    let windowed: Vec<&(&Item, &SaleRecord)> = sold
        .iter()
        .filter(|(_, sale)| timeframe.contains(sale.sale_date, today))
        .collect();

    // ---- Realized totals ----------------------------------------------------
    let total_revenue: Money = windowed.iter().map(|(_, sale)| sale.sale_price).sum();
    let total_profit: Money = windowed
        .iter()
        .filter_map(|(item, _)| profit::profit(item))
        .sum();
    let total_sales = windowed.len() as u32;

    let average_margin = if windowed.is_empty() {
        0.0
    } else {
        let margin_sum: f64 = windowed.iter().map(|(item, _)| profit::margin(item)).sum();
        margin_sum / windowed.len() as f64
    };

    // ---- Point-in-time inventory (timeframe-independent) --------------------
    let in_stock: Vec<&Item> = items
        .iter()
        .filter(|item| item.status() == Status::InStock)
        .collect();
    let inventory_value: Money = in_stock.iter().map(|item| item.purchase_price).sum();
    let stock_count = in_stock.len() as u32;

    // ---- Rollups ------------------------------------------------------------
    // BTreeMap keeps keys lexicographically sorted, which makes both the
    // rollup vectors and the best-brand tie-break order-independent.
    let mut by_brand: BTreeMap<&str, (u32, Money, Money)> = BTreeMap::new();
    let mut by_channel: BTreeMap<&str, (u32, Money, Money)> = BTreeMap::new();

    for (item, sale) in windowed.iter().copied() {
        let item_profit = profit::profit(item).unwrap_or(Money::zero());

        let brand = by_brand.entry(item.brand.as_str()).or_default();
        brand.0 += 1;
        brand.1 += sale.sale_price;
        brand.2 += item_profit;

        let channel = by_channel.entry(sale.channel.as_str()).or_default();
        channel.0 += 1;
        channel.1 += sale.sale_price;
        channel.2 += item_profit;
    }

    let brands: Vec<BrandStats> = by_brand
        .iter()
        .map(|(brand, &(count, revenue, profit))| BrandStats {
            brand: brand.to_string(),
            count,
            revenue,
            profit,
        })
        .collect();

    let channels: Vec<ChannelStats> = by_channel
        .iter()
        .map(|(channel, &(count, revenue, profit))| ChannelStats {
            channel: channel.to_string(),
            count,
            revenue,
            profit,
        })
        .collect();

    // Strict > keeps the first (lexicographically smallest) brand on ties.
    let best_margin_brand = brands
        .iter()
        .fold(None::<(&BrandStats, f64)>, |best, brand| {
            let ratio = margin_ratio(brand);
            match best {
                Some((_, best_ratio)) if ratio <= best_ratio => best,
                _ => Some((brand, ratio)),
            }
        })
        .map(|(brand, _)| brand.brand.clone());

    let highest_profit_brand = brands
        .iter()
        .fold(None::<&BrandStats>, |best, brand| match best {
            Some(b) if brand.profit <= b.profit => best,
            _ => Some(brand),
        })
        .map(|brand| brand.brand.clone());

    // ---- Trailing 12-month series (timeframe-independent) -------------------
    let monthly = monthly_series(&sold, today);

    StatsSnapshot {
        total_revenue,
        total_profit,
        total_sales,
        average_margin,
        inventory_value,
        stock_count,
        brands,
        channels,
        best_margin_brand,
        highest_profit_brand,
        monthly,
    }
}

/// Profit/revenue ratio of one brand rollup, 0 when revenue is zero.
fn margin_ratio(brand: &BrandStats) -> f64 {
    if brand.revenue.is_zero() {
        return 0.0;
    }
    brand.profit.cents() as f64 / brand.revenue.cents() as f64
}

/// Builds the 12-entry trailing series ending at the anchor month.
///
/// Every sold item is bucketed by the calendar month of its sale date,
/// regardless of the outer timeframe selector.
fn monthly_series(sold: &[(&Item, &SaleRecord)], today: NaiveDate) -> Vec<MonthlyPoint> {
    let mut buckets: BTreeMap<(i32, u32), (Money, Money)> = BTreeMap::new();

    for (item, sale) in sold.iter().copied() {
        let key = (sale.sale_date.year(), sale.sale_date.month());
        let bucket = buckets.entry(key).or_default();
        bucket.0 += sale.sale_price;
        bucket.1 += profit::profit(item).unwrap_or(Money::zero());
    }

    (0..MONTHLY_SERIES_LEN)
        .map(|i| {
            // i = 0 is eleven months ago, i = 11 is the anchor month
            let offset = i as i32 - (MONTHLY_SERIES_LEN as i32 - 1);
            let month = month_start(today, offset);
            let (revenue, profit) = buckets
                .get(&(month.year(), month.month()))
                .copied()
                .unwrap_or_default();

            MonthlyPoint {
                label: month.format("%b %Y").to_string(),
                revenue,
                profit,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
