//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The system this engine replaces split bundle prices like this:         │
//! │    Math.floor(x * 100 / n) / 100, then ROUNDED the remainder to paper   │
//! │    over binary representation error it had itself introduced.           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10000 cents / 3 = 3333 cents, remainder 1 cent                       │
//! │    We KNOW where the leftover cent is, and assign it explicitly         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use flip_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(4999); // €49.99
//!
//! // Parse decimal input at the boundary
//! let parsed = Money::parse("49.99").unwrap();
//! assert_eq!(parsed, price);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(49.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for EUR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Profit can legitimately be negative (a loss)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Item.purchase_price ──► Profit Calculator ──► profit / margin / roi   │
/// │                                                                         │
/// │  AggregateSale.{price,fees,shipping} ──► split_evenly ──► Allocation   │
/// │                                                                         │
/// │  StatsSnapshot.{revenue,profit,inventory_value}                        │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use flip_core::money::Money;
    ///
    /// let price = Money::from_cents(4999); // Represents €49.99
    /// assert_eq!(price.cents(), 4999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (euros and cents).
    ///
    /// ## Example
    /// ```rust
    /// use flip_core::money::Money;
    ///
    /// let price = Money::from_major_minor(49, 99); // €49.99
    /// assert_eq!(price.cents(), 4999);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -€5.50, not -€4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Splits this amount into `n` parts that sum back exactly.
    ///
    /// ## The Allocation Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  split_evenly(€100.00, 3)                                           │
    /// │                                                                     │
    /// │  per_item   = 10000 / 3  = 3333 cents  (truncated equal share)      │
    /// │  remainder  = 10000 - 3333 × 3 = 1 cent                             │
    /// │                                                                     │
    /// │  parts[0] = 3334  ← remainder goes to the FIRST part                │
    /// │  parts[1] = 3333                                                    │
    /// │  parts[2] = 3333                                                    │
    /// │                    sum = 10000 ✓ (cent-exact, always)               │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Concentrating the leftover cents on one designated part keeps the
    /// rule simple and auditable; the aggregate, not the per-part split, is
    /// the ledger of record. Callers decide which position is "first" by
    /// the order they pass items in.
    ///
    /// ## Panics
    /// Panics if `n == 0`. Settlement rejects empty bundles before calling
    /// this (`CoreError::EmptyBundle`).
    ///
    /// ## Example
    /// ```rust
    /// use flip_core::money::Money;
    ///
    /// let parts = Money::from_cents(10000).split_evenly(3);
    /// assert_eq!(parts.iter().map(Money::cents).collect::<Vec<_>>(), vec![3334, 3333, 3333]);
    /// ```
    pub fn split_evenly(&self, n: usize) -> Vec<Money> {
        assert!(n > 0, "split_evenly requires at least one part");

        let n_i64 = n as i64;
        let per_item = self.0 / n_i64;
        let remainder = self.0 - per_item * n_i64;

        let mut parts = vec![Money(per_item); n];
        parts[0] = Money(per_item + remainder);
        parts
    }

    /// Parses a 2-fraction-digit decimal string ("49.99") into Money.
    ///
    /// This is the ONLY supported path from decimal notation into the
    /// engine. It goes digit-by-digit, so no floating point representation
    /// error can sneak in.
    ///
    /// ## Accepted Forms
    /// - `"49"`      → €49.00
    /// - `"49.9"`    → €49.90
    /// - `"49.99"`   → €49.99
    /// - `"-5.50"`   → -€5.50
    ///
    /// ## Example
    /// ```rust
    /// use flip_core::money::Money;
    ///
    /// assert_eq!(Money::parse("49.99").unwrap().cents(), 4999);
    /// assert!(Money::parse("49.999").is_err()); // sub-cent precision
    /// assert!(Money::parse("abc").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Money, ValidationError> {
        let input = input.trim();
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount",
            reason: reason.to_string(),
        };

        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major_str.is_empty() || !major_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number"));
        }
        if minor_str.len() > 2 || !minor_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("at most 2 fraction digits"));
        }

        let major: i64 = major_str
            .parse()
            .map_err(|_| invalid("amount out of range"))?;

        // "49.9" means 90 cents, not 9
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().unwrap_or(0) * 10,
            _ => minor_str.parse::<i64>().unwrap_or(0),
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount out of range"))?;

        Ok(if negative { Money(-cents) } else { Money(cents) })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable EUR format.
///
/// ## Note
/// This is for logs and debugging. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(4999);
        assert_eq!(money.cents(), 4999);
        assert_eq!(money.euros(), 49);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(49, 99);
        assert_eq!(money.cents(), 4999);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4999)), "€49.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "€5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-€5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "€0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_split_evenly_remainder_to_first() {
        // €100.00 three ways: 33.34 / 33.33 / 33.33
        let parts = Money::from_cents(10000).split_evenly(3);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].cents(), 3334);
        assert_eq!(parts[1].cents(), 3333);
        assert_eq!(parts[2].cents(), 3333);
    }

    #[test]
    fn test_split_evenly_exact_division() {
        let parts = Money::from_cents(9000).split_evenly(3);
        assert!(parts.iter().all(|p| p.cents() == 3000));
    }

    #[test]
    fn test_split_evenly_single_part_passes_through() {
        let parts = Money::from_cents(4999).split_evenly(1);
        assert_eq!(parts, vec![Money::from_cents(4999)]);
    }

    #[test]
    fn test_split_evenly_zero_amount() {
        let parts = Money::zero().split_evenly(4);
        assert!(parts.iter().all(|p| p.is_zero()));
    }

    /// The load-bearing property: the split always sums back exactly,
    /// for every bundle size and amount we throw at it.
    #[test]
    fn test_split_evenly_sums_exactly() {
        for cents in [0, 1, 99, 100, 4999, 10000, 33333, 99999999] {
            for n in 1..=25 {
                let total = Money::from_cents(cents);
                let parts = total.split_evenly(n);
                assert_eq!(parts.len(), n);
                let sum: Money = parts.iter().copied().sum();
                assert_eq!(sum, total, "sum mismatch for {cents} cents over {n}");
            }
        }
    }

    /// Re-running the split gives identical output every time - there is no
    /// hidden accumulation state or randomness.
    #[test]
    fn test_split_evenly_idempotent() {
        let total = Money::from_cents(12345);
        assert_eq!(total.split_evenly(7), total.split_evenly(7));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("49.99").unwrap().cents(), 4999);
        assert_eq!(Money::parse("49.9").unwrap().cents(), 4990);
        assert_eq!(Money::parse("49").unwrap().cents(), 4900);
        assert_eq!(Money::parse("0.01").unwrap().cents(), 1);
        assert_eq!(Money::parse("-5.50").unwrap().cents(), -550);
        assert_eq!(Money::parse(" 12.00 ").unwrap().cents(), 1200);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.234").is_err());
        assert!(Money::parse("1,50").is_err());
        assert!(Money::parse(".50").is_err());
        assert!(Money::parse("--5").is_err());
    }
}
