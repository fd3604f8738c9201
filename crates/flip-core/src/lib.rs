//! # flip-core: Pure Business Logic for Flip POS
//!
//! This crate is the **heart** of Flip POS, a reseller's inventory and
//! point-of-sale system. It contains the item settlement & analytics engine
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Flip POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  UI / API layer (out of scope)                  │   │
//! │  │    Inventory list ──► Item actions ──► Dashboard               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  flip-db (Engine + Storage)                     │   │
//! │  │    transition, settle, stats · SQLite repositories             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ flip-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌───────────┐ ┌────────────┐ ┌────────────────┐  │   │
//! │  │  │  money   │ │ lifecycle │ │ settlement │ │     stats      │  │   │
//! │  │  │  Money   │ │ reserve   │ │ allocate   │ │ StatsSnapshot  │  │   │
//! │  │  │  split   │ │ sell, ... │ │ Allocation │ │ rollups,series │  │   │
//! │  │  └──────────┘ └───────────┘ └────────────┘ └────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, CommercialState, Timeframe, ...)
//! - [`money`] - Money type with integer cents (no floating point!)
//! - [`lifecycle`] - The in_stock ⇄ reserved ⇄ sold state machine
//! - [`settlement`] - Bundle allocation (aggregate → per-item shares)
//! - [`profit`] - profit / margin / roi arithmetic
//! - [`stats`] - Dashboard statistics aggregation
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - "now" is always
//!    a parameter, never read from the wall clock
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64); money must
//!    balance to the cent through every split
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use flip_core::money::Money;
//!
//! // €100.00 across a 3-item bundle: the split sums back exactly.
//! let parts = Money::from_cents(10_000).split_evenly(3);
//! assert_eq!(parts.iter().map(Money::cents).sum::<i64>(), 10_000);
//! assert_eq!(parts[0].cents(), 3334); // remainder cent goes first
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod lifecycle;
pub mod money;
pub mod profit;
pub mod settlement;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use flip_core::Money` instead of
// `use flip_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use settlement::{AggregateSale, Allocation};
pub use stats::StatsSnapshot;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default organization ID for v0.1 (single-org runtime with multi-org schema)
///
/// ## Why a constant?
/// v0.1 serves one reseller, but every row carries an organization_id so the
/// schema does not need to change when accounts become dynamic.
pub const DEFAULT_ORGANIZATION_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Fixed page size for inventory listing.
///
/// ## Business Reason
/// The UI paginates at a constant page size; offsets are always multiples
/// of this. The engine does not support variable page sizes.
pub const LIST_PAGE_SIZE: u32 = 50;

/// Maximum brand name length.
pub const MAX_BRAND_LEN: usize = 100;

/// Maximum length for a reservation holder's name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum free-text notes length.
///
/// ## Business Reason
/// Prevents runaway payloads from the notes field; long provenance stories
/// belong in an attached document, not the item row.
pub const MAX_NOTES_LEN: usize = 2000;
