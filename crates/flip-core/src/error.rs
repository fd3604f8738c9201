//! # Error Types
//!
//! Domain-specific error types for flip-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  flip-core errors (this file)                                          │
//! │  ├── CoreError        - Transition / settlement rule violations        │
//! │  └── ValidationError  - Input validation failures (InvalidInput)       │
//! │                                                                         │
//! │  flip-db errors (separate crate)                                       │
//! │  ├── DbError          - Storage collaborator failures                  │
//! │  └── EngineError      - NotFound + Core + Storage, what callers see    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → EngineError → API layer           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item status, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Rejections happen before any mutation - no partial state on error

use thiserror::Error;

use crate::types::Status;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent rejected operations on the item state machine or
/// the settlement engine. They are raised before any state is mutated.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The item's current status does not permit the requested action.
    ///
    /// ## When This Occurs
    /// - Reserving an item that is already reserved or sold
    /// - Cancelling a reservation on an item that is not reserved
    /// - Selling an item that is already sold
    /// - Cancelling a sale on an item that is not sold
    #[error("cannot {action} item in status {status:?}")]
    InvalidTransition {
        status: Status,
        action: &'static str,
    },

    /// A settlement was requested with zero items.
    ///
    /// Allocation over an empty bundle is undefined (division by zero),
    /// so this is rejected before anything else is checked.
    #[error("settlement bundle must contain at least one item")]
    EmptyBundle,

    /// Input validation failure (wraps ValidationError).
    ///
    /// This is the `InvalidInput` category: malformed or out-of-range
    /// request data such as a negative price or an empty reservation name.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied data doesn't meet requirements.
/// Used for early validation before the state machine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    TooSmall { field: &'static str, min: i64 },

    /// Monetary amount must not be negative.
    ///
    /// Negative sale components are a contract violation, not a supported
    /// "refund" mechanic.
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },

    /// Invalid format (e.g., unparseable decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
