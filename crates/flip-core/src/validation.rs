//! # Validation Module
//!
//! Input validation utilities for Flip POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI / API caller                                              │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Runs before any state machine transition                          │
//! │  └── Rejection here means NOTHING was mutated                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK constraints on money columns                                │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewItem;
use crate::{MAX_BRAND_LEN, MAX_NAME_LEN, MAX_NOTES_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a brand name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 100 characters
pub fn validate_brand(brand: &str) -> ValidationResult<()> {
    let brand = brand.trim();

    if brand.is_empty() {
        return Err(ValidationError::Required { field: "brand" });
    }

    if brand.len() > MAX_BRAND_LEN {
        return Err(ValidationError::TooLong {
            field: "brand",
            max: MAX_BRAND_LEN,
        });
    }

    Ok(())
}

/// Validates the name an item is reserved for.
pub fn validate_reserved_for(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "reserved_for",
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "reserved_for",
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a sale channel ("vinted", "ebay", ...).
pub fn validate_channel(channel: &str) -> ValidationResult<()> {
    if channel.trim().is_empty() {
        return Err(ValidationError::Required { field: "channel" });
    }

    Ok(())
}

/// Validates optional free-text notes.
pub fn validate_notes(notes: Option<&str>) -> ValidationResult<()> {
    if let Some(notes) = notes {
        if notes.len() > MAX_NOTES_LEN {
            return Err(ValidationError::TooLong {
                field: "notes",
                max: MAX_NOTES_LEN,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Rejects negative monetary amounts.
///
/// Negative sale components are a contract violation, not a supported
/// refund mechanic. Profit may be negative; inputs may not.
pub fn validate_non_negative(field: &'static str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount { field });
    }

    Ok(())
}

/// Validates a reservation duration in whole days.
pub fn validate_duration_days(days: i64) -> ValidationResult<()> {
    if days < 1 {
        return Err(ValidationError::TooSmall {
            field: "duration_days",
            min: 1,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates the fields of a purchase-entry action.
///
/// ## Rules
/// - brand required, purchase source required
/// - purchase price must not be negative
/// - notes bounded
pub fn validate_new_item(new: &NewItem) -> ValidationResult<()> {
    validate_brand(&new.brand)?;

    if new.purchase_source.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "purchase_source",
        });
    }

    validate_non_negative("purchase_price", new.purchase_price)?;
    validate_notes(new.notes.as_deref())?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
