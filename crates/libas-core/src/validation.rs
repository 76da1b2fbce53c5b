//! # Validation Module
//!
//! Input validation utilities for the Libas store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View layer (TypeScript)                                      │
//! │  ├── Basic format checks (empty selects, number inputs)                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store operations (Rust)                                      │
//! │  └── THIS MODULE: the checks the store relies on for its invariants    │
//! │                                                                         │
//! │  Defense in depth: the store never trusts the view layer               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested cart quantity.
///
/// ## Rules
/// - Must resolve to a positive integer (> 0)
///
/// ## Example
/// ```rust
/// use libas_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates and normalizes a display-currency code.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be exactly 3 ASCII letters (ISO-4217 shape)
///
/// ## Returns
/// The trimmed, uppercased code.
pub fn validate_currency_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a 3-letter currency code".to_string(),
        });
    }

    Ok(code.to_ascii_uppercase())
}

// =============================================================================
// Unit Tests
// =============================================================================
