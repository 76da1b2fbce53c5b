//! # Error Types
//!
//! Domain-specific error types for libas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  libas-core errors (this file)                                         │
//! │  ├── CoreError        - Cart/wishlist rule violations                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  libas-store errors (separate crate)                                   │
//! │  ├── StorageError     - Durable storage failures (recovered locally)   │
//! │  └── MirrorError      - Remote wishlist sync failures (best effort)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → destructive toast → caller        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Variant Axis
// =============================================================================

/// Which variant axis a selection error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantAxis {
    Size,
    Color,
}

impl std::fmt::Display for VariantAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantAxis::Size => f.write_str("size"),
            VariantAxis::Color => f.write_str("color"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Cart/wishlist business rule errors.
///
/// The only operation that can reject outright is adding to the cart, and
/// only before any state mutation. Everything else in the store succeeds
/// against in-memory state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required variant axis was not selected.
    ///
    /// ## When This Occurs
    /// - Product declares a non-empty size list and no size was supplied
    /// - Same rule, independently, for colors
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (no size picked)
    ///      │
    ///      ▼
    /// SelectionRequired { product: "Embroidered Kurta", axis: Size }
    ///      │
    ///      ▼
    /// Destructive toast: "Please select a size for Embroidered Kurta."
    /// ```
    #[error("{axis} selection required for {product}")]
    SelectionRequired {
        product: String,
        axis: VariantAxis,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
