//! # libas-core: Pure Business Logic for the Libas Storefront
//!
//! This crate is the **heart** of the Libas client. It contains the cart and
//! wishlist invariants as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Libas Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (web frontend)                    │   │
//! │  │    Catalog UI ──► Cart UI ──► Wishlist UI ──► Checkout UI      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    libas-store (Session Store)                  │   │
//! │  │    CartStore, StorageBackend, ToastSink, WishlistMirror        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ libas-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ wishlist  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Wishlist  │  │   │
//! │  │   │ CartLine  │  │ Currency  │  │ VariantKey│  │  toggle   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, WishlistEntry, VariantKey)
//! - [`cart`] - The cart collection and its uniqueness invariants
//! - [`wishlist`] - The wishlist collection and its idempotent toggle
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use libas_core::Money` instead of
// `use libas_core::money::Money`

pub use cart::{Cart, CartAddition};
pub use error::{CoreError, CoreResult, ValidationError, VariantAxis};
pub use money::{Currency, Money};
pub use types::*;
pub use wishlist::{Wishlist, WishlistChange};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default display currency when nothing has been persisted yet.
///
/// ## Why PKR?
/// The storefront launches for the Pakistani market. The setting is purely
/// presentational and can be switched at runtime with `set_currency`.
pub const DEFAULT_CURRENCY: &str = "PKR";

/// Sentinel used in variant keys when a product declares no sizes.
///
/// A key must be well-defined even for products without a size axis, and
/// must stay distinct from every real size value.
pub const NO_SIZE: &str = "nosize";

/// Sentinel used in variant keys when a product declares no colors.
pub const NO_COLOR: &str = "nocolor";
