//! # Cart Store
//!
//! The authoritative in-session cart/wishlist state, with persistence
//! mirroring and toast side effects.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operation Flow                             │
//! │                                                                         │
//! │  View event (button click)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  1. Validate preconditions (add_to_cart only)                    │  │
//! │  │       rejected ──► destructive toast, no mutation, typed error   │  │
//! │  │  2. Apply the in-memory mutation (libas-core collections)        │  │
//! │  │  3. Emit outcome toast                                           │  │
//! │  │  4. Mirror full state to durable storage                         │  │
//! │  │       failed ──► logged, memory keeps the mutation               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Next synchronous read observes the new state                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The store exclusively owns the in-memory collections for the session.
//! Durable storage is the source of truth only at initialization; after
//! that, memory is authoritative and writes mirror outward.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use libas_core::{
    Cart, CartAddition, CoreError, CoreResult, Currency, Money, Product, Wishlist, WishlistChange,
};

use crate::mirror::WishlistMirror;
use crate::notify::{Toast, ToastSink};
use crate::storage::StorageBackend;

/// Storage key for the serialized cart collection.
const CART_KEY: &str = "cart";
/// Storage key for the serialized wishlist collection.
const WISHLIST_KEY: &str = "wishlist";
/// Storage key for the currency code.
const CURRENCY_KEY: &str = "currency";

/// The cart/wishlist store.
///
/// Constructed explicitly with its collaborators and passed by handle to
/// consumers (see [`crate::StoreState`]); there is no ambient global.
pub struct CartStore {
    cart: Cart,
    wishlist: Wishlist,
    currency: Currency,
    storage: Box<dyn StorageBackend>,
    toasts: Box<dyn ToastSink>,
    mirror: Box<dyn WishlistMirror>,
}

impl CartStore {
    /// Opens a store, loading previously persisted state.
    ///
    /// A missing or corrupt persisted blob is never fatal: each of the three
    /// values independently falls back to its empty/default and the failure
    /// is logged for diagnostics.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        toasts: Box<dyn ToastSink>,
        mirror: Box<dyn WishlistMirror>,
    ) -> Self {
        let cart: Cart = Self::load_or_default(&*storage, CART_KEY);
        let wishlist: Wishlist = Self::load_or_default(&*storage, WISHLIST_KEY);
        let currency = Self::load_currency(&*storage);

        debug!(
            lines = cart.line_count(),
            wishlist = wishlist.len(),
            currency = %currency,
            "cart store opened"
        );

        CartStore {
            cart,
            wishlist,
            currency,
            storage,
            toasts,
            mirror,
        }
    }

    fn load_or_default<T: DeserializeOwned + Default>(
        storage: &dyn StorageBackend,
        key: &str,
    ) -> T {
        match storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key, %err, "persisted state failed to parse, starting empty");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(err) => {
                warn!(key, %err, "persisted state unreadable, starting empty");
                T::default()
            }
        }
    }

    fn load_currency(storage: &dyn StorageBackend) -> Currency {
        match storage.get(CURRENCY_KEY) {
            Ok(Some(code)) => match Currency::parse(&code) {
                Ok(currency) => currency,
                Err(err) => {
                    warn!(%err, "persisted currency invalid, using default");
                    Currency::default()
                }
            },
            Ok(None) => Currency::default(),
            Err(err) => {
                warn!(%err, "persisted currency unreadable, using default");
                Currency::default()
            }
        }
    }

    // =========================================================================
    // Mutating Operations
    // =========================================================================

    /// Adds a product to the cart.
    ///
    /// ## Preconditions
    /// - `quantity` (default 1) must resolve to a positive integer
    /// - a size/color must be supplied for each variant axis the product
    ///   declares
    ///
    /// On rejection a destructive toast is emitted and no state changes.
    /// On success the merge/append outcome drives the toast wording, and
    /// the full state is mirrored to storage. Zero stock does not reject;
    /// availability enforcement belongs to the catalog layer.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: Option<i64>,
        size: Option<&str>,
        color: Option<&str>,
    ) -> CoreResult<()> {
        let quantity = quantity.unwrap_or(1);
        debug!(product_id = %product.id, quantity, "add_to_cart");

        match self.cart.add_line(product, quantity, size, color) {
            Ok(CartAddition::Merged) => {
                self.toasts.push(Toast::normal(
                    "Cart Updated",
                    format!("Added {} more {} to cart.", quantity, product.name),
                ));
            }
            Ok(CartAddition::NewLine) => {
                self.toasts.push(Toast::normal(
                    "Item Added",
                    format!("{} added to cart.", product.name),
                ));
            }
            Err(err) => {
                let (title, description) = match &err {
                    CoreError::SelectionRequired { product, axis } => (
                        "Selection Required",
                        format!("Please select a {} for {}.", axis, product),
                    ),
                    CoreError::Validation(e) => ("Invalid Quantity", e.to_string()),
                };
                self.toasts.push(Toast::destructive(title, description));
                return Err(err);
            }
        }

        self.persist();
        Ok(())
    }

    /// Replaces the quantity of the line matching `(product_id, size, color)`.
    ///
    /// A quantity of zero or below removes the line entirely; an unknown key
    /// is a no-op. No toast is emitted beyond the persistence mirror.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        debug!(product_id, quantity, "update_quantity");
        self.cart.update_quantity(product_id, quantity, size, color);
        self.persist();
    }

    /// Removes the line matching `(product_id, size, color)`, if present.
    ///
    /// Removing an unknown key is a no-op, not an error, and emits nothing.
    pub fn remove_from_cart(&mut self, product_id: &str, size: Option<&str>, color: Option<&str>) {
        debug!(product_id, "remove_from_cart");
        if self.cart.remove_line(product_id, size, color) {
            self.toasts.push(Toast::normal(
                "Item Removed",
                "Product removed from cart.",
            ));
            self.persist();
        }
    }

    /// Flips wishlist membership for the product.
    ///
    /// Exactly one state flip per call. When a remote mirror is attached,
    /// the flip is additionally pushed to the per-user record; a mirror
    /// failure is toasted and logged but never rolls back the local flip.
    pub fn toggle_wishlist(&mut self, product: &Product) {
        debug!(product_id = %product.id, "toggle_wishlist");

        let mirror_result = match self.wishlist.toggle(product) {
            WishlistChange::Added => {
                self.toasts.push(Toast::normal(
                    "Added to Wishlist",
                    format!("{} added to your wishlist!", product.name),
                ));
                self.mirror.add_product(&product.id)
            }
            WishlistChange::Removed => {
                self.toasts.push(Toast::normal(
                    "Removed from Wishlist",
                    format!("{} removed from your wishlist.", product.name),
                ));
                self.mirror.remove_product(&product.id)
            }
        };

        if let Err(err) = mirror_result {
            warn!(product_id = %product.id, %err, "remote wishlist update failed");
            self.toasts.push(Toast::destructive(
                "Wishlist Sync Failed",
                "Failed to update wishlist.",
            ));
        }

        self.persist();
    }

    /// Empties the cart unconditionally. The wishlist is unaffected.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.cart.clear();
        self.toasts.push(Toast::normal(
            "Cart Cleared",
            "All items have been removed from your cart.",
        ));
        self.persist();
    }

    /// Replaces the display currency, effective for all subsequent
    /// formatting calls.
    pub fn set_currency(&mut self, code: &str) -> CoreResult<()> {
        let currency = Currency::parse(code).map_err(CoreError::from)?;
        debug!(currency = %currency, "set_currency");
        self.currency = currency;
        self.persist();
        Ok(())
    }

    /// Explicit session-end flush of the current state to storage.
    pub fn flush(&mut self) {
        self.persist();
    }

    // =========================================================================
    // Derived Queries (no mutation, no side effects)
    // =========================================================================

    /// The current cart collection.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current wishlist collection.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// The current display currency.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Sum of quantities across all cart lines (the cart badge number).
    pub fn item_count(&self) -> i64 {
        self.cart.total_quantity()
    }

    /// Cart subtotal across all lines.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Formats a price under the current currency setting.
    ///
    /// Deterministic given `(amount, currency)`; mutates nothing.
    pub fn format_price(&self, amount: Money) -> String {
        self.currency.format(amount)
    }

    // =========================================================================
    // Persistence Mirror
    // =========================================================================

    /// Re-serializes the full state to durable storage.
    ///
    /// Fire-and-forget: a failure is logged and the in-memory mutation
    /// stands. The next mutating operation naturally re-triggers a full
    /// write, which is the only retry mechanism.
    fn persist(&mut self) {
        Self::persist_json(&mut *self.storage, CART_KEY, &self.cart);
        Self::persist_json(&mut *self.storage, WISHLIST_KEY, &self.wishlist);
        if let Err(err) = self.storage.set(CURRENCY_KEY, self.currency.code()) {
            error!(key = CURRENCY_KEY, %err, "failed to mirror state to storage");
        }
    }

    fn persist_json<T: Serialize>(storage: &mut dyn StorageBackend, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(err) => {
                error!(key, %err, "failed to serialize state");
                return;
            }
        };
        if let Err(err) = storage.set(key, &payload) {
            error!(key, %err, "failed to mirror state to storage");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
