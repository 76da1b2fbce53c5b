//! # Wishlist Collection
//!
//! Liked products, keyed by product id alone (no variant axis).
//!
//! ## Invariant
//! At most one entry per product id. The single `toggle` operation flips
//! membership exactly once per call and can never accumulate duplicates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, WishlistEntry};

/// How a toggle resolved, so callers can word their feedback and drive the
/// optional remote mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    /// The product was not present and has been added.
    Added,
    /// The product was present and has been removed.
    Removed,
}

/// The wishlist: an ordered set of product snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Entries in insertion order.
    pub entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Flips membership for the given product.
    pub fn toggle(&mut self, product: &Product) -> WishlistChange {
        if self.contains(&product.id) {
            self.entries.retain(|e| e.product.id != product.id);
            WishlistChange::Removed
        } else {
            self.entries.push(WishlistEntry::new(product));
            WishlistChange::Added
        }
    }

    /// Checks membership by product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product.id == product_id)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
