//! # Cart Collection
//!
//! The in-memory shopping cart and its uniqueness invariants.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                                   │
//! │                                                                         │
//! │  View Action              Cart Method             State Change          │
//! │  ───────────              ───────────             ────────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add_line() ───────────► merge or push line   │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ────► qty = n, or remove   │
//! │                                                    when n ≤ 0           │
//! │                                                                         │
//! │  Click Remove ──────────► remove_line() ────────► line dropped         │
//! │                                                                         │
//! │  Click Clear ───────────► clear() ──────────────► lines emptied        │
//! │                                                                         │
//! │  Cart badge ────────────► total_quantity() ─────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by variant key `(product_id, size, color)`; adding the
//!   same combination again increases quantity, never duplicates the line
//! - Quantity is always > 0; a line driven to zero or below is removed
//! - The same product under two different variant selections is two lines,
//!   each independently mutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, VariantAxis};
use crate::money::Money;
use crate::types::{CartLine, Product, VariantKey};
use crate::validation::validate_quantity;

// =============================================================================
// Add Outcome
// =============================================================================

/// How an add resolved, so callers can word their feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAddition {
    /// A new line was appended for this variant combination.
    NewLine,
    /// An existing line's quantity was increased.
    Merged,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: a sequence of product+variant lines.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product+variant combination, merging into an existing line
    /// when the exact variant key is already present.
    ///
    /// ## Preconditions (checked here, no mutation on failure)
    /// - `quantity` must be positive
    /// - a non-empty size must be supplied when the product declares sizes
    /// - a non-empty color must be supplied when the product declares colors
    ///
    /// ## Behavior
    /// - existing key: quantity increases by `quantity`; variant fields are
    ///   never overwritten
    /// - new key: a full product snapshot is appended, with unspecified axes
    ///   defaulting to the product's first declared value
    ///
    /// Stock levels are deliberately not checked; availability enforcement
    /// belongs to the catalog layer.
    pub fn add_line(
        &mut self,
        product: &Product,
        quantity: i64,
        size: Option<&str>,
        color: Option<&str>,
    ) -> CoreResult<CartAddition> {
        validate_quantity(quantity)?;

        // An empty string is not a selection; the variant key collapses it
        // to the same sentinel as a missing axis
        if !product.sizes.is_empty() && size.map_or(true, str::is_empty) {
            return Err(CoreError::SelectionRequired {
                product: product.name.clone(),
                axis: VariantAxis::Size,
            });
        }
        if !product.colors.is_empty() && color.map_or(true, str::is_empty) {
            return Err(CoreError::SelectionRequired {
                product: product.name.clone(),
                axis: VariantAxis::Color,
            });
        }

        let key = VariantKey::new(&product.id, size, color);
        if let Some(line) = self.lines.iter_mut().find(|l| l.key() == key) {
            line.quantity += quantity;
            return Ok(CartAddition::Merged);
        }

        self.lines.push(CartLine::new(product, quantity, size, color));
        Ok(CartAddition::NewLine)
    }

    /// Replaces the quantity of the line matching the variant key.
    ///
    /// ## Behavior
    /// - quantity ≤ 0: the line is removed entirely (removal-by-zero)
    /// - unknown key: no-op
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        let key = VariantKey::new(product_id, size, color);

        if quantity <= 0 {
            self.lines.retain(|l| l.key() != key);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.key() == key) {
            line.quantity = quantity;
        }
    }

    /// Removes the line matching the variant key, if present.
    ///
    /// ## Returns
    /// Whether a line was actually removed. Removing an unknown key is a
    /// no-op, not an error.
    pub fn remove_line(&mut self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        let key = VariantKey::new(product_id, size, color);
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.key() != key);
        self.lines.len() != initial_len
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    ///
    /// This is the cart badge number: a quantity-3 line counts as 3.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart subtotal.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn shirt(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Shirt {}", id),
            description: "Cotton shirt".to_string(),
            price_cents,
            original_price_cents: None,
            image: format!("/images/{}.jpg", id),
            category: Category::Men,
            subcategory: "shirts".to_string(),
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            colors: vec!["Black".to_string(), "White".to_string()],
            in_stock: true,
            stock_quantity: 25,
            is_new: false,
            is_featured: false,
        }
    }

    fn scarf(id: &str, price_cents: i64) -> Product {
        // No variant axes at all
        Product {
            sizes: Vec::new(),
            colors: Vec::new(),
            name: format!("Scarf {}", id),
            subcategory: "accessories".to_string(),
            ..shirt(id, price_cents)
        }
    }

    #[test]
    fn test_add_same_variant_merges_quantity() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        cart.add_line(&product, 2, Some("M"), Some("Black")).unwrap();
        cart.add_line(&product, 3, Some("M"), Some("Black")).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn test_add_reports_merge_vs_new() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        let first = cart.add_line(&product, 1, Some("M"), Some("Black")).unwrap();
        let second = cart.add_line(&product, 1, Some("M"), Some("Black")).unwrap();

        assert_eq!(first, CartAddition::NewLine);
        assert_eq!(second, CartAddition::Merged);
    }

    #[test]
    fn test_different_variants_are_distinct_lines() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        cart.add_line(&product, 1, Some("M"), Some("Black")).unwrap();
        cart.add_line(&product, 1, Some("L"), Some("Black")).unwrap();
        cart.add_line(&product, 1, Some("M"), Some("White")).unwrap();

        assert_eq!(cart.line_count(), 3);

        // Each line stays independently mutable
        cart.update_quantity("1", 4, Some("L"), Some("Black"));
        assert_eq!(cart.lines[0].quantity, 1);
        assert_eq!(cart.lines[1].quantity, 4);
        assert_eq!(cart.lines[2].quantity, 1);
    }

    #[test]
    fn test_missing_size_is_rejected_without_mutation() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        let err = cart.add_line(&product, 1, None, Some("Black")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::SelectionRequired {
                axis: VariantAxis::Size,
                ..
            }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_missing_color_is_rejected_independently() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        let err = cart.add_line(&product, 1, Some("M"), None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::SelectionRequired {
                axis: VariantAxis::Color,
                ..
            }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_empty_selection_counts_as_missing() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        // An empty string must reject exactly like an absent selection;
        // otherwise the line would land under the no-size sentinel key
        let err = cart.add_line(&product, 1, Some(""), Some("Black")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::SelectionRequired {
                axis: VariantAxis::Size,
                ..
            }
        ));

        let err = cart.add_line(&product, 1, Some("M"), Some("")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::SelectionRequired {
                axis: VariantAxis::Color,
                ..
            }
        ));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        assert!(cart.add_line(&product, 0, Some("M"), Some("Black")).is_err());
        assert!(cart.add_line(&product, -2, Some("M"), Some("Black")).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_product_without_axes_needs_no_selection() {
        let mut cart = Cart::new();
        let product = scarf("2", 450);

        cart.add_line(&product, 1, None, None).unwrap();
        cart.add_line(&product, 1, None, None).unwrap();

        // Both adds resolve to the sentinel key and merge
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        cart.add_line(&product, 2, Some("M"), Some("Black")).unwrap();
        cart.update_quantity("1", 7, Some("M"), Some("Black"));

        assert_eq!(cart.lines[0].quantity, 7);
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        cart.add_line(&product, 2, Some("M"), Some("Black")).unwrap();
        cart.update_quantity("1", 0, Some("M"), Some("Black"));

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_update_below_zero_also_removes() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        cart.add_line(&product, 2, Some("M"), Some("Black")).unwrap();
        cart.update_quantity("1", -5, Some("M"), Some("Black"));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_key_is_noop() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        cart.add_line(&product, 2, Some("M"), Some("Black")).unwrap();
        cart.update_quantity("1", 9, Some("XL"), Some("Black"));

        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let product = shirt("1", 999);

        cart.add_line(&product, 2, Some("M"), Some("Black")).unwrap();

        assert!(cart.remove_line("1", Some("M"), Some("Black")));
        assert!(cart.is_empty());

        // Removing an unknown key is a no-op
        assert!(!cart.remove_line("1", Some("M"), Some("Black")));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(&shirt("1", 999), 2, Some("M"), Some("Black")).unwrap();
        cart.add_line(&shirt("2", 500), 1, Some("S"), Some("White")).unwrap();

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_serializes_losslessly() {
        let mut cart = Cart::new();
        cart.add_line(&shirt("1", 1000), 2, Some("M"), Some("Black")).unwrap();

        let payload = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&payload).unwrap();

        assert_eq!(restored.line_count(), 1);
        assert_eq!(restored.lines[0].quantity, 2);
        assert_eq!(restored.lines[0].selected_size, "M");
        assert_eq!(restored.lines[0].product.price_cents, 1000);
        assert_eq!(restored.lines[0].key(), cart.lines[0].key());
    }

    #[test]
    fn test_subtotal_and_total_quantity() {
        let mut cart = Cart::new();
        cart.add_line(&shirt("1", 1000), 2, Some("M"), Some("Black")).unwrap();
        cart.add_line(&shirt("2", 500), 1, Some("S"), Some("White")).unwrap();

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.subtotal(), Money::from_cents(2500));
    }
}
