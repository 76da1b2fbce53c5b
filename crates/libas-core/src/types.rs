//! # Domain Types
//!
//! Core domain types used throughout the Libas client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │  WishlistEntry  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  product (snap) │   │  product (snap) │       │
//! │  │  price_cents    │   │  quantity       │   │  added_at       │       │
//! │  │  sizes, colors  │   │  selected_size  │   │                 │       │
//! │  │  stock fields   │   │  selected_color │   │  keyed by       │       │
//! │  └─────────────────┘   │  added_at       │   │  product id     │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │                      VariantKey                             │       │
//! │  │  (product_id, selected_size, selected_color)                │       │
//! │  │  Missing axes collapse to the "nosize"/"nocolor" sentinels  │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart lines and wishlist entries carry a frozen copy of the full product.
//! If the catalog updates a product after it was added, the in-session copy
//! keeps displaying consistent data. The whole product is copied, never a
//! reconstruction with blanked fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{NO_COLOR, NO_SIZE};

// =============================================================================
// Category
// =============================================================================

/// Top-level catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
    Kids,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product. Read-only from the store's perspective; the catalog
/// owns it, the cart only snapshots it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (backend document id).
    pub id: String,

    /// Display name shown in the catalog and in toasts.
    pub name: String,

    /// Product description.
    pub description: String,

    /// Price in minor units (paisa/cents).
    pub price_cents: i64,

    /// Pre-sale price in minor units, when the product is discounted.
    pub original_price_cents: Option<i64>,

    /// Primary image URL.
    pub image: String,

    /// Top-level category.
    pub category: Category,

    /// Free-form subcategory ("shirts", "sneakers", ...).
    pub subcategory: String,

    /// Declared size axis, in display order. Empty when sizes do not apply.
    pub sizes: Vec<String>,

    /// Declared color axis, in display order. Empty when colors do not apply.
    pub colors: Vec<String>,

    /// Whether the product is currently purchasable.
    pub in_stock: bool,

    /// Remaining stock units. Informational only for the cart; availability
    /// enforcement lives in the catalog layer.
    pub stock_quantity: i64,

    /// New-arrival badge.
    #[serde(default)]
    pub is_new: bool,

    /// Featured-collection badge.
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    /// Returns the price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the pre-sale price as a Money value, if any.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price_cents.map(Money::from_cents)
    }

    /// Returns the discount amount when the product is on sale.
    ///
    /// `None` when there is no original price or the "original" price is not
    /// actually higher than the current one.
    pub fn savings(&self) -> Option<Money> {
        let original = self.original_price()?;
        let price = self.price();
        if original > price {
            Some(original - price)
        } else {
            None
        }
    }
}

// =============================================================================
// Variant Key
// =============================================================================

/// Identity of a cart line: `(product_id, selected_size, selected_color)`.
///
/// Two lines for the same product with different size/color selections are
/// distinct entries. Axes the product does not declare collapse to the
/// `nosize`/`nocolor` sentinels so the key stays well-defined and distinct
/// from every real variant combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantKey {
    product_id: String,
    size: String,
    color: String,
}

impl VariantKey {
    /// Builds a key, substituting sentinels for missing or empty axes.
    pub fn new(product_id: &str, size: Option<&str>, color: Option<&str>) -> Self {
        VariantKey {
            product_id: product_id.to_string(),
            size: Self::axis(size, NO_SIZE),
            color: Self::axis(color, NO_COLOR),
        }
    }

    fn axis(value: Option<&str>, sentinel: &str) -> String {
        match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => sentinel.to_string(),
        }
    }
}

impl std::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.product_id, self.size, self.color)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a product+variant combination and its quantity.
///
/// ## Invariants
/// - `quantity` is always > 0; a line reduced to zero is removed, never kept
/// - the product snapshot is frozen at the time of adding
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Frozen product snapshot.
    pub product: Product,

    /// Units of this variant in the cart. Always positive.
    pub quantity: i64,

    /// Selected size, or empty when the product declares no sizes.
    pub selected_size: String,

    /// Selected color, or empty when the product declares no colors.
    pub selected_color: String,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line from a product snapshot.
    ///
    /// Unspecified axes default to the product's first declared value, or
    /// stay empty when the product declares none. Callers enforce the
    /// selection-required precondition before reaching this constructor.
    pub fn new(product: &Product, quantity: i64, size: Option<&str>, color: Option<&str>) -> Self {
        let selected_size = size
            .map(str::to_string)
            .unwrap_or_else(|| product.sizes.first().cloned().unwrap_or_default());
        let selected_color = color
            .map(str::to_string)
            .unwrap_or_else(|| product.colors.first().cloned().unwrap_or_default());

        CartLine {
            product: product.clone(),
            quantity,
            selected_size,
            selected_color,
            added_at: Utc::now(),
        }
    }

    /// Returns this line's identity key.
    pub fn key(&self) -> VariantKey {
        VariantKey::new(
            &self.product.id,
            Some(&self.selected_size),
            Some(&self.selected_color),
        )
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Wishlist Entry
// =============================================================================

/// One product reference in the wishlist, keyed by product id alone.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Frozen product snapshot.
    pub product: Product,

    /// When the product was added to the wishlist.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Creates an entry from a product snapshot.
    pub fn new(product: &Product) -> Self {
        WishlistEntry {
            product: product.clone(),
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kurta() -> Product {
        Product {
            id: "p-100".to_string(),
            name: "Embroidered Kurta".to_string(),
            description: "Lawn kurta with embroidered neckline".to_string(),
            price_cents: 349_900,
            original_price_cents: Some(449_900),
            image: "/images/kurta.jpg".to_string(),
            category: Category::Women,
            subcategory: "kurtas".to_string(),
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            colors: vec!["Teal".to_string(), "White".to_string()],
            in_stock: true,
            stock_quantity: 12,
            is_new: true,
            is_featured: false,
        }
    }

    #[test]
    fn test_variant_key_sentinels() {
        let with_axes = VariantKey::new("p-1", Some("M"), Some("Teal"));
        let no_axes = VariantKey::new("p-1", None, None);
        let empty_axes = VariantKey::new("p-1", Some(""), Some(""));

        assert_ne!(with_axes, no_axes);
        // Empty strings collapse to the same sentinels as missing axes
        assert_eq!(no_axes, empty_axes);
        assert_eq!(no_axes.to_string(), "p-1-nosize-nocolor");
    }

    #[test]
    fn test_variant_key_distinguishes_variants() {
        let medium = VariantKey::new("p-1", Some("M"), Some("Teal"));
        let large = VariantKey::new("p-1", Some("L"), Some("Teal"));
        let white = VariantKey::new("p-1", Some("M"), Some("White"));

        assert_ne!(medium, large);
        assert_ne!(medium, white);
    }

    #[test]
    fn test_cart_line_defaults_to_first_declared_variant() {
        let product = kurta();
        let line = CartLine::new(&product, 1, None, None);

        assert_eq!(line.selected_size, "S");
        assert_eq!(line.selected_color, "Teal");
    }

    #[test]
    fn test_cart_line_without_variant_axes() {
        let mut product = kurta();
        product.sizes.clear();
        product.colors.clear();

        let line = CartLine::new(&product, 2, None, None);
        assert_eq!(line.selected_size, "");
        assert_eq!(line.selected_color, "");
        assert_eq!(line.key(), VariantKey::new(&product.id, None, None));
    }

    #[test]
    fn test_cart_line_snapshot_keeps_full_product() {
        let product = kurta();
        let line = CartLine::new(&product, 1, Some("M"), Some("White"));

        // The snapshot must carry real product data, not blanked fields
        assert_eq!(line.product.stock_quantity, 12);
        assert_eq!(line.product.image, "/images/kurta.jpg");
        assert_eq!(line.line_total(), Money::from_cents(349_900));
    }

    #[test]
    fn test_savings() {
        let product = kurta();
        assert_eq!(product.savings(), Some(Money::from_cents(100_000)));

        let mut full_price = kurta();
        full_price.original_price_cents = None;
        assert_eq!(full_price.savings(), None);

        let mut bogus = kurta();
        bogus.original_price_cents = Some(100);
        assert_eq!(bogus.savings(), None);
    }
}
