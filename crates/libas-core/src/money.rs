//! # Money & Currency Module
//!
//! Provides the `Money` type for monetary values and the `Currency` setting
//! used for display formatting.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Rs 3,499.00 is stored as 349900                                     │
//! │    All arithmetic stays exact; only display divides by 100             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Currency Is Presentation Only
//! The currency setting never converts amounts. Every stored price is already
//! denominated in a single unit; switching the currency only changes the
//! symbol/code shown next to the number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::validate_currency_code;
use crate::DEFAULT_CURRENCY;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paisa/cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for savings/refund math
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major-unit portion (rupees, dollars, ...).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies the value by a line quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Plain decimal rendering without a currency marker ("3499.00").
///
/// Use [`Currency::format`] for user-facing display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Currency
// =============================================================================

/// The display-currency setting: a 3-letter ISO-style code.
///
/// Formatting is deterministic given `(amount, currency)` and mutates
/// nothing. Known codes render with their symbol, everything else falls back
/// to `CODE amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    code: String,
}

impl Currency {
    /// Parses and normalizes a currency code (trimmed, uppercased, 3 ASCII
    /// letters).
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        let code = validate_currency_code(code)?;
        Ok(Currency { code })
    }

    /// Returns the normalized code ("PKR", "USD", ...).
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display symbol for well-known codes.
    pub fn symbol(&self) -> Option<&'static str> {
        match self.code.as_str() {
            "PKR" => Some("Rs"),
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "INR" => Some("₹"),
            _ => None,
        }
    }

    /// Formats an amount for display.
    ///
    /// ## Examples
    /// ```rust
    /// use libas_core::money::{Currency, Money};
    ///
    /// let pkr = Currency::parse("PKR").unwrap();
    /// assert_eq!(pkr.format(Money::from_cents(2500)), "Rs 25.00");
    ///
    /// let usd = Currency::parse("USD").unwrap();
    /// assert_eq!(usd.format(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        match self.symbol() {
            // Alphabetic symbols read better with a separating space
            Some(symbol) if symbol.chars().all(char::is_alphabetic) => {
                format!("{} {}", symbol, amount)
            }
            Some(symbol) => format!("{}{}", symbol, amount),
            None => format!("{} {}", self.code, amount),
        }
    }
}

/// The fixed default used when nothing has been persisted or the stored
/// value fails to parse.
impl Default for Currency {
    fn default() -> Self {
        Currency {
            code: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
