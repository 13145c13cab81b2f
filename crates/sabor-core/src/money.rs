//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A product priced R$ 18,90 at 7% off:                                   │
//! │    18.9 * 0.93 = 17.576999999999998  → which centavo do we charge?      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    1890 centavos, discounts computed in integer math with an            │
//! │    explicit rounding rule. Every value in the system is exact.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sabor_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_cents(1290); // R$ 12,90
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // R$ 25,80
//! let total = price + Money::from_cents(500);    // R$ 17,90
//!
//! // Display is fixed pt-BR / BRL
//! assert_eq!(price.to_string(), "R$ 12,90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (the BRL minor unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for savings deltas
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Product.price_cents ──► effective price ──► CartItem.unit_price_cents
///                   │
///                   └──► Displayed as "R$ 12,90" on cards and panels
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use sabor_core::money::Money;
    ///
    /// let price = Money::from_cents(1290); // R$ 12,90
    /// assert_eq!(price.cents(), 1290);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from reais and centavos.
    ///
    /// ## Example
    /// ```rust
    /// use sabor_core::money::Money;
    ///
    /// let price = Money::from_reais(12, 90); // R$ 12,90
    /// assert_eq!(price.cents(), 1290);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_reais(-5, 50)` = -R$ 5,50, not -R$ 4,50.
    #[inline]
    pub const fn from_reais(reais: i64, centavos: i64) -> Self {
        if reais < 0 {
            Money(reais * 100 - centavos)
        } else {
            Money(reais * 100 + centavos)
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use sabor_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(990); // R$ 9,90
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 2970); // R$ 29,70
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders the fixed pt-BR / BRL format.
///
/// ## Format
/// - Minor unit separated by a comma: `R$ 12,90`
/// - Thousands grouped with a dot: `R$ 1.234,56`
/// - Negative values keep the sign in front: `-R$ 5,50`
///
/// This is the single currency-formatting point in the system; cards,
/// panels and cart lines all render through it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_thousands(self.reais().abs()),
            self.centavos_part()
        )
    }
}

/// Groups an absolute integer amount with `.` every three digits.
///
/// `1234567` becomes `"1.234.567"`.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1290);
        assert_eq!(money.cents(), 1290);
        assert_eq!(money.reais(), 12);
        assert_eq!(money.centavos_part(), 90);
    }

    #[test]
    fn test_from_reais() {
        let money = Money::from_reais(12, 90);
        assert_eq!(money.cents(), 1290);

        let negative = Money::from_reais(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display_brl() {
        assert_eq!(format!("{}", Money::from_cents(1290)), "R$ 12,90");
        assert_eq!(format!("{}", Money::from_cents(500)), "R$ 5,00");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0,00");
        assert_eq!(format!("{}", Money::from_cents(1)), "R$ 0,01");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-R$ 5,50");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(format!("{}", Money::from_cents(123_456)), "R$ 1.234,56");
        assert_eq!(format!("{}", Money::from_cents(100_000_000)), "R$ 1.000.000,00");
        assert_eq!(format!("{}", Money::from_cents(99_999)), "R$ 999,99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_assign_ops() {
        let mut total = Money::zero();
        total += Money::from_cents(1290);
        total += Money::from_cents(710);
        assert_eq!(total.cents(), 2000);

        total -= Money::from_cents(500);
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(990);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 2970);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }
}
