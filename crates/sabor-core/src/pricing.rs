//! # Pricing Module
//!
//! Effective-price computation for discounted products.
//!
//! ## The One Derived Value
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Effective Price Flow                                 │
//! │                                                                         │
//! │  Product.price_cents = 2000      Product.discount_percentage = 10       │
//! │            │                                │                           │
//! │            └──────────────┬─────────────────┘                           │
//! │                           ▼                                             │
//! │              effective_price(price, pct) ← THIS MODULE                  │
//! │                           │                                             │
//! │                           ▼                                             │
//! │                    Money(1800)  →  "R$ 18,00"                           │
//! │                                                                         │
//! │  Rendered on: product card, detail panel, cart line                     │
//! │  Frozen into: CartItem.unit_price_cents at add time                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! The discount amount rounds UP to the next centavo, so the effective
//! price rounds down. Two invariants follow:
//! - a zero discount returns the price unchanged, exactly;
//! - any discount in 1..=100 on a non-zero price yields a price strictly
//!   below the base price, even for amounts under one real.

use crate::money::Money;

/// Computes the discount amount for a price and a percentage in `0..=100`.
///
/// Rounds up to the next centavo. `discount_amount(p, 100) == p`.
///
/// ## Example
/// ```rust
/// use sabor_core::money::Money;
/// use sabor_core::pricing::discount_amount;
///
/// let price = Money::from_cents(2000); // R$ 20,00
/// assert_eq!(discount_amount(price, 10).cents(), 200); // R$ 2,00
/// ```
pub fn discount_amount(price: Money, discount_percentage: u32) -> Money {
    if discount_percentage == 0 {
        return Money::zero();
    }

    // i128 to prevent overflow on large amounts, ceiling division for the
    // strictly-below-base guarantee
    let cents = price.cents() as i128;
    let pct = discount_percentage as i128;
    let discounted = (cents * pct + 99) / 100;

    Money::from_cents(discounted as i64)
}

/// Computes the price a customer actually pays after the discount.
///
/// A percentage of `0` returns the base price unchanged. Any percentage in
/// `1..=100` yields a strictly smaller price for any non-zero base.
///
/// ## Example
/// ```rust
/// use sabor_core::money::Money;
/// use sabor_core::pricing::effective_price;
///
/// let base = Money::from_cents(2000); // R$ 20,00
/// let effective = effective_price(base, 10);
/// assert_eq!(effective.cents(), 1800); // R$ 18,00
/// assert_eq!(effective.to_string(), "R$ 18,00");
/// ```
pub fn effective_price(price: Money, discount_percentage: u32) -> Money {
    price - discount_amount(price, discount_percentage)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_discount_returns_price_unchanged() {
        for cents in [0, 1, 99, 100, 1290, 123_456] {
            let price = Money::from_cents(cents);
            assert_eq!(effective_price(price, 0), price);
            assert_eq!(discount_amount(price, 0), Money::zero());
        }
    }

    #[test]
    fn test_ten_percent_off_twenty_reais() {
        let price = Money::from_cents(2000);
        let effective = effective_price(price, 10);
        assert_eq!(effective.cents(), 1800);
        assert_eq!(effective.to_string(), "R$ 18,00");
    }

    #[test]
    fn test_discounted_price_is_strictly_below_base() {
        // Small amounts are the hard case: 30 centavos at 1% would round
        // to a zero discount under half-up rounding.
        for cents in [1, 30, 99, 100, 1290, 999_999] {
            for pct in [1, 5, 10, 33, 50, 99, 100] {
                let price = Money::from_cents(cents);
                let effective = effective_price(price, pct);
                assert!(
                    effective < price,
                    "price {} at {}% gave {}",
                    cents,
                    pct,
                    effective.cents()
                );
                assert!(!effective.is_negative());
            }
        }
    }

    #[test]
    fn test_full_discount_is_free() {
        let price = Money::from_cents(1290);
        assert_eq!(effective_price(price, 100), Money::zero());
    }

    #[test]
    fn test_discount_rounds_in_the_customer_favor() {
        // R$ 18,90 at 7%: exact discount is 132.3 centavos, charged
        // discount is 133.
        let price = Money::from_cents(1890);
        assert_eq!(discount_amount(price, 7).cents(), 133);
        assert_eq!(effective_price(price, 7).cents(), 1757);
    }

    #[test]
    fn test_discount_on_zero_price_is_zero() {
        let free = Money::zero();
        assert_eq!(effective_price(free, 50), Money::zero());
    }
}
