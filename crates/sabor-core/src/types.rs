//! # Domain Types
//!
//! Core catalog types used throughout Sabor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────────┐         ┌─────────────────────────┐            │
//! │  │      Product        │  n ── 1 │       Restaurant        │            │
//! │  │  ─────────────────  │ ───────►│  ─────────────────────  │            │
//! │  │  id (UUID)          │         │  id (UUID)              │            │
//! │  │  restaurant_id (FK) │         │  name                   │            │
//! │  │  name               │         │  image_url              │            │
//! │  │  image_url          │         │  delivery_fee_cents     │            │
//! │  │  price_cents        │         │  delivery_time_minutes  │            │
//! │  │  discount_percentage│         └─────────────────────────┘            │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  ProductWithRestaurant = Product + owning restaurant's name             │
//! │  (the shape a product card consumes)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The display layer only reads these records. Creation and mutation live
//! behind the repositories in `sabor-db`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing;

/// Label shown instead of a fee when a restaurant delivers for free.
pub const FREE_DELIVERY_LABEL: &str = "Entrega grátis";

// =============================================================================
// Product
// =============================================================================

/// A dish offered by a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Owning restaurant.
    pub restaurant_id: String,

    /// Display name shown on cards and the detail panel.
    pub name: String,

    /// Optional long description for the detail panel.
    pub description: Option<String>,

    /// Image reference rendered by the frontend.
    pub image_url: String,

    /// Base price in centavos.
    pub price_cents: i64,

    /// Discount percentage, 0 meaning no discount. Always in 0..=100.
    pub discount_percentage: u32,

    /// Whether the product is listed (soft delete).
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the base price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the price after the discount is applied.
    ///
    /// Equals the base price when `discount_percentage` is 0.
    #[inline]
    pub fn effective_price(&self) -> Money {
        pricing::effective_price(self.price(), self.discount_percentage)
    }

    /// Returns the amount taken off the base price.
    #[inline]
    pub fn discount_amount(&self) -> Money {
        pricing::discount_amount(self.price(), self.discount_percentage)
    }

    /// True iff the product carries a discount.
    ///
    /// Drives the discount badge and the struck-through original price:
    /// both render exactly when this is true.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0
    }
}

// =============================================================================
// Restaurant
// =============================================================================

/// A restaurant selling through the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Restaurant {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Image reference rendered by the frontend.
    pub image_url: String,

    /// Delivery fee in centavos. 0 means free delivery.
    pub delivery_fee_cents: i64,

    /// Estimated delivery time in minutes.
    pub delivery_time_minutes: i64,

    /// When the restaurant was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the restaurant was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Returns the delivery fee as a Money type.
    #[inline]
    pub fn delivery_fee(&self) -> Money {
        Money::from_cents(self.delivery_fee_cents)
    }

    /// True iff delivery costs nothing.
    #[inline]
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee_cents == 0
    }

    /// The fee text a restaurant card shows next to the bike icon.
    ///
    /// `"Entrega grátis"` iff the fee is zero, the formatted fee otherwise.
    pub fn delivery_fee_label(&self) -> String {
        if self.has_free_delivery() {
            FREE_DELIVERY_LABEL.to_string()
        } else {
            self.delivery_fee().to_string()
        }
    }

    /// The delivery-time text, e.g. `"30 min"`.
    pub fn delivery_time_label(&self) -> String {
        format!("{} min", self.delivery_time_minutes)
    }
}

// =============================================================================
// Product + Restaurant Join
// =============================================================================

/// A product joined with its owning restaurant's name.
///
/// Product cards always show who sells the dish, so list queries return
/// this shape instead of a bare [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ProductWithRestaurant {
    #[serde(flatten)]
    #[cfg_attr(feature = "sqlx", sqlx(flatten))]
    #[ts(flatten)]
    pub product: Product,

    /// Name of the owning restaurant.
    pub restaurant_name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_cents: i64, discount_percentage: u32) -> Product {
        Product {
            id: "d2c4b7de-4d4e-4d33-9f3c-000000000001".to_string(),
            restaurant_id: "d2c4b7de-4d4e-4d33-9f3c-000000000002".to_string(),
            name: "X-Salada".to_string(),
            description: None,
            image_url: "https://img.example/x-salada.png".to_string(),
            price_cents,
            discount_percentage,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn restaurant(delivery_fee_cents: i64) -> Restaurant {
        Restaurant {
            id: "d2c4b7de-4d4e-4d33-9f3c-000000000003".to_string(),
            name: "Burguer da Praça".to_string(),
            image_url: "https://img.example/burguer.png".to_string(),
            delivery_fee_cents,
            delivery_time_minutes: 30,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_price_without_discount() {
        let p = product(2000, 0);
        assert!(!p.has_discount());
        assert_eq!(p.effective_price(), p.price());
    }

    #[test]
    fn test_effective_price_with_discount() {
        let p = product(2000, 10);
        assert!(p.has_discount());
        assert_eq!(p.effective_price().cents(), 1800);
        assert_eq!(p.discount_amount().cents(), 200);
    }

    #[test]
    fn test_free_delivery_label() {
        let r = restaurant(0);
        assert!(r.has_free_delivery());
        assert_eq!(r.delivery_fee_label(), "Entrega grátis");
    }

    #[test]
    fn test_paid_delivery_label() {
        let r = restaurant(599);
        assert!(!r.has_free_delivery());
        assert_eq!(r.delivery_fee_label(), "R$ 5,99");
    }

    #[test]
    fn test_delivery_time_label() {
        let r = restaurant(0);
        assert_eq!(r.delivery_time_label(), "30 min");
    }
}
