//! # Product Commands
//!
//! Tauri commands for product cards and the detail panel.
//!
//! ## Card Projection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Card Projection                              │
//! │                                                                         │
//! │  invoke('list_products', { limit: 20 })                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository::list ──► Vec<ProductWithRestaurant>                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductCardDto::from(record)   ◄── THIS MODULE                         │
//! │   • effective price computed once, formatted once                       │
//! │   • badge label    present iff discount_percentage > 0                  │
//! │   • original price present iff discount_percentage > 0                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend renders the card verbatim: no price math in the WebView       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Labels Are Computed Here
//! The struck-through price and the `-10%` badge are conditional renders.
//! Computing them in Rust keeps the iff-discounted rule in one tested
//! place; the frontend just checks the Option.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use sabor_core::{ProductWithRestaurant, Restaurant};
use sabor_db::Database;

/// Product card DTO for frontend listings.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Price arithmetic and label rules live here, not in the WebView
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardDto {
    /// Product UUID. Keys navigation to the detail view.
    pub id: String,
    pub name: String,
    pub image_url: String,

    /// Price the customer pays, in centavos (discount applied).
    pub price_cents: i64,

    /// Price the customer pays, formatted: `"R$ 18,00"`.
    pub price_label: String,

    /// Base price formatted for the struck-through line.
    /// `Some` iff the product is discounted.
    pub original_price_label: Option<String>,

    /// Discount percentage, 0 meaning no discount.
    pub discount_percentage: u32,

    /// Badge text, e.g. `"-10%"`. `Some` iff the product is discounted.
    pub discount_badge_label: Option<String>,

    /// Name of the owning restaurant, shown under the product name.
    pub restaurant_name: String,
}

impl From<ProductWithRestaurant> for ProductCardDto {
    fn from(record: ProductWithRestaurant) -> Self {
        let p = record.product;
        let effective = p.effective_price();
        let discounted = p.has_discount();

        ProductCardDto {
            price_cents: effective.cents(),
            price_label: effective.to_string(),
            original_price_label: discounted.then(|| p.price().to_string()),
            discount_badge_label: discounted.then(|| format!("-{}%", p.discount_percentage)),
            discount_percentage: p.discount_percentage,
            id: p.id,
            name: p.name,
            image_url: p.image_url,
            restaurant_name: record.restaurant_name,
        }
    }
}

/// Owning-restaurant summary shown in the detail panel header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummaryDto {
    pub id: String,
    pub name: String,
    pub image_url: String,

    /// `"Entrega grátis"` iff the fee is zero, the formatted fee otherwise.
    pub delivery_fee_label: String,

    /// E.g. `"30 min"`.
    pub delivery_time_label: String,
}

impl From<Restaurant> for RestaurantSummaryDto {
    fn from(r: Restaurant) -> Self {
        RestaurantSummaryDto {
            delivery_fee_label: r.delivery_fee_label(),
            delivery_time_label: r.delivery_time_label(),
            id: r.id,
            name: r.name,
            image_url: r.image_url,
        }
    }
}

/// Detail-panel DTO: the card fields plus the description, the owning
/// restaurant and the complementary rail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsDto {
    #[serde(flatten)]
    pub card: ProductCardDto,

    /// Long description rendered under the price.
    pub description: Option<String>,

    /// The restaurant block at the top of the panel.
    pub restaurant: RestaurantSummaryDto,

    /// Horizontal rail: other dishes of the same restaurant.
    pub complementary_products: Vec<ProductCardDto>,
}

/// Lists active products for the storefront grid, newest first.
///
/// ## Arguments
/// * `limit` - Maximum cards to return (default: the configured page size)
///
/// ## Returns
/// Product cards with the restaurant name joined in.
#[tauri::command]
pub async fn list_products(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    limit: Option<u32>,
) -> Result<Vec<ProductCardDto>, ApiError> {
    let limit = limit.unwrap_or(config.page_size);
    debug!(limit = %limit, "list_products command");

    let db_inner: &Database = db.inner_db();
    let products = db_inner.products().list(limit).await?;
    let cards: Vec<ProductCardDto> = products.into_iter().map(ProductCardDto::from).collect();

    info!(count = cards.len(), "list_products complete");
    Ok(cards)
}

/// Lists discounted products for the "recommended orders" rail.
///
/// Every returned card carries a badge label and a struck-through
/// original price; rows without a discount are filtered in SQL.
#[tauri::command]
pub async fn list_discounted_products(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    limit: Option<u32>,
) -> Result<Vec<ProductCardDto>, ApiError> {
    let limit = limit.unwrap_or(config.page_size);
    debug!(limit = %limit, "list_discounted_products command");

    let db_inner: &Database = db.inner_db();
    let products = db_inner.products().list_discounted(limit).await?;
    let cards: Vec<ProductCardDto> = products.into_iter().map(ProductCardDto::from).collect();

    info!(count = cards.len(), "list_discounted_products complete");
    Ok(cards)
}

/// Gets everything the detail panel renders for one product.
///
/// ## What Gets Fetched
/// 1. The product with its restaurant's name (card fields + description)
/// 2. The owning restaurant (delivery fee and time for the header block)
/// 3. Complementary products: other active dishes of the same restaurant
///
/// ## Arguments
/// * `id` - Product UUID (from card navigation)
///
/// ## Returns
/// The detail DTO, or ApiError::NotFound for unknown/ghost ids.
#[tauri::command]
pub async fn get_product_details(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    id: String,
) -> Result<ProductDetailsDto, ApiError> {
    debug!(id = %id, "get_product_details command");

    let db_inner: &Database = db.inner_db();

    let record = db_inner
        .products()
        .get_with_restaurant(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &id))?;

    let restaurant_id = record.product.restaurant_id.clone();
    let description = record.product.description.clone();

    let restaurant = db_inner
        .restaurants()
        .get_by_id(&restaurant_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Restaurant", &restaurant_id))?;

    let complementary = db_inner
        .products()
        .list_by_restaurant(&restaurant_id, &id, config.page_size)
        .await?;

    info!(
        id = %id,
        complementary = complementary.len(),
        "get_product_details complete"
    );

    Ok(ProductDetailsDto {
        card: ProductCardDto::from(record),
        description,
        restaurant: RestaurantSummaryDto::from(restaurant),
        complementary_products: complementary
            .into_iter()
            .map(ProductCardDto::from)
            .collect(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sabor_core::Product;

    fn record(price_cents: i64, discount_percentage: u32) -> ProductWithRestaurant {
        ProductWithRestaurant {
            product: Product {
                id: "p-1".to_string(),
                restaurant_id: "r-1".to_string(),
                name: "X-Salada".to_string(),
                description: Some("Pão, bife e salada".to_string()),
                image_url: "https://img.example/x-salada.png".to_string(),
                price_cents,
                discount_percentage,
                is_active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            restaurant_name: "Burguer da Praça".to_string(),
        }
    }

    #[test]
    fn test_card_without_discount_has_no_badge_or_original_price() {
        let card = ProductCardDto::from(record(2000, 0));

        assert_eq!(card.price_cents, 2000);
        assert_eq!(card.price_label, "R$ 20,00");
        assert!(card.original_price_label.is_none());
        assert!(card.discount_badge_label.is_none());
        assert_eq!(card.restaurant_name, "Burguer da Praça");
    }

    #[test]
    fn test_card_with_discount_shows_badge_and_struck_price() {
        let card = ProductCardDto::from(record(2000, 10));

        assert_eq!(card.price_cents, 1800);
        assert_eq!(card.price_label, "R$ 18,00");
        assert_eq!(card.original_price_label.as_deref(), Some("R$ 20,00"));
        assert_eq!(card.discount_badge_label.as_deref(), Some("-10%"));
        assert_eq!(card.discount_percentage, 10);
    }

    #[test]
    fn test_restaurant_summary_labels() {
        let summary = RestaurantSummaryDto::from(Restaurant {
            id: "r-1".to_string(),
            name: "Burguer da Praça".to_string(),
            image_url: "https://img.example/burguer.png".to_string(),
            delivery_fee_cents: 0,
            delivery_time_minutes: 30,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });

        assert_eq!(summary.delivery_fee_label, "Entrega grátis");
        assert_eq!(summary.delivery_time_label, "30 min");
    }
}
