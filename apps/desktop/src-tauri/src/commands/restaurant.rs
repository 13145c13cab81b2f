//! # Restaurant Commands
//!
//! Tauri commands for restaurant cards.
//!
//! ## Card Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Restaurant Card                                                        │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  [image]                           ★ 5.0          ♡ (favorite)  │   │
//! │  │                                                                 │   │
//! │  │  Burguer da Praça                                               │   │
//! │  │  🚲 Entrega grátis          ⏱ 30 min                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  • rating is a fixed display value (no review system behind it)         │
//! │  • favorite toggle is frontend-only state, nothing persisted            │
//! │  • fee label computed in Rust: "Entrega grátis" iff fee == 0            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use sabor_core::Restaurant;
use sabor_db::Database;

/// Rating shown on every card until reviews exist.
const STATIC_RATING_LABEL: &str = "5.0";

/// Restaurant card DTO for frontend listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCardDto {
    /// Restaurant UUID. Keys navigation to the restaurant's page.
    pub id: String,
    pub name: String,
    pub image_url: String,

    /// Fixed display rating.
    pub rating_label: String,

    /// Delivery fee in centavos. 0 means free delivery.
    pub delivery_fee_cents: i64,

    /// `"Entrega grátis"` iff the fee is zero, the formatted fee otherwise.
    pub delivery_fee_label: String,

    /// E.g. `"30 min"`.
    pub delivery_time_label: String,
}

impl From<Restaurant> for RestaurantCardDto {
    fn from(r: Restaurant) -> Self {
        RestaurantCardDto {
            rating_label: STATIC_RATING_LABEL.to_string(),
            delivery_fee_cents: r.delivery_fee_cents,
            delivery_fee_label: r.delivery_fee_label(),
            delivery_time_label: r.delivery_time_label(),
            id: r.id,
            name: r.name,
            image_url: r.image_url,
        }
    }
}

/// Lists restaurants for the storefront, ordered by name.
///
/// ## Arguments
/// * `limit` - Maximum cards to return (default: the configured page size)
#[tauri::command]
pub async fn list_restaurants(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    limit: Option<u32>,
) -> Result<Vec<RestaurantCardDto>, ApiError> {
    let limit = limit.unwrap_or(config.page_size);
    debug!(limit = %limit, "list_restaurants command");

    let db_inner: &Database = db.inner_db();
    let restaurants = db_inner.restaurants().list(limit).await?;
    let cards: Vec<RestaurantCardDto> = restaurants
        .into_iter()
        .map(RestaurantCardDto::from)
        .collect();

    info!(count = cards.len(), "list_restaurants complete");
    Ok(cards)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn restaurant(delivery_fee_cents: i64) -> Restaurant {
        Restaurant {
            id: "r-1".to_string(),
            name: "Pizza da Vila".to_string(),
            image_url: "https://img.example/pizza.png".to_string(),
            delivery_fee_cents,
            delivery_time_minutes: 45,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_card_with_free_delivery() {
        let card = RestaurantCardDto::from(restaurant(0));

        assert_eq!(card.rating_label, "5.0");
        assert_eq!(card.delivery_fee_cents, 0);
        assert_eq!(card.delivery_fee_label, "Entrega grátis");
        assert_eq!(card.delivery_time_label, "45 min");
    }

    #[test]
    fn test_card_with_paid_delivery() {
        let card = RestaurantCardDto::from(restaurant(599));

        assert_eq!(card.delivery_fee_label, "R$ 5,99");
    }
}
