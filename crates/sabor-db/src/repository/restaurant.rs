//! # Restaurant Repository
//!
//! Database operations for restaurants.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use sabor_core::Restaurant;

/// Columns selected for a restaurant row.
const RESTAURANT_COLUMNS: &str = "\
    id, name, image_url, delivery_fee_cents, delivery_time_minutes, \
    created_at, updated_at";

/// Repository for restaurant database operations.
#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    pool: SqlitePool,
}

impl RestaurantRepository {
    /// Creates a new RestaurantRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RestaurantRepository { pool }
    }

    /// Lists restaurants ordered by name.
    ///
    /// ## Arguments
    /// * `limit` - Maximum results to return
    pub async fn list(&self, limit: u32) -> DbResult<Vec<Restaurant>> {
        debug!(limit = %limit, "Listing restaurants");

        let sql = format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants ORDER BY name LIMIT ?1"
        );

        let restaurants = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = restaurants.len(), "List returned restaurants");
        Ok(restaurants)
    }

    /// Gets a restaurant by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Restaurant))` - Restaurant found
    /// * `Ok(None)` - Restaurant not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Restaurant>> {
        let sql = format!("SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = ?1");

        let restaurant = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(restaurant)
    }

    /// Inserts a new restaurant.
    pub async fn insert(&self, restaurant: &Restaurant) -> DbResult<()> {
        debug!(id = %restaurant.id, name = %restaurant.name, "Inserting restaurant");

        sqlx::query(
            "INSERT INTO restaurants ( \
                id, name, image_url, delivery_fee_cents, delivery_time_minutes, \
                created_at, updated_at \
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&restaurant.id)
        .bind(&restaurant.name)
        .bind(&restaurant.image_url)
        .bind(restaurant.delivery_fee_cents)
        .bind(restaurant.delivery_time_minutes)
        .bind(restaurant.created_at)
        .bind(restaurant.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts restaurants (for diagnostics and seed checks).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new restaurant ID.
pub fn generate_restaurant_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Utc;

    fn test_restaurant(name: &str, delivery_fee_cents: i64) -> Restaurant {
        Restaurant {
            id: generate_restaurant_id(),
            name: name.to_string(),
            image_url: format!("https://img.example/{name}.png"),
            delivery_fee_cents,
            delivery_time_minutes: 45,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let restaurant = test_restaurant("Açaí do Ponto", 0);

        db.restaurants().insert(&restaurant).await.unwrap();

        let found = db
            .restaurants()
            .get_by_id(&restaurant.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Açaí do Ponto");
        assert!(found.has_free_delivery());
        assert_eq!(found.delivery_time_minutes, 45);
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.restaurants()
            .insert(&test_restaurant("Pizza da Vila", 599))
            .await
            .unwrap();
        db.restaurants()
            .insert(&test_restaurant("Burguer Mania", 0))
            .await
            .unwrap();

        let listed = db.restaurants().list(10).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Burguer Mania");
        assert_eq!(listed[1].name, "Pizza da Vila");
        assert_eq!(db.restaurants().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.restaurants().get_by_id("nope").await.unwrap().is_none());
    }
}
