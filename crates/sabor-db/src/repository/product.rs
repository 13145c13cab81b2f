//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Key Operations
//! - Storefront listings (optionally discounted-only)
//! - Detail lookup with the owning restaurant's name
//! - Complementary listing: other dishes of the same restaurant
//!
//! ## Card Data Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A product card shows the seller, so list queries join restaurants:     │
//! │                                                                         │
//! │  SELECT p.*, r.name AS restaurant_name                                  │
//! │  FROM products p JOIN restaurants r ON r.id = p.restaurant_id           │
//! │                                                                         │
//! │  → ProductWithRestaurant { product, restaurant_name }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use sabor_core::{Product, ProductWithRestaurant};

/// Columns selected for a bare product row.
const PRODUCT_COLUMNS: &str = "\
    p.id, p.restaurant_id, p.name, p.description, p.image_url, \
    p.price_cents, p.discount_percentage, p.is_active, \
    p.created_at, p.updated_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let products = repo.list(20).await?;
/// let product = repo.get_by_id("uuid-here").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists active products with their restaurant names, newest first.
    ///
    /// ## Arguments
    /// * `limit` - Maximum results to return
    pub async fn list(&self, limit: u32) -> DbResult<Vec<ProductWithRestaurant>> {
        debug!(limit = %limit, "Listing products");

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS}, r.name AS restaurant_name \
             FROM products p \
             INNER JOIN restaurants r ON r.id = p.restaurant_id \
             WHERE p.is_active = 1 \
             ORDER BY p.created_at DESC, p.id \
             LIMIT ?1"
        );

        let products = sqlx::query_as::<_, ProductWithRestaurant>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "List returned products");
        Ok(products)
    }

    /// Lists active discounted products, steepest discount first.
    ///
    /// Feeds the "recommended orders" rail on the storefront home: every
    /// row is guaranteed to render a badge and a struck-through price.
    pub async fn list_discounted(&self, limit: u32) -> DbResult<Vec<ProductWithRestaurant>> {
        debug!(limit = %limit, "Listing discounted products");

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS}, r.name AS restaurant_name \
             FROM products p \
             INNER JOIN restaurants r ON r.id = p.restaurant_id \
             WHERE p.is_active = 1 AND p.discount_percentage > 0 \
             ORDER BY p.discount_percentage DESC, p.id \
             LIMIT ?1"
        );

        let products = sqlx::query_as::<_, ProductWithRestaurant>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products p WHERE p.id = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Gets a product together with its restaurant's name.
    pub async fn get_with_restaurant(&self, id: &str) -> DbResult<Option<ProductWithRestaurant>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS}, r.name AS restaurant_name \
             FROM products p \
             INNER JOIN restaurants r ON r.id = p.restaurant_id \
             WHERE p.id = ?1"
        );

        let product = sqlx::query_as::<_, ProductWithRestaurant>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Lists other active products of the same restaurant.
    ///
    /// The detail panel's complementary rail: everything the restaurant
    /// sells except the product currently on screen.
    ///
    /// ## Arguments
    /// * `restaurant_id` - Restaurant whose catalog to list
    /// * `exclude_id` - Product to leave out (the one being viewed)
    /// * `limit` - Maximum results to return
    pub async fn list_by_restaurant(
        &self,
        restaurant_id: &str,
        exclude_id: &str,
        limit: u32,
    ) -> DbResult<Vec<ProductWithRestaurant>> {
        debug!(restaurant_id = %restaurant_id, "Listing complementary products");

        let sql = format!(
            "SELECT {PRODUCT_COLUMNS}, r.name AS restaurant_name \
             FROM products p \
             INNER JOIN restaurants r ON r.id = p.restaurant_id \
             WHERE p.restaurant_id = ?1 AND p.id != ?2 AND p.is_active = 1 \
             ORDER BY p.name \
             LIMIT ?3"
        );

        let products = sqlx::query_as::<_, ProductWithRestaurant>(&sql)
            .bind(restaurant_id)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(())` - Insert successful
    /// * `Err(DbError::ForeignKeyViolation)` - Unknown restaurant
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            "INSERT INTO products ( \
                id, restaurant_id, name, description, image_url, \
                price_cents, discount_percentage, is_active, \
                created_at, updated_at \
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(&product.id)
        .bind(&product.restaurant_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(product.price_cents)
        .bind(product.discount_percentage)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Soft-deletes a product by setting is_active = false.
    ///
    /// Cart items keep their frozen snapshot, so history survives the
    /// delisting.
    pub async fn soft_delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Soft-deleting product");

        let result = sqlx::query(
            "UPDATE products SET is_active = 0, updated_at = ?2 WHERE id = ?1",
        )
        .bind(id)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts active products (for diagnostics and seed checks).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
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
    use sabor_core::Restaurant;

    fn test_restaurant(name: &str, delivery_fee_cents: i64) -> Restaurant {
        Restaurant {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            image_url: format!("https://img.example/{name}.png"),
            delivery_fee_cents,
            delivery_time_minutes: 30,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_product(restaurant_id: &str, name: &str, price_cents: i64, pct: u32) -> Product {
        Product {
            id: Uuid::new_v4().to_string(),
            restaurant_id: restaurant_id.to_string(),
            name: name.to_string(),
            description: Some(format!("{name} description")),
            image_url: format!("https://img.example/{name}.png"),
            price_cents,
            discount_percentage: pct,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn seeded_db() -> (Database, Restaurant) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let restaurant = test_restaurant("Cantina da Nona", 599);
        db.restaurants().insert(&restaurant).await.unwrap();
        (db, restaurant)
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let (db, restaurant) = seeded_db().await;
        let product = test_product(&restaurant.id, "Lasanha", 3290, 10);

        db.products().insert(&product).await.unwrap();

        let found = db.products().get_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Lasanha");
        assert_eq!(found.price_cents, 3290);
        assert_eq!(found.discount_percentage, 10);
        assert!(found.is_active);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let (db, _) = seeded_db().await;
        let found = db.products().get_by_id("no-such-id").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_unknown_restaurant_is_fk_violation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = test_product("missing-restaurant", "Pizza", 4500, 0);

        let err = db.products().insert(&product).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_joins_restaurant_name() {
        let (db, restaurant) = seeded_db().await;
        db.products()
            .insert(&test_product(&restaurant.id, "Nhoque", 2890, 0))
            .await
            .unwrap();

        let listed = db.products().list(10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].restaurant_name, "Cantina da Nona");
        assert_eq!(listed[0].product.name, "Nhoque");
    }

    #[tokio::test]
    async fn test_list_discounted_filters_and_orders() {
        let (db, restaurant) = seeded_db().await;
        db.products()
            .insert(&test_product(&restaurant.id, "Full price", 1000, 0))
            .await
            .unwrap();
        db.products()
            .insert(&test_product(&restaurant.id, "Small discount", 1000, 5))
            .await
            .unwrap();
        db.products()
            .insert(&test_product(&restaurant.id, "Big discount", 1000, 30))
            .await
            .unwrap();

        let discounted = db.products().list_discounted(10).await.unwrap();
        assert_eq!(discounted.len(), 2);
        assert_eq!(discounted[0].product.name, "Big discount");
        assert!(discounted.iter().all(|p| p.product.has_discount()));
    }

    #[tokio::test]
    async fn test_list_by_restaurant_excludes_viewed_product() {
        let (db, restaurant) = seeded_db().await;
        let viewed = test_product(&restaurant.id, "Lasanha", 3290, 0);
        db.products().insert(&viewed).await.unwrap();
        db.products()
            .insert(&test_product(&restaurant.id, "Nhoque", 2890, 0))
            .await
            .unwrap();
        db.products()
            .insert(&test_product(&restaurant.id, "Polenta", 1890, 0))
            .await
            .unwrap();

        let complementary = db
            .products()
            .list_by_restaurant(&restaurant.id, &viewed.id, 10)
            .await
            .unwrap();

        assert_eq!(complementary.len(), 2);
        assert!(complementary.iter().all(|p| p.product.id != viewed.id));
    }

    #[tokio::test]
    async fn test_soft_delete_hides_from_listings() {
        let (db, restaurant) = seeded_db().await;
        let product = test_product(&restaurant.id, "Lasanha", 3290, 0);
        db.products().insert(&product).await.unwrap();

        db.products().soft_delete(&product.id).await.unwrap();

        assert_eq!(db.products().list(10).await.unwrap().len(), 0);
        assert_eq!(db.products().count().await.unwrap(), 0);
        // still reachable directly
        let found = db.products().get_by_id(&product.id).await.unwrap().unwrap();
        assert!(!found.is_active);
    }

    #[tokio::test]
    async fn test_soft_delete_missing_is_not_found() {
        let (db, _) = seeded_db().await;
        let err = db.products().soft_delete("no-such-id").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
