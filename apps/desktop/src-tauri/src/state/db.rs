//! # Database State
//!
//! Wraps the `Database` connection for use in Tauri commands.
//!
//! ## Thread Safety
//! The `Database` struct from `sabor-db` contains a `SqlitePool` which
//! is inherently thread-safe. Multiple commands can execute queries
//! concurrently without explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! #[tauri::command]
//! async fn list_products(
//!     db: State<'_, DbState>,
//!     limit: Option<u32>,
//! ) -> Result<Vec<ProductCardDto>, ApiError> {
//!     let products = db.inner_db().products().list(limit.unwrap_or(20)).await?;
//!     Ok(products.into_iter().map(ProductCardDto::from).collect())
//! }
//! ```

use sabor_db::Database;

/// Wrapper around `Database` for Tauri state management.
///
/// Tauri's state management requires `Send + Sync`; the pool satisfies
/// both, and the wrapper keeps command signatures explicit about what
/// they touch.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner_db(&self) -> &Database {
        &self.db
    }
}
