//! # Repository Module
//!
//! Database repository implementations for the Sabor catalog.
//!
//! ## Repository Pattern
//! ```text
//! Tauri Command
//!      │
//!      │  db.products().list(20)
//!      ▼
//! ProductRepository
//! ├── list(&self, limit)
//! ├── list_discounted(&self, limit)
//! ├── get_by_id(&self, id)
//! └── list_by_restaurant(&self, restaurant_id, exclude_id, limit)
//!      │
//!      │  SQL query
//!      ▼
//! SQLite database
//! ```
//!
//! SQL stays isolated here; commands never see a connection.
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - catalog listings, detail lookups
//! - [`restaurant::RestaurantRepository`] - restaurant cards and lookups

pub mod product;
pub mod restaurant;
