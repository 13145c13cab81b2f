//! # sabor-core: Pure Business Logic for Sabor
//!
//! This crate is the heart of the Sabor storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Sabor Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Product Cards ──► Detail Panel ──► Cart Sheet                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    list_products, get_product_details, add_to_cart, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sabor-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│   │   │
//! │  │   │  Product  │  │   Money   │  │ effective │  │   rules   │   │   │
//! │  │   │ Restaurant│  │  (BRL fmt)│  │   price   │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    sabor-db (Catalog Layer)                     │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in centavos (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use sabor_core::money::Money;
//! use sabor_core::pricing;
//!
//! // Create money from centavos (never from floats!)
//! let price = Money::from_cents(2000); // R$ 20,00
//!
//! // Apply a 10% discount
//! let effective = pricing::effective_price(price, 10);
//!
//! assert_eq!(effective.cents(), 1800);
//! assert_eq!(effective.to_string(), "R$ 18,00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use sabor_core::Money` instead of
// `use sabor_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum quantity a detail panel or cart line can hold.
///
/// The quantity stepper starts here and decrementing never goes below it.
/// There is deliberately no maximum: incrementing is unbounded.
pub const MIN_ITEM_QUANTITY: i64 = 1;

/// Upper bound for a product's discount percentage (inclusive).
pub const MAX_DISCOUNT_PERCENTAGE: u32 = 100;
