//! # Tauri Commands Module
//!
//! All commands exposed to the WebView frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── product.rs     ◄─── Product cards and detail panel data
//! ├── restaurant.rs  ◄─── Restaurant cards
//! ├── cart.rs        ◄─── Cart manipulation
//! ├── panel.rs       ◄─── Detail-panel quantity and cart-sheet flag
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const cards = await invoke('list_products', { limit: 20 });            │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn list_products(                                                │
//! │      db: State<'_, DbState>,  ◄── Injected by Tauri                     │
//! │      limit: Option<u32>,      ◄── From invoke params                    │
//! │  ) -> Result<Vec<ProductCardDto>, ApiError>                             │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: ProductCardDto[]                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs database
//! async fn list_products(db: State<'_, DbState>, ...)
//!
//! // Only needs the panel
//! fn increase_quantity(panel: State<'_, PanelState>)
//!
//! // Needs database, cart and panel
//! async fn add_to_cart(db: State<'_, DbState>, cart: State<'_, CartState>,
//!                      panel: State<'_, PanelState>, ...)
//! ```

pub mod cart;
pub mod config;
pub mod panel;
pub mod product;
pub mod restaurant;
