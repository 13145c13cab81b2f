//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. Each command declares exactly the state it
//! needs, and independent states don't contend on one lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(db_state);      app.manage(cart_state);             │   │
//! │  │  app.manage(panel_state);   app.manage(config_state);           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │          │                │                │               │            │
//! │          ▼                ▼                ▼               ▼            │
//! │  ┌────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐    │
//! │  │  DbState   │  │  CartState   │  │  PanelState  │  │ConfigState │    │
//! │  │            │  │              │  │              │  │            │    │
//! │  │ SQLite     │  │ Arc<Mutex<   │  │ Arc<Mutex<   │  │ currency,  │    │
//! │  │ pool       │  │   Cart>>     │  │ DetailPanel>>│  │ page size  │    │
//! │  └────────────┘  └──────────────┘  └──────────────┘  └────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: the pool is internally thread-safe                         │
//! │  • CartState / PanelState: Arc<Mutex<T>> with short critical sections  │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod db;
mod panel;

pub use cart::{Cart, CartItem, CartState, CartTotals};
pub use config::ConfigState;
pub use db::DbState;
pub use panel::{DetailPanel, PanelState};
