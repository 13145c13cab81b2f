//! # Sabor Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sabor Storefront                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                     Frontend                               │  │  │
//! │  │  │  • Product Cards        • Detail Panel                     │  │  │
//! │  │  │  • Restaurant Cards     • Cart Sheet                       │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                            │  │
//! │  │                              │                                   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Delegates to lib.rs                               │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Sets up logging, database, state, commands        │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► list_products, get_product_details, add_to_cart   │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► DbState, CartState, PanelState, ConfigState       │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  sabor.db (local file, WAL mode)                                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Determine database path (app data directory)
//! 3. Connect to database & run migrations
//! 4. Create state objects (DbState, CartState, PanelState, ConfigState)
//! 5. Build Tauri application
//! 6. Register commands
//! 7. Launch window

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    sabor_desktop_lib::run();
}
