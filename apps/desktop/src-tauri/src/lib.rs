//! # Sabor Desktop Library
//!
//! Core library for the Sabor storefront desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! sabor_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── db.rs         ◄─── Database state wrapper
//! │   ├── cart.rs       ◄─── Cart state management
//! │   ├── panel.rs      ◄─── Detail-panel state (stepper, cart sheet)
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── product.rs    ◄─── Product cards and detail panel data
//! │   ├── restaurant.rs ◄─── Restaurant cards
//! │   ├── cart.rs       ◄─── Cart manipulation commands
//! │   ├── panel.rs      ◄─── Stepper and cart-sheet commands
//! │   └── config.rs     ◄─── Configuration retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state
//! types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐ ┌────────────┐  │
//! │  │   DbState     │ │   CartState   │ │  PanelState   │ │ConfigState │  │
//! │  │               │ │               │ │               │ │            │  │
//! │  │ • SQLite pool │ │ • Cart items  │ │ • Stepper qty │ │ • Currency │  │
//! │  │ • Repos       │ │ • Totals      │ │ • Sheet flag  │ │ • Page size│  │
//! │  └───────────────┘ └───────────────┘ └───────────────┘ └────────────┘  │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                    │
//! │       Better separation of concerns and testability.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use sabor_db::{Database, DbConfig};
use state::{CartState, ConfigState, DbState, PanelState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.sabor.app/sabor.db       │
/// │     • Windows: %APPDATA%\sabor\app\sabor.db                             │
/// │     • Linux: ~/.local/share/sabor-app/sabor.db                          │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState: Wraps Database connection                                │
/// │     • CartState: Empty cart with Mutex for thread-safe updates          │
/// │     • PanelState: Stepper at 1, cart sheet closed                       │
/// │     • ConfigState: Defaults merged with SABOR_* env vars                │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Sabor Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            // Determine database path
            let db_path = get_database_path(app)?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                let config = DbConfig::new(db_path);
                Database::new(config).await
            })?;

            info!("Database connected and migrations applied");

            // Initialize state objects
            let db_state = DbState::new(db);
            let cart_state = CartState::new();
            let panel_state = PanelState::new();
            let config_state = ConfigState::from_env();

            // Register state with Tauri
            app.manage(db_state);
            app.manage(cart_state);
            app.manage(panel_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Product commands
            commands::product::list_products,
            commands::product::list_discounted_products,
            commands::product::get_product_details,
            // Restaurant commands
            commands::restaurant::list_restaurants,
            // Cart commands
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::update_cart_item,
            commands::cart::remove_from_cart,
            commands::cart::clear_cart,
            // Panel commands
            commands::panel::get_panel,
            commands::panel::open_product_panel,
            commands::panel::increase_quantity,
            commands::panel::decrease_quantity,
            commands::panel::set_cart_panel_open,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sabor=trace` - Show trace for sabor crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sabor=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.sabor.app/sabor.db`
/// - **Windows**: `%APPDATA%\sabor\app\sabor.db`
/// - **Linux**: `~/.local/share/sabor-app/sabor.db`
///
/// ## Development Override
/// Set `SABOR_DB_PATH` environment variable to use a custom path.
fn get_database_path(_app: &tauri::App) -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("SABOR_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "sabor", "app")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("sabor.db"))
}
