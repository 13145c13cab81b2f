//! # Detail-Panel Commands
//!
//! Tauri commands for the product-detail view's local state: the quantity
//! stepper and the cart-sheet flag.
//!
//! ## Stepper Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Detail Panel                                                           │
//! │                                                                         │
//! │   [－]   2   [＋]        "Adicionar à sacola"                           │
//! │                                                                         │
//! │   － at quantity 1 does nothing (floor)                                 │
//! │   ＋ has no ceiling                                                     │
//! │   opening another product resets the stepper to 1                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{DbState, DetailPanel, PanelState};
use sabor_db::Database;

/// Gets the current panel state.
///
/// ## Returns
/// Product on screen (if any), stepper quantity, cart-sheet flag
#[tauri::command]
pub fn get_panel(panel: State<'_, PanelState>) -> DetailPanel {
    debug!("get_panel command");
    panel.with_panel(|p| p.clone())
}

/// Starts viewing a product: the stepper resets to 1.
///
/// The product is fetched first so a stale card can't open a panel for a
/// dish that no longer exists.
///
/// ## Arguments
/// * `product_id` - Product UUID (from card navigation)
#[tauri::command]
pub async fn open_product_panel(
    db: State<'_, DbState>,
    panel: State<'_, PanelState>,
    product_id: String,
) -> Result<DetailPanel, ApiError> {
    debug!(product_id = %product_id, "open_product_panel command");

    let db_inner: &Database = db.inner_db();
    db_inner
        .products()
        .get_by_id(&product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &product_id))?;

    Ok(panel.with_panel_mut(|p| {
        p.open(&product_id);
        p.clone()
    }))
}

/// Increments the stepper. No upper bound.
///
/// ## Returns
/// The new quantity
#[tauri::command]
pub fn increase_quantity(panel: State<'_, PanelState>) -> i64 {
    debug!("increase_quantity command");
    panel.with_panel_mut(|p| {
        p.increase_quantity();
        p.quantity
    })
}

/// Decrements the stepper, flooring at 1.
///
/// ## Returns
/// The new quantity (unchanged when already at 1)
#[tauri::command]
pub fn decrease_quantity(panel: State<'_, PanelState>) -> i64 {
    debug!("decrease_quantity command");
    panel.with_panel_mut(|p| {
        p.decrease_quantity();
        p.quantity
    })
}

/// Opens or closes the cart sheet.
///
/// `add_to_cart` opens it implicitly; the explicit close (and the manual
/// bag-icon open) go through here.
///
/// ## Arguments
/// * `open` - true to open, false to close
#[tauri::command]
pub fn set_cart_panel_open(panel: State<'_, PanelState>, open: bool) -> DetailPanel {
    debug!(open = %open, "set_cart_panel_open command");
    panel.with_panel_mut(|p| {
        p.set_cart_open(open);
        p.clone()
    })
}
