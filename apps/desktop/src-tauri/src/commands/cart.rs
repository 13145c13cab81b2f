//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐      ┌──────────┐      ┌────────────────┐                 │
//! │  │  Empty   │─────►│ In Cart  │─────►│  Cart Sheet    │                 │
//! │  │  Cart    │      │          │      │  (slides open) │                 │
//! │  └──────────┘      └──────────┘      └────────────────┘                 │
//! │                         │                    ▲                          │
//! │                    add_to_cart ──────────────┘                          │
//! │                    update_cart_item      (add_to_cart also flips        │
//! │                    remove_from_cart       the panel's cart_open)        │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                    clear_cart ──────────► (back to empty)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{Cart, CartItem, CartState, CartTotals, DbState, PanelState};
use sabor_db::Database;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart and opens the cart sheet.
///
/// ## Behavior
/// - Fetches the product; unknown or delisted products are rejected
/// - If product already in cart: quantity increases
/// - If product not in cart: added with the effective price frozen
/// - The detail panel's cart sheet opens so the customer sees the result
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "Adicionar à sacola" on the detail panel                               │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('add_to_cart', { productId: 'xxx', quantity: 2 })               │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Fetch product (current price + discount)                   │    │
/// │  │  2. Reject if delisted                                         │    │
/// │  │  3. Merge into cart (frozen effective price)                   │    │
/// │  │  4. Open the cart sheet                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Cart sheet slides in with the new line                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `product_id` - Product UUID to add
/// * `quantity` - Quantity to add (default: 1, usually the panel's stepper)
///
/// ## Returns
/// Updated cart with all items and totals
#[tauri::command]
pub async fn add_to_cart(
    db: State<'_, DbState>,
    cart: State<'_, CartState>,
    panel: State<'_, PanelState>,
    product_id: String,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let db_inner: &Database = db.inner_db();
    let product = db_inner
        .products()
        .get_by_id(&product_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Product", &product_id))?;

    if !product.is_active {
        return Err(ApiError::validation("Product is not available"));
    }

    let result = cart.with_cart_mut(|c| {
        c.add_item(&product, quantity)?;
        Ok::<CartResponse, String>(CartResponse::from(&*c))
    });
    let response = result.map_err(ApiError::cart)?;

    // add-to-cart → open: the sheet shows what just landed
    panel.with_panel_mut(|p| p.set_cart_open(true));

    info!(
        product_id = %product_id,
        total_quantity = response.totals.total_quantity,
        "add_to_cart complete"
    );
    Ok(response)
}

/// Updates the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0: removes the item
/// - Negative quantity: returns error
///
/// ## Arguments
/// * `product_id` - Product UUID in cart
/// * `quantity` - New quantity (0 to remove)
///
/// ## Returns
/// Updated cart
#[tauri::command]
pub fn update_cart_item(
    cart: State<'_, CartState>,
    product_id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    let result = cart.with_cart_mut(|c| {
        c.update_quantity(&product_id, quantity)?;
        Ok::<CartResponse, String>(CartResponse::from(&*c))
    });

    result.map_err(ApiError::cart)
}

/// Removes an item from the cart.
///
/// ## Arguments
/// * `product_id` - Product UUID to remove
///
/// ## Returns
/// Updated cart
#[tauri::command]
pub fn remove_from_cart(
    cart: State<'_, CartState>,
    product_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let result = cart.with_cart_mut(|c| {
        c.remove_item(&product_id)?;
        Ok::<CartResponse, String>(CartResponse::from(&*c))
    });

    result.map_err(ApiError::cart)
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the bag from the cart sheet
///
/// ## Returns
/// Empty cart
#[tauri::command]
pub fn clear_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}
