//! # Detail-Panel State
//!
//! UI-ephemeral state owned by the product-detail view: the quantity
//! stepper and the cart-sheet flag.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Detail Panel State                                   │
//! │                                                                         │
//! │  open_product_panel(id) ──► quantity = 1, product_id = Some(id)         │
//! │                                                                         │
//! │  increase_quantity() ─────► quantity + 1          (no upper bound)      │
//! │  decrease_quantity() ─────► max(1, quantity - 1)  (floored at 1)        │
//! │                                                                         │
//! │  cart_open: {closed, open}                                              │
//! │    add_to_cart ──────► open                                             │
//! │    explicit close ───► closed                                           │
//! │                                                                         │
//! │  The state is discarded with the window; nothing here persists.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use sabor_core::MIN_ITEM_QUANTITY;

/// The product-detail view's local state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPanel {
    /// Product currently on screen, if any.
    pub product_id: Option<String>,

    /// Selected quantity. Starts at 1, never goes below 1.
    pub quantity: i64,

    /// Whether the cart sheet is open.
    pub cart_open: bool,
}

impl DetailPanel {
    /// Creates the initial panel state: nothing viewed, quantity 1,
    /// cart closed.
    pub fn new() -> Self {
        DetailPanel {
            product_id: None,
            quantity: MIN_ITEM_QUANTITY,
            cart_open: false,
        }
    }

    /// Starts viewing a product. The quantity resets to 1.
    pub fn open(&mut self, product_id: impl Into<String>) {
        self.product_id = Some(product_id.into());
        self.quantity = MIN_ITEM_QUANTITY;
    }

    /// Increments the quantity. There is no upper bound.
    pub fn increase_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrements the quantity, flooring at 1.
    ///
    /// Decrementing at 1 leaves it at 1.
    pub fn decrease_quantity(&mut self) {
        if self.quantity > MIN_ITEM_QUANTITY {
            self.quantity -= 1;
        }
    }

    /// Opens or closes the cart sheet.
    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Tauri-managed detail-panel state.
#[derive(Debug)]
pub struct PanelState {
    panel: Arc<Mutex<DetailPanel>>,
}

impl PanelState {
    /// Creates a new panel state.
    pub fn new() -> Self {
        PanelState {
            panel: Arc::new(Mutex::new(DetailPanel::new())),
        }
    }

    /// Executes a function with read access to the panel.
    pub fn with_panel<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DetailPanel) -> R,
    {
        let panel = self.panel.lock().expect("Panel mutex poisoned");
        f(&panel)
    }

    /// Executes a function with write access to the panel.
    pub fn with_panel_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DetailPanel) -> R,
    {
        let mut panel = self.panel.lock().expect("Panel mutex poisoned");
        f(&mut panel)
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_closed_with_quantity_one() {
        let panel = DetailPanel::new();
        assert_eq!(panel.quantity, 1);
        assert!(panel.product_id.is_none());
        assert!(!panel.cart_open);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut panel = DetailPanel::new();
        panel.decrease_quantity();
        assert_eq!(panel.quantity, 1);

        panel.increase_quantity();
        panel.increase_quantity();
        assert_eq!(panel.quantity, 3);

        panel.decrease_quantity();
        panel.decrease_quantity();
        panel.decrease_quantity();
        panel.decrease_quantity();
        assert_eq!(panel.quantity, 1);
    }

    #[test]
    fn test_increment_has_no_upper_bound() {
        let mut panel = DetailPanel::new();
        for _ in 0..10_000 {
            panel.increase_quantity();
        }
        assert_eq!(panel.quantity, 10_001);

        // saturates instead of overflowing
        panel.quantity = i64::MAX;
        panel.increase_quantity();
        assert_eq!(panel.quantity, i64::MAX);
    }

    #[test]
    fn test_open_resets_quantity() {
        let mut panel = DetailPanel::new();
        panel.open("product-1");
        panel.increase_quantity();
        panel.increase_quantity();
        assert_eq!(panel.quantity, 3);

        panel.open("product-2");
        assert_eq!(panel.product_id.as_deref(), Some("product-2"));
        assert_eq!(panel.quantity, 1);
    }

    #[test]
    fn test_cart_open_transitions() {
        let mut panel = DetailPanel::new();
        assert!(!panel.cart_open);

        panel.set_cart_open(true);
        assert!(panel.cart_open);

        panel.set_cart_open(false);
        assert!(!panel.cart_open);
    }

    #[test]
    fn test_panel_state_closures() {
        let state = PanelState::new();
        state.with_panel_mut(|p| p.open("product-1"));
        state.with_panel_mut(DetailPanel::increase_quantity);

        let qty = state.with_panel(|p| p.quantity);
        assert_eq!(qty, 2);
    }
}
