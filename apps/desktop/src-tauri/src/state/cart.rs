//! # Cart State
//!
//! Manages the shopping cart shared by every component that can add to it.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: Tauri commands can run
//! concurrently, and only one command may modify the cart at a time.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action           Tauri Command           Cart State Change    │
//! │  ───────────────           ─────────────           ─────────────────    │
//! │                                                                         │
//! │  "Adicionar à sacola" ───► add_to_cart() ────────► items merge/push     │
//! │                                                    + panel opens        │
//! │  Change quantity ────────► update_cart_item() ───► items[i].qty = n     │
//! │                                                                         │
//! │  Click remove ───────────► remove_from_cart() ───► items.remove(i)      │
//! │                                                                         │
//! │  Click clear ────────────► clear_cart() ─────────► items.clear()        │
//! │                                                                         │
//! │  View cart ──────────────► get_cart() ───────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sabor_core::Product;

/// An item in the shopping cart.
///
/// ## Snapshot Pattern
/// The product's prices are frozen at the moment it is added. If the
/// catalog row changes afterwards, the cart keeps displaying what the
/// customer agreed to pay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (UUID)
    pub product_id: String,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Image reference at time of adding (frozen)
    pub image_url: String,

    /// Owning restaurant at time of adding
    pub restaurant_id: String,

    /// Price the customer pays per unit, in centavos, discount already
    /// applied (frozen)
    pub unit_price_cents: i64,

    /// Base price per unit before the discount, in centavos (frozen)
    pub original_price_cents: i64,

    /// Discount percentage at time of adding (frozen)
    pub discount_percentage: u32,

    /// Quantity in cart
    pub quantity: i64,

    /// When this item was added to cart
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item from a product and quantity.
    ///
    /// The unit price is the *effective* price: the discount is applied
    /// here, once, and never recomputed.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            restaurant_id: product.restaurant_id.clone(),
            unit_price_cents: product.effective_price().cents(),
            original_price_cents: product.price_cents,
            discount_percentage: product.discount_percentage,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total at the effective price (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line total at the base price, for the savings line.
    pub fn original_line_total_cents(&self) -> i64 {
        self.original_price_cents * self.quantity
    }

    /// What the discount saves on this line.
    pub fn savings_cents(&self) -> i64 {
        self.original_line_total_cents() - self.line_total_cents()
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product again
///   increases the quantity)
/// - Quantity is >= 1 (updating to 0 removes the item)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: increases quantity
    /// - If product not in cart: adds a new item with frozen prices
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), String> {
        if quantity < sabor_core::MIN_ITEM_QUANTITY {
            return Err("Quantity must be at least 1".to_string());
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return Ok(());
        }

        self.items.push(CartItem::from_product(product, quantity));
        Ok(())
    }

    /// Updates the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - If quantity is 0: removes the item
    /// - If product not found: returns error
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), String> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        if quantity < 0 {
            return Err("Quantity cannot be negative".to_string());
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            Ok(())
        } else {
            Err(format!("Product {} not in cart", product_id))
        }
    }

    /// Removes an item from the cart by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), String> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(format!("Product {} not in cart", product_id))
        } else {
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal at effective prices.
    pub fn subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Subtotal at base prices, before discounts.
    pub fn original_subtotal_cents(&self) -> i64 {
        self.items.iter().map(|i| i.original_line_total_cents()).sum()
    }

    /// Total saved by discounts across the cart.
    pub fn savings_cents(&self) -> i64 {
        self.original_subtotal_cents() - self.subtotal_cents()
    }

    /// The amount due for the items (delivery fee is charged per order,
    /// outside the cart).
    pub fn total_cents(&self) -> i64 {
        self.subtotal_cents()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub original_subtotal_cents: i64,
    pub savings_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
            original_subtotal_cents: cart.original_subtotal_cents(),
            savings_cents: cart.savings_cents(),
            total_cents: cart.total_cents(),
        }
    }
}

/// Tauri-managed cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>`:
/// - `Arc`: shared ownership across threads
/// - `Mutex`: one thread modifies the cart at a time
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, 1))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64, discount_percentage: u32) -> Product {
        Product {
            id: id.to_string(),
            restaurant_id: "restaurant-1".to_string(),
            name: format!("Product {}", id),
            description: None,
            image_url: format!("https://img.example/{}.png", id),
            price_cents,
            discount_percentage,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 990, 0); // R$ 9,90

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal_cents(), 1980); // R$ 19,80
        assert_eq!(cart.savings_cents(), 0);
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 990, 0);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.item_count(), 1); // Still one unique item
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_freezes_effective_price() {
        let mut cart = Cart::new();
        let product = test_product("1", 2000, 10); // R$ 20,00 at 10% off

        cart.add_item(&product, 2).unwrap();

        let item = &cart.items[0];
        assert_eq!(item.unit_price_cents, 1800);
        assert_eq!(item.original_price_cents, 2000);
        assert_eq!(cart.subtotal_cents(), 3600);
        assert_eq!(cart.original_subtotal_cents(), 4000);
        assert_eq!(cart.savings_cents(), 400);
    }

    #[test]
    fn test_cart_rejects_zero_quantity_add() {
        let mut cart = Cart::new();
        let product = test_product("1", 990, 0);

        assert!(cart.add_item(&product, 0).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let product = test_product("1", 990, 0);
        cart.add_item(&product, 2).unwrap();

        cart.update_quantity("1", 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_product_errors() {
        let mut cart = Cart::new();
        assert!(cart.update_quantity("ghost", 3).is_err());
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        let product = test_product("1", 990, 0);

        cart.add_item(&product, 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_cart_state_closures() {
        let state = CartState::new();
        let product = test_product("1", 1500, 0);

        state
            .with_cart_mut(|c| c.add_item(&product, 1))
            .unwrap();

        let totals = state.with_cart(CartTotals::from);
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total_cents, 1500);
    }
}
