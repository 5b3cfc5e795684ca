//! In-memory shopping cart
//!
//! Holds the items added during this session. Lines accumulate by product id
//! and quantities are clamped against stock. Nothing is persisted; checkout
//! lives elsewhere.

use crate::data::Product;

/// A single cart line
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Product id the line refers to
    pub product_id: String,
    /// Product title at the time it was added
    pub title: String,
    /// Unit price at the time it was added
    pub unit_price: f64,
    /// Units in the cart, never exceeding the product's stock
    pub quantity: u32,
}

/// The session cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Clamps a requested quantity to the valid range for the given stock
///
/// Quantities are at least 1 and at most `stock`. With zero stock the only
/// representable quantity is 0.
pub fn clamp_quantity(quantity: u32, stock: u32) -> u32 {
    if stock == 0 {
        return 0;
    }
    quantity.clamp(1, stock)
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the cart, accumulating onto an existing line
    ///
    /// The line's total quantity is clamped to the product's stock. Adding a
    /// zero-stock product is a no-op.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let quantity = clamp_quantity(quantity, product.stock);
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = (line.quantity + quantity).min(product.stock);
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                title: product.title.clone(),
                unit_price: product.price,
                quantity,
            });
        }
    }

    /// Returns the cart lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price across all lines
    pub fn total_price(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.unit_price * l.quantity as f64)
            .sum()
    }

    /// Returns true when the cart has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
