//! Read-side projection of a cart for the presentation layer.
//!
//! Subtotals and the grand total are derived here on every render; the cart
//! itself stores neither. Arithmetic saturates at `Decimal::MAX`.

use super::models::{Cart, CartLine};
use crate::catalog::models::ProductId;
use rust_decimal::Decimal;
use serde::Serialize;

/// One rendered cart line
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    /// `price × quantity`
    pub subtotal: Decimal,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let product = line.product();
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: line.quantity(),
            subtotal: product.price.saturating_mul(Decimal::from(line.quantity())),
        }
    }
}

/// Rendered cart, lines in cart order
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Sum of all quantities
    pub item_count: u64,
    pub grand_total: Decimal,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let lines: Vec<CartLineView> = cart.lines().iter().map(CartLineView::from).collect();
        let item_count = lines.iter().map(|l| u64::from(l.quantity)).sum();
        let grand_total = lines
            .iter()
            .fold(Decimal::ZERO, |total, l| total.saturating_add(l.subtotal));

        Self {
            lines,
            item_count,
            grand_total,
        }
    }
}
