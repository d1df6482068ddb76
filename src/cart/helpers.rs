//! Shopping Cart Formatting Helpers

use super::models::Cart;

/// Produces a human-readable one-line summary of a cart.
///
/// Example output: `"2x Apple, 1x Banana"`, or `"Cart is empty."`.
pub fn format_item_summary(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty.".to_string();
    }

    cart.lines()
        .iter()
        .map(|line| format!("{}x {}", line.quantity(), line.product().name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{Product, ProductId};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn product(id: u32, name: &str) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::new(id),
            name: name.into(),
            description: String::new(),
            price: Decimal::ONE,
            image: String::new(),
        })
    }

    #[test]
    fn summarises_lines_in_order() {
        let apple = product(1, "Apple");
        let cart = Cart::new()
            .add_item(apple.clone())
            .add_item(product(2, "Banana"))
            .add_item(apple);
        assert_eq!(format_item_summary(&cart), "2x Apple, 1x Banana");
    }

    #[test]
    fn reports_empty_cart() {
        assert_eq!(format_item_summary(&Cart::new()), "Cart is empty.");
    }
}
