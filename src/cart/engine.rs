//! Cart aggregation engine
//!
//! Pure `(cart, command) -> cart` transitions. Nothing here logs or touches
//! shared state; the session layer decides what to do with the result.

use super::models::{Cart, CartLine};
use crate::catalog::models::{Product, ProductId};
use std::sync::Arc;

/// A request against the cart
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Add one unit of an already-resolved catalog product
    Add(Arc<Product>),
    /// Drop the whole line for this product, whatever its quantity
    Remove(ProductId),
}

impl Cart {
    pub fn apply(&self, command: CartCommand) -> Cart {
        match command {
            CartCommand::Add(product) => self.add_item(product),
            CartCommand::Remove(id) => self.remove_item(id),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line keeps its position and the product attributes it was
    /// created with; only its quantity grows. A new product is appended with
    /// quantity 1.
    pub fn add_item(&self, product: Arc<Product>) -> Cart {
        let mut lines = self.lines.clone();

        match lines.iter_mut().find(|line| line.id() == product.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
            }
            None => lines.push(CartLine::new(product)),
        }

        Cart { lines }
    }

    /// Removes the line for `id`. An absent id yields an equal cart.
    pub fn remove_item(&self, id: ProductId) -> Cart {
        Cart {
            lines: self
                .lines
                .iter()
                .filter(|line| line.id() != id)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::num::NonZeroU32;

    fn product(id: u32, name: &str, price: i64) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            price: Decimal::from(price),
            image: format!("https://example.test/{id}.jpg"),
        })
    }

    fn ids_and_quantities(cart: &Cart) -> Vec<(u32, u32)> {
        cart.lines()
            .iter()
            .map(|line| (line.id().get(), line.quantity()))
            .collect()
    }

    fn sample_cart() -> Cart {
        Cart::new()
            .add_item(product(1, "A", 10))
            .add_item(product(2, "B", 15))
            .add_item(product(2, "B", 15))
            .add_item(product(3, "C", 20))
    }

    #[test]
    fn walks_through_the_storefront_scenario() {
        let a = product(1, "A", 10);
        let b = product(2, "B", 15);

        let cart = Cart::new().add_item(a.clone());
        assert_eq!(ids_and_quantities(&cart), vec![(1, 1)]);

        let cart = cart.add_item(a);
        assert_eq!(ids_and_quantities(&cart), vec![(1, 2)]);

        let cart = cart.add_item(b);
        assert_eq!(ids_and_quantities(&cart), vec![(1, 2), (2, 1)]);

        let cart = cart.remove_item(ProductId::new(1));
        assert_eq!(ids_and_quantities(&cart), vec![(2, 1)]);

        let again = cart.remove_item(ProductId::new(1));
        assert_eq!(again, cart);
    }

    #[test]
    fn adding_present_product_increments_only_that_line() {
        let before = sample_cart();
        let after = before.add_item(product(2, "B", 15));

        assert_eq!(after.len(), before.len());
        assert_eq!(ids_and_quantities(&after), vec![(1, 1), (2, 3), (3, 1)]);
        assert_eq!(after.lines()[0], before.lines()[0]);
        assert_eq!(after.lines()[2], before.lines()[2]);
    }

    #[test]
    fn adding_new_product_appends_single_unit_line() {
        let before = sample_cart();
        let after = before.add_item(product(9, "Z", 1));

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after.lines()[..before.len()], before.lines());
        let last = after.lines().last().unwrap();
        assert_eq!(last.id(), ProductId::new(9));
        assert_eq!(last.quantity(), 1);
    }

    #[test]
    fn repeated_adds_never_reorder_lines() {
        let mut cart = sample_cart();
        for id in [3, 1, 3, 2, 1] {
            cart = cart.add_item(product(id, "again", 1));
        }
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn first_insertion_freezes_product_attributes() {
        let original = product(1, "A", 10);
        let repriced = Arc::new(Product {
            name: "A (new label)".into(),
            price: Decimal::from(99),
            ..(*original).clone()
        });

        let cart = Cart::new().add_item(original).add_item(repriced);
        let line = cart.line(ProductId::new(1)).unwrap();

        assert_eq!(line.quantity(), 2);
        assert_eq!(line.product().name, "A");
        assert_eq!(line.product().price, Decimal::from(10));
    }

    #[test]
    fn quantity_saturates_at_u32_max() {
        let a = product(1, "A", 10);
        let cart = Cart {
            lines: vec![CartLine {
                product: a.clone(),
                quantity: NonZeroU32::MAX,
            }],
        };

        let after = cart.add_item(a);
        assert_eq!(after.len(), 1);
        assert_eq!(after.lines()[0].quantity(), u32::MAX);
    }

    #[test]
    fn removal_drops_whole_line_regardless_of_quantity() {
        let cart = sample_cart().remove_item(ProductId::new(2));
        assert_eq!(ids_and_quantities(&cart), vec![(1, 1), (3, 1)]);
        assert!(!cart.contains(ProductId::new(2)));
    }

    #[test]
    fn removal_is_idempotent() {
        let cart = sample_cart();
        let once = cart.remove_item(ProductId::new(1));
        let twice = once.remove_item(ProductId::new(1));
        assert_eq!(once, twice);
    }

    #[test]
    fn removing_absent_id_is_a_no_op() {
        let cart = sample_cart();
        assert_eq!(cart.remove_item(ProductId::new(42)), cart);
        assert_eq!(Cart::new().remove_item(ProductId::new(1)), Cart::new());
    }

    #[test]
    fn transitions_leave_previous_snapshot_untouched() {
        let before = sample_cart();
        let copy = before.clone();

        let _ = before.add_item(product(1, "A", 10));
        let _ = before.add_item(product(8, "H", 3));
        let _ = before.remove_item(ProductId::new(3));

        assert_eq!(before, copy);
    }

    #[test]
    fn apply_dispatches_commands() {
        let a = product(1, "A", 10);
        let cart = Cart::new()
            .apply(CartCommand::Add(a.clone()))
            .apply(CartCommand::Add(a))
            .apply(CartCommand::Remove(ProductId::new(5)));
        assert_eq!(ids_and_quantities(&cart), vec![(1, 2)]);

        let cart = cart.apply(CartCommand::Remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn replaying_the_same_commands_gives_the_same_cart() {
        let commands = || {
            vec![
                CartCommand::Add(product(2, "B", 15)),
                CartCommand::Add(product(1, "A", 10)),
                CartCommand::Add(product(2, "B", 15)),
                CartCommand::Remove(ProductId::new(1)),
                CartCommand::Add(product(3, "C", 20)),
            ]
        };

        let first = commands().into_iter().fold(Cart::new(), |c, cmd| c.apply(cmd));
        let second = commands().into_iter().fold(Cart::new(), |c, cmd| c.apply(cmd));
        assert_eq!(first, second);
        assert_eq!(ids_and_quantities(&first), vec![(2, 2), (3, 1)]);
    }
}
