//! Shopping Cart Domain Models
//!
//! This module contains the cart snapshot and its lines. Lines are only
//! created and changed by the engine (see `engine.rs`), which keeps the
//! one-line-per-product and quantity-at-least-one invariants.

use crate::catalog::models::{Product, ProductId};
use serde::Deserialize;
use std::{num::NonZeroU32, sync::Arc};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One product's presence in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Product as captured when the line was first added
    pub(super) product: Arc<Product>,
    pub(super) quantity: NonZeroU32,
}

impl CartLine {
    pub(super) fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }
}

/// Ordered cart snapshot, at most one line per product id.
///
/// Transitions return a new `Cart`; an existing snapshot is never changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    pub(super) lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Request Models
// =============================================================================

/// Input naming a single product, used by add and remove requests
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub product_id: ProductId,
}
