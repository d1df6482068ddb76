//! Session State Management
//!
//! This module owns the single storefront session: the current cart snapshot
//! plus the description toggle, and the application state the HTTP layer
//! shares between requests.

use super::{engine::CartCommand, models::Cart};
use crate::catalog::{
    models::{Product, ProductId},
    provider::Catalog,
};
use std::sync::Arc;
use tokio::sync::Mutex;

// =============================================================================
// Session
// =============================================================================

/// A UI event the session reacts to
#[derive(Debug, Clone)]
pub enum SessionEvent {
    AddItem(Arc<Product>),
    RemoveItem(ProductId),
    ToggleDescription,
}

/// Everything one storefront session holds in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub cart: Cart,
    /// Shared expand/collapse flag for every product description
    pub description_expanded: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session that results from `event`.
    pub fn apply(&self, event: SessionEvent) -> Session {
        match event {
            SessionEvent::AddItem(product) => self.with_cart(CartCommand::Add(product)),
            SessionEvent::RemoveItem(id) => self.with_cart(CartCommand::Remove(id)),
            SessionEvent::ToggleDescription => Session {
                cart: self.cart.clone(),
                description_expanded: !self.description_expanded,
            },
        }
    }

    fn with_cart(&self, command: CartCommand) -> Session {
        Session {
            cart: self.cart.apply(command),
            description_expanded: self.description_expanded,
        }
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Catalog plus the one session this process serves
pub struct AppState {
    pub catalog: Catalog,

    /// Locked for the whole of each transition, so events apply one at a
    /// time in arrival order.
    session: Mutex<Session>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        tracing::info!(products = catalog.len(), "storefront session started");

        Self {
            catalog,
            session: Mutex::new(Session::new()),
        }
    }

    /// Copy of the current session
    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// Applies `event` and returns the new session.
    pub async fn dispatch(&self, event: SessionEvent) -> Session {
        let mut session = self.session.lock().await;
        let label = event_label(&event);
        let next = session.apply(event);

        if next != *session {
            tracing::debug!(
                event = label,
                lines = next.cart.len(),
                description_expanded = next.description_expanded,
                "session updated"
            );
            *session = next.clone();
        }

        next
    }
}

fn event_label(event: &SessionEvent) -> &'static str {
    match event {
        SessionEvent::AddItem(_) => "add_item",
        SessionEvent::RemoveItem(_) => "remove_item",
        SessionEvent::ToggleDescription => "toggle_description",
    }
}
