//! Shopping Cart Domain Module
//!
//! This module contains the cart aggregation logic, including:
//! - Domain models (Cart, CartLine, request inputs)
//! - The pure transition engine (add/remove, command dispatch)
//! - Derived views (subtotals, grand total) and formatting helpers
//! - Session state management
//! - REST API handlers

pub mod engine;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod view;

// Re-export commonly used types for convenience
pub use engine::CartCommand;
pub use handlers::routes;
pub use models::{Cart, CartLine};
pub use state::{AppState, Session, SessionEvent, SharedState};
pub use view::CartView;
