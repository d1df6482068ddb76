//! Product Catalog Module
//!
//! The fixed, read-only product list and its REST read endpoints.

pub mod data;
pub mod handlers;
pub mod models;
pub mod provider;

pub use data::builtin_catalog;
pub use handlers::routes;
pub use models::{Product, ProductId};
pub use provider::{Catalog, CatalogError};
