//! REST API handlers for catalog reads

use super::models::{Product, ProductId};
use crate::{cart::state::SharedState, error::StorefrontError};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// Catalog listing together with the description toggle the widget renders it with
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub description_expanded: bool,
}

/// Endpoint: GET /products
async fn list_products(State(state): State<SharedState>) -> Json<ProductListResponse> {
    let session = state.snapshot().await;

    Json(ProductListResponse {
        products: state
            .catalog
            .list_products()
            .iter()
            .map(|p| p.as_ref().clone())
            .collect(),
        description_expanded: session.description_expanded,
    })
}

/// Endpoint: GET /products/:id
async fn get_product(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, StorefrontError> {
    let id: ProductId = raw_id.parse()?;

    state
        .catalog
        .find_product(id)
        .map(|p| Json(p.as_ref().clone()))
        .ok_or(StorefrontError::UnknownProduct(id))
}
