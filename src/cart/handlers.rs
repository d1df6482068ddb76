//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoints the widget calls when a user
//! adds or removes a product, reads the cart, or flips the description toggle.

use super::{
    models::ProductInput,
    state::{SessionEvent, SharedState},
    view::CartView,
};
use crate::{catalog::models::ProductId, error::StorefrontError};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(view_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:id", delete(remove_item))
        .route("/description/toggle", post(toggle_description))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub description_expanded: bool,
}

/// Endpoint: GET /cart
async fn view_cart(State(state): State<SharedState>) -> Json<CartView> {
    let session = state.snapshot().await;
    Json(CartView::from(&session.cart))
}

/// Endpoint: POST /cart/items
/// Adds one unit of a catalog product. Unknown ids never reach the cart.
async fn add_item(
    State(state): State<SharedState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<CartView>, StorefrontError> {
    let Json(input) = payload.map_err(|e| StorefrontError::InvalidRequest(e.body_text()))?;

    let product = state
        .catalog
        .find_product(input.product_id)
        .ok_or(StorefrontError::UnknownProduct(input.product_id))?;

    let session = state.dispatch(SessionEvent::AddItem(product)).await;
    Ok(Json(CartView::from(&session.cart)))
}

/// Endpoint: DELETE /cart/items/:id
/// Removes the whole line. Removing a product that is not in the cart is fine.
async fn remove_item(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CartView>, StorefrontError> {
    let id: ProductId = raw_id.parse()?;

    let session = state.dispatch(SessionEvent::RemoveItem(id)).await;
    Ok(Json(CartView::from(&session.cart)))
}

/// Endpoint: POST /description/toggle
async fn toggle_description(State(state): State<SharedState>) -> Json<ToggleResponse> {
    let session = state.dispatch(SessionEvent::ToggleDescription).await;

    Json(ToggleResponse {
        description_expanded: session.description_expanded,
    })
}
