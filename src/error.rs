//! Boundary errors
//!
//! Raw input is validated before it reaches the cart engine. Anything that
//! fails validation ends up here and is mapped to an HTTP response.

use crate::catalog::models::{ParseProductIdError, ProductId};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error(transparent)]
    MalformedProductId(#[from] ParseProductIdError),
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl StorefrontError {
    /// Code-style identifier for clients
    pub fn name(&self) -> &'static str {
        match self {
            StorefrontError::MalformedProductId(_) => "product.malformed_id",
            StorefrontError::UnknownProduct(_) => "product.not_found",
            StorefrontError::InvalidRequest(_) => "request.invalid",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            StorefrontError::MalformedProductId(_) | StorefrontError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            StorefrontError::UnknownProduct(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request rejected");

        let body = ErrorResponse {
            name: self.name().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
