//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol surface of the
//! storefront. `handle_tool_call` is public so tests can drive the tools
//! without going through HTTP.

use super::{helpers::*, models::*};
use crate::{
    cart::{
        helpers::format_item_summary,
        models::{Cart, ProductInput},
        state::{AppState, SessionEvent, SharedState},
        view::CartView,
    },
    catalog::models::Product,
    error::StorefrontError,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "unparseable JSON-RPC request");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::info!(method = method_name, id = %id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "resources/list" => rpc_success(id, json!({ "resources": [] })),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(err) => rpc_error(id, INVALID_PARAMS, err.to_string()),
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!(method = method_name, "unknown MCP method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn product_id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "productId": { "type": "integer", "minimum": 0 }
        },
        "required": ["productId"],
        "additionalProperties": false
    })
}

fn empty_schema() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": LIST_PRODUCTS_TOOL,
                "title": "List products",
                "description": "Returns the storefront catalog in display order.",
                "inputSchema": empty_schema()
            },
            {
                "name": ADD_TO_CART_TOOL,
                "title": "Add product to cart",
                "description": "Adds one unit of a catalog product and returns the cart.",
                "inputSchema": product_id_schema()
            },
            {
                "name": REMOVE_FROM_CART_TOOL,
                "title": "Remove product from cart",
                "description": "Removes a product's line from the cart, whatever its quantity.",
                "inputSchema": product_id_schema()
            },
            {
                "name": VIEW_CART_TOOL,
                "title": "View cart",
                "description": "Returns the cart lines with subtotals and the grand total.",
                "inputSchema": empty_schema()
            },
            {
                "name": TOGGLE_DESCRIPTION_TOOL,
                "title": "Toggle descriptions",
                "description": "Expands or collapses the product descriptions.",
                "inputSchema": empty_schema()
            }
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub async fn handle_tool_call(
    state: &AppState,
    name: &str,
    args: Value,
) -> Result<Value, StorefrontError> {
    match name {
        LIST_PRODUCTS_TOOL => Ok(handle_list_products_tool(state).await),
        ADD_TO_CART_TOOL => handle_add_to_cart_tool(state, args).await,
        REMOVE_FROM_CART_TOOL => handle_remove_from_cart_tool(state, args).await,
        VIEW_CART_TOOL => {
            let session = state.snapshot().await;
            Ok(cart_result(&session.cart))
        }
        TOGGLE_DESCRIPTION_TOOL => {
            let session = state.dispatch(SessionEvent::ToggleDescription).await;
            let text = if session.description_expanded {
                "Descriptions expanded."
            } else {
                "Descriptions collapsed."
            };
            Ok(tool_result(
                text,
                json!({ "descriptionExpanded": session.description_expanded }),
            ))
        }
        _ => Err(StorefrontError::InvalidRequest(format!("Unknown tool: {}", name))),
    }
}

fn parse_product_input(args: Value) -> Result<ProductInput, StorefrontError> {
    serde_json::from_value(args)
        .map_err(|e| StorefrontError::InvalidRequest(format!("Invalid arguments: {}", e)))
}

fn cart_result(cart: &Cart) -> Value {
    tool_result(format_item_summary(cart), json!(CartView::from(cart)))
}

async fn handle_list_products_tool(state: &AppState) -> Value {
    let session = state.snapshot().await;
    let products = state.catalog.list_products();

    let summary = products
        .iter()
        .map(|p| format!("#{} {} ({})", p.id, p.name, p.price))
        .collect::<Vec<_>>()
        .join(", ");

    tool_result(
        summary,
        json!({
            "products": products.iter().map(|p| p.as_ref()).collect::<Vec<&Product>>(),
            "descriptionExpanded": session.description_expanded
        }),
    )
}

/// Handles the add_to_cart tool functionality
async fn handle_add_to_cart_tool(state: &AppState, args: Value) -> Result<Value, StorefrontError> {
    let input = parse_product_input(args)?;

    let product = state
        .catalog
        .find_product(input.product_id)
        .ok_or(StorefrontError::UnknownProduct(input.product_id))?;

    let session = state.dispatch(SessionEvent::AddItem(product)).await;
    Ok(cart_result(&session.cart))
}

/// Handles the remove_from_cart tool functionality
async fn handle_remove_from_cart_tool(
    state: &AppState,
    args: Value,
) -> Result<Value, StorefrontError> {
    let input = parse_product_input(args)?;

    let session = state
        .dispatch(SessionEvent::RemoveItem(input.product_id))
        .await;
    Ok(cart_result(&session.cart))
}
