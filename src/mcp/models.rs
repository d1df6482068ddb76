//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool listing the catalog
pub const LIST_PRODUCTS_TOOL: &str = "list_products";
/// Tool adding one unit of a product to the cart
pub const ADD_TO_CART_TOOL: &str = "add_to_cart";
/// Tool removing a product's whole line from the cart
pub const REMOVE_FROM_CART_TOOL: &str = "remove_from_cart";
/// Tool reading the cart
pub const VIEW_CART_TOOL: &str = "view_cart";
/// Tool flipping the description toggle
pub const TOGGLE_DESCRIPTION_TOOL: &str = "toggle_description";
/// Server identifier
pub const SERVER_NAME: &str = "storefront-widget";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC 2.0 error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
