//! Storefront Widget Library
//!
//! A fixed product catalog and a cart aggregation engine, served to a widget
//! over REST and MCP (Model Context Protocol).

// Domain modules
pub mod cart;
pub mod catalog;
pub mod mcp;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
