//! TickTick MCP Server library.
//!
//! Provides the [`server::TickTickMcpServer`] MCP server handler, the lazily
//! initialized [`context::ClientContext`] and the tool parameter types.
//! Used by the `ticktick-mcp` binary and available for integration testing.

pub mod context;
pub mod server;
pub mod tools;
