//! Snaptask MCP bridge.
//!
//! Exposes a fixed set of Snaptask task-management operations as MCP tools
//! backed by the Snaptask RPC endpoint. Used by the `snaptask-mcp` binary and
//! available as a library for integration testing.

pub mod task_server;
