//! MCP server for NetBox.
//!
//! Exposes the read-only NetBox inventory as MCP tools over JSON-RPC 2.0 on
//! the streamable HTTP transport, compatible with any MCP-aware AI agent.
//! Every tool funnels through one generic query translator; the per-resource
//! catalog is configuration data, not code paths.

pub mod catalog;
pub mod client;
pub mod config;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod translate;

pub mod schema;
