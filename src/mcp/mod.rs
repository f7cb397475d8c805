//! MCP Server for the notebook
//!
//! Exposes notes as resources, the note operations as tools, and matching
//! prompt templates over stdio.

mod server;

pub use server::{run_mcp_server, NotebookService, SERVER_NAME, SERVER_VERSION};
