//! notebook-mcp library
//!
//! A notebook of named text notes served over the Model Context Protocol.
//!
//! # Modules
//!
//! - `core`: Notes, the SQL note store, the capability catalog and the dispatcher
//! - `mcp`: rmcp server adapter over stdio
//! - `logging`: tracing subscriber setup

pub mod core;
pub mod logging;
#[cfg(feature = "mcp")]
pub mod mcp;

// Re-exports for convenience
pub use crate::core::catalog::{
    NoteResource, NoteTool, PromptDescriptor, RenderedPrompt, ToolDescriptor,
};
pub use crate::core::dispatcher::{Notebook, ResourceText};
pub use crate::core::error::{NotebookError, StoreError};
pub use crate::core::note::Note;
pub use crate::core::store::{NoteStore, SqliteNoteStore};
