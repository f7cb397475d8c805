#[cfg(feature = "mcp")]
pub mod install;
pub mod list;
