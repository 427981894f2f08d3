//! MCP tool implementations.
//!
//! Each tool is an async function taking the shared [`crate::context::ClientContext`]
//! and its parameter struct, and returning the text shown to the caller.
//! Parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.

pub mod format;
pub mod helpers;
pub mod params;
pub mod projects;
pub mod tasks;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use params::*;
