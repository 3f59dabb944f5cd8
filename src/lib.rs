//! CoreFoundry: minimal tool-calling facility for LLM agents.
//!
//! A registry of JSON-schema-described tools, provider adapters that attach
//! the tool list to outbound requests, and a thin agent façade.

pub mod adapters;
pub mod agent;
pub mod config;
pub mod demo;
pub mod tools;
pub mod types;

pub use agent::Agent;
pub use tools::{ToolError, ToolRegistration, ToolRegistry};

#[doc(hidden)]
pub use paste::paste as __paste;
