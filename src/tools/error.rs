//! Error types for registry operations.

use super::schema::SchemaError;
use thiserror::Error;

/// Errors raised by the tool registry. All of them are returned to the
/// immediate caller; the registry never retries or swallows them.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Invalid input_schema for tool '{tool}': {source}")]
    InvalidSchema {
        tool: String,
        #[source]
        source: SchemaError,
    },

    #[error("Tool '{0}' already registered")]
    AlreadyRegistered(String),

    #[error("Tool '{0}' not found")]
    NotFound(String),

    #[error("Tool '{0}' has no callable attached")]
    NoCallable(String),

    #[error("Tool registration needs a name: none given and the callable has no identifier")]
    Unnamed,

    #[error("Could not import package '{package}': {cause}")]
    Import { package: String, cause: String },

    #[error("Failed to serialize tool '{tool}': {source}")]
    Serialization {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}
