//! Tool catalog: schema model, definitions, registry and discovery.

pub mod definition;
pub mod discovery;
pub mod error;
pub mod macros;
pub mod registry;
pub mod schema;

pub use definition::{ToolDefinition, ToolFn, ToolHandler, DEFAULT_DESCRIPTION};
pub use discovery::{ModuleEntry, ModuleIndex, ModuleInit};
pub use error::ToolError;
pub use registry::{ToolRegistration, ToolRegistry};
pub use schema::{InputSchema, Property, PropertyType, SchemaError};
