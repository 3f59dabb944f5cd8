//! Tool definitions and the callables behind them.

use super::schema::InputSchema;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Description used when neither an explicit one nor a doc comment exists.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Callable invoked with the tool's arguments as one JSON object.
pub type ToolHandler = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Definition of a tool exposed to the inference model.
///
/// The handler is never serialized; it exists only for invocation.
#[derive(Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
    #[serde(skip)]
    handler: Option<ToolHandler>,
}

impl ToolDefinition {
    /// Definition without a backing callable.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: InputSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: ToolHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn handler(&self) -> Option<&ToolHandler> {
        self.handler.as_ref()
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// A callable together with its own identifier and documentation, the two
/// fallbacks registration uses for a tool's name and description.
///
/// Usually produced by [`tool_fn!`](crate::tool_fn).
#[derive(Clone)]
pub struct ToolFn {
    ident: Option<String>,
    doc: Option<String>,
    handler: ToolHandler,
}

impl ToolFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            ident: None,
            doc: None,
            handler: Arc::new(f),
        }
    }

    pub fn with_ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = Some(ident.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        let doc = doc.into();
        let doc = doc.trim();
        self.doc = (!doc.is_empty()).then(|| doc.to_string());
        self
    }

    /// Join doc-comment lines (as emitted by `///`) into one docstring.
    pub fn with_doc_lines(self, lines: &[&str]) -> Self {
        let joined = lines
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join("\n");
        self.with_doc(joined)
    }

    pub fn ident(&self) -> Option<&str> {
        self.ident.as_deref()
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn handler(&self) -> &ToolHandler {
        &self.handler
    }

    pub(crate) fn into_handler(self) -> ToolHandler {
        self.handler
    }
}

impl fmt::Debug for ToolFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolFn")
            .field("ident", &self.ident)
            .field("doc", &self.doc)
            .finish_non_exhaustive()
    }
}
