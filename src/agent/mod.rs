//! Agent façade over a tool registry.
//!
//! Holds nothing beyond its identity and a registry reference; every tool
//! operation is delegated.

use crate::config::AgentConfig;
use crate::tools::{ToolError, ToolRegistry};
use anyhow::Result;
use serde_json::Value;
use tracing::info;

/// Named, LLM-agnostic wrapper around a [`ToolRegistry`].
#[derive(Debug, Clone)]
pub struct Agent<'r> {
    pub name: String,
    pub description: String,
    registry: &'r ToolRegistry,
}

impl<'r> Agent<'r> {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        registry: &'r ToolRegistry,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            registry,
        }
    }

    /// Construct the agent and autodiscover tools from `package` first.
    pub fn with_auto_tools(
        name: impl Into<String>,
        description: impl Into<String>,
        registry: &'r ToolRegistry,
        package: &str,
    ) -> Result<Self, ToolError> {
        registry.autodiscover(package)?;
        let agent = Self::new(name, description, registry);
        info!(
            "Agent '{}' ready with {} tool(s) from '{}'",
            agent.name,
            registry.len(),
            package
        );
        Ok(agent)
    }

    /// Construct from the `[agent]` config section, autodiscovering its
    /// package when one is set.
    pub fn from_config(config: &AgentConfig, registry: &'r ToolRegistry) -> Result<Self, ToolError> {
        match &config.auto_tools_pkg {
            Some(package) => {
                Self::with_auto_tools(&config.name, &config.description, registry, package)
            }
            None => Ok(Self::new(&config.name, &config.description, registry)),
        }
    }

    pub fn registry(&self) -> &'r ToolRegistry {
        self.registry
    }

    /// Registry tool list as pretty-printed JSON (suitable for LLM tool lists).
    pub fn available_tools_json(&self) -> Result<String> {
        let tools = self.registry.get_json()?;
        Ok(serde_json::to_string_pretty(&tools)?)
    }

    /// Look up `name` and invoke it with `args`.
    ///
    /// Registry failures come back as the original [`ToolError`] inside the
    /// `anyhow::Error`; tool failures come back as the tool reported them.
    pub fn call_tool(&self, name: &str, args: &Value) -> Result<Value> {
        let handler = self.registry.get_callable(name)?;
        handler(args)
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.registry.list_names()
    }
}
