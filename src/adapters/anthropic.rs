//! Adapter for Anthropic-style messages clients.

use super::{check_options, ModelAdapter};
use crate::config::AnthropicConfig;
use crate::tools::ToolRegistry;
use crate::types::ChatMessage;
use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "claude-3.5-sonnet-20241022";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

const RESERVED: &[&str] = &["model", "max_tokens", "messages", "tools"];

/// Body of a `messages.create` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client capable of creating messages.
pub trait Messages {
    type Response;

    fn create(&self, request: &MessagesRequest) -> Result<Self::Response>;
}

impl<T: Messages + ?Sized> Messages for &T {
    type Response = T::Response;

    fn create(&self, request: &MessagesRequest) -> Result<Self::Response> {
        (**self).create(request)
    }
}

/// Forwards prompts and the registry's tools to a [`Messages`] client.
pub struct AnthropicAdapter<'r, C> {
    client: C,
    registry: &'r ToolRegistry,
    model: String,
    max_tokens: u32,
    options: Map<String, Value>,
}

impl<'r, C: Messages> AnthropicAdapter<'r, C> {
    pub fn new(client: C, registry: &'r ToolRegistry) -> Self {
        Self {
            client,
            registry,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            options: Map::new(),
        }
    }

    pub fn from_config(client: C, registry: &'r ToolRegistry, config: &AnthropicConfig) -> Self {
        Self::new(client, registry)
            .with_model(config.model.clone())
            .with_max_tokens(config.max_tokens)
            .with_options(config.options.clone())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Extra keyword option sent with every request (e.g. `system`).
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Registry whose tools `call_with_tools` attaches.
    pub fn registry(&self) -> &'r ToolRegistry {
        self.registry
    }

    fn request(&self, prompt: &str, tools: Option<Vec<Value>>) -> Result<MessagesRequest> {
        check_options(&self.options, RESERVED)?;
        Ok(MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![ChatMessage::user(prompt)],
            tools,
            extra: self.options.clone(),
        })
    }
}

impl<C: Messages> ModelAdapter for AnthropicAdapter<'_, C> {
    type Response = C::Response;

    fn generate(&self, prompt: &str) -> Result<Self::Response> {
        let request = self.request(prompt, None)?;
        debug!("Messages request to model: {}", self.model);
        self.client.create(&request)
    }

    fn call_with_tools(&self, prompt: &str) -> Result<Self::Response> {
        let tools = self.registry.get_json()?;
        let request = self.request(prompt, Some(tools))?;
        debug!(
            "Messages request to model: {} ({} tools)",
            self.model,
            request.tools.as_ref().map_or(0, Vec::len)
        );
        self.client.create(&request)
    }
}
