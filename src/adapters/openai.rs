//! Adapter for OpenAI-style chat completion clients.

use super::{check_options, ModelAdapter};
use crate::config::OpenAiConfig;
use crate::tools::ToolRegistry;
use crate::types::ChatMessage;
use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const RESERVED: &[&str] = &["model", "messages", "tools"];

/// Body of a `chat.completions.create` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Value>>,
    /// Pass-through options, serialized at the top level.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client capable of creating chat completions.
pub trait ChatCompletions {
    type Response;

    fn create(&self, request: &ChatCompletionRequest) -> Result<Self::Response>;
}

impl<T: ChatCompletions + ?Sized> ChatCompletions for &T {
    type Response = T::Response;

    fn create(&self, request: &ChatCompletionRequest) -> Result<Self::Response> {
        (**self).create(request)
    }
}

/// Forwards prompts and the registry's tools to a [`ChatCompletions`] client.
pub struct OpenAiAdapter<'r, C> {
    client: C,
    registry: &'r ToolRegistry,
    model: String,
    options: Map<String, Value>,
}

impl<'r, C: ChatCompletions> OpenAiAdapter<'r, C> {
    pub fn new(client: C, registry: &'r ToolRegistry) -> Self {
        Self {
            client,
            registry,
            model: DEFAULT_MODEL.to_string(),
            options: Map::new(),
        }
    }

    pub fn from_config(client: C, registry: &'r ToolRegistry, config: &OpenAiConfig) -> Self {
        Self::new(client, registry)
            .with_model(config.model.clone())
            .with_options(config.options.clone())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Extra keyword option sent with every request (e.g. `temperature`).
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

    fn request(&self, prompt: &str, tools: Option<Vec<Value>>) -> Result<ChatCompletionRequest> {
        check_options(&self.options, RESERVED)?;
        Ok(ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            tools,
            extra: self.options.clone(),
        })
    }
}

impl<C: ChatCompletions> ModelAdapter for OpenAiAdapter<'_, C> {
    type Response = C::Response;

    fn generate(&self, prompt: &str) -> Result<Self::Response> {
        let request = self.request(prompt, None)?;
        debug!("Chat completion request to model: {}", self.model);
        self.client.create(&request)
    }

    fn call_with_tools(&self, prompt: &str) -> Result<Self::Response> {
        let tools = self.registry.get_json()?;
        let request = self.request(prompt, Some(tools))?;
        debug!(
            "Chat completion request to model: {} ({} tools)",
            self.model,
            request.tools.as_ref().map_or(0, Vec::len)
        );
        self.client.create(&request)
    }
}
