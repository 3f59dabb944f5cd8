//! Configuration schema for corefoundry.toml.

use crate::adapters::{anthropic, openai};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundryConfig {
    /// Log level (debug, info, warn, error).
    pub log_level: String,

    pub agent: AgentConfig,

    pub openai: OpenAiConfig,

    pub anthropic: AnthropicConfig,
}

impl Default for FoundryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            agent: AgentConfig::default(),
            openai: OpenAiConfig::default(),
            anthropic: AnthropicConfig::default(),
        }
    }
}

/// Identity of the agent façade and the package it discovers tools from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub name: String,

    pub description: String,

    /// Dotted package path to autodiscover on startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tools_pkg: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "corefoundry".into(),
            description: String::new(),
            auto_tools_pkg: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub model: String,

    /// Extra request options passed through unchanged (temperature, ...).
    pub options: Map<String, Value>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: openai::DEFAULT_MODEL.into(),
            options: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnthropicConfig {
    pub model: String,

    /// Response length limit sent with every request.
    pub max_tokens: u32,

    /// Extra request options passed through unchanged (system, ...).
    pub options: Map<String, Value>,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: anthropic::DEFAULT_MODEL.into(),
            max_tokens: anthropic::DEFAULT_MAX_TOKENS,
            options: Map::new(),
        }
    }
}
