//! Provider adapters.
//!
//! An adapter turns a prompt (plus, optionally, the registry's tool list) into
//! one provider request and hands back the provider's raw response. The
//! provider client is always constructed by the caller and injected, which
//! keeps SDK specifics out of the registry and makes the boundary mockable.

pub mod anthropic;
pub mod openai;

pub use anthropic::{AnthropicAdapter, Messages, MessagesRequest};
pub use openai::{ChatCompletionRequest, ChatCompletions, OpenAiAdapter};

use anyhow::{bail, Result};
use serde_json::{Map, Value};

/// Contract every provider adapter honours.
///
/// Both calls send a single user message; `call_with_tools` additionally
/// attaches the registry's serialized tool list. Responses are returned
/// untouched and client errors propagate unchanged.
pub trait ModelAdapter {
    type Response;

    fn generate(&self, prompt: &str) -> Result<Self::Response>;

    fn call_with_tools(&self, prompt: &str) -> Result<Self::Response>;
}

/// Reject pass-through options that would shadow a request field.
fn check_options(options: &Map<String, Value>, reserved: &[&str]) -> Result<()> {
    if let Some(key) = reserved.iter().find(|key| options.contains_key(**key)) {
        bail!("Option '{}' collides with a request field", key);
    }
    Ok(())
}
