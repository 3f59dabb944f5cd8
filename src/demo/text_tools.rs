//! Example text processing tools.

use crate::tool_fn;
use crate::tools::{ToolError, ToolRegistration, ToolRegistry};
use anyhow::{anyhow, Result};
use serde_json::{json, Value};

fn text_arg(args: &Value) -> Result<&str> {
    args["text"]
        .as_str()
        .ok_or_else(|| anyhow!("Missing 'text' argument"))
}

tool_fn! {
    /// Convert text to uppercase.
    pub fn to_uppercase(args: &Value) -> Result<Value> {
        Ok(json!(text_arg(args)?.to_uppercase()))
    }
}

tool_fn! {
    /// Count words in text.
    pub fn count_words(args: &Value) -> Result<Value> {
        Ok(json!(text_arg(args)?.split_whitespace().count()))
    }
}

/// Register this module's tools.
pub fn register(registry: &ToolRegistry) -> Result<(), ToolError> {
    registry.register(
        ToolRegistration::new()
            .description("Convert text to uppercase")
            .input_schema(json!({
                "properties": {"text": {"type": "string", "description": "input text"}},
                "required": ["text"]
            })),
        to_uppercase_tool(),
    )?;
    registry.register(
        ToolRegistration::new().input_schema(json!({
            "properties": {"text": {"type": "string"}},
            "required": ["text"]
        })),
        count_words_tool(),
    )?;
    Ok(())
}
