//! End-to-end scenarios across registry, adapters, discovery and agent.

use anyhow::Result;
use corefoundry::adapters::{
    AnthropicAdapter, ChatCompletionRequest, ChatCompletions, Messages, MessagesRequest,
    ModelAdapter, OpenAiAdapter,
};
use corefoundry::tool_fn;
use corefoundry::tools::{InputSchema, ToolFn, ToolRegistration};
use corefoundry::{demo, Agent, ToolError, ToolRegistry};
use serde_json::{json, Value};
use std::cell::RefCell;

tool_fn! {
    /// Multiply two integers.
    fn multiply(args: &Value) -> Result<Value> {
        Ok(json!(args["a"].as_i64().unwrap_or(0) * args["b"].as_i64().unwrap_or(0)))
    }
}

fn echo_registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry
        .register(
            ToolRegistration::new()
                .name("echo")
                .description("Echo input")
                .input_schema(json!({
                    "properties": {"msg": {"type": "string"}},
                    "required": ["msg"]
                })),
            ToolFn::new(|args: &Value| {
                Ok(json!(format!("echo:{}", args["msg"].as_str().unwrap_or_default())))
            }),
        )
        .unwrap();
    registry
}

#[derive(Default)]
struct MockOpenAi {
    requests: RefCell<Vec<ChatCompletionRequest>>,
}

impl ChatCompletions for MockOpenAi {
    type Response = String;

    fn create(&self, request: &ChatCompletionRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        Ok("mock_response".to_string())
    }
}

#[derive(Default)]
struct MockAnthropic {
    requests: RefCell<Vec<MessagesRequest>>,
}

impl Messages for MockAnthropic {
    type Response = String;

    fn create(&self, request: &MessagesRequest) -> Result<String> {
        self.requests.borrow_mut().push(request.clone());
        Ok("mock_response".to_string())
    }
}

#[test]
fn register_serialize_and_invoke() {
    let registry = ToolRegistry::new();
    registry
        .register(
            ToolRegistration::new().input_schema(json!({
                "properties": {"a": {"type": "integer"}, "b": {"type": "integer"}},
                "required": ["a", "b"]
            })),
            multiply_tool(),
        )
        .unwrap();

    let handler = registry.get_callable("multiply").unwrap();
    assert_eq!(handler(&json!({"a": 6, "b": 7})).unwrap(), json!(42));

    let tools = registry.get_json().unwrap();
    assert_eq!(tools[0]["name"], "multiply");
    assert_eq!(tools[0]["description"], "Multiply two integers.");
    assert_eq!(tools[0]["input_schema"]["required"], json!(["a", "b"]));
}

#[test]
fn openai_adapter_sends_tool_list() {
    let registry = echo_registry();
    let client = MockOpenAi::default();
    let adapter = OpenAiAdapter::new(&client, &registry);

    assert_eq!(adapter.call_with_tools("Use echo tool").unwrap(), "mock_response");

    let requests = client.requests.borrow();
    let tools = requests[0].tools.as_ref().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "echo");
}

#[test]
fn anthropic_adapter_sends_tool_list() {
    let registry = echo_registry();
    let client = MockAnthropic::default();
    let adapter = AnthropicAdapter::new(&client, &registry);

    assert_eq!(adapter.call_with_tools("Use echo tool").unwrap(), "mock_response");
    assert_eq!(adapter.generate("Hello").unwrap(), "mock_response");

    let requests = client.requests.borrow();
    assert_eq!(requests.len(), 2);
    let tools = requests[0].tools.as_ref().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "echo");
    assert!(requests[1].tools.is_none());
    assert_eq!(requests[1].max_tokens, 1024);
}

#[test]
fn autodiscover_unknown_package_fails() {
    let registry = ToolRegistry::with_modules(demo::modules());
    let err = registry.autodiscover("nonexistent.package.xyz").unwrap_err();

    assert!(matches!(err, ToolError::Import { .. }));
    assert!(err.to_string().contains("Could not import package"));
}

#[test]
fn autodiscover_plain_module_is_noop() {
    let registry = ToolRegistry::with_modules(demo::modules());
    registry.autodiscover("demo.my_tools.text_tools").unwrap();
    assert!(registry.is_empty());
}

#[test]
fn agent_discovers_demo_package() {
    let registry = ToolRegistry::with_modules(demo::modules());
    let agent = Agent::with_auto_tools("DemoAgent", "demo", &registry, demo::PACKAGE).unwrap();

    assert_eq!(agent.tool_names(), vec!["to_uppercase", "count_words"]);
    assert_eq!(
        agent.call_tool("to_uppercase", &json!({"text": "hello"})).unwrap(),
        json!("HELLO")
    );
    assert_eq!(
        agent.call_tool("count_words", &json!({"text": "a b c d"})).unwrap(),
        json!(4)
    );

    // Discovering again leaves the registry as it was.
    registry.autodiscover(demo::PACKAGE).unwrap();
    assert_eq!(registry.len(), 2);

    let listed: Vec<Value> = serde_json::from_str(&agent.available_tools_json().unwrap()).unwrap();
    assert_eq!(listed, registry.get_json().unwrap());
}

#[test]
fn duplicate_keeps_first_and_lookups_name_the_tool() {
    let registry = echo_registry();
    let err = registry
        .register(
            ToolRegistration::new().name("echo").description("replacement"),
            ToolFn::new(|_args: &Value| Ok(json!("replaced"))),
        )
        .unwrap_err();
    assert!(err.to_string().contains("already registered"));

    let handler = registry.get_callable("echo").unwrap();
    assert_eq!(handler(&json!({"msg": "hi"})).unwrap(), json!("echo:hi"));

    let message = registry.get_callable("foo_bar_baz").err().unwrap().to_string();
    assert!(message.contains("foo_bar_baz"));
    assert!(!message.contains("None"));
}

#[test]
fn serialized_schemas_rebuild_registered_schemas() {
    let registry = ToolRegistry::with_modules(demo::modules());
    registry.autodiscover(demo::PACKAGE).unwrap();
    registry
        .register(
            ToolRegistration::new().name("search").input_schema(json!({
                "properties": {
                    "query": {"type": "string", "description": "search terms"},
                    "tags": {"type": "array", "items": {"type": "string"}},
                    "mode": {"type": "string", "enum": ["fast", "deep"]},
                    "filter": {
                        "type": "object",
                        "properties": {"lang": {"type": "string"}},
                        "required": ["lang"]
                    }
                },
                "required": ["query"]
            })),
            ToolFn::new(|_args: &Value| Ok(Value::Null)),
        )
        .unwrap();

    let tools = registry.get_json().unwrap();
    assert_eq!(tools.len(), 3);
    for tool in &tools {
        let name = tool["name"].as_str().unwrap();
        let rebuilt = InputSchema::from_value(tool["input_schema"].clone()).unwrap();
        assert_eq!(rebuilt, registry.get(name).unwrap().input_schema);
    }
}
