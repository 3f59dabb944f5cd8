//! Registration sugar for plain functions.

/// Define a tool function and a companion `<name>_tool()` constructor.
///
/// The function itself is emitted unchanged. The companion returns a
/// [`ToolFn`](crate::tools::ToolFn) carrying the function's identifier and its
/// doc comment, which registration falls back on for the tool's name and
/// description.
///
/// ```
/// use anyhow::Result;
/// use corefoundry::tools::{ToolRegistration, ToolRegistry};
/// use serde_json::{json, Value};
///
/// corefoundry::tool_fn! {
///     /// Reverse a string.
///     pub fn reverse(args: &Value) -> Result<Value> {
///         let text = args["text"].as_str().unwrap_or_default();
///         Ok(json!(text.chars().rev().collect::<String>()))
///     }
/// }
///
/// let registry = ToolRegistry::new();
/// registry.register(ToolRegistration::new(), reverse_tool()).unwrap();
/// assert_eq!(registry.get("reverse").unwrap().description, "Reverse a string.");
/// assert_eq!(reverse(&json!({"text": "abc"})).unwrap(), json!("cba"));
/// ```
#[macro_export]
macro_rules! tool_fn {
    (
        $(#[doc = $doc:literal])*
        $vis:vis fn $name:ident ( $($params:tt)* ) -> $ret:ty $body:block
    ) => {
        $(#[doc = $doc])*
        $vis fn $name($($params)*) -> $ret $body

        $crate::__paste! {
            $vis fn [<$name _tool>]() -> $crate::tools::ToolFn {
                $crate::tools::ToolFn::new($name)
                    .with_ident(stringify!($name))
                    .with_doc_lines(&[$($doc),*])
            }
        }
    };
}
