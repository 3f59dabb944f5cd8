//! Input schema model for tool parameters.
//!
//! A restricted JSON-Schema shape: an object with named properties, each of
//! which may nest `items` (arrays) or `properties` (objects). Construction
//! checks structure only; argument values are never validated here.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Structural failures while building a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("items field is required when type is 'array'")]
    MissingItems,

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// JSON type of a single property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
        }
    }
}

/// A named schema leaf (or nested node) describing one parameter.
///
/// Every optional field is `None` unless set, and `None` fields are left out
/// of the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PropertySpec")]
pub struct Property {
    #[serde(rename = "type")]
    kind: PropertyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<Property>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<String, Property>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,
}

/// Raw structural description, checked before it becomes a [`Property`].
#[derive(Deserialize)]
struct PropertySpec {
    #[serde(rename = "type")]
    kind: PropertyType,
    description: Option<String>,
    items: Option<Box<Property>>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<Value>>,
    properties: Option<BTreeMap<String, Property>>,
    required: Option<Vec<String>>,
}

impl TryFrom<PropertySpec> for Property {
    type Error = SchemaError;

    fn try_from(spec: PropertySpec) -> Result<Self, Self::Error> {
        if spec.kind == PropertyType::Array && spec.items.is_none() {
            return Err(SchemaError::MissingItems);
        }
        Ok(Self {
            kind: spec.kind,
            description: spec.description,
            items: spec.items,
            enum_values: spec.enum_values,
            properties: spec.properties,
            required: spec.required,
        })
    }
}

impl Property {
    /// Bare property of the given type. Arrays need an item type, so use
    /// [`Property::array`] for those.
    pub fn new(kind: PropertyType) -> Result<Self, SchemaError> {
        if kind == PropertyType::Array {
            return Err(SchemaError::MissingItems);
        }
        Ok(Self::bare(kind))
    }

    /// Array property whose elements follow `items`.
    pub fn array(items: Property) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::bare(PropertyType::Array)
        }
    }

    /// Object property with nested fields.
    pub fn object(properties: BTreeMap<String, Property>, required: Vec<String>) -> Self {
        Self {
            properties: Some(properties),
            required: Some(required),
            ..Self::bare(PropertyType::Object)
        }
    }

    /// Build from a structural description such as `{"type": "string"}`.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }

    fn bare(kind: PropertyType) -> Self {
        Self {
            kind,
            description: None,
            items: None,
            enum_values: None,
            properties: None,
            required: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.enum_values = Some(values);
        self
    }

    pub fn kind(&self) -> PropertyType {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn items(&self) -> Option<&Property> {
        self.items.as_deref()
    }

    pub fn enum_values(&self) -> Option<&[Value]> {
        self.enum_values.as_deref()
    }

    pub fn properties(&self) -> Option<&BTreeMap<String, Property>> {
        self.properties.as_ref()
    }

    pub fn required(&self) -> Option<&[String]> {
        self.required.as_deref()
    }
}

// ---------------------------------------------------------------------------
// InputSchema
// ---------------------------------------------------------------------------

/// The only schema kind a tool input may have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    #[default]
    Object,
}

/// Object-shaped schema describing a tool's keyword arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSchema {
    #[serde(rename = "type")]
    kind: SchemaKind,
    properties: BTreeMap<String, Property>,
    required: Vec<String>,
}

impl InputSchema {
    /// Empty object schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a structural description; absent fields take their defaults
    /// and raw property objects are coerced into [`Property`] values.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize to a plain JSON object with absent fields omitted.
    pub fn to_value(&self) -> Result<Value, SchemaError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn with_property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn properties(&self) -> &BTreeMap<String, Property> {
        &self.properties
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Names listed in `required` that have no matching property.
    pub fn undeclared_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| !self.properties.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}
