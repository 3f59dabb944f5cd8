//! Name-keyed store of tool definitions.

use super::definition::{ToolDefinition, ToolFn, ToolHandler, DEFAULT_DESCRIPTION};
use super::discovery::{ModuleEntry, ModuleIndex, ModuleInit};
use super::error::ToolError;
use super::schema::InputSchema;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

static GLOBAL: Lazy<ToolRegistry> = Lazy::new(ToolRegistry::new);

/// Metadata supplied at registration time. Every field is optional and falls
/// back to the callable's identity (name, doc) or to an empty object schema.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistration {
    name: Option<String>,
    description: Option<String>,
    input_schema: Option<Value>,
}

impl ToolRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Raw structural description, e.g. `{"properties": {...}, "required": [...]}`.
    pub fn input_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }
}

#[derive(Default)]
struct Catalog {
    tools: Vec<ToolDefinition>,
    by_name: HashMap<String, usize>,
    modules: ModuleIndex,
    imported: HashSet<String>,
}

impl Catalog {
    fn insert(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        if self.by_name.contains_key(&definition.name) {
            return Err(ToolError::AlreadyRegistered(definition.name));
        }
        self.by_name
            .insert(definition.name.clone(), self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.by_name.get(name).map(|&idx| &self.tools[idx])
    }
}

/// Registry of tools keyed by name.
///
/// Tools are kept in registration order. The catalog sits behind a lock so a
/// shared `&ToolRegistry` can register, discover and look up; handlers are
/// always invoked by the caller, outside the lock.
#[derive(Default)]
pub struct ToolRegistry {
    catalog: RwLock<Catalog>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that can autodiscover the packages declared in `modules`.
    pub fn with_modules(modules: ModuleIndex) -> Self {
        let registry = Self::new();
        registry.add_modules(modules);
        registry
    }

    /// Process-wide default registry.
    pub fn global() -> &'static ToolRegistry {
        &GLOBAL
    }

    /// Make more module paths available to [`autodiscover`](Self::autodiscover).
    pub fn add_modules(&self, modules: ModuleIndex) {
        self.write().modules.extend(modules);
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Register `tool` under the metadata in `registration`.
    ///
    /// Fails without touching the registry when the schema is malformed or
    /// the resolved name is already taken.
    pub fn register(&self, registration: ToolRegistration, tool: ToolFn) -> Result<(), ToolError> {
        let name = registration
            .name
            .filter(|name| !name.is_empty())
            .or_else(|| tool.ident().map(str::to_string))
            .ok_or(ToolError::Unnamed)?;

        let description = registration
            .description
            .filter(|description| !description.is_empty())
            .or_else(|| tool.doc().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let input_schema = match registration.input_schema {
            Some(raw) => InputSchema::from_value(raw).map_err(|source| ToolError::InvalidSchema {
                tool: name.clone(),
                source,
            })?,
            None => InputSchema::default(),
        };

        let undeclared = input_schema.undeclared_required();
        if !undeclared.is_empty() {
            warn!(
                "Tool '{}' requires parameters with no schema entry: {}",
                name,
                undeclared.join(", ")
            );
        }

        let definition =
            ToolDefinition::new(name, description, input_schema).with_handler(tool.into_handler());
        self.insert(definition)
    }

    /// Store a prebuilt definition, with or without a handler.
    pub fn insert(&self, definition: ToolDefinition) -> Result<(), ToolError> {
        let name = definition.name.clone();
        self.write().insert(definition)?;
        debug!("Registered tool: {}", name);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Discovery
    // -----------------------------------------------------------------------

    /// Import `package` and each of its direct sub-modules, running their
    /// registration functions.
    ///
    /// A path naming a plain module is accepted and left alone. Modules already
    /// imported into this registry are skipped.
    pub fn autodiscover(&self, package: &str) -> Result<(), ToolError> {
        let catalog = self.read();
        let pending: Vec<(String, ModuleInit)> = match catalog.modules.get(package) {
            None => {
                return Err(ToolError::Import {
                    package: package.to_string(),
                    cause: format!("No module named '{}'", package),
                })
            }
            Some(ModuleEntry::Module(_)) => {
                debug!("'{}' is a module, not a package; nothing to discover", package);
                return Ok(());
            }
            Some(ModuleEntry::Package) => catalog
                .modules
                .submodules(package)
                .filter_map(|(path, entry)| match entry {
                    ModuleEntry::Module(init) => Some((path.to_string(), *init)),
                    ModuleEntry::Package => None,
                })
                .filter(|(path, _)| !catalog.imported.contains(path))
                .collect(),
        };
        drop(catalog);

        let mut imported = 0;
        for (path, init) in pending {
            if self.read().imported.contains(&path) {
                continue;
            }
            init(self)?;
            self.write().imported.insert(path.clone());
            debug!("Imported tool module: {}", path);
            imported += 1;
        }

        info!("Discovered {} module(s) in '{}'", imported, package);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lookup & serialization
    // -----------------------------------------------------------------------

    /// Every stored definition, in registration order.
    pub fn get_all(&self) -> Vec<ToolDefinition> {
        self.read().tools.clone()
    }

    pub fn get(&self, name: &str) -> Option<ToolDefinition> {
        self.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().by_name.contains_key(name)
    }

    /// Tool list as plain JSON objects `{name, description, input_schema}`,
    /// ready to drop into a provider request.
    pub fn get_json(&self) -> Result<Vec<Value>, ToolError> {
        self.read()
            .tools
            .iter()
            .map(|tool| {
                serde_json::to_value(tool).map_err(|source| ToolError::Serialization {
                    tool: tool.name.clone(),
                    source,
                })
            })
            .collect()
    }

    /// The callable registered under `name`. Arguments are not checked
    /// against the schema.
    pub fn get_callable(&self, name: &str) -> Result<ToolHandler, ToolError> {
        let catalog = self.read();
        let tool = catalog
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        tool.handler()
            .cloned()
            .ok_or_else(|| ToolError::NoCallable(name.to_string()))
    }

    pub fn list_names(&self) -> Vec<String> {
        self.read().tools.iter().map(|t| t.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.read().tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().tools.is_empty()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.list_names())
            .finish_non_exhaustive()
    }
}
