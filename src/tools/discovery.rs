//! Module manifest used for tool autodiscovery.
//!
//! Rust has no runtime package walking, so discovery works from an explicit
//! index of dotted module paths. Packages group modules; modules carry an init
//! function that registers their tools when the module is imported.

use super::error::ToolError;
use super::registry::ToolRegistry;
use std::collections::BTreeMap;
use std::fmt;

/// Registration side effect of importing a module.
pub type ModuleInit = fn(&ToolRegistry) -> Result<(), ToolError>;

/// One entry of a [`ModuleIndex`].
#[derive(Clone, Copy)]
pub enum ModuleEntry {
    /// Container of sub-modules; importing it has no effect of its own.
    Package,
    /// Leaf module with its registration function.
    Module(ModuleInit),
}

impl fmt::Debug for ModuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package => write!(f, "Package"),
            Self::Module(_) => write!(f, "Module(..)"),
        }
    }
}

/// Manifest of importable module paths.
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    entries: BTreeMap<String, ModuleEntry>,
}

impl ModuleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a package path such as `demo.my_tools`.
    pub fn package(mut self, path: impl Into<String>) -> Self {
        self.entries.insert(path.into(), ModuleEntry::Package);
        self
    }

    /// Declare a module path and the function that registers its tools.
    pub fn module(mut self, path: impl Into<String>, init: ModuleInit) -> Self {
        self.entries.insert(path.into(), ModuleEntry::Module(init));
        self
    }

    /// Merge another index into this one; later entries win.
    pub fn extend(&mut self, other: ModuleIndex) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, path: &str) -> Option<&ModuleEntry> {
        self.entries.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct children of `package`, in sorted path order.
    pub fn submodules<'a>(
        &'a self,
        package: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a ModuleEntry)> + 'a {
        self.entries.iter().filter_map(move |(path, entry)| {
            let rest = path.strip_prefix(package)?.strip_prefix('.')?;
            (!rest.is_empty() && !rest.contains('.')).then_some((path.as_str(), entry))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_registry: &ToolRegistry) -> Result<(), ToolError> {
        Ok(())
    }

    #[test]
    fn test_submodules_are_direct_children_only() {
        let index = ModuleIndex::new()
            .package("pkg")
            .module("pkg.b", noop)
            .module("pkg.a", noop)
            .package("pkg.sub")
            .module("pkg.sub.deep", noop)
            .module("pkgx.other", noop);

        let children: Vec<&str> = index.submodules("pkg").map(|(path, _)| path).collect();
        assert_eq!(children, vec!["pkg.a", "pkg.b", "pkg.sub"]);
    }

    #[test]
    fn test_lookup() {
        let index = ModuleIndex::new().package("pkg").module("pkg.a", noop);
        assert!(matches!(index.get("pkg"), Some(ModuleEntry::Package)));
        assert!(matches!(index.get("pkg.a"), Some(ModuleEntry::Module(_))));
        assert!(index.get("pkg.missing").is_none());
    }

    #[test]
    fn test_extend_merges_entries() {
        let mut index = ModuleIndex::new().package("a");
        index.extend(ModuleIndex::new().package("b"));
        assert!(index.get("a").is_some());
        assert!(index.get("b").is_some());
    }
}
