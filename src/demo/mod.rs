//! Example tool package used by the binary and the integration tests.

pub mod text_tools;

use crate::tools::ModuleIndex;

/// Dotted path of the demo package.
pub const PACKAGE: &str = "demo.my_tools";

/// Manifest declaring the demo package and its modules.
pub fn modules() -> ModuleIndex {
    ModuleIndex::new()
        .package(PACKAGE)
        .module("demo.my_tools.text_tools", text_tools::register)
}
