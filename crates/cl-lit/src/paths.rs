// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Mapping of dotted module identifiers onto source files.

use crate::error::{Result, UnlitError};
use std::path::{Path, PathBuf};

/// File extensions of the three files that make up a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    /// Literate source extension (default: "lcl").
    pub literate: String,
    /// Definition module extension (default: "dcl").
    pub definition: String,
    /// Implementation module extension (default: "icl").
    pub implementation: String,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            literate: "lcl".to_string(),
            definition: "dcl".to_string(),
            implementation: "icl".to_string(),
        }
    }
}

/// Resolved locations of a module's literate source and derived outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePaths {
    /// The literate source (`Foo/Bar.lcl`).
    pub literate: PathBuf,
    /// The definition output (`Foo/Bar.dcl`).
    pub definition: PathBuf,
    /// The implementation output (`Foo/Bar.icl`).
    pub implementation: PathBuf,
}

impl ModulePaths {
    /// Resolves `Foo.Bar` under `source_root` to `<root>/Foo/Bar.<ext>`.
    ///
    /// # Errors
    ///
    /// Returns [`UnlitError::InvalidModuleName`] for empty names and names
    /// with empty segments.
    pub fn resolve(source_root: &Path, module: &str, extensions: &Extensions) -> Result<Self> {
        let base = source_root.join(module_relative_path(module)?);
        Ok(Self {
            literate: base.with_extension(&extensions.literate),
            definition: base.with_extension(&extensions.definition),
            implementation: base.with_extension(&extensions.implementation),
        })
    }

    /// All three paths, literate source first.
    pub fn all(&self) -> [&Path; 3] {
        [&self.literate, &self.definition, &self.implementation]
    }
}

/// Converts a dotted module name into a relative path without extension.
///
/// # Errors
///
/// Returns [`UnlitError::InvalidModuleName`] for `""`, `"Foo..Bar"`,
/// `".Foo"`, `"Foo."` and segments that would escape the source root.
pub fn module_relative_path(module: &str) -> Result<PathBuf> {
    if module.is_empty() {
        return Err(UnlitError::InvalidModuleName(module.to_string()));
    }

    let mut path = PathBuf::new();
    for segment in module.split('.') {
        if segment.is_empty() || segment.contains(['/', '\\']) {
            return Err(UnlitError::InvalidModuleName(module.to_string()));
        }
        path.push(segment);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_nested_module() {
        let paths =
            ModulePaths::resolve(Path::new("src"), "Data.Tree.Red", &Extensions::default())
                .unwrap();
        let base = Path::new("src").join("Data").join("Tree").join("Red");
        assert_eq!(paths.literate, base.with_extension("lcl"));
        assert_eq!(paths.definition, base.with_extension("dcl"));
        assert_eq!(paths.implementation, base.with_extension("icl"));
    }

    #[test]
    fn test_resolve_top_level_module() {
        let paths = ModulePaths::resolve(Path::new(""), "Main", &Extensions::default()).unwrap();
        assert_eq!(paths.literate, PathBuf::from("Main.lcl"));
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "Foo..Bar", ".Foo", "Foo.", "Foo/Bar", "a.b\\c"] {
            assert!(
                matches!(module_relative_path(name), Err(UnlitError::InvalidModuleName(_))),
                "name {:?}",
                name
            );
        }
    }
}
