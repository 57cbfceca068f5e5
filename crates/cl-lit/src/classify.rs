// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Line classification for literate sources.
//!
//! Every line of a literate module is tagged by a fixed prefix:
//!
//! ```text
//! >> module Data.Tree          module header, routed to both outputs
//! >> insert :: a (Tree a) -> Tree a
//! >  insert x Leaf = Node x Leaf Leaf
//! Anything else is prose and becomes a blank line.
//! ```
//!
//! Matching is byte-exact. The exported (`">> "`) and internal (`">  "`)
//! markers have the same width and differ only in their second character,
//! so no trimming or case folding is ever applied.

use crate::error::{Result, UnlitError};
use std::str::FromStr;

/// The classification of a single literate line.
///
/// Payloads borrow from the input line with the matched marker removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens a module declaration; the payload starts with the keyword.
    ModuleHeader(&'a str),
    /// Part of the public interface, copied to both outputs.
    Exported(&'a str),
    /// Implementation only; the definition output gets a blank line.
    Internal(&'a str),
    /// Prose or anything unrecognised; both outputs get a blank line.
    Plain,
}

impl<'a> LineKind<'a> {
    /// Renders the line for the definition output.
    pub fn definition_line(&self) -> String {
        match self {
            LineKind::ModuleHeader(code) => format!("definition {}", code),
            LineKind::Exported(code) => (*code).to_string(),
            LineKind::Internal(_) | LineKind::Plain => String::new(),
        }
    }

    /// Renders the line for the implementation output.
    pub fn implementation_line(&self) -> String {
        match self {
            LineKind::ModuleHeader(code) => format!("implementation {}", code),
            LineKind::Exported(code) | LineKind::Internal(code) => (*code).to_string(),
            LineKind::Plain => String::new(),
        }
    }
}

/// A named set of markers used by a literate source corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convention {
    /// `">> "` for exported lines, `">  "` for internal lines.
    #[default]
    Double,
    /// `"< "` for exported lines, `"> "` for internal lines.
    Single,
}

impl Convention {
    /// Returns the string identifier for this convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Double => "double",
            Convention::Single => "single",
        }
    }
}

impl FromStr for Convention {
    type Err = UnlitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "double" => Ok(Convention::Double),
            "single" => Ok(Convention::Single),
            other => Err(UnlitError::InvalidPrefixes(format!(
                "unknown convention {:?} (expected \"double\" or \"single\")",
                other
            ))),
        }
    }
}

/// The markers that decide how a literate line is routed.
///
/// Precedence is header, then exported, then internal; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    header_marker: String,
    header_keyword: String,
    exported: String,
    internal: String,
}

impl PrefixTable {
    /// Builds a custom prefix table.
    ///
    /// # Errors
    ///
    /// Returns [`UnlitError::InvalidPrefixes`] if the exported or internal
    /// marker is empty, if they are identical, or if the header keyword is
    /// empty.
    pub fn new(
        header_marker: impl Into<String>,
        header_keyword: impl Into<String>,
        exported: impl Into<String>,
        internal: impl Into<String>,
    ) -> Result<Self> {
        let table = Self {
            header_marker: header_marker.into(),
            header_keyword: header_keyword.into(),
            exported: exported.into(),
            internal: internal.into(),
        };

        if table.exported.is_empty() || table.internal.is_empty() {
            return Err(UnlitError::InvalidPrefixes(
                "exported and internal markers must not be empty".to_string(),
            ));
        }
        if table.exported == table.internal {
            return Err(UnlitError::InvalidPrefixes(format!(
                "exported and internal markers are both {:?}",
                table.exported
            )));
        }
        if table.header_keyword.is_empty() {
            return Err(UnlitError::InvalidPrefixes(
                "header keyword must not be empty".to_string(),
            ));
        }

        Ok(table)
    }

    /// Returns the built-in table for a convention.
    pub fn for_convention(convention: Convention) -> Self {
        let (marker, exported, internal) = match convention {
            Convention::Double => (">> ", ">> ", ">  "),
            Convention::Single => ("< ", "< ", "> "),
        };
        Self {
            header_marker: marker.to_string(),
            header_keyword: "module".to_string(),
            exported: exported.to_string(),
            internal: internal.to_string(),
        }
    }

    /// Marker stripped from module header lines.
    pub fn header_marker(&self) -> &str {
        &self.header_marker
    }

    /// Keyword that must follow the header marker.
    pub fn header_keyword(&self) -> &str {
        &self.header_keyword
    }

    /// Marker for exported lines.
    pub fn exported(&self) -> &str {
        &self.exported
    }

    /// Marker for internal lines.
    pub fn internal(&self) -> &str {
        &self.internal
    }

    /// Classifies one line (without its line terminator).
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(rest) = line.strip_prefix(self.header_marker.as_str()) {
            if rest.starts_with(self.header_keyword.as_str()) {
                return LineKind::ModuleHeader(rest);
            }
        }
        if let Some(code) = line.strip_prefix(self.exported.as_str()) {
            return LineKind::Exported(code);
        }
        if let Some(code) = line.strip_prefix(self.internal.as_str()) {
            return LineKind::Internal(code);
        }
        LineKind::Plain
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::for_convention(Convention::Double)
    }
}

/// Classifies a line with the default (`double`) convention.
pub fn classify(line: &str) -> LineKind<'_> {
    PrefixTable::default().classify(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_header() {
        assert_eq!(
            classify(">> module Foo.Bar"),
            LineKind::ModuleHeader("module Foo.Bar")
        );
    }

    #[test]
    fn test_exported_and_internal() {
        assert_eq!(
            classify(">> someFn :: Int -> Int"),
            LineKind::Exported("someFn :: Int -> Int")
        );
        assert_eq!(
            classify(">  someFn x = x + 1"),
            LineKind::Internal("someFn x = x + 1")
        );
    }

    #[test]
    fn test_payload_keeps_inner_whitespace() {
        assert_eq!(classify(">>   indented"), LineKind::Exported("  indented"));
        assert_eq!(classify(">  \tx = 1 "), LineKind::Internal("\tx = 1 "));
    }

    #[test]
    fn test_plain_lines() {
        for line in [
            "// just a comment",
            "",
            ">>",
            ">",
            "> single space is not a marker here",
            " >> leading space",
            ">>module without space",
            "<< module Foo",
        ] {
            assert_eq!(classify(line), LineKind::Plain, "line {:?}", line);
        }
    }

    #[test]
    fn test_header_needs_keyword() {
        assert_eq!(classify(">> modules"), LineKind::ModuleHeader("modules"));
        assert_eq!(classify(">> Module Foo"), LineKind::Exported("Module Foo"));
        assert_eq!(classify(">  module Foo"), LineKind::Internal("module Foo"));
    }

    #[test]
    fn test_single_convention() {
        let table = PrefixTable::for_convention(Convention::Single);
        assert_eq!(
            table.classify("< module Foo"),
            LineKind::ModuleHeader("module Foo")
        );
        assert_eq!(table.classify("< f :: Int"), LineKind::Exported("f :: Int"));
        assert_eq!(table.classify("> f = 1"), LineKind::Internal("f = 1"));
        assert_eq!(table.classify(">> f = 1"), LineKind::Plain);
    }

    #[test]
    fn test_rendering() {
        let header = LineKind::ModuleHeader("module Foo.Bar");
        assert_eq!(header.definition_line(), "definition module Foo.Bar");
        assert_eq!(header.implementation_line(), "implementation module Foo.Bar");

        let internal = LineKind::Internal("x = 1");
        assert_eq!(internal.definition_line(), "");
        assert_eq!(internal.implementation_line(), "x = 1");

        assert_eq!(LineKind::Plain.definition_line(), "");
        assert_eq!(LineKind::Plain.implementation_line(), "");
    }

    #[test]
    fn test_invalid_tables() {
        assert!(PrefixTable::new(">> ", "module", "", ">  ").is_err());
        assert!(PrefixTable::new(">> ", "module", ">> ", ">> ").is_err());
        assert!(PrefixTable::new(">> ", "", ">> ", ">  ").is_err());
        assert!(PrefixTable::new("%% ", "module", "%% ", "%  ").is_ok());
    }

    #[test]
    fn test_convention_from_str() {
        assert_eq!("double".parse::<Convention>().unwrap(), Convention::Double);
        assert_eq!("single".parse::<Convention>().unwrap(), Convention::Single);
        assert!("Double".parse::<Convention>().is_err());
    }
}
