// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! Clean command line tools library.
//!
//! This crate provides the command-line interface for managing Clean
//! projects: scaffolding, module file management, literate source
//! unliteration, and driving the Clean compiler.
//!
//! # Usage
//!
//! This crate is primarily used through the `cl` binary:
//!
//! ```bash
//! cl init hello        # Create a new project
//! cl add Data.Tree     # Create Data/Tree.dcl and Data/Tree.icl
//! cl unlit             # Regenerate modules from .lcl sources
//! cl build             # Unliterate, then compile with clm
//! cl run               # Run the built executable
//! ```
//!
//! # Configuration
//!
//! Projects are configured via `Project.toml` at the project root.

/// CLI commands.
pub mod commands;
/// Project configuration from `Project.toml`.
pub mod config;
/// Console output helpers.
pub mod output;
