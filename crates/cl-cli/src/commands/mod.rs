// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! This module contains the implementations for all `cl` commands:
//!
//! - `init`: Initialize a new Clean project
//! - `info`: Show the project configuration
//! - `add`, `remove`, `move`: Manage module files
//! - `unlit`: Regenerate modules from literate sources
//! - `build`, `run`: Compile and run the project
//! - `clean`, `prune`: Remove build artifacts
//!
//! Commands receive the project directory explicitly and never change the
//! process working directory.

/// Build and run commands.
pub mod build;
/// Clean and prune commands.
pub mod clean;
/// External `cl-<command>` subcommands.
pub mod external;
/// Project information command.
pub mod info;
/// Project initialization command.
pub mod init;
/// Module add/remove/move commands.
pub mod module;
/// Unliterate command.
pub mod unlit;
