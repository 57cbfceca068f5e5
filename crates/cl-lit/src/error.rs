// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for unliteration.
//!
//! A missing literate source is not an error: it is reported as
//! [`ModuleOutcome::NoSource`](crate::ModuleOutcome::NoSource). Everything
//! listed here is fatal for the module it happened in.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for unliteration.
#[derive(Error, Debug)]
pub enum UnlitError {
    /// Reading, writing, or inspecting a file failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// The file the operation was performed on.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A module identifier cannot be mapped onto a path.
    #[error("Invalid module name: {0:?}")]
    InvalidModuleName(String),

    /// A prefix table is unusable for classification.
    #[error("Invalid prefix table: {0}")]
    InvalidPrefixes(String),

    /// One or more modules in a batch failed.
    #[error("Unliteration failed for {} module(s): {}", failed.len(), failed.join(", "))]
    Batch {
        /// Names of the modules that failed, in processing order.
        failed: Vec<String>,
    },
}

impl UnlitError {
    /// Wraps an IO error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UnlitError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with [`UnlitError`].
pub type Result<T> = std::result::Result<T, UnlitError>;
