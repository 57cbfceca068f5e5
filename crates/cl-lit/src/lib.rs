// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # cl-lit
//!
//! Literate source support for Clean projects.
//!
//! A literate module (`Foo/Bar.lcl`) interleaves prose with tagged code
//! lines. Unliteration derives the definition module (`Foo/Bar.dcl`) and the
//! implementation module (`Foo/Bar.icl`) from it, keeping both outputs
//! line-aligned with the source.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cl_lit::{PrefixTable, TracingReporter, Unliterator};
//! use std::path::Path;
//!
//! let unlit = Unliterator::new(PrefixTable::default());
//! let report = unlit.process_all(Path::new("src"), ["Main", "Data.Tree"], &TracingReporter);
//! for (module, outcome) in &report.outcomes {
//!     println!("{}: {:?}", module, outcome);
//! }
//! ```

/// Batch processing of project modules.
pub mod batch;
/// Line classification by prefix.
pub mod classify;
/// Error types.
pub mod error;
/// Writing derived outputs.
pub mod output;
/// Module name to file path mapping.
pub mod paths;
/// Modification-time based freshness checks.
pub mod staleness;
/// The line-aligned unliteration transform.
pub mod transform;

pub use batch::{process_all, BatchReport, ModuleOutcome, Reporter, TracingReporter, Unliterator};
pub use classify::{classify, Convention, LineKind, PrefixTable};
pub use error::{Result, UnlitError};
pub use output::{write_outputs, WriteMode};
pub use paths::{module_relative_path, Extensions, ModulePaths};
pub use staleness::{needs_regeneration, Freshness};
pub use transform::{unliterate, unliterate_to, StreamError, Unliterated};
