// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Unliteration of every module listed in a project.
//!
//! The [`Unliterator`] resolves each module's files, asks the staleness
//! oracle whether its outputs are out of date, and regenerates them when
//! needed. Progress is reported through an injected [`Reporter`] rather than
//! printed directly.

use crate::classify::PrefixTable;
use crate::error::{Result, UnlitError};
use crate::output::{write_outputs, WriteMode};
use crate::paths::{Extensions, ModulePaths};
use crate::staleness::Freshness;
use std::path::Path;

/// What happened to a single module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleOutcome {
    /// Both outputs were rewritten; `lines` is the line count of each.
    Regenerated {
        /// Lines written to each output.
        lines: usize,
    },
    /// The literate source is older than both outputs.
    UpToDate,
    /// The module has no literate source.
    NoSource,
}

/// Receives progress notifications from an [`Unliterator`].
///
/// All methods default to doing nothing.
pub trait Reporter {
    /// Called before a stale module is regenerated.
    fn regenerating(&self, _module: &str) {}

    /// Called after a module was regenerated.
    fn regenerated(&self, _module: &str, _lines: usize) {}

    /// Called for modules that are up to date or have no literate source.
    fn skipped(&self, _module: &str, _outcome: ModuleOutcome) {}

    /// Called when processing a module failed.
    fn failed(&self, _module: &str, _error: &UnlitError) {}
}

/// A [`Reporter`] that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn regenerating(&self, module: &str) {
        tracing::debug!("Regenerating {}", module);
    }

    fn regenerated(&self, module: &str, lines: usize) {
        tracing::info!("Unliterated {} ({} lines)", module, lines);
    }

    fn skipped(&self, module: &str, outcome: ModuleOutcome) {
        tracing::debug!("Skipping {}: {:?}", module, outcome);
    }

    fn failed(&self, module: &str, error: &UnlitError) {
        tracing::error!("Failed to unliterate {}: {}", module, error);
    }
}

/// Outcome of a whole batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Modules that were processed without error, in processing order.
    pub outcomes: Vec<(String, ModuleOutcome)>,
    /// Modules that failed, in processing order.
    pub failures: Vec<(String, UnlitError)>,
}

impl BatchReport {
    /// Names of the modules whose outputs were rewritten.
    pub fn regenerated(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, ModuleOutcome::Regenerated { .. }))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Returns `true` if no module failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts a report with failures into [`UnlitError::Batch`].
    pub fn into_result(self) -> Result<Self> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(UnlitError::Batch {
                failed: self.failures.into_iter().map(|(name, _)| name).collect(),
            })
        }
    }
}

/// Drives unliteration over a project's modules.
#[derive(Debug, Clone, Default)]
pub struct Unliterator {
    prefixes: PrefixTable,
    extensions: Extensions,
    write_mode: WriteMode,
    force: bool,
}

impl Unliterator {
    /// Creates an unliterator using the given prefix table.
    pub fn new(prefixes: PrefixTable) -> Self {
        Self {
            prefixes,
            ..Self::default()
        }
    }

    /// Overrides the file extensions.
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets how outputs are replaced.
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Regenerate modules even when their outputs are up to date.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// The prefix table in use.
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// The file extensions in use.
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Processes a single module under `source_root`.
    pub fn process_module(
        &self,
        source_root: &Path,
        module: &str,
        reporter: &dyn Reporter,
    ) -> Result<ModuleOutcome> {
        let paths = ModulePaths::resolve(source_root, module, &self.extensions)?;

        let Some(freshness) = Freshness::probe(&paths)? else {
            return Ok(ModuleOutcome::NoSource);
        };
        if !self.force && !freshness.is_stale() {
            return Ok(ModuleOutcome::UpToDate);
        }

        reporter.regenerating(module);
        let lines = write_outputs(&paths, &self.prefixes, self.write_mode)?;
        reporter.regenerated(module, lines);
        Ok(ModuleOutcome::Regenerated { lines })
    }

    /// Processes modules in the given order.
    ///
    /// A failing module does not stop the batch; every failure is collected
    /// in the returned report.
    pub fn process_all<'a, I>(
        &self,
        source_root: &Path,
        modules: I,
        reporter: &dyn Reporter,
    ) -> BatchReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = BatchReport::default();
        for module in modules {
            match self.process_module(source_root, module, reporter) {
                Ok(outcome) => {
                    if !matches!(outcome, ModuleOutcome::Regenerated { .. }) {
                        reporter.skipped(module, outcome);
                    }
                    report.outcomes.push((module.to_string(), outcome));
                }
                Err(error) => {
                    reporter.failed(module, &error);
                    report.failures.push((module.to_string(), error));
                }
            }
        }
        report
    }
}

/// Processes modules with the default prefixes, extensions, and atomic writes.
pub fn process_all<'a, I>(source_root: &Path, modules: I, reporter: &dyn Reporter) -> Result<BatchReport>
where
    I: IntoIterator<Item = &'a str>,
{
    Unliterator::default()
        .process_all(source_root, modules, reporter)
        .into_result()
}
