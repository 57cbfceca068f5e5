// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Unliterate command: regenerates definition and implementation modules
//! from literate sources.

use crate::config::Config;
use crate::output::{self, ConsoleReporter};
use std::path::Path;

/// Unliterates `modules` followed by `othermodules`.
///
/// Every module is attempted; the command fails if any of them failed.
pub fn run(config: &Config, project_dir: &Path, force: bool) -> anyhow::Result<()> {
    output::action("Unliterating modules");

    let unlit = config.unliterator()?.with_force(force);
    let source_dir = config.source_dir(project_dir);
    let report = unlit.process_all(&source_dir, config.all_modules(), &ConsoleReporter);

    tracing::debug!(
        "Unliterated {} of {} module(s), {} failed",
        report.regenerated().len(),
        report.outcomes.len() + report.failures.len(),
        report.failures.len()
    );

    report.into_result()?;
    Ok(())
}
