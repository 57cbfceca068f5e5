// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! User-facing console output.
//!
//! Every line starts with a two-character tag so the tool's own messages
//! stand out from compiler output:
//!
//! ```text
//! >> Unliterating modules      action
//! :: Data.Tree                 info
//! ** No files for 'Foo'        warning
//! !! Could not open ...        error
//! ```

use cl_lit::{ModuleOutcome, Reporter, UnlitError};
use console::style;

/// Prints an action the tool is about to take.
pub fn action(message: impl std::fmt::Display) {
    println!("{} {}", style(">>").cyan().bold(), message);
}

/// Prints an informational line.
pub fn info(message: impl std::fmt::Display) {
    println!("{} {}", style("::").green(), message);
}

/// Prints a warning to stderr.
pub fn warning(message: impl std::fmt::Display) {
    eprintln!("{} {}", style("**").yellow(), message);
}

/// Prints an error to stderr.
pub fn error(message: impl std::fmt::Display) {
    eprintln!("{} {}", style("!!").red().bold(), message);
}

/// Quotes a name the way messages refer to modules and commands.
pub fn quote(s: &str) -> String {
    format!("'{}'", s)
}

/// A [`Reporter`] that prints regenerated modules and failures to the console
/// and forwards everything else to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn regenerated(&self, module: &str, lines: usize) {
        info(module);
        tracing::debug!("{} lines written for {}", lines, module);
    }

    fn skipped(&self, module: &str, outcome: ModuleOutcome) {
        match outcome {
            ModuleOutcome::UpToDate => tracing::debug!("Everything up-to-date for {}", module),
            ModuleOutcome::NoSource => tracing::debug!("No literate file for {}", module),
            ModuleOutcome::Regenerated { .. } => {}
        }
    }

    fn failed(&self, module: &str, err: &UnlitError) {
        error(format!("Could not unliterate {}: {}", quote(module), err));
    }
}
