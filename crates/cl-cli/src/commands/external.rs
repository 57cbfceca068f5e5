// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! External subcommands.
//!
//! Any executable named `cl-<command>` on the `PATH` can be run as
//! `cl <command>`.

use crate::commands::build::{check_status, spawn_and_wait};
use crate::output::quote;
use std::path::Path;
use std::process::Command;

/// Name of the executable that implements an external subcommand.
pub fn executable_name(command: &str) -> String {
    format!("cl-{}", command)
}

/// Runs `cl-<args[0]>` with the remaining arguments in `project_dir`.
pub fn run(project_dir: &Path, args: &[String]) -> anyhow::Result<()> {
    let Some((name, rest)) = args.split_first() else {
        anyhow::bail!("No command given, run 'cl help' to see a list of all available commands");
    };

    let executable = executable_name(name);
    let mut command = Command::new(&executable);
    command.args(rest).current_dir(project_dir);

    tracing::debug!("Running external command {:?}", command);
    let status = spawn_and_wait(&mut command, &executable).map_err(|_| {
        anyhow::anyhow!(
            "{} is not a valid command, run 'cl help' to see a list of all available commands",
            quote(name)
        )
    })?;
    check_status(&executable, status)
}
