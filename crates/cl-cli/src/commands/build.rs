// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Build and run commands.
//!
//! Building unliterates the project first, then hands the sources to the
//! Clean compiler (`clm`), or to `cpm make` for projects managed by the
//! Clean Project Manager.

use crate::commands::unlit;
use crate::config::Config;
use crate::output::{self, quote};
use anyhow::Context;
use console::style;
use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::Instant;

/// The Clean make tool.
pub const CLM: &str = "clm";
/// The Clean Project Manager.
pub const CPM: &str = "cpm";

/// Arguments passed to `clm` for the project.
pub fn compiler_args(config: &Config) -> Vec<String> {
    let mut args = Vec::with_capacity(2 * config.project.libraries.len() + 5);
    args.push("-I".to_string());
    args.push(config.project.sourcedir.clone());
    for lib in &config.project.libraries {
        args.push("-IL".to_string());
        args.push(lib.clone());
    }
    args.push(config.main_module().to_string());
    args.push("-o".to_string());
    args.push(config.output_name().to_string());
    args
}

/// Runs the build command.
pub fn run(config: &Config, project_dir: &Path, cpm: bool) -> anyhow::Result<()> {
    unlit::run(config, project_dir, false)?;

    output::action("Building project");
    let start = Instant::now();

    let mut command = if cpm {
        let mut command = Command::new(CPM);
        command.arg("make");
        command
    } else {
        let mut command = Command::new(CLM);
        command.args(compiler_args(config));
        command
    };
    command.current_dir(project_dir);

    let tool = if cpm { CPM } else { CLM };
    tracing::debug!("Running {:?}", command);
    let status = spawn_and_wait(&mut command, tool)?;
    check_status(tool, status)?;

    println!(
        "{} {}",
        style("Build complete in").dim(),
        style(format!("{}ms", start.elapsed().as_millis())).cyan()
    );
    Ok(())
}

/// Runs the built executable with the given arguments.
pub fn run_executable(config: &Config, project_dir: &Path, args: &[String]) -> anyhow::Result<()> {
    output::action("Running project");

    // The child runs inside the project, so a relative path would resolve twice
    let executable = match fs::canonicalize(config.output_path(project_dir)) {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::NotFound => anyhow::bail!(
            "{} does not exist, run 'cl build' first",
            config.output_path(project_dir).display()
        ),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Could not resolve {}", config.output_path(project_dir).display())
            })
        }
    };

    let mut command = Command::new(&executable);
    command.args(args).current_dir(project_dir);
    let status = spawn_and_wait(&mut command, &executable.to_string_lossy())?;
    check_status(&executable.to_string_lossy(), status)
}

pub(crate) fn spawn_and_wait(command: &mut Command, tool: &str) -> anyhow::Result<ExitStatus> {
    match command.status() {
        Ok(status) => Ok(status),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(anyhow::anyhow!(
            "Could not find {}, is it on your PATH?",
            quote(tool)
        )),
        Err(e) => Err(e).with_context(|| format!("Could not run {}", quote(tool))),
    }
}

pub(crate) fn check_status(tool: &str, status: ExitStatus) -> anyhow::Result<()> {
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("{} failed with {}", quote(tool), status)
    }
}
