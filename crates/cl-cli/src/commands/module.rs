// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Module file management: creating, removing, and moving modules.
//!
//! TODO: keep the module lists in Project.toml in sync on add/remove/move.

use crate::config::Config;
use crate::output::{self, quote};
use anyhow::Context;
use cl_lit::{Extensions, ModulePaths};
use std::fs;
use std::io::Write;
use std::path::Path;

fn resolve(config: &Config, project_dir: &Path, module: &str) -> anyhow::Result<ModulePaths> {
    Ok(ModulePaths::resolve(
        &config.source_dir(project_dir),
        module,
        &Extensions::default(),
    )?)
}

/// Creates the files for each module.
///
/// Plain modules get a definition and an implementation file; literate
/// modules get a single literate source with a module header.
pub fn add(config: &Config, project_dir: &Path, modules: &[String], literate: bool) -> anyhow::Result<()> {
    let prefixes = config.literate.prefix_table()?;

    for module in modules {
        output::action(format!("Creating module {}", quote(module)));
        let paths = resolve(config, project_dir, module)?;

        if literate {
            let header = format!(
                "{}{} {}\n\n",
                prefixes.header_marker(),
                prefixes.header_keyword(),
                module
            );
            create_new(&paths.literate, &header)?;
        } else {
            create_new(&paths.definition, &format!("definition module {}\n\n", module))?;
            create_new(
                &paths.implementation,
                &format!("implementation module {}\n\n", module),
            )?;
        }
    }
    Ok(())
}

fn create_new(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }
    let mut file = fs::File::options()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Could not write {}", path.display()))?;
    output::info(path.display());
    Ok(())
}

/// Removes every file (literate, definition, implementation) of each module.
pub fn remove(config: &Config, project_dir: &Path, modules: &[String]) -> anyhow::Result<()> {
    for module in modules {
        output::action(format!("Removing module {}", quote(module)));
        let paths = resolve(config, project_dir, module)?;

        let mut removed = 0;
        for path in paths.all() {
            if path.exists() {
                fs::remove_file(path)
                    .with_context(|| format!("Could not remove {}", path.display()))?;
                output::info(path.display());
                removed += 1;
            }
        }
        if removed == 0 {
            output::warning(format!("No files found for module {}", quote(module)));
        }
    }
    Ok(())
}

/// Renames every existing file of `old` to the matching file of `new`.
pub fn rename(config: &Config, project_dir: &Path, old: &str, new: &str) -> anyhow::Result<()> {
    output::action(format!("Moving {} to {}", quote(old), quote(new)));

    let from = resolve(config, project_dir, old)?;
    let to = resolve(config, project_dir, new)?;

    let moves: Vec<(&Path, &Path)> = from
        .all()
        .into_iter()
        .zip(to.all())
        .filter(|(src, _)| src.exists())
        .collect();

    if moves.is_empty() {
        anyhow::bail!("No files found for module {}", quote(old));
    }
    if let Some((_, dst)) = moves.iter().find(|(_, dst)| dst.exists()) {
        anyhow::bail!("{} already exists", dst.display());
    }

    for (src, dst) in moves {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        fs::rename(src, dst).with_context(|| {
            format!("Could not move {} to {}", src.display(), dst.display())
        })?;
        output::info(format!("{} -> {}", src.display(), dst.display()));
    }
    Ok(())
}
