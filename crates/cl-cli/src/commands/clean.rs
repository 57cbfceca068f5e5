// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Clean and prune commands for removing build artifacts.

use crate::config::Config;
use crate::output;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Names of compiler artifact directories, removed wherever they appear.
pub const ARTIFACT_DIRS: &[&str] = &["Clean System Files", "sapl"];

/// Removes compiler artifact directories anywhere under `project_dir`.
/// Symlinked directories are not descended into.
///
/// Returns the removed paths.
pub fn clean(project_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    output::action("Cleaning files");

    let root = glob::Pattern::escape(&project_dir.to_string_lossy());
    let mut targets = Vec::new();
    for name in ARTIFACT_DIRS {
        let pattern = format!("{}/**/{}", root, name);
        targets.extend(
            glob::glob(&pattern)?
                .flatten()
                .filter(|path| !behind_symlink(project_dir, path)),
        );
    }
    // Shallow paths first so nested matches are already gone
    targets.sort_by_key(|p| p.components().count());

    remove_all(targets)
}

/// Runs [`clean`], then removes the executable and `*-data` directories
/// at the project root.
pub fn prune(config: &Config, project_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut removed = clean(project_dir)?;

    output::action("Pruning files");

    let mut targets = vec![config.output_path(project_dir)];
    let pattern = format!(
        "{}/*-data",
        glob::Pattern::escape(&project_dir.to_string_lossy())
    );
    targets.extend(glob::glob(&pattern)?.flatten());

    removed.extend(remove_all(targets)?);
    Ok(removed)
}

/// Whether `path` was reached through a symlinked directory below `root`.
///
/// glob follows directory links; matches behind one are not part of the
/// project.
fn behind_symlink(root: &Path, path: &Path) -> bool {
    for ancestor in path.ancestors().skip(1) {
        if ancestor == root || ancestor.as_os_str().is_empty() {
            return false;
        }
        match fs::symlink_metadata(ancestor) {
            Ok(meta) if !meta.file_type().is_symlink() => {}
            _ => return true,
        }
    }
    false
}

fn remove_all(targets: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for path in targets {
        // symlink_metadata so a link is removed rather than followed
        let Ok(meta) = fs::symlink_metadata(&path) else {
            continue;
        };
        let result = if meta.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.with_context(|| format!("Could not remove {}", path.display()))?;

        output::info(path.display());
        removed.push(path);
    }
    Ok(removed)
}
