// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Project initialization command for creating new Clean projects.

use crate::config::PROJECT_FILE;
use crate::output;
use include_dir::{include_dir, Dir, DirEntry};
use std::fs;
use std::path::{Path, PathBuf};

static DEFAULT_TEMPLATE: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates/default");

/// Initializes a new project in `base_dir/name`, or in `base_dir` itself when
/// no name (or ".") is given.
pub fn run(base_dir: &Path, name: Option<String>) -> anyhow::Result<()> {
    let (project_dir, project_name) = resolve_project_path(base_dir, name)?;

    if project_dir.join(PROJECT_FILE).exists() {
        anyhow::bail!(
            "{} already exists in {}",
            PROJECT_FILE,
            project_dir.display()
        );
    }

    output::action(format!("Initializing new project {}", output::quote(&project_name)));

    if !project_dir.exists() {
        fs::create_dir_all(&project_dir)?;
        tracing::info!("Created project directory: {}", project_dir.display());
    }

    extract_template(&DEFAULT_TEMPLATE, &project_dir, &project_name)?;

    // Directories the template does not carry files for
    fs::create_dir_all(project_dir.join("src"))?;
    fs::create_dir_all(project_dir.join("test"))?;

    Ok(())
}

fn resolve_project_path(base_dir: &Path, name: Option<String>) -> anyhow::Result<(PathBuf, String)> {
    match name.as_deref() {
        Some(".") | None => {
            let dir = if base_dir.exists() {
                fs::canonicalize(base_dir)?
            } else {
                base_dir.to_path_buf()
            };
            let dir_name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "my-clean-app".to_string());
            Ok((dir, dir_name))
        }
        Some(name) => {
            let project_path = base_dir.join(name);
            let dir_name = project_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.to_string());
            Ok((project_path, dir_name))
        }
    }
}

fn extract_template(template: &Dir, target: &Path, project_name: &str) -> anyhow::Result<()> {
    for entry in template.entries() {
        extract_entry(entry, target, project_name)?;
    }
    Ok(())
}

fn extract_entry(entry: &DirEntry, target: &Path, project_name: &str) -> anyhow::Result<()> {
    match entry {
        DirEntry::Dir(dir) => {
            fs::create_dir_all(target.join(dir.path()))?;
            for child in dir.entries() {
                extract_entry(child, target, project_name)?;
            }
        }
        DirEntry::File(file) => {
            let file_path = file.path();
            let file_name = file_path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow::anyhow!("Invalid file name: {:?}", file_path))?;

            let target_name: &str = match file_name {
                "gitignore" => ".gitignore",
                name if name.ends_with(".tmpl") => &name[..name.len() - 5],
                name => name,
            };

            let target_path = match file_path.parent() {
                Some(parent) => target.join(parent).join(target_name),
                None => target.join(target_name),
            };

            // Never clobber sources in an existing directory
            if target_path.exists() {
                output::warning(format!("Keeping existing {}", target_path.display()));
                return Ok(());
            }

            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)?;
            }

            let content = file
                .contents_utf8()
                .ok_or_else(|| anyhow::anyhow!("Non-UTF8 file: {:?}", file_path))?;

            let content = if file_name.ends_with(".tmpl") {
                content.replace("{{project_name}}", project_name)
            } else {
                content.to_string()
            };

            fs::write(&target_path, content)?;
            output::info(target_path.display());
        }
    }
    Ok(())
}
