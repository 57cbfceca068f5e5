// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Clean project configuration.
//!
//! Configuration is loaded from `Project.toml` at the project root.
//!
//! # Example Configuration
//!
//! ```toml
//! [project]
//! name = "hello"
//! version = "1.0.0"
//! sourcedir = "src"
//! modules = ["Main", "Data.Tree"]
//! othermodules = ["Util.Strings"]
//! libraries = ["StdEnv", "Platform"]
//!
//! [executable]
//! main = "Main"
//! output = "hello"
//!
//! [literate]
//! convention = "double"
//! atomic = true
//! ```

use anyhow::Context;
use cl_lit::{Convention, PrefixTable, Unliterator, WriteMode};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project file at the project root.
pub const PROJECT_FILE: &str = "Project.toml";

/// Main configuration structure loaded from `Project.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Project metadata and module lists.
    pub project: ProjectConfig,
    /// Executable build settings.
    #[serde(default)]
    pub executable: ExecutableConfig,
    /// Literate source settings.
    #[serde(default)]
    pub literate: LiterateConfig,
}

/// Project metadata configuration.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    pub name: String,
    /// Project version (default: "0.1.0").
    #[serde(default = "default_version")]
    pub version: String,
    /// Project authors.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Source directory, relative to the project root (default: "src").
    #[serde(default = "default_sourcedir")]
    pub sourcedir: String,
    /// Primary modules of the project.
    #[serde(default)]
    pub modules: Vec<String>,
    /// Additional modules, processed after `modules`.
    #[serde(default, alias = "other_modules")]
    pub othermodules: Vec<String>,
    /// Libraries passed to the compiler with `-IL`.
    #[serde(default)]
    pub libraries: Vec<String>,
}

/// Executable build configuration.
#[derive(Debug, Deserialize)]
pub struct ExecutableConfig {
    /// Main module (default: "Main").
    #[serde(default = "default_main")]
    pub main: String,
    /// Output executable path (default: the project name).
    pub output: Option<String>,
}

/// Literate source configuration.
#[derive(Debug, Deserialize)]
pub struct LiterateConfig {
    /// Marker convention: "double" or "single" (default: "double").
    #[serde(default = "default_convention")]
    pub convention: String,
    /// Override for the module header marker.
    pub header: Option<String>,
    /// Override for the keyword that follows the header marker.
    pub keyword: Option<String>,
    /// Override for the exported line marker.
    pub exported: Option<String>,
    /// Override for the internal line marker.
    pub internal: Option<String>,
    /// Write outputs through a temporary file and rename (default: true).
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_sourcedir() -> String {
    "src".to_string()
}

fn default_main() -> String {
    "Main".to_string()
}

fn default_convention() -> String {
    Convention::default().as_str().to_string()
}

fn default_atomic() -> bool {
    true
}

impl Default for ExecutableConfig {
    fn default() -> Self {
        Self {
            main: default_main(),
            output: None,
        }
    }
}

impl Default for LiterateConfig {
    fn default() -> Self {
        Self {
            convention: default_convention(),
            header: None,
            keyword: None,
            exported: None,
            internal: None,
            atomic: default_atomic(),
        }
    }
}

impl LiterateConfig {
    /// Builds the prefix table: the convention's markers with any overrides applied.
    pub fn prefix_table(&self) -> anyhow::Result<PrefixTable> {
        let base = PrefixTable::for_convention(self.convention.parse::<Convention>()?);
        if self.header.is_none()
            && self.keyword.is_none()
            && self.exported.is_none()
            && self.internal.is_none()
        {
            return Ok(base);
        }

        let table = PrefixTable::new(
            self.header.as_deref().unwrap_or(base.header_marker()),
            self.keyword.as_deref().unwrap_or(base.header_keyword()),
            self.exported.as_deref().unwrap_or(base.exported()),
            self.internal.as_deref().unwrap_or(base.internal()),
        )?;
        Ok(table)
    }

    /// How derived outputs are replaced.
    pub fn write_mode(&self) -> WriteMode {
        if self.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }
}

impl Config {
    /// Loads configuration from `Project.toml` in `project_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the project file is missing or cannot be parsed.
    pub fn load(project_dir: &Path) -> anyhow::Result<Self> {
        let config_path = project_dir.join(PROJECT_FILE);

        if !config_path.exists() {
            anyhow::bail!(
                "Could not find {} in {}, run 'cl init' to initialise a project",
                PROJECT_FILE,
                project_dir.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Could not read {}", config_path.display()))?;
        Self::parse(&content).with_context(|| format!("Could not parse {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.literate.prefix_table()?;
        Ok(config)
    }

    /// Absolute (or project-relative) source directory.
    pub fn source_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.project.sourcedir)
    }

    /// Path of the built executable.
    pub fn output_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.output_name())
    }

    /// Executable output name as configured, or the project name.
    pub fn output_name(&self) -> &str {
        self.executable
            .output
            .as_deref()
            .unwrap_or(&self.project.name)
    }

    /// Main module name.
    pub fn main_module(&self) -> &str {
        &self.executable.main
    }

    /// All modules to unliterate: `modules` followed by `othermodules`.
    pub fn all_modules(&self) -> impl Iterator<Item = &str> {
        self.project
            .modules
            .iter()
            .chain(self.project.othermodules.iter())
            .map(String::as_str)
    }

    /// Builds the unliterator described by the `[literate]` section.
    pub fn unliterator(&self) -> anyhow::Result<Unliterator> {
        Ok(Unliterator::new(self.literate.prefix_table()?)
            .with_write_mode(self.literate.write_mode()))
    }
}
