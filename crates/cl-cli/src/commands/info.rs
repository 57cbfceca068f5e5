// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Info command for showing the current project.

use crate::config::Config;
use crate::output;
use console::style;
use std::path::Path;

/// Prints the project configuration.
pub fn run(config: &Config, project_dir: &Path) -> anyhow::Result<()> {
    output::action("Showing information about current project");

    let prefixes = config.literate.prefix_table()?;
    let rows = [
        ("Name", config.project.name.clone()),
        ("Version", config.project.version.clone()),
        ("Authors", list(&config.project.authors)),
        (
            "Sources",
            config.source_dir(project_dir).display().to_string(),
        ),
        ("Modules", list(&config.project.modules)),
        ("Other", list(&config.project.othermodules)),
        ("Libraries", list(&config.project.libraries)),
        ("Main", config.main_module().to_string()),
        (
            "Output",
            config.output_path(project_dir).display().to_string(),
        ),
        (
            "Literate",
            format!(
                "{:?} exported, {:?} internal, {:?} header ({})",
                prefixes.exported(),
                prefixes.internal(),
                format!("{}{}", prefixes.header_marker(), prefixes.header_keyword()),
                if config.literate.atomic { "atomic" } else { "in place" }
            ),
        ),
    ];

    for (label, value) in rows {
        output::info(format!("{:<10} {}", style(label).cyan(), value));
    }
    Ok(())
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        style("(none)").dim().to_string()
    } else {
        items.join(", ")
    }
}
