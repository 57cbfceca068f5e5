// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use cl_cli::commands;
use cl_cli::config::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cl")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Clean command line tools", long_about = None)]
#[command(after_help = "Any executable named 'cl-<command>' on your PATH can be run as 'cl <command>'.")]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Project directory
    #[arg(short = 'C', long = "project", global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialise a new project
    Init {
        /// Project directory name (defaults to the current directory)
        name: Option<String>,
    },
    /// Show information about the current project
    Info,
    /// Create new modules
    #[command(visible_alias = "create")]
    Add {
        /// Dotted module names, e.g. Data.Tree
        #[arg(required = true)]
        modules: Vec<String>,
        /// Create a literate source instead of definition/implementation files
        #[arg(short, long)]
        literate: bool,
    },
    /// Remove modules
    #[command(visible_aliases = ["rm", "delete"])]
    Remove {
        /// Dotted module names
        #[arg(required = true)]
        modules: Vec<String>,
    },
    /// Move (rename) a module
    #[command(visible_alias = "mv")]
    Move {
        /// Current module name
        from: String,
        /// New module name
        to: String,
    },
    /// Regenerate modules from literate sources
    Unlit {
        /// Regenerate even if outputs are up to date
        #[arg(short, long)]
        force: bool,
    },
    /// Unliterate and build the project
    Build {
        /// Build with 'cpm make' instead of clm
        #[arg(long, alias = "old")]
        cpm: bool,
    },
    /// Run the built executable
    Run {
        /// Arguments passed to the executable
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Remove compiler artifact directories
    Clean,
    /// Clean, then remove the executable and data directories
    Prune,
    #[command(external_subcommand)]
    External(Vec<String>),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli.command, &cli.project)
}

fn run(command: Commands, project: &Path) -> anyhow::Result<()> {
    // Everything except init and external commands needs a project file
    let config = || Config::load(project);

    match command {
        Commands::Init { name } => commands::init::run(project, name),
        Commands::External(args) => commands::external::run(project, &args),
        Commands::Info => commands::info::run(&config()?, project),
        Commands::Add { modules, literate } => {
            commands::module::add(&config()?, project, &modules, literate)
        }
        Commands::Remove { modules } => commands::module::remove(&config()?, project, &modules),
        Commands::Move { from, to } => commands::module::rename(&config()?, project, &from, &to),
        Commands::Unlit { force } => commands::unlit::run(&config()?, project, force),
        Commands::Build { cpm } => commands::build::run(&config()?, project, cpm),
        Commands::Run { args } => commands::build::run_executable(&config()?, project, &args),
        Commands::Clean => {
            config()?;
            commands::clean::clean(project).map(|_| ())
        }
        Commands::Prune => commands::clean::prune(&config()?, project).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_project_commands_require_project_file() {
        let dir = tempdir().unwrap();
        let project = dir.path().to_string_lossy().into_owned();

        for args in [&["info"][..], &["unlit"][..], &["clean"][..], &["mv", "A", "B"][..]] {
            let cli = Cli::try_parse_from(["cl", "-C", project.as_str()].iter().chain(args)).unwrap();
            let err = run(cli.command, &cli.project).unwrap_err();
            assert!(err.to_string().contains("cl init"), "{:?}: {}", args, err);
        }
    }

    #[test]
    fn test_init_runs_without_project_file() {
        let dir = tempdir().unwrap();
        let project = dir.path().to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["cl", "-C", project.as_str(), "init", "hello"]).unwrap();
        run(cli.command, &cli.project).unwrap();
        assert!(dir.path().join("hello/Project.toml").is_file());
    }
}
