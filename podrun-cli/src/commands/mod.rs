//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod render;
mod run;

pub use run::RunArgs;

use anyhow::{Context, Result};
use clap::Subcommand;
use podrun_core::WorkloadSpec;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a workload to completion and delete it afterwards
    Run(RunArgs),
    /// Print the Pod creation request for a workload without submitting it
    Render {
        /// Path to the workload spec (JSON)
        spec: PathBuf,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module. The exit code
/// reflects the workload outcome for `run`.
pub async fn handle_command(command: Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::Run(args) => run::handle_run(args, config).await,
        Commands::Render { spec } => render::handle_render(&spec),
    }
}

/// Reads and validates a workload spec from disk
fn load_spec(path: &Path) -> Result<WorkloadSpec> {
    let spec = WorkloadSpec::from_file(path)
        .with_context(|| format!("Failed to load workload spec {}", path.display()))?;
    spec.validate()
        .with_context(|| format!("Workload spec {} is not runnable", path.display()))?;
    Ok(spec)
}
