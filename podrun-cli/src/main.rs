//! Podrun CLI
//!
//! Runs a single workload as a Kubernetes Pod and exits with its outcome.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podrun")]
#[command(about = "Run a workload as a Kubernetes Pod and clean up afterwards", long_about = None)]
struct Cli {
    /// API server URL; kubeconfig or the in-cluster configuration is used when omitted
    #[arg(long, env = "PODRUN_API_SERVER")]
    api_server: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays usable for reports
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podrun=info,podrun_runner=info,podrun_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_server: cli.api_server,
        insecure: cli.insecure,
    };

    handle_command(cli.command, &config).await
}
