//! Run command handler
//!
//! Submits a workload, waits for it, prints the outcome, and maps it to the
//! process exit code.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use podrun_client::KubeClient;
use podrun_runner::{Cleanup, JobRunner, RunReport, RunnerConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use super::load_spec;
use crate::config::Config;

/// Arguments of `podrun run`
#[derive(Args)]
pub struct RunArgs {
    /// Path to the workload spec (JSON)
    spec: PathBuf,

    /// Seconds to wait for a terminal phase (default: PODRUN_JOB_TIMEOUT or 600)
    #[arg(long)]
    timeout: Option<u64>,

    /// Seconds between status reads (default: PODRUN_POLL_INTERVAL or 5)
    #[arg(long)]
    poll_interval: Option<u64>,

    /// Fetch and print the workload output before deleting it
    #[arg(long)]
    logs: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Handle `podrun run`
pub async fn handle_run(args: RunArgs, config: &Config) -> Result<ExitCode> {
    let spec = load_spec(&args.spec)?;

    let runner_config = runner_config(&args, |key| std::env::var(key).ok())?;

    let timeout = args.timeout.map(Duration::from_secs);
    if timeout == Some(Duration::ZERO) {
        anyhow::bail!("--timeout must be greater than 0");
    }

    let cluster = config.cluster_config().await?;
    let client = KubeClient::from_config(cluster).context("Failed to create Kubernetes client")?;
    let runner = JobRunner::new(Arc::new(client), runner_config);

    let report = runner.execute(&spec, timeout).await;

    if args.json {
        let mut summary = report.summary();
        summary["logs"] = serde_json::json!(report.logs);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&report);
    }

    Ok(if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Environment settings with the command-line flags applied on top
///
/// Validation runs once, on the effective configuration.
fn runner_config(args: &RunArgs, get: impl Fn(&str) -> Option<String>) -> Result<RunnerConfig> {
    let mut config = RunnerConfig::from_vars(get);
    if let Some(secs) = args.poll_interval {
        config.poll_interval = Duration::from_secs(secs);
    }
    if args.logs {
        config.collect_logs = true;
    }
    config.validate().context("Invalid runner configuration")?;
    Ok(config)
}

/// Print a human-readable run summary
fn print_report(report: &RunReport) {
    let status = if report.succeeded() {
        "SUCCEEDED".green().bold()
    } else {
        "FAILED".red().bold()
    };

    println!("{}", "Run Summary:".bold());
    println!("  Status:   {}", status);
    match &report.handle {
        Some(handle) => println!("  Pod:      {}", handle.to_string().cyan()),
        None => println!("  Pod:      {}", "not created".dimmed()),
    }
    println!(
        "  Started:  {}",
        report
            .started_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!("  Elapsed:  {}s", report.elapsed.as_secs());

    if let Some(err) = report.error() {
        println!("  Reason:   {} ({})", err.to_string().red(), err.kind());
    }

    match &report.cleanup {
        Cleanup::NotNeeded => {}
        Cleanup::Deleted => println!("  Cleanup:  {}", "deleted".green()),
        Cleanup::Failed(e) => println!("  Cleanup:  {} {}", "failed:".yellow(), e),
    }

    if let Some(logs) = &report.logs {
        println!();
        println!("{}", "Logs:".bold());
        println!("{}", "─".repeat(80).dimmed());
        print!("{}", logs);
        if !logs.ends_with('\n') {
            println!();
        }
        println!("{}", "─".repeat(80).dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(poll_interval: Option<u64>) -> RunArgs {
        RunArgs {
            spec: PathBuf::from("pod.json"),
            timeout: None,
            poll_interval,
            logs: false,
            json: false,
        }
    }

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_flag_overrides_invalid_env_interval() {
        let config = runner_config(&args(Some(3)), env(&[("PODRUN_POLL_INTERVAL", "0")])).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_env_interval_without_flag_is_rejected() {
        let err = runner_config(&args(None), env(&[("PODRUN_POLL_INTERVAL", "0")])).unwrap_err();
        assert!(err.to_string().contains("Invalid runner configuration"));
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        assert!(runner_config(&args(Some(0)), env(&[])).is_err());
    }
}
