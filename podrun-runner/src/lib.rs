//! Podrun Runner
//!
//! Runs one workload as a Kubernetes Pod, waits for it to finish, and
//! deletes it afterwards.
//!
//! Architecture:
//! - Configuration: poll interval, default deadline, log collection
//! - Runner: the submit / poll / cleanup state machine
//! - Report: outcome, failure kind, timing, and cleanup status of a run
//!
//! The runner talks to the cluster only through
//! [`podrun_client::ControlPlane`], so any already-authenticated client can
//! be injected.

pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use config::RunnerConfig;
pub use error::RunError;
pub use report::{Cleanup, RunReport};
pub use runner::JobRunner;
