//! Job runner
//!
//! Drives one workload through its whole lifecycle:
//! - Submits the Pod creation request
//! - Polls the phase at a fixed interval until it is terminal or the deadline passes
//! - Optionally fetches the output
//! - Deletes the created object, whatever happened before
//!
//! ```text
//! INIT --submit ok--> POLLING --succeeded--> DONE_OK
//! INIT --submit fails--> DONE_FAIL (no cleanup)
//! POLLING --other terminal | deadline | read error--> DONE_FAIL
//! DONE_* --delete once if a handle exists--> EXIT
//! ```

use chrono::Utc;
use podrun_client::ControlPlane;
use podrun_core::{JobHandle, WorkloadSpec};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::config::RunnerConfig;
use crate::error::RunError;
use crate::report::{Cleanup, RunReport};

/// Lifecycle controller for a single workload
///
/// The control plane is injected already authenticated; building a runner
/// never talks to the cluster.
pub struct JobRunner {
    control_plane: Arc<dyn ControlPlane>,
    config: RunnerConfig,
}

impl JobRunner {
    pub fn new(control_plane: Arc<dyn ControlPlane>, config: RunnerConfig) -> Self {
        Self {
            control_plane,
            config,
        }
    }

    /// Runs a workload and reports whether it succeeded
    ///
    /// `timeout` falls back to the configured default when `None`.
    pub async fn run(&self, spec: &WorkloadSpec, timeout: Option<Duration>) -> bool {
        self.execute(spec, timeout).await.succeeded()
    }

    /// Runs a workload and returns the full report
    ///
    /// Never fails: every control-plane error is caught where it happens and
    /// recorded on the report.
    pub async fn execute(&self, spec: &WorkloadSpec, timeout: Option<Duration>) -> RunReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("run", %run_id, namespace = %spec.namespace());

        self.execute_inner(spec, timeout.unwrap_or(self.config.default_timeout))
            .instrument(span)
            .await
    }

    async fn execute_inner(&self, spec: &WorkloadSpec, timeout: Duration) -> RunReport {
        let started_at = Utc::now();
        let start = Instant::now();

        let handle = match self.submit(spec).await {
            Ok(handle) => handle,
            Err(e) => {
                error!("{}", e);
                return RunReport {
                    handle: None,
                    outcome: Err(e),
                    started_at,
                    elapsed: start.elapsed(),
                    logs: None,
                    cleanup: Cleanup::NotNeeded,
                };
            }
        };

        let outcome = self.wait_for_completion(&handle, start, timeout).await;
        let elapsed = start.elapsed();

        match &outcome {
            Ok(()) => info!(
                "Workload {} succeeded after {}s",
                handle,
                elapsed.as_secs()
            ),
            Err(e) => error!("Workload failed after {}s: {}", elapsed.as_secs(), e),
        }

        let logs = if self.config.collect_logs {
            self.collect_logs(&handle).await
        } else {
            None
        };

        let cleanup = self.cleanup(&handle).await;

        RunReport {
            handle: Some(handle),
            outcome,
            started_at,
            elapsed,
            logs,
            cleanup,
        }
    }

    /// Translates the spec into a creation request and submits it
    async fn submit(&self, spec: &WorkloadSpec) -> Result<JobHandle, RunError> {
        info!(
            "Submitting workload {}* in namespace {}",
            spec.metadata.generate_name,
            spec.namespace()
        );

        let manifest = spec.pod_manifest();
        let handle = self
            .control_plane
            .create(spec.namespace(), &manifest)
            .await
            .map_err(RunError::Submission)?;

        info!("Workload created as {}", handle);
        Ok(handle)
    }

    /// Polls until the phase is terminal, a read fails, or the deadline passes
    ///
    /// The wait before the next read never overshoots the deadline, so a
    /// timeout is reported between `timeout` and `timeout + poll_interval`
    /// after `start`. A timeout too large to represent as an instant means
    /// the run waits for a terminal phase indefinitely.
    async fn wait_for_completion(
        &self,
        handle: &JobHandle,
        start: Instant,
        timeout: Duration,
    ) -> Result<(), RunError> {
        let deadline = start.checked_add(timeout);

        loop {
            let phase = self.control_plane.phase(handle).await.map_err(|source| {
                RunError::StatusRead {
                    handle: handle.clone(),
                    source,
                }
            })?;

            if phase.is_terminal() {
                return if phase.is_success() {
                    Ok(())
                } else {
                    Err(RunError::WorkloadFailed {
                        handle: handle.clone(),
                        phase,
                    })
                };
            }

            let now = Instant::now();
            info!(
                "{} seconds: waiting for workload to complete (phase: {})",
                now.duration_since(start).as_secs(),
                phase
            );

            let wait = match deadline {
                Some(deadline) if now >= deadline => {
                    return Err(RunError::Timeout {
                        handle: handle.clone(),
                        timeout,
                        phase,
                    });
                }
                Some(deadline) => self.config.poll_interval.min(deadline - now),
                None => self.config.poll_interval,
            };

            time::sleep(wait).await;
        }
    }

    /// Fetches the output of a workload
    ///
    /// Errors are logged and reported as missing logs.
    pub async fn fetch_logs(&self, handle: &JobHandle) -> Option<String> {
        match self.control_plane.logs(handle).await {
            Ok(text) => {
                debug!("Read {} bytes of logs from {}", text.len(), handle);
                Some(text)
            }
            Err(e) => {
                warn!("Failed to read logs for {}: {}", handle, e);
                None
            }
        }
    }

    async fn collect_logs(&self, handle: &JobHandle) -> Option<String> {
        match time::timeout(self.config.log_read_timeout, self.fetch_logs(handle)).await {
            Ok(logs) => logs,
            Err(_) => {
                warn!(
                    "Gave up reading logs for {} after {:?}",
                    handle, self.config.log_read_timeout
                );
                None
            }
        }
    }

    /// Makes exactly one deletion attempt; failures are recorded, not raised
    async fn cleanup(&self, handle: &JobHandle) -> Cleanup {
        debug!("Deleting workload {}", handle);

        match self.control_plane.delete(handle).await {
            Ok(()) => {
                info!("Workload {} deleted", handle);
                Cleanup::Deleted
            }
            Err(e) => {
                warn!("Failed to delete workload {}: {}", handle, e);
                Cleanup::Failed(e.to_string())
            }
        }
    }
}
