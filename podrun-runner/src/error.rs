//! Run failure taxonomy

use podrun_client::ClientError;
use podrun_core::{JobHandle, Phase};
use std::time::Duration;
use thiserror::Error;

/// Why a run did not succeed
///
/// Cleanup failures are deliberately absent: they are recorded on the
/// report but never change the outcome of a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The control plane rejected or failed to create the workload object
    #[error("Failed to submit workload: {0}")]
    Submission(#[source] ClientError),

    /// The phase of a created workload could not be read
    #[error("Failed to read status of {handle}: {source}")]
    StatusRead {
        handle: JobHandle,
        #[source]
        source: ClientError,
    },

    /// The deadline passed while the workload was still non-terminal
    #[error("Workload {handle} did not finish within {}s (last phase: {phase})", .timeout.as_secs())]
    Timeout {
        handle: JobHandle,
        timeout: Duration,
        phase: Phase,
    },

    /// The workload reached a terminal phase other than success
    #[error("Workload {handle} ended in phase {phase}")]
    WorkloadFailed { handle: JobHandle, phase: Phase },
}

impl RunError {
    /// Stable, machine-readable name of the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::Submission(_) => "submission",
            RunError::StatusRead { .. } => "status_read",
            RunError::Timeout { .. } => "timeout",
            RunError::WorkloadFailed { .. } => "workload_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_handle() {
        let handle = JobHandle::new("train-abcde", "kubeflow");

        let timeout = RunError::Timeout {
            handle: handle.clone(),
            timeout: Duration::from_secs(10),
            phase: Phase::Running,
        };
        assert_eq!(
            timeout.to_string(),
            "Workload kubeflow/train-abcde did not finish within 10s (last phase: running)"
        );
        assert_eq!(timeout.kind(), "timeout");

        let failed = RunError::WorkloadFailed {
            handle,
            phase: Phase::Failed,
        };
        assert_eq!(
            failed.to_string(),
            "Workload kubeflow/train-abcde ended in phase failed"
        );
        assert_eq!(failed.kind(), "workload_failed");
    }

    #[test]
    fn test_submission_keeps_source() {
        let err = RunError::Submission(ClientError::api_error(403, "forbidden"));

        assert_eq!(err.kind(), "submission");
        assert!(std::error::Error::source(&err).is_some());
    }
}
