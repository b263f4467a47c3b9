//! Outcome of a single run

use chrono::{DateTime, Utc};
use podrun_core::JobHandle;
use serde::Serialize;
use std::time::Duration;

use crate::error::RunError;

/// What happened to the workload object after polling ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum Cleanup {
    /// Submission failed, so there was nothing to delete
    NotNeeded,
    Deleted,
    /// The deletion attempt failed; the object may have leaked
    Failed(String),
}

/// Full account of one run
#[derive(Debug)]
pub struct RunReport {
    /// Identity of the created object, if submission succeeded
    pub handle: Option<JobHandle>,
    pub outcome: Result<(), RunError>,
    pub started_at: DateTime<Utc>,
    /// Wall-clock time from submission until polling ended
    pub elapsed: Duration,
    /// Output collected before cleanup, when requested and available
    pub logs: Option<String>,
    pub cleanup: Cleanup,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&RunError> {
        self.outcome.as_ref().err()
    }

    /// JSON summary for machine consumers
    ///
    /// Logs are left out; they can be large and are printed separately.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "succeeded": self.succeeded(),
            "handle": self.handle,
            "started_at": self.started_at,
            "elapsed_secs": self.elapsed.as_secs_f64(),
            "error": self.error().map(|e| serde_json::json!({
                "kind": e.kind(),
                "message": e.to_string(),
            })),
            "cleanup": self.cleanup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podrun_core::Phase;

    fn report(outcome: Result<(), RunError>, cleanup: Cleanup) -> RunReport {
        RunReport {
            handle: Some(JobHandle::new("train-abcde", "default")),
            outcome,
            started_at: Utc::now(),
            elapsed: Duration::from_secs(15),
            logs: None,
            cleanup,
        }
    }

    #[test]
    fn test_summary_of_success() {
        let summary = report(Ok(()), Cleanup::Deleted).summary();

        assert_eq!(summary["succeeded"], true);
        assert_eq!(summary["handle"]["name"], "train-abcde");
        assert_eq!(summary["elapsed_secs"], 15.0);
        assert!(summary["error"].is_null());
        assert_eq!(summary["cleanup"]["status"], "deleted");
    }

    #[test]
    fn test_summary_of_failure_with_failed_cleanup() {
        let err = RunError::WorkloadFailed {
            handle: JobHandle::new("train-abcde", "default"),
            phase: Phase::Failed,
        };
        let summary = report(Err(err), Cleanup::Failed("forbidden".into())).summary();

        assert_eq!(summary["succeeded"], false);
        assert_eq!(summary["error"]["kind"], "workload_failed");
        assert_eq!(summary["cleanup"]["status"], "failed");
        assert_eq!(summary["cleanup"]["error"], "forbidden");
    }
}
