//! Control-plane boundary
//!
//! The job runner only needs four operations from the cluster. Keeping them
//! behind a trait lets the runner receive an already-authenticated client
//! and lets tests script the cluster's answers.

use async_trait::async_trait;
use podrun_core::{JobHandle, Phase, Pod};

use crate::KubeClient;
use crate::error::Result;

/// Operations the runner performs against the cluster
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Creates a workload object and returns its generated identity
    async fn create(&self, namespace: &str, manifest: &Pod) -> Result<JobHandle>;

    /// Reads the current lifecycle phase of a workload object
    async fn phase(&self, handle: &JobHandle) -> Result<Phase>;

    /// Reads the accumulated output of a workload object
    async fn logs(&self, handle: &JobHandle) -> Result<String>;

    /// Removes a workload object
    async fn delete(&self, handle: &JobHandle) -> Result<()>;
}

#[async_trait]
impl ControlPlane for KubeClient {
    async fn create(&self, namespace: &str, manifest: &Pod) -> Result<JobHandle> {
        self.create_pod(namespace, manifest).await
    }

    async fn phase(&self, handle: &JobHandle) -> Result<Phase> {
        self.get_pod_phase(handle).await
    }

    async fn logs(&self, handle: &JobHandle) -> Result<String> {
        self.get_pod_logs(handle).await
    }

    async fn delete(&self, handle: &JobHandle) -> Result<()> {
        self.delete_pod(handle).await
    }
}
