//! Pod API endpoints

use kube::api::{DeleteParams, LogParams, PostParams};
use podrun_core::{JobHandle, Phase, Pod};
use tracing::debug;

use crate::KubeClient;
use crate::error::{ClientError, Result};

impl KubeClient {
    /// Create a Pod in a namespace
    ///
    /// # Arguments
    /// * `namespace` - Target namespace
    /// * `manifest` - Pod creation request, usually from `WorkloadSpec::pod_manifest`
    ///
    /// # Returns
    /// The handle carrying the name generated by the API server
    pub async fn create_pod(&self, namespace: &str, manifest: &Pod) -> Result<JobHandle> {
        let pod = self
            .pods(namespace)
            .create(&PostParams::default(), manifest)
            .await?;

        let name = pod.metadata.name.ok_or_else(|| {
            ClientError::ParseError("Created pod has no metadata.name".to_string())
        })?;
        let namespace = pod.metadata.namespace.unwrap_or_else(|| namespace.to_string());

        debug!("Created pod {}/{}", namespace, name);
        Ok(JobHandle::new(name, namespace))
    }

    /// Read the current phase of a Pod
    ///
    /// A Pod whose status has not been populated yet is reported as pending.
    pub async fn get_pod_phase(&self, handle: &JobHandle) -> Result<Phase> {
        let pod = self.pods(&handle.namespace).get(&handle.name).await?;

        let phase = pod
            .status
            .and_then(|s| s.phase)
            .map(|raw| Phase::parse(&raw))
            .unwrap_or(Phase::Pending);

        Ok(phase)
    }

    /// Read the accumulated output of a Pod
    pub async fn get_pod_logs(&self, handle: &JobHandle) -> Result<String> {
        let logs = self
            .pods(&handle.namespace)
            .logs(&handle.name, &LogParams::default())
            .await?;
        Ok(logs)
    }

    /// Delete a Pod
    ///
    /// Deleting a Pod that is already gone yields `ClientError::NotFound`.
    pub async fn delete_pod(&self, handle: &JobHandle) -> Result<()> {
        let result = self
            .pods(&handle.namespace)
            .delete(&handle.name, &DeleteParams::default())
            .await;

        match result.map_err(ClientError::from) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Err(ClientError::NotFound(format!("pod {}", handle))),
            Err(e) => Err(e),
        }
    }
}
