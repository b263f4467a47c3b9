//! Podrun Kubernetes Client
//!
//! A thin wrapper over `kube::Api<Pod>` exposing the parts of the core/v1
//! API that the job runner needs: creating a Pod, reading its phase and
//! logs, and deleting it.
//!
//! # Example
//!
//! ```no_run
//! use podrun_client::KubeClient;
//! use podrun_core::WorkloadSpec;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = KubeClient::infer().await?;
//!
//!     let spec = WorkloadSpec::from_file("pod.json")?;
//!     let handle = client.create_pod(spec.namespace(), &spec.pod_manifest()).await?;
//!
//!     println!("Created pod: {}", handle);
//!     Ok(())
//! }
//! ```

pub mod control_plane;
pub mod error;
mod pods;

// Re-export commonly used types
pub use control_plane::ControlPlane;
pub use error::{ClientError, Result};

use kube::Api;
use podrun_core::Pod;
use tracing::debug;

/// Client for the Kubernetes API server
#[derive(Clone)]
pub struct KubeClient {
    client: kube::Client,
}

impl KubeClient {
    /// Wrap an already configured kube client
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    /// Create a client from explicit connection settings
    pub fn from_config(config: kube::Config) -> Result<Self> {
        debug!("Connecting to API server at {}", config.cluster_url);
        let client = kube::Client::try_from(config)
            .map_err(|e| ClientError::Config(format!("Failed to build client: {}", e)))?;
        Ok(Self::new(client))
    }

    /// Create a client from the Pod's service account
    ///
    /// Reads the token and CA bundle mounted into every Pod and the
    /// `KUBERNETES_SERVICE_HOST` / `KUBERNETES_SERVICE_PORT` variables.
    pub fn in_cluster() -> Result<Self> {
        let config = kube::Config::incluster()
            .map_err(|e| ClientError::Config(format!("Not running in a cluster: {}", e)))?;
        Self::from_config(config)
    }

    /// Create a client from the local kubeconfig, falling back to the
    /// in-cluster service account
    pub async fn infer() -> Result<Self> {
        let config = kube::Config::infer()
            .await
            .map_err(|e| ClientError::Config(format!("No cluster configuration found: {}", e)))?;
        Self::from_config(config)
    }

    /// Namespaced Pod API
    fn pods(&self, namespace: &str) -> Api<Pod> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl std::fmt::Debug for KubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeClient")
            .field("default_namespace", &self.client.default_namespace())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_config_accepts_plain_http() {
        let config = kube::Config::new("http://127.0.0.1:8001".parse().unwrap());
        assert!(KubeClient::from_config(config).is_ok());
    }

    #[tokio::test]
    async fn test_debug_shows_default_namespace() {
        let config = kube::Config::new("http://127.0.0.1:8001".parse().unwrap());
        let client = KubeClient::from_config(config).unwrap();

        assert!(format!("{:?}", client).contains("default"));
    }
}
