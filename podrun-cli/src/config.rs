//! Configuration module
//!
//! Turns the global CLI flags into cluster connection settings.

use anyhow::{Context, Result};
use tracing::info;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit API server URL; `None` means kubeconfig or in-cluster
    pub api_server: Option<String>,
    pub insecure: bool,
}

impl Config {
    /// Resolves the connection settings for the API server
    pub async fn cluster_config(&self) -> Result<kube::Config> {
        let mut cluster = match &self.api_server {
            Some(url) => {
                info!("Using API server {}", url);
                let uri = url
                    .parse()
                    .with_context(|| format!("Invalid API server URL {}", url))?;
                kube::Config::new(uri)
            }
            None => {
                info!("No API server given, inferring cluster configuration");
                kube::Config::infer()
                    .await
                    .context("Failed to load kubeconfig or in-cluster configuration")?
            }
        };

        if self.insecure {
            cluster.accept_invalid_certs = true;
        }

        Ok(cluster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explicit_server() {
        let config = Config {
            api_server: Some("https://127.0.0.1:6443".to_string()),
            insecure: true,
        };

        let cluster = config.cluster_config().await.unwrap();
        assert_eq!(cluster.cluster_url.host(), Some("127.0.0.1"));
        assert_eq!(cluster.cluster_url.port_u16(), Some(6443));
        assert!(cluster.accept_invalid_certs);
    }

    #[tokio::test]
    async fn test_invalid_server_url_is_an_error() {
        let config = Config {
            api_server: Some("https://exa mple:6443".to_string()),
            insecure: false,
        };

        let err = config.cluster_config().await.unwrap_err();
        assert!(err.to_string().contains("Invalid API server URL"));
    }
}
