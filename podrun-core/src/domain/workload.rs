//! Workload specification
//!
//! The workload is a Pod-shaped JSON document authored by the caller. The
//! runner never mutates it; it only reads it to build the typed Pod sent to
//! the control plane.

use k8s_openapi::api::core::v1::{self as core_v1, Pod};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::path::Path;

use crate::error::SpecError;

/// Description of a single workload to run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    pub metadata: WorkloadMetadata,
    pub spec: PodTemplate,
}

/// Naming and placement of the workload object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadMetadata {
    /// Prefix the control plane uses to generate the object name
    pub generate_name: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplate {
    pub restart_policy: String,
    pub service_account_name: String,
    pub containers: Vec<ContainerSpec>,
    #[serde(default)]
    pub volumes: Vec<SecretVolume>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub volume_mounts: Vec<VolumeMount>,
    #[serde(default)]
    pub env: Vec<EnvVar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// Volume backed by a cluster secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretVolume {
    pub name: String,
    pub secret: SecretSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretSource {
    pub secret_name: String,
}

impl WorkloadSpec {
    /// Parses a workload document from JSON text
    pub fn from_json(text: &str) -> Result<Self, SpecError> {
        serde_json::from_str(text).map_err(SpecError::Parse)
    }

    /// Parses a workload document from an already decoded JSON value
    pub fn from_value(value: JsonValue) -> Result<Self, SpecError> {
        serde_json::from_value(value).map_err(SpecError::Parse)
    }

    /// Reads and parses a workload document from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Namespace the workload object is created in
    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }

    /// Checks the fields the control plane cannot default for us
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.metadata.generate_name.trim().is_empty() {
            return Err(SpecError::missing("metadata.generateName"));
        }
        if self.metadata.namespace.trim().is_empty() {
            return Err(SpecError::missing("metadata.namespace"));
        }
        if self.spec.containers.is_empty() {
            return Err(SpecError::missing("spec.containers"));
        }

        let volumes: HashSet<&str> = self.spec.volumes.iter().map(|v| v.name.as_str()).collect();

        for (idx, container) in self.spec.containers.iter().enumerate() {
            if container.name.trim().is_empty() {
                return Err(SpecError::missing(format!("spec.containers[{}].name", idx)));
            }
            if container.image.trim().is_empty() {
                return Err(SpecError::missing(format!("spec.containers[{}].image", idx)));
            }
            for mount in &container.volume_mounts {
                if !volumes.contains(mount.name.as_str()) {
                    return Err(SpecError::UnknownVolume {
                        container: container.name.clone(),
                        volume: mount.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Builds the Pod creation request for the core/v1 API
    ///
    /// Only `generateName` is set in the metadata; the namespace travels in
    /// the request path.
    pub fn pod_manifest(&self) -> Pod {
        let containers: Vec<core_v1::Container> = self
            .spec
            .containers
            .iter()
            .map(|c| core_v1::Container {
                name: c.name.clone(),
                image: Some(c.image.clone()),
                args: non_empty(c.args.clone()),
                volume_mounts: non_empty(
                    c.volume_mounts
                        .iter()
                        .map(|m| core_v1::VolumeMount {
                            name: m.name.clone(),
                            mount_path: m.mount_path.clone(),
                            ..Default::default()
                        })
                        .collect(),
                ),
                env: non_empty(
                    c.env
                        .iter()
                        .map(|e| core_v1::EnvVar {
                            name: e.name.clone(),
                            value: Some(e.value.clone()),
                            ..Default::default()
                        })
                        .collect(),
                ),
                ..Default::default()
            })
            .collect();

        let volumes: Vec<core_v1::Volume> = self
            .spec
            .volumes
            .iter()
            .map(|v| core_v1::Volume {
                name: v.name.clone(),
                secret: Some(core_v1::SecretVolumeSource {
                    secret_name: Some(v.secret.secret_name.clone()),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .collect();

        Pod {
            metadata: ObjectMeta {
                generate_name: Some(self.metadata.generate_name.clone()),
                ..Default::default()
            },
            spec: Some(core_v1::PodSpec {
                restart_policy: Some(self.spec.restart_policy.clone()),
                service_account_name: Some(self.spec.service_account_name.clone()),
                containers,
                volumes: non_empty(volumes),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
