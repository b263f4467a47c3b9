//! Core domain types
//!
//! These types describe a single workload run and are shared between the
//! control-plane client (which produces handles and phases) and the runner
//! (which drives the lifecycle).

pub mod handle;
pub mod phase;
pub mod workload;

pub use handle::JobHandle;
pub use phase::Phase;
pub use workload::{
    ContainerSpec, EnvVar, PodTemplate, SecretSource, SecretVolume, VolumeMount, WorkloadMetadata,
    WorkloadSpec,
};
