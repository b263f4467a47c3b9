//! Podrun Core
//!
//! Core types for running a single workload as a Kubernetes Pod.
//!
//! This crate contains:
//! - Domain types: workload spec, job handle, phase
//! - Translation of a workload spec into a typed Pod creation request

pub mod domain;
pub mod error;

pub use domain::{JobHandle, Phase, WorkloadSpec};
pub use error::SpecError;
pub use k8s_openapi::api::core::v1::Pod;
