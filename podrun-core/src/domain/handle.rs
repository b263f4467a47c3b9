//! Job handle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a workload object created by the control plane
///
/// The name is generated by the control plane from the spec's
/// `generateName` prefix. A handle stops being meaningful once the object
/// has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobHandle {
    pub name: String,
    pub namespace: String,
}

impl JobHandle {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_namespace_qualified() {
        let handle = JobHandle::new("train-x7k2q", "kubeflow");
        assert_eq!(handle.to_string(), "kubeflow/train-x7k2q");
    }
}
