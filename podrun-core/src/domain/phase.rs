//! Workload phase as reported by the control plane

use std::fmt;

/// Lifecycle phase of a workload object
///
/// Only `Pending` and `Running` are worth waiting on. Anything else ends the
/// wait: `Succeeded` as a success, `Failed` or a phase we do not recognise
/// (kept verbatim in `Unknown`) as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown(String),
}

impl Phase {
    /// Parses a phase string, ignoring case
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Phase::Pending,
            "running" => Phase::Running,
            "succeeded" => Phase::Succeeded,
            "failed" => Phase::Failed,
            _ => Phase::Unknown(raw.to_string()),
        }
    }

    /// Whether the workload may still change phase
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Pending | Phase::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Phase::Succeeded)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Phase::Pending => "pending",
            Phase::Running => "running",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
            Phase::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for Phase {
    fn from(raw: &str) -> Self {
        Phase::parse(raw)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Phase::parse("Pending"), Phase::Pending);
        assert_eq!(Phase::parse("RUNNING"), Phase::Running);
        assert_eq!(Phase::parse("succeeded"), Phase::Succeeded);
        assert_eq!(Phase::parse("Failed"), Phase::Failed);
    }

    #[test]
    fn test_unrecognised_phase_is_kept_and_terminal() {
        let phase = Phase::parse("Unknown");
        assert_eq!(phase, Phase::Unknown("Unknown".to_string()));
        assert!(phase.is_terminal());
        assert!(!phase.is_success());
        assert_eq!(phase.to_string(), "Unknown");
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::Succeeded.is_terminal());
        assert!(Phase::Failed.is_terminal());
        assert!(!Phase::Pending.is_terminal());
        assert!(!Phase::Running.is_terminal());
        assert!(Phase::Pending.is_active());

        assert!(Phase::Succeeded.is_success());
        assert!(!Phase::Failed.is_success());
    }
}
