//! Runner configuration
//!
//! Defines the tunables of a single job run: how often the workload is
//! polled, how long it may run, and whether its output is fetched before
//! cleanup.

use std::time::Duration;

/// Default wait between two status reads
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default deadline for a run when the caller does not supply one
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(600);

/// Default upper bound for the best-effort log read
pub const DEFAULT_LOG_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// How often to read the workload phase
    pub poll_interval: Duration,

    /// Deadline applied when `run` is called without a timeout
    pub default_timeout: Duration,

    /// Fetch the workload output before deleting it
    pub collect_logs: bool,

    /// Maximum time spent fetching logs
    pub log_read_timeout: Duration,
}

impl RunnerConfig {
    /// Creates a new configuration with defaults
    pub fn new() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            default_timeout: DEFAULT_JOB_TIMEOUT,
            collect_logs: false,
            log_read_timeout: DEFAULT_LOG_READ_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - PODRUN_POLL_INTERVAL (seconds, default: 5)
    /// - PODRUN_JOB_TIMEOUT (seconds, default: 600)
    /// - PODRUN_COLLECT_LOGS (true/false, default: false)
    /// - PODRUN_LOG_READ_TIMEOUT (seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Self::from_vars(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Builds configuration from an arbitrary variable lookup
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let seconds = |key: &str, default: Duration| {
            get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        let collect_logs = get("PODRUN_COLLECT_LOGS")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(false);

        Self {
            poll_interval: seconds("PODRUN_POLL_INTERVAL", DEFAULT_POLL_INTERVAL),
            default_timeout: seconds("PODRUN_JOB_TIMEOUT", DEFAULT_JOB_TIMEOUT),
            collect_logs,
            log_read_timeout: seconds("PODRUN_LOG_READ_TIMEOUT", DEFAULT_LOG_READ_TIMEOUT),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_log_collection(mut self, collect: bool) -> Self {
        self.collect_logs = collect;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.default_timeout.is_zero() {
            anyhow::bail!("default_timeout must be greater than 0");
        }

        if self.collect_logs && self.log_read_timeout.is_zero() {
            anyhow::bail!("log_read_timeout must be greater than 0 when collecting logs");
        }

        Ok(())
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.default_timeout, Duration::from_secs(600));
        assert!(!config.collect_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = RunnerConfig::from_vars(lookup(&[
            ("PODRUN_POLL_INTERVAL", "2"),
            ("PODRUN_JOB_TIMEOUT", "120"),
            ("PODRUN_COLLECT_LOGS", "yes"),
        ]));

        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.default_timeout, Duration::from_secs(120));
        assert!(config.collect_logs);
        assert_eq!(config.log_read_timeout, DEFAULT_LOG_READ_TIMEOUT);
    }

    #[test]
    fn test_from_vars_ignores_garbage() {
        let config = RunnerConfig::from_vars(lookup(&[
            ("PODRUN_POLL_INTERVAL", "soon"),
            ("PODRUN_COLLECT_LOGS", "maybe"),
        ]));

        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RunnerConfig::default();
        assert!(config.validate().is_ok());

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        config.poll_interval = Duration::from_secs(1);
        config.default_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config.default_timeout = Duration::from_secs(1);
        config.collect_logs = true;
        config.log_read_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
