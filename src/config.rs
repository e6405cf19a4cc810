//! Environment-based configuration

/// Environment variable holding the alarm name
pub const ENV_ALARM_NAME: &str = "CLOUDWATCH_ALARM_NAME";
/// Environment variable holding the target state (OK, ALARM, INSUFFICIENT_DATA)
pub const ENV_ALARM_STATE: &str = "ALARM_STATE";
/// Environment variable holding the state change reason
pub const ENV_ALARM_REASON: &str = "ALARM_REASON";

/// Inputs for a single alarm state change
#[derive(Debug, Clone)]
pub struct AlarmConfig {
    /// Name of the target alarm
    pub alarm_name: String,
    /// State to set (validity is enforced by CloudWatch, not locally)
    pub state_value: String,
    /// Free-text reason for the state change
    pub state_reason: String,
}

impl AlarmConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Unset and empty values are treated the same: both are configuration
    /// errors, reported against the first variable that fails.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(Self {
            alarm_name: require(ENV_ALARM_NAME)?,
            state_value: require(ENV_ALARM_STATE)?,
            state_reason: require(ENV_ALARM_REASON)?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}
