//! Alarmset: CloudWatch Alarm State Setter
//!
//! A small CLI utility that sets the state of a CloudWatch alarm, retrying
//! with exponential backoff when the API call fails. Configuration comes from
//! three environment variables; the actual API call is delegated to the AWS
//! SDK behind a one-method trait so the retry logic can be tested without
//! network access.
//!
//! # Example
//!
//! ```no_run
//! use alarmset::{set_alarm_state_with_retry, AlarmConfig, CloudWatchAlarmClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AlarmConfig::from_env()?;
//!
//! let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let client = CloudWatchAlarmClient::new(aws_sdk_cloudwatch::Client::new(&sdk_config));
//!
//! set_alarm_state_with_retry(
//!     &client,
//!     &config.alarm_name,
//!     &config.state_value,
//!     &config.state_reason,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod alarm;
pub mod config;

// Re-export commonly used types
pub use alarm::{
    set_alarm_state_with_retry, AlarmStateClient, CloudWatchAlarmClient, RetryError,
    SetStateError, INITIAL_BACKOFF, MAX_RETRIES,
};
pub use config::{AlarmConfig, ConfigError};
