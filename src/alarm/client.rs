//! CloudWatch client wrapper behind the alarm state trait

use async_trait::async_trait;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::types::StateValue;

/// Capability to set the state of a remote alarm
///
/// One method, one outcome. The production implementation talks to
/// CloudWatch; tests substitute a scripted double.
#[async_trait]
pub trait AlarmStateClient {
    /// Set the alarm to the given state with the given reason
    async fn set_alarm_state(
        &self,
        alarm_name: &str,
        state_value: &str,
        state_reason: &str,
    ) -> Result<(), SetStateError>;
}

/// Production client delegating to the AWS SDK
///
/// Holds one SDK client, constructed once and reused across retry attempts.
#[derive(Debug, Clone)]
pub struct CloudWatchAlarmClient {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatchAlarmClient {
    /// Wrap an already-configured SDK client
    pub fn new(client: aws_sdk_cloudwatch::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AlarmStateClient for CloudWatchAlarmClient {
    async fn set_alarm_state(
        &self,
        alarm_name: &str,
        state_value: &str,
        state_reason: &str,
    ) -> Result<(), SetStateError> {
        // State validity is CloudWatch's call: unknown strings pass through
        // as an unknown variant and the service rejects them.
        self.client
            .set_alarm_state()
            .alarm_name(alarm_name)
            .state_value(StateValue::from(state_value))
            .state_reason(state_reason)
            .send()
            .await
            .map_err(|e| SetStateError::Api(format!("{}", DisplayErrorContext(e))))?;

        Ok(())
    }
}

/// Remote call errors, all treated as transient by the retry loop
#[derive(Debug, thiserror::Error)]
pub enum SetStateError {
    #[error("CloudWatch API error: {0}")]
    Api(String),
}
