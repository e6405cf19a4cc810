//! Alarmset
//!
//! Sets the state of a CloudWatch alarm, retrying with exponential backoff.
//!
//! Run with: cargo run
//!
//! Environment variables:
//! - CLOUDWATCH_ALARM_NAME: Name of the target alarm (required)
//! - ALARM_STATE: State to set: OK, ALARM, or INSUFFICIENT_DATA (required)
//! - ALARM_REASON: Reason for the state change (required)
//! - RUST_LOG: Log level (default: info)
//!
//! AWS credentials and region come from the SDK's default provider chain
//! (environment, shared config files, instance metadata).
//!
//! Exits 0 on success; 1 on missing configuration, unresolvable AWS config,
//! or retry exhaustion.

use alarmset::{set_alarm_state_with_retry, AlarmConfig, CloudWatchAlarmClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alarmset=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AlarmConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Missing required environment variables");
            std::process::exit(1);
        }
    };

    // Load AWS configuration. The default loader itself is infallible; a
    // missing region is the one local precondition worth failing fast on.
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    if sdk_config.region().is_none() {
        tracing::error!("Failed to load AWS config: no region resolved (set AWS_REGION)");
        std::process::exit(1);
    }

    let client = CloudWatchAlarmClient::new(aws_sdk_cloudwatch::Client::new(&sdk_config));

    if let Err(e) = set_alarm_state_with_retry(
        &client,
        &config.alarm_name,
        &config.state_value,
        &config.state_reason,
    )
    .await
    {
        tracing::error!(error = %e, "Failed to set CloudWatch alarm state after retries");
        std::process::exit(1);
    }

    tracing::info!(
        alarm_name = %config.alarm_name,
        alarm_state = %config.state_value,
        "Successfully set CloudWatch alarm state"
    );
}
