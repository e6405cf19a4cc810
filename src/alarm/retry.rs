//! Bounded retry loop with exponential backoff

use std::time::Duration;

use super::client::AlarmStateClient;

/// Maximum number of attempts before giving up
pub const MAX_RETRIES: u32 = 3;
/// Delay before the second attempt; doubles after each failure
pub const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// Set the alarm state, retrying failed attempts with exponential backoff
///
/// Returns as soon as one attempt succeeds. Each failure is logged with its
/// attempt number, then the loop sleeps the current backoff and doubles it.
/// After `MAX_RETRIES` failures the per-attempt errors are not aggregated;
/// only the terminal exhaustion error is returned.
pub async fn set_alarm_state_with_retry<C>(
    client: &C,
    alarm_name: &str,
    state_value: &str,
    state_reason: &str,
) -> Result<(), RetryError>
where
    C: AlarmStateClient + Sync,
{
    let mut backoff = INITIAL_BACKOFF;

    for attempt in 1..=MAX_RETRIES {
        match client
            .set_alarm_state(alarm_name, state_value, state_reason)
            .await
        {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::error!(
                    attempt,
                    error = %e,
                    "Failed to set CloudWatch alarm state"
                );

                // Exponential backoff before retrying
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }
    }

    Err(RetryError::Exhausted)
}

/// Terminal retry errors
#[derive(Debug, thiserror::Error)]
pub enum RetryError {
    #[error("exceeded maximum retries")]
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::client::SetStateError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Scripted double: pops one result per call, succeeding once the
    /// script runs out, and records when each call happened.
    struct ScriptedClient {
        script: Mutex<VecDeque<Result<(), SetStateError>>>,
        call_times: Mutex<Vec<Instant>>,
    }

    impl ScriptedClient {
        fn new(script: Vec<Result<(), SetStateError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                call_times: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.call_times.lock().unwrap().len()
        }

        fn delays_between_calls(&self) -> Vec<Duration> {
            let times = self.call_times.lock().unwrap();
            times.windows(2).map(|w| w[1] - w[0]).collect()
        }
    }

    fn api_error() -> SetStateError {
        SetStateError::Api("API error".to_string())
    }

    #[async_trait]
    impl AlarmStateClient for ScriptedClient {
        async fn set_alarm_state(
            &self,
            _alarm_name: &str,
            _state_value: &str,
            _state_reason: &str,
        ) -> Result<(), SetStateError> {
            self.call_times.lock().unwrap().push(Instant::now());
            self.script.lock().unwrap().pop_front().unwrap_or(Ok(()))
        }
    }

    async fn run(client: &ScriptedClient) -> Result<(), RetryError> {
        set_alarm_state_with_retry(client, "TestAlarm", "OK", "Test reason").await
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_first_attempt() {
        let client = ScriptedClient::new(vec![Ok(())]);

        let result = run(&client).await;
        assert!(result.is_ok());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_attempts_fail() {
        let client = ScriptedClient::new(vec![
            Err(api_error()),
            Err(api_error()),
            Err(api_error()),
        ]);

        let err = run(&client).await.unwrap_err();
        assert_eq!(err.to_string(), "exceeded maximum retries");
        assert_eq!(client.calls(), MAX_RETRIES as usize);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_final_attempt() {
        let client = ScriptedClient::new(vec![Err(api_error()), Err(api_error()), Ok(())]);

        let result = run(&client).await;
        assert!(result.is_ok());
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_doubles_between_attempts() {
        let client = ScriptedClient::new(vec![
            Err(api_error()),
            Err(api_error()),
            Err(api_error()),
        ]);

        run(&client).await.unwrap_err();

        let delays = client.delays_between_calls();
        assert_eq!(
            delays,
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_sleeps_final_backoff() {
        // The loop sleeps after every failed attempt, including the last one,
        // so exhaustion surfaces 1 + 2 + 4 seconds after the first call.
        let client = ScriptedClient::new(vec![
            Err(api_error()),
            Err(api_error()),
            Err(api_error()),
        ]);

        let start = Instant::now();
        run(&client).await.unwrap_err();
        assert_eq!(start.elapsed(), Duration::from_secs(7));
    }
}
