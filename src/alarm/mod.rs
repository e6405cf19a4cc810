//! Alarm state delivery
//!
//! Splits the work into a one-method client trait (so tests can script
//! outcomes without network access) and a bounded retry loop that drives it.

pub mod client;
pub mod retry;

pub use client::{AlarmStateClient, CloudWatchAlarmClient, SetStateError};
pub use retry::{set_alarm_state_with_retry, RetryError, INITIAL_BACKOFF, MAX_RETRIES};
