// SPDX-License-Identifier: MIT

//! Retry loop and the backoff strategy seam.

use std::time::Duration;

use tracing::{debug, warn};

use crate::command::{Command, ExecConfig};
use crate::error::ExecError;
use crate::result::ExecResult;
use crate::run;

/// Produces the delay to sleep before the next attempt. `attempt` is the
/// number of attempts already made, starting at 1 after the first
/// failure.
pub trait Backoff: Send + Sync {
    fn delay(&self, attempt: u32) -> Duration;
}

/// Fixed-interval backoff: the same delay before every retry.
#[derive(Debug, Clone, Copy)]
pub struct Constant {
    interval: Duration,
}

impl Constant {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Backoff for Constant {
    fn delay(&self, _attempt: u32) -> Duration {
        self.interval
    }
}

/// Retry-wrapped execution with the config's fixed inter-attempt wait.
pub(crate) async fn execute_with_retries(
    cmd: &Command,
    config: &ExecConfig,
) -> Result<ExecResult, ExecError> {
    execute_with_backoff(cmd, config, &Constant::new(config.wait)).await
}

/// Repeatedly invoke the timeout executor until success, a fatal error,
/// or an exhausted budget (`max_retries` retries, so up to
/// `max_retries + 1` attempts in total).
///
/// Classification per attempt:
/// - deadline exceeded: retryable
/// - any other executor error (could not spawn): fatal, returned as-is
/// - result with a non-zero exit: retryable while `config.retry_if`
///   agrees, otherwise fatal
/// - result with a zero exit: success
///
/// Attempts are strictly sequential; attempt N+1 never starts before
/// attempt N has resolved and the backoff sleep has elapsed. On
/// exhaustion the last observed failure is returned verbatim.
pub(crate) async fn execute_with_backoff(
    cmd: &Command,
    config: &ExecConfig,
    backoff: &dyn Backoff,
) -> Result<ExecResult, ExecError> {
    let max_attempts = config.max_retries + 1;
    let mut attempt = 1u32;

    loop {
        debug!(command = %cmd.raw(), attempt, max_attempts, "executing attempt");

        let failure = match run::execute_with_timeout(cmd, config.timeout).await {
            Ok(result) => match result.as_error() {
                None => return Ok(result),
                Some(err) => {
                    if !(config.retry_if)(result.exit_code, &result.stderr) {
                        return Err(err);
                    }
                    err
                }
            },
            Err(err @ ExecError::DeadlineExceeded { .. }) => err,
            // The command could not be run at all; retrying cannot help.
            Err(err) => return Err(err),
        };

        if attempt >= max_attempts {
            warn!(
                command = %cmd.raw(),
                attempts = max_attempts,
                error = %failure,
                "retry budget exhausted"
            );
            return Err(failure);
        }

        warn!(command = %cmd.raw(), attempt, error = %failure, "attempt failed, retrying");
        tokio::time::sleep(backoff.delay(attempt)).await;
        attempt += 1;
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
