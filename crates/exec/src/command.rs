// SPDX-License-Identifier: MIT

//! Command descriptor and execution configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ExecError;
use crate::result::ExecResult;
use crate::retry::{self, Backoff};
use crate::run;

/// Commands split on single spaces; arguments with embedded spaces are
/// not supported.
const COMMAND_SEPARATOR: char = ' ';

/// Default wall-clock bound for a single attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default fixed delay between retry attempts.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(3);

/// Decides whether an attempt that ran but exited non-zero is worth
/// retrying, given its exit code and captured stderr.
pub type RetryPredicate = fn(exit_code: i32, stderr: &str) -> bool;

/// Default retryability: any non-zero exit is retried, blindly.
fn retry_any(_exit_code: i32, _stderr: &str) -> bool {
    true
}

fn default_retry_predicate() -> RetryPredicate {
    retry_any
}

/// Execution policy for one command: per-attempt timeout, inter-retry
/// wait, and the retry budget. Shared read-only across all attempts of
/// one execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Maximum wall-clock duration for a single attempt.
    pub timeout: Duration,
    /// Fixed delay between retry attempts.
    pub wait: Duration,
    /// Retry budget; `0` means a single timeout-bounded attempt. Up to
    /// `max_retries + 1` attempts are made in total.
    pub max_retries: u32,
    /// Retryability decision for attempts that ran but exited non-zero.
    #[serde(skip, default = "default_retry_predicate")]
    pub retry_if: RetryPredicate,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            wait: DEFAULT_WAIT,
            max_retries: 0,
            retry_if: retry_any,
        }
    }
}

impl ExecConfig {
    /// Config with the default 10s timeout, 3s wait, and no retries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the fixed delay between retry attempts.
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Set the retry budget.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Replace the blind-retry default with a caller-supplied
    /// retryability predicate.
    pub fn retry_if(mut self, predicate: RetryPredicate) -> Self {
        self.retry_if = predicate;
        self
    }
}

/// Immutable description of what to run: the program, its arguments, and
/// the original raw string kept for diagnostics.
#[derive(Debug, Clone)]
pub struct Command {
    raw: String,
    program: String,
    args: Vec<String>,
    config: Option<ExecConfig>,
}

impl Command {
    /// Parse a raw command string into a descriptor.
    ///
    /// The string is split on single spaces; the first token is the
    /// program, the remaining tokens its arguments. A bare program name
    /// with no arguments is rejected as malformed. A `None` config means
    /// "run once, no timeout, no retry".
    pub fn new(command: &str, config: Option<ExecConfig>) -> Result<Self, ExecError> {
        if command.is_empty() {
            return Err(ExecError::EmptyCommand);
        }

        let mut parts = command.split(COMMAND_SEPARATOR);
        let program = parts.next().unwrap_or_default().to_string();
        let args: Vec<String> = parts.map(str::to_string).collect();
        if program.is_empty() || args.is_empty() {
            return Err(ExecError::MalformedCommand {
                command: command.to_string(),
            });
        }

        Ok(Self {
            raw: command.to_string(),
            program,
            args,
            config,
        })
    }

    /// The original unparsed command string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    pub(crate) fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the command, dispatching to exactly one executor tier: no
    /// config runs once with no time bound; a config with a zero retry
    /// budget runs one timeout-bounded attempt; a positive budget wraps
    /// the timeout executor in the retry loop.
    pub async fn execute(&self) -> Result<ExecResult, ExecError> {
        match &self.config {
            None => run::execute(self).await,
            Some(config) if config.max_retries > 0 => {
                retry::execute_with_retries(self, config).await
            }
            Some(config) => run::execute_with_timeout(self, config.timeout).await,
        }
    }

    /// Like [`execute`](Self::execute), but with a caller-supplied
    /// backoff strategy in place of the config's fixed interval.
    pub async fn execute_with_backoff(
        &self,
        backoff: &dyn Backoff,
    ) -> Result<ExecResult, ExecError> {
        match &self.config {
            None => run::execute(self).await,
            Some(config) if config.max_retries > 0 => {
                retry::execute_with_backoff(self, config, backoff).await
            }
            Some(config) => run::execute_with_timeout(self, config.timeout).await,
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
