// SPDX-License-Identifier: MIT

//! Error types for command construction and execution.

use std::time::Duration;

/// Errors surfaced while building or executing a [`Command`](crate::Command).
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The command string was empty.
    #[error("cannot execute empty command")]
    EmptyCommand,

    /// The command string did not split into a program and at least one
    /// argument.
    #[error("command `{command}` is malformed, expected format `program args...`")]
    MalformedCommand { command: String },

    /// The program could not be spawned at all (missing binary,
    /// permission denied, ...).
    #[error("executing command `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// A single attempt exceeded its configured timeout. The child
    /// process is killed when the attempt is abandoned.
    #[error("command `{command}` exceeded its {timeout:?} deadline")]
    DeadlineExceeded { command: String, timeout: Duration },

    /// The process ran to completion but exited non-zero. Produced by
    /// [`ExecResult::as_error`](crate::ExecResult::as_error), never by the
    /// executors themselves.
    #[error("code: {exit_code}, stderr: {stderr}")]
    CommandFailed { exit_code: i32, stderr: String },
}

impl ExecError {
    /// True when another attempt could plausibly succeed: the command ran
    /// too long, or ran and exited non-zero. Construction and spawn
    /// failures are never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExecError::DeadlineExceeded { .. } | ExecError::CommandFailed { .. }
        )
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
