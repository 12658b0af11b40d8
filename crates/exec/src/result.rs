// SPDX-License-Identifier: MIT

//! Structured outcome of a single process invocation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExecError;

/// Outcome of one process that actually started and was observed to
/// terminate.
///
/// A process that could not be spawned, or whose attempt was abandoned at
/// the deadline, never produces an `ExecResult`; those cases surface as
/// [`ExecError`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecResult {
    /// Captured standard output (empty if the process produced none).
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Process exit code. `0` means success; `-1` stands in for children
    /// killed by a signal, where the OS reports no code.
    pub exit_code: i32,
}

impl ExecResult {
    /// True iff the process exited non-zero.
    pub fn failed(&self) -> bool {
        self.exit_code != 0
    }

    /// Bridge into the error domain: the failed result as an
    /// [`ExecError::CommandFailed`], or `None` when the process succeeded.
    pub fn as_error(&self) -> Option<ExecError> {
        if self.failed() {
            Some(ExecError::CommandFailed {
                exit_code: self.exit_code,
                stderr: self.stderr.clone(),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for ExecResult {
    /// Human-readable report: exit code, then labeled stdout/stderr
    /// blocks for whichever streams are non-empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit code: {}", self.exit_code)?;
        if !self.stdout.is_empty() {
            write!(f, "\n--------------stdout--------------\n{}", self.stdout)?;
        }
        if !self.stderr.is_empty() {
            write!(f, "\n--------------stderr--------------\n{}", self.stderr)?;
        }
        if !self.stdout.is_empty() || !self.stderr.is_empty() {
            write!(f, "----------------------------------")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
