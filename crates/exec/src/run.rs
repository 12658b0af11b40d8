// SPDX-License-Identifier: MIT

//! Plain and timeout-bounded executors.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::command::Command;
use crate::error::ExecError;
use crate::result::ExecResult;

/// Run the command once, to completion, with no time bound.
///
/// A non-zero exit is a normal (failed) [`ExecResult`], not an error;
/// only a process that could not be spawned at all surfaces as
/// [`ExecError::Spawn`].
pub(crate) async fn execute(cmd: &Command) -> Result<ExecResult, ExecError> {
    let start = Instant::now();
    let cmd_span = tracing::info_span!(
        "exec.cmd",
        program = %cmd.program(),
        args = ?cmd.args(),
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new(cmd.program());
    process
        .args(cmd.args())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // A timed-out attempt drops this future; the child must die with it.
        .kill_on_drop(true);

    let output = process.output().await.map_err(|source| ExecError::Spawn {
        command: cmd.raw().to_string(),
        source,
    })?;

    let exit_code = output.status.code().unwrap_or(-1);
    cmd_span.record("exit_code", exit_code);
    cmd_span.record("duration_ms", start.elapsed().as_millis() as u64);

    Ok(ExecResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code,
    })
}

/// Race the plain executor against a deadline measured from the start of
/// this call.
///
/// If the process finishes first, its result or error propagates
/// unchanged. If the deadline fires first, the attempt future is dropped
/// (killing the child) and [`ExecError::DeadlineExceeded`] is returned.
pub(crate) async fn execute_with_timeout(
    cmd: &Command,
    timeout: Duration,
) -> Result<ExecResult, ExecError> {
    match tokio::time::timeout(timeout, execute(cmd)).await {
        Ok(result) => result,
        Err(_elapsed) => {
            warn!(command = %cmd.raw(), ?timeout, "command exceeded deadline");
            Err(ExecError::DeadlineExceeded {
                command: cmd.raw().to_string(),
                timeout,
            })
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
