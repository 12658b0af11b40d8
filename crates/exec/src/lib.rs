// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rb-exec: bounded execution of external commands.
//!
//! Runs a program with a fixed argument list, enforces a per-attempt
//! wall-clock deadline, and optionally retries failed or timed-out
//! attempts with fixed-interval backoff up to a configured budget.
//!
//! There is no shell in the loop: the command string is split on single
//! spaces into a program and its arguments, with no pipes, redirects,
//! globbing, or quoting. Output is captured in full after the process
//! exits, never streamed.
//!
//! A process that ran and exited non-zero is a normal (failed)
//! [`ExecResult`], not an error; only "could not spawn" and "did not
//! finish in time" surface as [`ExecError`].
//!
//! ```no_run
//! use rb_exec::{Command, ExecConfig};
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<(), rb_exec::ExecError> {
//! let config = ExecConfig::new()
//!     .timeout(Duration::from_secs(30))
//!     .wait(Duration::from_secs(5))
//!     .max_retries(3);
//! let result = Command::new("curl -fsSL https://example.com", Some(config))?
//!     .execute()
//!     .await?;
//! assert!(!result.failed());
//! # Ok(())
//! # }
//! ```

mod command;
mod error;
mod result;
mod retry;
mod run;

pub use command::{Command, ExecConfig, RetryPredicate, DEFAULT_TIMEOUT, DEFAULT_WAIT};
pub use error::ExecError;
pub use result::ExecResult;
pub use retry::{Backoff, Constant};
