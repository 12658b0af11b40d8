// SPDX-License-Identifier: MIT

use super::*;
use crate::command::ExecConfig;
use std::time::Instant;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// ---------------------------------------------------------------------------
// Plain executor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_exit_captures_stdout() {
    init_tracing();
    let cmd = Command::new("echo hello", None).unwrap();
    let result = execute(&cmd).await.unwrap();
    assert_eq!(result.exit_code, 0);
    assert!(!result.failed());
    assert_eq!(result.stdout, "hello\n");
}

#[tokio::test]
async fn nonzero_exit_is_a_result_not_an_error() {
    let cmd = Command::new("cat /nonexistent_file_xyz_12345", None).unwrap();
    let result = execute(&cmd).await.unwrap();
    assert!(result.failed());
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("nonexistent_file_xyz_12345"),
        "stderr = {}",
        result.stderr
    );
}

#[tokio::test]
async fn missing_binary_is_a_spawn_error() {
    let cmd = Command::new("nonexistent_binary_xyz_12345 arg", None).unwrap();
    let err = execute(&cmd).await.unwrap_err();
    match err {
        ExecError::Spawn { command, source } => {
            assert_eq!(command, "nonexistent_binary_xyz_12345 arg");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Spawn, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Timeout executor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn finishing_before_the_deadline_propagates_the_result() {
    let cmd = Command::new("echo quick", None).unwrap();
    let result = execute_with_timeout(&cmd, Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "quick\n");
}

#[tokio::test]
async fn deadline_elapsing_first_reports_deadline_exceeded() {
    init_tracing();
    let cmd = Command::new("sleep 5", None).unwrap();
    let start = Instant::now();
    let err = execute_with_timeout(&cmd, Duration::from_millis(100))
        .await
        .unwrap_err();
    assert!(start.elapsed() < Duration::from_secs(2));
    match err {
        ExecError::DeadlineExceeded { command, timeout } => {
            assert_eq!(command, "sleep 5");
            assert_eq!(timeout, Duration::from_millis(100));
        }
        other => panic!("expected DeadlineExceeded, got: {other:?}"),
    }
}

#[tokio::test]
async fn spawn_error_propagates_through_the_timeout_layer() {
    let cmd = Command::new("nonexistent_binary_xyz_12345 arg", None).unwrap();
    let err = execute_with_timeout(&cmd, Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::Spawn { .. }));
}

// ---------------------------------------------------------------------------
// Dispatch through Command::execute
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_config_runs_plain() {
    let result = Command::new("echo plain", None)
        .unwrap()
        .execute()
        .await
        .unwrap();
    assert_eq!(result.stdout, "plain\n");
}

#[tokio::test]
async fn zero_retries_runs_timeout_only() {
    let config = ExecConfig::new().timeout(Duration::from_millis(100));
    let err = Command::new("sleep 5", Some(config))
        .unwrap()
        .execute()
        .await
        .unwrap_err();
    assert!(matches!(err, ExecError::DeadlineExceeded { .. }));
}
