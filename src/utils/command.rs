use std::time::Duration;
use tokio::time::timeout;

use crate::utils::{AppError, AppResult};

/// Run a blocking, fallible job on the blocking pool, bounded by `timeout_secs`.
///
/// The job's own error is returned as-is. A job that outlives the budget
/// yields `Timeout`; its eventual result is discarded.
pub async fn run_blocking_with_timeout<T, F>(timeout_secs: u64, job: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let result = timeout(
        Duration::from_secs(timeout_secs),
        tokio::task::spawn_blocking(job),
    )
    .await;

    match result {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => Err(AppError::CommandFailed(format!("task join: {}", e))),
        Err(_) => Err(AppError::Timeout(timeout_secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_job_result_within_budget() {
        let value = run_blocking_with_timeout(5, || Ok(42)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn propagates_job_error() {
        let result: AppResult<()> =
            run_blocking_with_timeout(5, || Err(AppError::NotFound("dock.plist".into()))).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn slow_job_times_out() {
        let result = run_blocking_with_timeout(0, || {
            std::thread::sleep(Duration::from_millis(300));
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(AppError::Timeout(0))));
    }

    #[tokio::test]
    async fn panicking_job_is_command_failure() {
        let result: AppResult<()> = run_blocking_with_timeout(5, || panic!("boom")).await;
        assert!(matches!(result, Err(AppError::CommandFailed(_))));
    }
}
