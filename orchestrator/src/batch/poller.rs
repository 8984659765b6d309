//! Batch submission and fixed-cadence status polling.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::api::types::{BatchRequest, BatchStatus};
use crate::api::MarketingApi;
use crate::error::Result;

/// Fixed wait between status polls.
pub const BATCH_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Submit a batch and poll until the remote system reports a terminal state.
///
/// After each non-terminal snapshot the task sleeps for
/// [`BATCH_POLL_INTERVAL`] and fetches a fresh snapshot. There is no retry
/// bound and no timeout: if the remote system never reaches a terminal
/// state this loop runs indefinitely. That liveness risk is intentional
/// and callers must account for it.
///
/// A finished batch with errored operations is reported with a single
/// warning naming the target list and the error count; the sub-operations
/// are not retried and the call still returns the final snapshot.
pub async fn submit_and_wait<A: MarketingApi>(
    api: &A,
    list_id: &str,
    batch: &BatchRequest,
) -> Result<BatchStatus> {
    let mut status = api.submit_batch(batch).await?;

    info!(
        batch_id = %status.id,
        list_id = list_id,
        operations = batch.operations.len(),
        "batch_submitted"
    );

    while !status.status.is_terminal() {
        sleep(BATCH_POLL_INTERVAL).await;
        status = api.get_batch_status(&status.id).await?;

        info!(
            batch_id = %status.id,
            state = ?status.status,
            total = status.total_operations,
            errored = status.errored_operations,
            "batch_polled"
        );
    }

    if status.errored_operations > 0 {
        warn!(
            batch_id = %status.id,
            list_id = list_id,
            errored = status.errored_operations,
            total = status.total_operations,
            "batch_finished_with_errors"
        );
    } else {
        info!(
            batch_id = %status.id,
            list_id = list_id,
            total = status.total_operations,
            "batch_finished"
        );
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::api::types::BatchState;
    use crate::error::Error;
    use std::sync::atomic::Ordering;

    fn upsert_batch() -> BatchRequest {
        crate::batch::build_member_upsert_batch(
            "list1",
            &["a@example.com".to_string(), "b@example.com".to_string()],
        )
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_until_finished() {
        let api = MockApi::default();
        api.submit_responses
            .lock()
            .unwrap()
            .push_back(Ok(MockApi::batch("b1", BatchState::Pending, 2, 0)));
        {
            let mut polls = api.poll_responses.lock().unwrap();
            polls.push_back(Ok(MockApi::batch("b1", BatchState::Pending, 2, 0)));
            polls.push_back(Ok(MockApi::batch("b1", BatchState::Finished, 2, 0)));
        }

        let status = submit_and_wait(&api, "list1", &upsert_batch()).await.unwrap();

        assert_eq!(status.status, BatchState::Finished);
        assert_eq!(api.calls.submit_batch.load(Ordering::SeqCst), 1);
        // Two sleeps, two polls: {pending, pending, finished}
        assert_eq!(api.calls.get_batch_status.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_terminal_submit_response_skips_polling() {
        let api = MockApi::default();
        api.submit_responses
            .lock()
            .unwrap()
            .push_back(Ok(MockApi::batch("b1", BatchState::Finished, 0, 0)));

        let status = submit_and_wait(&api, "list1", &BatchRequest::default())
            .await
            .unwrap();

        assert_eq!(status.status, BatchState::Finished);
        assert_eq!(api.calls.get_batch_status.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_partial_failure_still_returns_ok() {
        let api = MockApi::default();
        api.submit_responses
            .lock()
            .unwrap()
            .push_back(Ok(MockApi::batch("b1", BatchState::Started, 5, 0)));
        api.poll_responses
            .lock()
            .unwrap()
            .push_back(Ok(MockApi::batch("b1", BatchState::Finished, 5, 3)));

        let status = submit_and_wait(&api, "list1", &upsert_batch()).await.unwrap();

        // Partial failure is a diagnostic, not an error
        assert_eq!(status.errored_operations, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_error_propagates() {
        let api = MockApi::default();
        api.submit_responses
            .lock()
            .unwrap()
            .push_back(Ok(MockApi::batch("b1", BatchState::Pending, 1, 0)));
        api.poll_responses
            .lock()
            .unwrap()
            .push_back(Err(Error::remote(500, "boom")));

        let err = submit_and_wait(&api, "list1", &upsert_batch())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Remote { status: 500, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_state_keeps_polling() {
        let api = MockApi::default();
        api.submit_responses
            .lock()
            .unwrap()
            .push_back(Ok(MockApi::batch("b1", BatchState::Unknown, 1, 0)));
        api.poll_responses
            .lock()
            .unwrap()
            .push_back(Ok(MockApi::batch("b1", BatchState::Finished, 1, 0)));

        let status = submit_and_wait(&api, "list1", &upsert_batch()).await.unwrap();

        assert_eq!(status.status, BatchState::Finished);
        assert_eq!(api.calls.get_batch_status.load(Ordering::SeqCst), 1);
    }
}
