use std::rc::Rc;

use futures::future::{self, Either};
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::record::{RecordKey, StudentRecord};
use crate::source::RecordSource;
use crate::timing;

/// Reject blank identifiers before any request goes out.
pub fn validate_key(key: &RecordKey) -> Result<(), FetchError> {
    if key.student_id.trim().is_empty() {
        return Err(FetchError::Validation { field: "studentId" });
    }
    if key.program_id.trim().is_empty() {
        return Err(FetchError::Validation { field: "programId" });
    }
    Ok(())
}

/// Fetch `key` from `source`, giving up after `timeout_ms`.
///
/// On timeout the in-flight request future is dropped, which cancels it.
pub async fn fetch_record(
    source: &dyn RecordSource,
    key: &RecordKey,
    timeout_ms: u64,
) -> Result<Rc<StudentRecord>, FetchError> {
    validate_key(key)?;

    let started = timing::now_unix_ms();
    info!(source = source.kind(), %key, "fetching record");

    let request = source.fetch(key);
    let deadline = Box::pin(timing::sleep_ms(timeout_ms));
    let outcome = match future::select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), abandoned)) => {
            drop(abandoned);
            Err(FetchError::Timeout {
                after_ms: timeout_ms,
            })
        }
    };

    let elapsed_ms = timing::now_unix_ms() - started;
    match &outcome {
        Ok(record) => debug!(%key, elapsed_ms, score = record.final_score, "record resolved"),
        Err(err) => warn!(%key, elapsed_ms, error = %err, "record fetch failed"),
    }
    outcome
}
