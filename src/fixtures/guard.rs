use std::future::Future;
use std::panic::{AssertUnwindSafe, resume_unwind};

use futures_util::FutureExt;
use tracing::warn;

use crate::error::CheckError;

/// Runs `body`, then `teardown`, on every exit path.
///
/// A panic inside `body` is held until `teardown` has completed and is then
/// resumed. Both outputs are returned so the caller decides how a teardown
/// failure is reported.
pub async fn guarded<B, T, D, U>(body: B, teardown: D) -> (T, U)
where
    B: Future<Output = T>,
    D: Future<Output = U>,
{
    let outcome = AssertUnwindSafe(body).catch_unwind().await;
    let cleanup = teardown.await;
    match outcome {
        Ok(value) => (value, cleanup),
        Err(payload) => resume_unwind(payload),
    }
}

/// [`guarded`] for checks: the body's error wins, otherwise a cleanup error
/// fails the check.
///
/// # Errors
///
/// Returns the body error, or the cleanup error when the body succeeded.
pub async fn with_cleanup<B, T, D>(body: B, teardown: D) -> Result<T, CheckError>
where
    B: Future<Output = Result<T, CheckError>>,
    D: Future<Output = Result<(), CheckError>>,
{
    match guarded(body, teardown).await {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(cleanup)) => Err(cleanup),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup)) => {
            warn!("Cleanup also failed: {}", cleanup);
            Err(err)
        }
    }
}
