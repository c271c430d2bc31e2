use std::future::Future;
use std::time::Duration;

use crate::errors::ApiError;

/// Upper bound on any single database round trip.
pub const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a query future under [`STORE_TIMEOUT`], mapping both timeouts and
/// driver errors into [`ApiError`].
pub async fn with_timeout<T, F>(fut: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(STORE_TIMEOUT, fut).await {
        Ok(res) => res.map_err(ApiError::from),
        Err(_) => Err(ApiError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_through_query_results() {
        let out = with_timeout(async { Ok::<_, sqlx::Error>(7) }).await;
        assert_eq!(out.unwrap(), 7);
    }

    #[tokio::test]
    async fn maps_driver_errors() {
        let out: Result<i32, _> = with_timeout(async { Err(sqlx::Error::PoolClosed) }).await;
        assert!(matches!(out.unwrap_err(), ApiError::Storage(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn surfaces_elapsed_timeout() {
        let out: Result<i32, _> = with_timeout(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(0)
        })
        .await;
        assert!(matches!(out.unwrap_err(), ApiError::Timeout));
    }
}
