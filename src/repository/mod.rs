pub mod memory;
pub mod subscriber;
pub mod vacancy;

pub use memory::{InMemorySubscriberRepository, InMemoryVacancyRepository};
pub use subscriber::{PgSubscriberRepository, SubscriberRepository};
pub use vacancy::{PgVacancyRepository, VacancyRepository, VACANCY_SORT_SAFELIST};

use std::future::Future;
use std::time::Duration;

use crate::error::{Error, Result};

pub(crate) const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Bounds one store call with a deadline. The inner sqlx result is returned
/// untouched so call sites keep control over their own error mapping.
pub(crate) async fn with_deadline<T, F>(timeout: Duration, fut: F) -> Result<sqlx::Result<T>>
where
    F: Future<Output = sqlx::Result<T>>,
{
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| Error::Timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn with_deadline_reports_timeout() {
        let result: Result<sqlx::Result<()>> =
            with_deadline(Duration::from_millis(5), std::future::pending()).await;
        assert!(matches!(result, Err(Error::Timeout)));
    }

    #[tokio::test]
    async fn with_deadline_passes_the_inner_result_through() {
        let result = with_deadline(Duration::from_secs(1), async { Ok(7) }).await;
        let inner = assert_ok!(result);
        assert_eq!(assert_ok!(inner), 7);
    }
}
