use crate::errors::FetchError;
use crate::models::ContributionCalendar;
use std::future::Future;
use std::pin::Pin;
use tracing::error;

pub type SourceFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ContributionCalendar, FetchError>> + Send + 'a>>;

pub trait ContributionSource: Send + Sync {
    fn fetch<'a>(&'a self, username: &'a str) -> SourceFuture<'a>;
}

pub async fn fetch_or_empty(
    source: &dyn ContributionSource,
    username: &str,
) -> ContributionCalendar {
    match source.fetch(username).await {
        Ok(calendar) => calendar,
        Err(err) => {
            error!("failed to fetch contributions for {username}: {err}");
            ContributionCalendar::default()
        }
    }
}
