// Trait definition for remote plugin list fetchers

use crate::error::Result;

/// Retrieves the raw body of a remote plugin list.
///
/// The loader calls this once per uncached URL source and spools the bytes
/// to a temporary file before reading them as a plugin list.
#[async_trait::async_trait]
pub trait ListFetcher: Send + Sync {
    /// Fetch the raw body at `url`.
    ///
    /// Transport failures and non-success statuses are reported as
    /// `Error::SourceUnreachable`. There is no retry.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;

    /// Short name used in log output (e.g., "http")
    fn name(&self) -> &'static str;
}
