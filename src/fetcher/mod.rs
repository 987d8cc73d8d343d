pub mod browser;
pub mod http_fetcher;
pub mod retry;

pub use browser::BrowserFetcher;
pub use http_fetcher::HttpFetcher;
pub use retry::RetryPolicy;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;

/// Something that can turn a URL into an HTML document.
///
/// Listing pages go through [`BrowserFetcher`], vacancy pages through
/// [`HttpFetcher`]; both are wrapped by a [`RetryPolicy`] at the call site.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String>;
}
