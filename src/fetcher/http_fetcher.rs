use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::app::Result;
use crate::config::HttpSettings;
use crate::fetcher::DocumentFetcher;

/// Fetches vacancy pages over plain HTTP.
///
/// The client (and its connection pool) lives for the whole run. Connection
/// failures and read failures are retried here, up to their own budgets,
/// before the error reaches the retry policy.
pub struct HttpFetcher {
    client: Client,
    connect_retries: u32,
    read_retries: u32,
}

impl HttpFetcher {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(settings.user_agent.as_str())
            .redirect(Policy::limited(settings.redirect_limit))
            .build()?;

        Ok(Self {
            client,
            connect_retries: settings.connect_retries,
            read_retries: settings.read_retries,
        })
    }

    async fn get(&self, url: &Url) -> reqwest::Result<String> {
        let response = self.client.get(url.as_str()).send().await?;
        response.error_for_status_ref()?;
        response.text().await
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let mut connect_failures = 0;
        let mut read_failures = 0;

        loop {
            match self.get(url).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_connect() && connect_failures < self.connect_retries => {
                    connect_failures += 1;
                    debug!("Connect to {} failed ({}), retry {}", url, e, connect_failures);
                }
                Err(e)
                    if (e.is_timeout() || e.is_body() || e.is_decode())
                        && read_failures < self.read_retries =>
                {
                    read_failures += 1;
                    debug!("Reading {} failed ({}), retry {}", url, e, read_failures);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
