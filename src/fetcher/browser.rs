use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Handler;
use futures::StreamExt;
use tracing::{debug, warn};
use url::Url;

use crate::app::{JobcrawlError, Result};
use crate::config::BrowserSettings;
use crate::fetcher::DocumentFetcher;

/// Renders listing pages in headless Chrome using chromiumoxide.
///
/// Every call launches its own browser and shuts it down before returning,
/// on success and on error alike; nothing is reused across pages.
pub struct BrowserFetcher {
    settings: BrowserSettings,
}

impl BrowserFetcher {
    pub fn new(settings: BrowserSettings) -> Self {
        Self { settings }
    }

    async fn launch(&self) -> Result<(Browser, Handler)> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer")
            .request_timeout(self.settings.timeout());

        if !self.settings.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| JobcrawlError::Browser(format!("Failed to build browser config: {}", e)))?;

        Browser::launch(browser_config).await.map_err(|e| {
            JobcrawlError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })
    }

    /// Load `url` in a fresh tab and return the rendered document.
    async fn render(&self, browser: &Browser, url: &Url) -> Result<String> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| JobcrawlError::Browser(format!("Failed to create page: {}", e)))?;

        if let Some(ref ua) = self.settings.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| JobcrawlError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        page.goto(url.as_str())
            .await
            .map_err(|e| JobcrawlError::Browser(format!("Navigation failed: {}", e)))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| JobcrawlError::Browser(format!("Navigation failed: {}", e)))?;

        // Give client-side rendering a moment to settle
        tokio::time::sleep(self.settings.wait_after_load()).await;

        let html = page
            .content()
            .await
            .map_err(|e| JobcrawlError::Browser(format!("Failed to read page content: {}", e)))?;

        if let Err(e) = page.close().await {
            debug!("Failed to close page: {}", e);
        }

        Ok(html)
    }
}

#[async_trait]
impl DocumentFetcher for BrowserFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let (mut browser, mut handler) = self.launch().await?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {
                // Drive the CDP connection
            }
        });

        debug!("Rendering {}", url);
        let rendered = tokio::time::timeout(self.settings.timeout(), self.render(&browser, url))
            .await
            .unwrap_or_else(|_| {
                Err(JobcrawlError::Browser(format!(
                    "Timed out after {:?} loading {}",
                    self.settings.timeout(),
                    url
                )))
            });

        if let Err(e) = browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        handler_task.abort();

        rendered
    }
}
