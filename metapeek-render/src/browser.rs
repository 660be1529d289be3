//! Headless Chromium fetcher speaking the DevTools protocol.

use async_trait::async_trait;
use chromiumoxide::error::CdpError;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use metapeek_core::error::{PeekError, Result};
use metapeek_core::traits::PageFetcher;
use metapeek_core::types::PageMetadata;

use crate::extract::extract_metadata;

/// User agent the reference service presented to rendered pages.
const DEFAULT_USER_AGENT: &str =
    "Opera/9.80 (J2ME/MIDP; Opera Mini/5.1.21214/28.2725; U; ru) Presto/2.8.119 Version/11.10";

/// Renderer configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderConfig {
    /// User agent presented to fetched pages.
    pub user_agent: String,
    /// Pass `--no-sandbox` to Chromium (needed in most containers).
    pub no_sandbox: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            no_sandbox: false,
        }
    }
}

impl RenderConfig {
    /// Overrides the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Disables the Chromium sandbox.
    pub fn no_sandbox(mut self) -> Self {
        self.no_sandbox = true;
        self
    }
}

/// Page fetcher backed by one shared headless Chromium instance.
///
/// The browser is launched once, up front, and shared by every fetch; each
/// fetch opens and closes its own page. The fetcher places no bound on
/// concurrent fetches and no timeout on navigation.
pub struct ChromeFetcher {
    browser: Browser,
    handler_task: JoinHandle<()>,
    config: RenderConfig,
}

impl ChromeFetcher {
    /// Launches a headless browser with the default configuration.
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(RenderConfig::default()).await
    }

    /// Launches a headless browser with a custom configuration.
    pub async fn launch_with_config(config: RenderConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder().incognito();
        if config.no_sandbox {
            builder = builder.no_sandbox();
        }
        let browser_config = builder.build().map_err(PeekError::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| PeekError::BrowserLaunch(e.to_string()))?;

        // Drain CDP events for the lifetime of the browser.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!(error = %e, "browser handler stopped");
                    break;
                }
            }
        });

        info!("headless browser launched");
        Ok(Self {
            browser,
            handler_task,
            config,
        })
    }

    /// Shuts the browser down and stops the event handler.
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| PeekError::Browser(e.to_string()))?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }

    async fn render(page: &Page, url: &str) -> std::result::Result<String, CdpError> {
        page.goto(url).await?;
        page.wait_for_navigation().await?;
        page.content().await
    }
}

#[async_trait]
impl PageFetcher for ChromeFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<PageMetadata> {
        if url.is_empty() {
            return Err(PeekError::MissingKey);
        }

        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| PeekError::Browser(e.to_string()))?;

        let ua_set = page
            .set_user_agent(self.config.user_agent.as_str())
            .await
            .map(|_| ());
        if let Err(e) = ua_set {
            let _ = page.close().await;
            return Err(PeekError::Browser(e.to_string()));
        }

        let rendered = Self::render(&page, url).await;
        let html = match rendered {
            Ok(html) => html,
            Err(e) => {
                let _ = page.close().await;
                return Err(PeekError::Navigation {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        };
        let _ = page.close().await;

        let metadata = extract_metadata(&html);
        debug!(url, title = %metadata.title, metas = metadata.metas.len(), "extracted metadata");
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_carries_reference_user_agent() {
        let config = RenderConfig::default();
        assert!(config.user_agent.starts_with("Opera/9.80"));
        assert!(!config.no_sandbox);
    }

    #[test]
    fn test_config_builders() {
        let config = RenderConfig::default()
            .with_user_agent("metapeek-test")
            .no_sandbox();
        assert_eq!(config.user_agent, "metapeek-test");
        assert!(config.no_sandbox);
    }
}
