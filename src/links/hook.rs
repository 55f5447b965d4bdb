use super::detector::detect_urls;
use super::extractor::extract;
use super::fetcher::{HttpFetcher, PageFetcher};
use super::format::format_reply;
use super::shortener::{BitlyShortener, Shortener, shorten};
use super::types::HookReport;
use crate::channels::Channel;
use crate::config::Config;
use crate::error::LinkError;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;

/// Announces a one-line summary for every URL posted in a chat message.
///
/// The fetcher and optional shortener are built once and shared read-only by
/// every pipeline the hook runs.
pub struct UrlHook {
    enabled: bool,
    fetcher: Arc<dyn PageFetcher>,
    shortener: Option<Arc<dyn Shortener>>,
}

impl UrlHook {
    pub fn new(fetcher: Arc<dyn PageFetcher>, shortener: Option<Arc<dyn Shortener>>) -> Self {
        Self {
            enabled: true,
            fetcher,
            shortener,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(&config.links)?;
        let shortener = BitlyShortener::from_config(
            &config.shortener,
            Duration::from_secs(config.links.timeout_secs),
        )?
        .map(|s| Arc::new(s) as Arc<dyn Shortener>);

        tracing::debug!(
            enabled = config.links.enabled,
            shortener = shortener.is_some(),
            timeout_secs = config.links.timeout_secs,
            "url hook configured"
        );

        Ok(Self {
            enabled: config.links.enabled,
            ..Self::new(Arc::new(fetcher), shortener)
        })
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fetch, summarize, and shorten one URL into its reply line.
    pub async fn process(&self, url: &str) -> Result<String, LinkError> {
        let page = self.fetcher.fetch(url).await?;
        let summary = extract(&page);
        let short_url = shorten(self.shortener.as_deref(), url).await?;
        Ok(format_reply(&summary, &short_url))
    }

    /// Handle one inbound message from `sender`, replying to `target`.
    ///
    /// Every detected URL gets its own pipeline; the pipelines run
    /// concurrently on the calling task and the returned future resolves once
    /// all of them have settled. A failed pipeline is logged and sends nothing.
    pub async fn on_message(
        &self,
        channel: &dyn Channel,
        target: &str,
        sender: &str,
        message: &str,
    ) -> HookReport {
        if !self.enabled {
            return HookReport::default();
        }

        let urls = detect_urls(message);
        if urls.is_empty() {
            return HookReport::default();
        }

        tracing::debug!(reply_target = target, sender, count = urls.len(), "detected urls");

        let pipelines = urls.iter().map(|url| async move {
            match self.process(url).await {
                Ok(reply) => {
                    if let Err(e) = channel.send(&reply, target).await {
                        tracing::warn!(
                            channel = channel.name(),
                            reply_target = target,
                            error = %e,
                            "failed to send reply"
                        );
                    }
                    true
                }
                Err(e) if e.is_fetch_failure() => {
                    tracing::error!(url = %e.url(), error = %e, "error retrieving url");
                    false
                }
                Err(e) => {
                    tracing::error!(url = %e.url(), error = %e, "error shortening url");
                    false
                }
            }
        });

        let outcomes = join_all(pipelines).await;
        let replied = outcomes.iter().filter(|ok| **ok).count();

        HookReport {
            detected: urls.len(),
            replied,
            failed: urls.len() - replied,
        }
    }
}
