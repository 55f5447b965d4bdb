//! In-memory channel and fetcher used by unit tests.

use super::traits::{Channel, ChannelMessage};
use crate::error::LinkError;
use crate::links::{FetchedPage, PageFetcher};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use url::Url;

/// Records every `send`; `listen` replays a fixed inbox and returns.
pub(crate) struct RecordingChannel {
    inbound: Vec<ChannelMessage>,
    fail_listen: bool,
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingChannel {
    pub(crate) fn new() -> Self {
        Self::with_inbound(Vec::new())
    }

    /// `(reply_target, sender, content)` triples.
    pub(crate) fn with_inbound(messages: Vec<(&str, &str, &str)>) -> Self {
        let inbound = messages
            .into_iter()
            .enumerate()
            .map(|(i, (target, sender, content))| ChannelMessage {
                id: i.to_string(),
                sender: sender.to_string(),
                content: content.to_string(),
                channel: "test".to_string(),
                reply_target: target.to_string(),
                timestamp: 0,
            })
            .collect();
        Self {
            inbound,
            fail_listen: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_listener() -> Self {
        Self {
            fail_listen: true,
            ..Self::new()
        }
    }

    /// `(recipient, message)` pairs in send order.
    pub(crate) fn sent(&self) -> Vec<(String, String)> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        "test"
    }

    fn send<'a>(
        &'a self,
        message: &'a str,
        recipient: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.sent
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push((recipient.to_string(), message.to_string()));
            Ok(())
        })
    }

    fn listen<'a>(
        &'a self,
        tx: tokio::sync::mpsc::Sender<ChannelMessage>,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_listen {
                anyhow::bail!("connection lost");
            }
            for msg in self.inbound.clone() {
                if tx.send(msg).await.is_err() {
                    break;
                }
            }
            Ok(())
        })
    }
}

/// Serves canned 200 responses; unknown URLs fail to fetch.
pub(crate) struct StaticFetcher {
    pages: HashMap<String, (String, String)>,
}

impl StaticFetcher {
    /// `(url, html body)` pairs served as `text/html`.
    pub(crate) fn html(pages: &[(&str, &str)]) -> Self {
        Self::typed(
            &pages
                .iter()
                .map(|(url, body)| (*url, "text/html; charset=utf-8", *body))
                .collect::<Vec<_>>(),
        )
    }

    /// `(url, content type, body)` triples.
    pub(crate) fn typed(pages: &[(&str, &str, &str)]) -> Self {
        let pages = pages
            .iter()
            .map(|(url, ct, body)| ((*url).to_string(), ((*ct).to_string(), (*body).to_string())))
            .collect();
        Self { pages }
    }
}

impl PageFetcher for StaticFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<FetchedPage, LinkError>> + Send + 'a>> {
        Box::pin(async move {
            let (content_type, body) = self
                .pages
                .get(url)
                .ok_or_else(|| LinkError::InvalidUrl {
                    url: url.to_string(),
                })?;
            let parsed = Url::parse(url).map_err(|_| LinkError::InvalidUrl {
                url: url.to_string(),
            })?;
            Ok(FetchedPage {
                url: parsed,
                status: 200,
                content_type: Some(content_type.clone()),
                body: body.clone(),
            })
        })
    }
}
