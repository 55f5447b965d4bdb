use super::extractor::{content_type_essence, is_html};
use super::types::FetchedPage;
use crate::config::LinkConfig;
use crate::error::LinkError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use url::Url;

/// Retrieves one detected URL.
pub trait PageFetcher: Send + Sync {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<FetchedPage, LinkError>> + Send + 'a>>;
}

/// `reqwest`-backed fetcher. The client is built once and shared by every
/// pipeline; it follows redirects and gives up after the configured timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &LinkConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, raw: &str) -> Result<FetchedPage, LinkError> {
        let url = Url::parse(raw).map_err(|_| LinkError::InvalidUrl {
            url: raw.to_string(),
        })?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LinkError::Fetch {
                url: raw.to_string(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LinkError::NotFound {
                url: raw.to_string(),
            });
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        // Only a 200 HTML page is ever parsed; other bodies are left unread.
        let wants_body = status == reqwest::StatusCode::OK
            && content_type
                .as_deref()
                .is_some_and(|ct| is_html(content_type_essence(ct)));
        let body = if wants_body {
            response.text().await.map_err(|source| LinkError::Fetch {
                url: raw.to_string(),
                source,
            })?
        } else {
            String::new()
        };

        tracing::debug!(url = %raw, final_url = %final_url, status = status.as_u16(), "fetched url");

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<FetchedPage, LinkError>> + Send + 'a>> {
        Box::pin(self.get(url))
    }
}
