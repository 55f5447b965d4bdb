use crate::config::ShortenerConfig;
use crate::error::LinkError;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Turns a long URL into a short one.
pub trait Shortener: Send + Sync {
    fn shorten<'a>(
        &'a self,
        long_url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LinkError>> + Send + 'a>>;
}

/// Shorten `url` when a shortener is configured; otherwise hand it back unchanged.
pub async fn shorten(shortener: Option<&dyn Shortener>, url: &str) -> Result<String, LinkError> {
    match shortener {
        Some(shortener) => shortener.shorten(url).await,
        None => Ok(url.to_string()),
    }
}

/// bitly v3 `shorten` endpoint.
pub struct BitlyShortener {
    client: reqwest::Client,
    endpoint: String,
    login: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct BitlyResponse {
    status_code: u16,
    #[serde(default)]
    status_txt: String,
    /// An object on success, `[]` on failure.
    #[serde(default)]
    data: serde_json::Value,
}

impl BitlyShortener {
    pub fn new(
        login: impl Into<String>,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            login: login.into(),
            api_key: api_key.into(),
        })
    }

    /// `None` unless both the account and the API key are set.
    pub fn from_config(config: &ShortenerConfig, timeout: Duration) -> anyhow::Result<Option<Self>> {
        if !config.is_configured() {
            return Ok(None);
        }
        Self::new(
            config.user.trim(),
            config.api_key.trim(),
            config.endpoint.as_str(),
            timeout,
        )
        .map(Some)
    }

    async fn request(&self, long_url: &str) -> Result<String, LinkError> {
        let fail = |message: String| LinkError::Shorten {
            url: long_url.to_string(),
            message,
        };

        let response = self
            .client
            .get(format!("{}/v3/shorten", self.endpoint))
            .query(&[
                ("login", self.login.as_str()),
                ("apiKey", self.api_key.as_str()),
                ("longUrl", long_url),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?
            .error_for_status()
            .map_err(|e| fail(e.to_string()))?;

        let body: BitlyResponse = response.json().await.map_err(|e| fail(e.to_string()))?;
        if body.status_code != 200 {
            return Err(fail(format!("{} {}", body.status_code, body.status_txt)));
        }

        let short = body
            .data
            .get("url")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        if short.is_empty() {
            Ok(long_url.to_string())
        } else {
            Ok(short.to_string())
        }
    }
}

impl Shortener for BitlyShortener {
    fn shorten<'a>(
        &'a self,
        long_url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LinkError>> + Send + 'a>> {
        Box::pin(self.request(long_url))
    }
}
