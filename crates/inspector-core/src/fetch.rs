//! Page fetching.
//!
//! The [`PageFetcher`] trait is the seam between the inspector and the
//! network; [`HttpFetcher`] is the `reqwest`-backed implementation.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::redirect::Policy;

use crate::config::HttpConfig;
use crate::{Error, Result};

/// A fetched page, reduced to what fingerprinting needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    /// URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response headers; names are lowercase, repeated headers kept.
    pub headers: Vec<(String, String)>,
    /// Body as (lossy) UTF-8, possibly truncated.
    pub body: String,
}

impl Page {
    /// Build a page from parts. Header names are lowercased.
    pub fn new<I, K, V>(final_url: impl Into<String>, status: u16, headers: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            final_url: final_url.into(),
            status,
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into()))
                .collect(),
            body: body.into(),
        }
    }

    /// All values of a header, by case-insensitive name.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Something that can fetch a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url`, following redirects.
    async fn fetch(&self, url: &str) -> Result<Page>;
}

/// `reqwest`-backed fetcher.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Build a fetcher from configuration.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| Error::fetch_with_source("failed to build HTTP client", e))?;

        Ok(Self {
            client,
            max_body_bytes: config.max_body_bytes,
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page> {
        let started = Instant::now();
        let mut response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::timeout("page fetch", self.timeout_secs)
            } else {
                Error::fetch_with_source(format!("GET {url} failed"), e)
            }
        })?;

        let final_url = response.url().to_string();
        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| Error::fetch_with_source(format!("reading body of {url} failed"), e))?
        {
            let room = self.max_body_bytes.saturating_sub(bytes.len());
            bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
            if bytes.len() >= self.max_body_bytes {
                log::debug!("Body of {url} truncated at {} bytes", self.max_body_bytes);
                break;
            }
        }

        log::debug!(
            "Fetched {final_url} (HTTP {status}, {} bytes) in {:?}",
            bytes.len(),
            started.elapsed()
        );

        Ok(Page::new(
            final_url,
            status,
            headers,
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    }
}
