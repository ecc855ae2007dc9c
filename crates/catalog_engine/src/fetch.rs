use std::time::Duration;

use catalog_core::ProductQuery;
use catalog_logging::catalog_debug;
use futures_util::StreamExt;
use reqwest::Url;

use crate::{FailureKind, FetchError, ProductPage};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    /// Whole-request deadline. Unset means a hung request stays pending.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Some(Duration::from_secs(10)),
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait ProductFetcher: Send + Sync {
    async fn fetch_page(&self, query: &ProductQuery) -> Result<ProductPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `{base}/products` or `{base}/products/category/{slug}`, with `skip` and `limit`.
    pub fn endpoint(&self, query: &ProductQuery) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                FetchError::new(FailureKind::InvalidUrl, "base url cannot carry a path")
            })?;
            segments.pop_if_empty().push("products");
            if let Some(slug) = query.category.slug() {
                segments.push("category").push(slug);
            }
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("skip", &query.offset().to_string())
            .append_pair("limit", &query.limit().to_string());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ProductFetcher for ReqwestFetcher {
    async fn fetch_page(&self, query: &ProductQuery) -> Result<ProductPage, FetchError> {
        let url = self.endpoint(query)?;
        catalog_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if let Err(err) = response.error_for_status_ref() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                err.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice::<ProductPage>(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
