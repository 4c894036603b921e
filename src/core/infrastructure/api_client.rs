//! Internal HTTP client that builds endpoint URLs, throttles requests and
//! turns responses into typed results.

use crate::{
    config::ClientConfig,
    core::domain::{
        error::{GridError, GridResult},
        model::provisioning::ErrorBody,
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, Method, RequestBuilder, Response, StatusCode,
    header::{CACHE_CONTROL, HeaderMap, HeaderValue},
    multipart::Form,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Internal HTTP client for the provisioning service.
///
/// Every request goes through `execute`, which applies the optional rate
/// limit and maps transport failures and non-success statuses to
/// `GridError`. A non-success body of the form `{"error": "..."}` has its
/// message surfaced as-is.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient` for the given base address.
    ///
    /// # Errors
    /// Returns `GridError::Connection` if the HTTP client cannot be built and
    /// `GridError::Config` if the rate limit is zero.
    pub fn new(base_url: Url, config: &ClientConfig) -> GridResult<Self> {
        let http_client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GridError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| {
                    GridError::Config("requests_per_second must be greater than zero".to_string())
                })?;
                let burst = NonZeroU32::new(rl.burst_size).ok_or_else(|| {
                    GridError::Config("burst_size must be greater than zero".to_string())
                })?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            base_url,
            rate_limiter,
        })
    }

    /// Returns the base address requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base address, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> GridResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut paths = url.path_segments_mut().map_err(|_| {
                GridError::Config(format!("'{}' cannot be used as a base address", self.base_url))
            })?;
            paths.pop_if_empty();
            paths.extend(segments);
        }
        Ok(url)
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// # Errors
    /// Returns `GridError::Payload` if the body does not match `T`.
    pub async fn get<T>(&self, segments: &[&str]) -> GridResult<T>
    where
        T: DeserializeOwned,
    {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        let request = self
            .http_client
            .request(Method::GET, self.endpoint(segments)?)
            .headers(headers);
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// Performs a multipart POST request and decodes the JSON body.
    pub async fn post_form<T>(&self, segments: &[&str], form: Form) -> GridResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self
            .http_client
            .request(Method::POST, self.endpoint(segments)?)
            .multipart(form);
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// Performs a DELETE request. Any success status is accepted and the
    /// body is ignored.
    pub async fn delete(&self, segments: &[&str]) -> GridResult<StatusCode> {
        let request = self
            .http_client
            .request(Method::DELETE, self.endpoint(segments)?);
        let response = self.execute(request).await?;
        Ok(response.status())
    }

    /// Core request execution: rate limit, send, and reject non-success
    /// statuses.
    async fn execute(&self, request: RequestBuilder) -> GridResult<Response> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let response = request
            .send()
            .await
            .map_err(|e| GridError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        debug!(url = %response.url(), %status, "backend responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GridError::Api {
                status: status.as_u16(),
                message: Self::error_message(status, &body),
            });
        }

        Ok(response)
    }

    async fn decode<T>(response: Response) -> GridResult<T>
    where
        T: DeserializeOwned,
    {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GridError::Connection(format!("Failed to read response: {}", e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| GridError::Payload(format!("Failed to parse response: {}", e)))
    }

    /// Picks the most useful description of a failed response.
    fn error_message(status: StatusCode, body: &str) -> String {
        if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
            return error;
        }
        let text = body.trim();
        if !text.is_empty() {
            return text.to_string();
        }
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    }
}
