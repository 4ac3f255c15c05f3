//! Shared HTTP client
//!
//! `ApiClient` is cheap to clone; clones share the connection pool, the
//! interceptor chain and the credential store.

use std::sync::Arc;

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::interceptor::{BearerAuth, RequestInterceptor};
use crate::config::ApiConfig;
use crate::credentials::CredentialStore;
use crate::error::ApiError;
use crate::middleware::logging::{log_failure, log_request, log_response};

const JSON: &str = "application/json";

/// Client bound to one backend origin.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiClient {
    /// Builds a client for `config.base_url` with bearer authentication
    /// backed by `store`.
    pub fn new(config: &ApiConfig, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|_| ApiError::InvalidUrl(config.base_url.clone()))?;
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            base_url,
            interceptors: vec![Arc::new(BearerAuth::new(store))],
        })
    }

    /// Appends an interceptor. Interceptors run in registration order, after
    /// bearer authentication.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` against the base URL, keeping any path prefix the base
    /// URL carries.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw))
    }

    /// Builds the request exactly as it would be sent, interceptors applied.
    pub fn prepare(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Request, ApiError> {
        let url = self.endpoint(path)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON));

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let mut request = builder.build()?;
        for interceptor in &self.interceptors {
            interceptor.intercept(&mut request)?;
        }

        Ok(request)
    }

    /// Sends a prepared request and returns the raw response body.
    /// Any non-success status is an error.
    pub async fn execute(&self, request: Request) -> Result<String, ApiError> {
        log_request(&request);
        let method = request.method().clone();
        let url = request.url().clone();

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                log_failure(&method, &url, &e);
                return Err(e.into());
            }
        };

        let status = response.status();
        let body = response.text().await?;
        log_response(&method, &url, status);

        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::Status { status, body })
        }
    }

    /// POSTs `body` as JSON and returns the raw response body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        let request = self.prepare(Method::POST, path, Some(&body))?;
        self.execute(request).await
    }

    /// POSTs `body` as JSON and decodes the JSON response.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let raw = self.post(path, body).await?;
        let decoded = serde_json::from_str(&raw).map_err(ApiError::Decode)?;
        debug!("Decoded response from {}", path);
        Ok(decoded)
    }
}
