use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tracing::{debug, info};
use url::{Host, Url};

use crate::config::SuiteConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::response::ApiResponse;

const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// Defaults applied to every outgoing call.
///
/// Immutable once built; clone it freely, the underlying client pools
/// connections behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    base_url: String,
    client: Client,
}

impl RequestSpec {
    /// Builds a request specification from a validated configuration.
    pub fn new(config: &SuiteConfig) -> HarnessResult<Self> {
        config
            .validate()
            .map_err(|errors| HarnessError::InvalidConfig(errors.join("; ")))?;

        let mut builder = Client::builder()
            .default_headers(default_headers(config)?)
            .timeout(config.timeout());
        if targets_loopback(&config.base_url) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout,
            api_key = config.api_key.is_some(),
            "Request specification ready"
        );

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and a request path with a single `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn get(&self, path: &str) -> HarnessResult<ApiResponse> {
        self.send(self.request(Method::GET, path))
    }

    pub fn delete(&self, path: &str) -> HarnessResult<ApiResponse> {
        self.send(self.request(Method::DELETE, path))
    }

    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> HarnessResult<ApiResponse> {
        self.send(self.request(Method::POST, path).json(body))
    }

    pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> HarnessResult<ApiResponse> {
        self.send(self.request(Method::PUT, path).json(body))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    fn send(&self, builder: RequestBuilder) -> HarnessResult<ApiResponse> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "Sending request");
        let response = ApiResponse::read(self.client.execute(request)?)?;
        debug!(%method, %url, status = response.status().as_u16(), "Received response");

        Ok(response)
    }
}

/// Loopback targets (a local stub) never go through a system proxy.
fn targets_loopback(base_url: &str) -> bool {
    let Ok(url) = Url::parse(base_url) else {
        return false;
    };
    match url.host() {
        Some(Host::Domain(domain)) => domain == "localhost",
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

fn default_headers(config: &SuiteConfig) -> HarnessResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(key) = &config.api_key {
        let mut value = HeaderValue::from_str(key)
            .map_err(|e| HarnessError::InvalidConfig(format!("Invalid API key: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(X_API_KEY, value);
    }

    Ok(headers)
}
