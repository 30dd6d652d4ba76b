//! Received HTTP responses.

use std::borrow::Cow;

use reqwest::StatusCode;
use reqwest::blocking::Response;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HarnessResult;
use crate::specs::ResponseSpec;

/// A fully read HTTP response.
///
/// The body is buffered once so it can be validated, logged and extracted
/// without going back to the connection.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn read(response: Response) -> HarnessResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// The raw `Content-Type` header, if present and readable.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Applies a response specification, failing on the first violated
    /// expectation.
    pub fn then(self, spec: &ResponseSpec) -> HarnessResult<Self> {
        spec.validate(&self)?;
        Ok(self)
    }

    /// Deserializes the body into a model.
    pub fn extract<T: DeserializeOwned>(&self) -> HarnessResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Parses the body as untyped JSON.
    pub fn json(&self) -> HarnessResult<Value> {
        self.extract()
    }
}

#[cfg(test)]
impl ApiResponse {
    pub(crate) fn fake(status: u16, content_type: Option<&'static str>, body: &str) -> Self {
        use reqwest::header::HeaderValue;

        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        Self {
            status: StatusCode::from_u16(status).expect("valid status"),
            headers,
            body: body.as_bytes().to_vec(),
        }
    }
}
