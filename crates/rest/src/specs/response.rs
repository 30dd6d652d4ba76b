use mime::Mime;
use tracing::debug;

use crate::assertions::json_path_get;
use crate::error::{HarnessError, HarnessResult};
use crate::response::ApiResponse;

/// Longest body excerpt carried by a status mismatch.
const BODY_EXCERPT_LEN: usize = 512;

/// Expectations checked against a response before extraction.
///
/// Checks run in a fixed order: status, content type, empty body, required
/// fields. The first failure wins.
#[derive(Debug, Clone)]
pub struct ResponseSpec {
    status: u16,
    content_type: Option<Mime>,
    empty_body: bool,
    required_fields: Vec<String>,
}

impl ResponseSpec {
    /// Expects exactly `status` and nothing else.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            empty_body: false,
            required_fields: Vec::new(),
        }
    }

    /// Expects `status` with a JSON body.
    pub fn json(status: u16) -> Self {
        Self::status(status).content_type(mime::APPLICATION_JSON)
    }

    /// Expects the media type of `Content-Type`; parameters such as
    /// `charset` are ignored.
    pub fn content_type(mut self, content_type: Mime) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Expects a body of zero bytes.
    pub fn empty_body(mut self) -> Self {
        self.empty_body = true;
        self
    }

    /// Expects each path (`data.first_name`, `items[0].id`) to be present in
    /// the JSON body.
    pub fn require_fields<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn expected_status(&self) -> u16 {
        self.status
    }

    /// Checks every expectation against `response`.
    pub fn validate(&self, response: &ApiResponse) -> HarnessResult<()> {
        let actual = response.status().as_u16();
        if actual != self.status {
            return Err(HarnessError::StatusMismatch {
                expected: self.status,
                actual,
                body: excerpt(&response.text()),
            });
        }

        if let Some(expected) = &self.content_type {
            let matches = response
                .content_type()
                .and_then(|value| value.parse::<Mime>().ok())
                .is_some_and(|actual| actual.essence_str() == expected.essence_str());

            if !matches {
                return Err(HarnessError::ContentTypeMismatch {
                    expected: expected.essence_str().to_string(),
                    actual: response.content_type().unwrap_or("<none>").to_string(),
                });
            }
        }

        if self.empty_body && !response.body().is_empty() {
            return Err(HarnessError::UnexpectedBody {
                len: response.body().len(),
            });
        }

        if !self.required_fields.is_empty() {
            let body = response.json()?;
            if let Some(path) = self
                .required_fields
                .iter()
                .find(|path| json_path_get(&body, path).is_none())
            {
                return Err(HarnessError::MissingField { path: path.clone() });
            }
        }

        debug!(status = self.status, "Response matches specification");
        Ok(())
    }
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
