//! Suite configuration.
//!
//! Every setting has a default matching the public reqres.in API and can be
//! overridden through the environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `REQRES_BASE_URL` | https://reqres.in/api | Base URL request paths are appended to |
//! | `REQRES_API_KEY` | (unset) | Value sent in the `x-api-key` header |
//! | `REQRES_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `REQRES_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use reqres_rest::SuiteConfig;
//!
//! # fn main() -> reqres_rest::HarnessResult<()> {
//! let config = SuiteConfig::try_from_env()?;
//! println!("testing {}", config.base_url);
//!
//! let local = SuiteConfig::for_base_url("http://127.0.0.1:9000/api");
//! assert_eq!(local.base_url, "http://127.0.0.1:9000/api");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::error::{HarnessError, HarnessResult};

/// Base URL of the public API under test.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Configuration for the request specification.
///
/// Built from environment variables with [`SuiteConfig::try_from_env`], or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "reqres-suite")]
#[command(about = "Black-box tests for the reqres.in user API")]
pub struct SuiteConfig {
    /// Base URL every request path is appended to.
    #[arg(long, env = "REQRES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key sent in the `x-api-key` header.
    #[arg(long, env = "REQRES_API_KEY")]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "REQRES_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "REQRES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: 30,
            log_level: "info".to_string(),
        }
    }
}

impl SuiteConfig {
    /// Reads the configuration from environment variables.
    ///
    /// Command line arguments are never consulted: under `cargo test` they
    /// belong to the test harness. A variable that does not parse is an
    /// [`HarnessError::InvalidConfig`]; the other overrides are not replaced
    /// by defaults.
    pub fn try_from_env() -> HarnessResult<Self> {
        Self::parse_args([env!("CARGO_PKG_NAME")])
    }

    fn parse_args<I, T>(args: I) -> HarnessResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| HarnessError::InvalidConfig(e.to_string()))
    }

    /// Configuration pointing at another deployment, e.g. a local stub.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 5,
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "Base URL must use http or https, got {}",
                url.scheme()
            )),
            Err(e) => errors.push(format!("Invalid base URL {}: {}", self.base_url, e)),
        }

        if self.timeout == 0 {
            errors.push("Timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
