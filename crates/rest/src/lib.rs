//! # reqres-rest - Black-box tests for the reqres.in user API
//!
//! This crate drives the public [reqres.in](https://reqres.in) user API over
//! HTTP and checks status codes and response payloads. It has no knowledge of
//! the server's internals; everything is observed from the outside.
//!
//! ## Building Blocks
//!
//! - [`SuiteConfig`]: base URL, API key, timeout, log level
//! - [`RequestSpec`]: shared defaults for every call (base URL, JSON headers)
//! - [`ResponseSpec`]: expectation template applied before extraction
//! - [`ApiResponse`]: a buffered response, validated with
//!   [`ApiResponse::then`] and decoded with [`ApiResponse::extract`]
//! - [`step()`]: optional named grouping for log output
//! - [`scenarios`]: the five user CRUD scenarios
//!
//! ## Scenarios
//!
//! | Scenario | HTTP Method | Path | Expected Status |
//! |----------|-------------|------|-----------------|
//! | create | POST | `/users` | 201 |
//! | read | GET | `/users/2` | 200 |
//! | update | PUT | `/users/95` | 200 |
//! | delete | DELETE | `/users/2` | 204 |
//! | not found | GET | `/users/23` | 404 |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reqres_rest::{RequestSpec, SuiteConfig, init_logging, scenarios};
//!
//! fn main() -> reqres_rest::HarnessResult<()> {
//!     let config = SuiteConfig::try_from_env()?;
//!     init_logging(&config.log_level);
//!
//!     let spec = RequestSpec::new(&config)?;
//!     let created = scenarios::create_user(&spec)?;
//!     println!("created user {}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`HarnessResult`]. A status mismatch, a field
//! mismatch and a transport failure all end the scenario immediately; see
//! [`HarnessError`] for the full list.

pub mod assertions;
pub mod config;
pub mod error;
pub mod response;
pub mod scenarios;
pub mod specs;
pub mod step;

pub use config::{DEFAULT_BASE_URL, SuiteConfig};
pub use error::{HarnessError, HarnessResult};
pub use response::ApiResponse;
pub use specs::{RequestSpec, ResponseSpec};
pub use step::step;

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level`. Only the first call installs a
/// subscriber; later calls are no-ops, so every test may call it.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reqres_rest={}", level)));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(log_level = level, "Logging initialized");
    }
}
