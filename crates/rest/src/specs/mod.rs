//! Request and response specifications.
//!
//! A [`RequestSpec`] carries what every outgoing call shares (base URL,
//! default headers, timeout). A [`ResponseSpec`] is an expectation template
//! applied to a response before anything is extracted from it.
//!
//! ```rust,no_run
//! use reqres_models::UserResponseModel;
//! use reqres_rest::{RequestSpec, ResponseSpec, SuiteConfig};
//!
//! # fn main() -> reqres_rest::HarnessResult<()> {
//! let spec = RequestSpec::new(&SuiteConfig::default())?;
//! let user: UserResponseModel = spec
//!     .put("/users/95", &serde_json::json!({"name": "ALEKSEY", "job": "AQA"}))?
//!     .then(&ResponseSpec::json(200))?
//!     .extract()?;
//! # Ok(())
//! # }
//! ```

mod request;
mod response;

pub use request::RequestSpec;
pub use response::ResponseSpec;
