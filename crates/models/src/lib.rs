//! # reqres-models
//!
//! Wire models for the [reqres.in](https://reqres.in) user API.
//!
//! Every type here is a plain data-transfer structure: no behavior, field-wise
//! equality, no references between models. Request models serialize exactly
//! their declared fields; response models tolerate unknown fields and fill
//! absent ones with empty strings.
//!
//! | Model | Endpoint |
//! |-------|----------|
//! | [`UserRequestModel`] | body of `POST /users`, `PUT /users/{id}` |
//! | [`UserResponseModel`] | response of `POST /users`, `PUT /users/{id}` |
//! | [`UserFullResponseModel`] | response of `GET /users/{id}` |
//!
//! ```rust
//! use reqres_models::UserRequestModel;
//!
//! let request = UserRequestModel::new("Aleksey", "Aqa");
//! assert_eq!(request.name, "Aleksey");
//! ```

pub mod single_user;
pub mod user;
mod wire;

pub use single_user::{DataResponseModel, SupportModel, UserFullResponseModel};
pub use user::{UserRequestModel, UserResponseModel};
