//! Common test utilities for the scenario tests.
//!
//! - [`stub_api`] - Local stand-in for the reqres.in user API

pub mod stub_api;
