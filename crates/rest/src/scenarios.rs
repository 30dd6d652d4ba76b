//! The user CRUD scenarios.
//!
//! Each scenario is independent of the others: it builds its own request,
//! issues exactly one call and checks the result against the literals in
//! [`expected`]. The API under test keeps no state between calls, so the
//! scenarios can run in any order and any number of times.

use reqres_models::{UserFullResponseModel, UserRequestModel, UserResponseModel};
use tracing::debug;

use crate::assertions::{expect_eq, expect_not_empty};
use crate::error::HarnessResult;
use crate::specs::{RequestSpec, ResponseSpec};
use crate::step::step;

/// Literal values the scenarios send and expect back.
pub mod expected {
    pub const CREATE_NAME: &str = "Aleksey";
    pub const CREATE_JOB: &str = "Aqa";

    pub const UPDATE_ID: u32 = 95;
    pub const UPDATE_NAME: &str = "ALEKSEY";
    pub const UPDATE_JOB: &str = "AQA";

    pub const EXISTING_ID: u32 = 2;
    pub const MISSING_ID: u32 = 23;

    pub const EMAIL: &str = "janet.weaver@reqres.in";
    pub const FIRST_NAME: &str = "Janet";
    pub const LAST_NAME: &str = "Weaver";
    pub const AVATAR: &str = "https://reqres.in/img/faces/2-image.jpg";
    pub const SUPPORT_URL: &str =
        "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral";
    pub const SUPPORT_TEXT: &str =
        "Tired of writing endless social media content? Let Content Caddy generate it for you.";
}

/// `POST /users` creates a user and echoes it back with an id and a
/// creation timestamp.
pub fn create_user(spec: &RequestSpec) -> HarnessResult<UserResponseModel> {
    let request = UserRequestModel::new(expected::CREATE_NAME, expected::CREATE_JOB);

    let response: UserResponseModel = step("Create a user with a name and a job", || {
        spec.post("/users", &request)?
            .then(&ResponseSpec::json(201))?
            .extract()
    })?;

    step("Response echoes the submitted user", || {
        expect_eq("name", &response.name, expected::CREATE_NAME)?;
        expect_eq("job", &response.job, expected::CREATE_JOB)?;
        expect_not_empty("id", &response.id)?;
        expect_not_empty("createdAt", &response.created_at)
    })?;

    Ok(response)
}

/// `GET /users/2` returns Janet Weaver inside the `data`/`support` envelope.
pub fn get_single_user(spec: &RequestSpec) -> HarnessResult<UserFullResponseModel> {
    let response: UserFullResponseModel = step("Get a user by id", || {
        spec.get(&format!("/users/{}", expected::EXISTING_ID))?
            .then(&ResponseSpec::json(200).require_fields(["data", "support"]))?
            .extract()
    })?;

    step("Response describes the requested user", || {
        let data = &response.data;
        expect_eq("data.id", &data.id, &expected::EXISTING_ID.to_string())?;
        expect_eq("data.email", &data.email, expected::EMAIL)?;
        expect_eq("data.first_name", &data.first_name, expected::FIRST_NAME)?;
        expect_eq("data.last_name", &data.last_name, expected::LAST_NAME)?;
        expect_eq("data.avatar", &data.avatar, expected::AVATAR)?;
        expect_eq("support.url", &response.support.url, expected::SUPPORT_URL)?;
        expect_eq("support.text", &response.support.text, expected::SUPPORT_TEXT)
    })?;

    Ok(response)
}

/// `PUT /users/95` replaces name and job and echoes them back.
pub fn update_user(spec: &RequestSpec) -> HarnessResult<UserResponseModel> {
    let request = UserRequestModel::new(expected::UPDATE_NAME, expected::UPDATE_JOB);

    let response: UserResponseModel = step("Update the user's name and job", || {
        spec.put(&format!("/users/{}", expected::UPDATE_ID), &request)?
            .then(&ResponseSpec::json(200))?
            .extract()
    })?;

    step("Response reflects the update", || -> HarnessResult<()> {
        expect_eq("name", &response.name, expected::UPDATE_NAME)?;
        expect_eq("job", &response.job, expected::UPDATE_JOB)?;
        // Recorded, not enforced: the API stamps updatedAt on every update.
        debug!(updated_at = %response.updated_at, "Update timestamp");
        Ok(())
    })?;

    Ok(response)
}

/// `DELETE /users/2` answers `204 No Content`.
pub fn delete_user(spec: &RequestSpec) -> HarnessResult<()> {
    step("Delete a user by id", || {
        spec.delete(&format!("/users/{}", expected::EXISTING_ID))?
            .then(&ResponseSpec::status(204).empty_body())
            .map(drop)
    })
}

/// `GET /users/23` answers `404 Not Found`.
pub fn user_not_found(spec: &RequestSpec) -> HarnessResult<()> {
    step("Get a user by an unknown id", || {
        spec.get(&format!("/users/{}", expected::MISSING_ID))?
            .then(&ResponseSpec::status(404))
            .map(drop)
    })
}
