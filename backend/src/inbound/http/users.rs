//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users        {"name":"Ada Lovelace","email":"ada@example.com"}
//! PATCH  /users/{id}   {"email":"ada@analytical.engine"}
//! DELETE /users/{id}
//! ```

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, delete, error::JsonPayloadError, get, patch, post, web};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::domain::ports::CreateUserRequest;
use crate::domain::{EmailAddress, Error, UserChanges, UserName, UserResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserResponseSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{EMAIL, NAME, optional, parse_user_id, require};

/// Largest accepted JSON body.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Request body for `POST /users`.
///
/// Both fields are required; they are optional here so a missing field is
/// reported with field-level details rather than a generic parse error.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserBody {
    /// User name, 1 to 255 characters.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Email address, at most 100 characters.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// Request body for `PATCH /users/{id}`. Absent fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateUserBody {
    /// Replacement user name.
    #[schema(example = "Ada King")]
    pub name: Option<String>,
    /// Replacement email address.
    #[schema(example = "ada@analytical.engine")]
    pub email: Option<String>,
}

impl TryFrom<CreateUserBody> for CreateUserRequest {
    type Error = Error;

    fn try_from(value: CreateUserBody) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(value.name, NAME, UserName::new)?,
            email: require(value.email, EMAIL, EmailAddress::new)?,
        })
    }
}

impl TryFrom<UpdateUserBody> for UserChanges {
    type Error = Error;

    fn try_from(value: UpdateUserBody) -> Result<Self, Self::Error> {
        Ok(Self {
            name: optional(value.name, NAME, UserName::new)?,
            email: optional(value.email, EMAIL, EmailAddress::new)?,
        })
    }
}

fn invalid_json(err: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("invalid JSON body: {err}"))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    invalid_json(err).into()
}

fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(invalid_json)
}

/// JSON extractor configuration reporting body errors as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error_handler)
}

/// Register the users handlers and their JSON configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(web::PayloadConfig::new(JSON_BODY_LIMIT))
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}

/// List every live user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserResponseSchema]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user by public identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "User", body = UserResponseSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path)?;
    let user = state.users.get_user(&id).await?;
    Ok(web::Json(user))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "Created user", body = UserResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let request = CreateUserRequest::try_from(payload.into_inner())?;
    let user = state.users.create_user(request).await?;
    info!(user_id = %user.uuid(), "user created");
    Ok(web::Json(user))
}

/// Merge the supplied fields into an existing user.
///
/// The user is looked up before the body is read, so an unknown identifier
/// is reported as `not_found` whatever the body contains.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User UUID")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "Updated user", body = UserResponseSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path)?;
    state.users.get_user(&id).await?;
    let payload: UpdateUserBody = parse_json_body(&body)?;
    let changes = UserChanges::try_from(payload)?;
    let user = state.users.update_user(&id, changes).await?;
    Ok(web::Json(user))
}

/// Soft-delete a user.
///
/// Responds with a single-entry object keyed `"id {uuid}"`.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Deletion confirmation", body = HashMap<String, String>,
            example = json!({"id 3fa85f64-5717-4562-b3fc-2c963f66afa6": "is deleted"})),
        (status = 404, description = "No such user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    state.users.delete_user(&id).await?;
    info!(user_id = %id, "user deleted");

    let mut body = Map::new();
    body.insert(format!("id {id}"), Value::from("is deleted"));
    Ok(HttpResponse::Ok().json(Value::Object(body)))
}
