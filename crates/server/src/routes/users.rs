use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use models::user;
use tracing::info;

use crate::{errors::JsonApiError, metrics::record, routes::ServerState};

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All users"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    let list = record("user", "list", state.services.users.list().await)?;
    info!(count = list.len(), "list users");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Missing or malformed field"),
        (status = 409, description = "Duplicate id")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<user::Model>, JsonRejection>,
) -> Result<(StatusCode, Json<user::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = record("user", "create", state.services.users.create(input).await)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<user::Model>, JsonApiError> {
    let Path(id) = path?;
    let found = record("user", "get", state.services.users.get(id).await)?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UserDoc,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<user::Changes>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(changes) = payload?;
    record("user", "update", state.services.users.update(id, changes).await)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    record("user", "delete", state.services.users.delete(id).await)?;
    Ok(StatusCode::NO_CONTENT)
}
