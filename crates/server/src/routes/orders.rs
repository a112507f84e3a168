use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use models::order;
use tracing::info;

use crate::{errors::JsonApiError, metrics::record, routes::ServerState};

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    responses(
        (status = 200, description = "All orders"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<order::Model>>, JsonApiError> {
    let list = record("order", "list", state.services.orders.list().await)?;
    info!(count = list.len(), "list orders");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::OrderDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Missing or malformed field"),
        (status = 409, description = "Duplicate id")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<order::Model>, JsonRejection>,
) -> Result<(StatusCode, Json<order::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = record("order", "create", state.services.orders.create(input).await)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/order/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<order::Model>, JsonApiError> {
    let Path(id) = path?;
    let found = record("order", "get", state.services.orders.get(id).await)?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/order/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = crate::openapi::OrderDoc,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<order::Changes>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(changes) = payload?;
    record("order", "update", state.services.orders.update(id, changes).await)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/order/{id}", tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
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
    record("order", "delete", state.services.orders.delete(id).await)?;
    Ok(StatusCode::NO_CONTENT)
}
