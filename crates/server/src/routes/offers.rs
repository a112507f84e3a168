use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use models::offer;
use tracing::info;

use crate::{errors::JsonApiError, metrics::record, routes::ServerState};

#[utoipa::path(
    get, path = "/offers", tag = "offers",
    responses(
        (status = 200, description = "All offers"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<offer::Model>>, JsonApiError> {
    let list = record("offer", "list", state.services.offers.list().await)?;
    info!(count = list.len(), "list offers");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/offers", tag = "offers",
    request_body = crate::openapi::OfferDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Missing or malformed field"),
        (status = 409, description = "Duplicate id")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<offer::Model>, JsonRejection>,
) -> Result<(StatusCode, Json<offer::Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = record("offer", "create", state.services.offers.create(input).await)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/offer/{id}", tag = "offers",
    params(("id" = i32, Path, description = "Offer id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<offer::Model>, JsonApiError> {
    let Path(id) = path?;
    let found = record("offer", "get", state.services.offers.get(id).await)?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/offer/{id}", tag = "offers",
    params(("id" = i32, Path, description = "Offer id")),
    request_body = crate::openapi::OfferDoc,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<offer::Changes>, JsonRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = path?;
    let Json(changes) = payload?;
    record("offer", "update", state.services.offers.update(id, changes).await)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/offer/{id}", tag = "offers",
    params(("id" = i32, Path, description = "Offer id")),
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
    record("offer", "delete", state.services.offers.delete(id).await)?;
    Ok(StatusCode::NO_CONTENT)
}
