use axum::{http::StatusCode, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::resource_service::Services;

use crate::{metrics, openapi::ApiDoc};

pub mod users;
pub mod orders;
pub mod offers;

#[derive(Clone)]
pub struct ServerState {
    pub services: Services,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics_handler() -> (StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: resources, health, metrics and API docs.
///
/// Single-item paths for orders and offers exist in both the historical
/// singular form (`/order/:id`) and the plural form (`/orders/:id`).
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let resources = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get).put(users::update).delete(users::delete))
        .route("/orders", get(orders::list).post(orders::create))
        .route("/order/:id", get(orders::get).put(orders::update).delete(orders::delete))
        .route("/orders/:id", get(orders::get).put(orders::update).delete(orders::delete))
        .route("/offers", get(offers::list).post(offers::create))
        .route("/offer/:id", get(offers::get).put(offers::update).delete(offers::delete))
        .route("/offers/:id", get(offers::get).put(offers::update).delete(offers::delete));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler));

    resources
        .merge(ops)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
