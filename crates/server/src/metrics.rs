use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::errors::ServiceError;

use crate::errors::JsonApiError;

// Prometheus metrics (default registry)
pub static RESOURCE_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "marketplace_resource_requests_total",
        "Resource operations by outcome",
        &["resource", "op", "outcome"]
    )
    .expect("register resource_requests_total")
});

fn outcome(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::Validation(_) => "invalid",
        ServiceError::NotFound(_) => "not_found",
        ServiceError::Conflict(_) => "conflict",
        ServiceError::Seed(_) | ServiceError::Db(_) => "error",
    }
}

/// Count the operation and convert the error for the HTTP layer.
pub fn record<T>(resource: &str, op: &str, res: Result<T, ServiceError>) -> Result<T, JsonApiError> {
    let label = match &res {
        Ok(_) => "ok",
        Err(e) => outcome(e),
    };
    RESOURCE_REQUESTS_TOTAL.with_label_values(&[resource, op, label]).inc();
    res.map_err(JsonApiError::from)
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_by_outcome() {
        let before = RESOURCE_REQUESTS_TOTAL.with_label_values(&["probe", "get", "not_found"]).get();
        let res: Result<(), _> = record("probe", "get", Err(ServiceError::not_found("probe", 1)));
        assert_eq!(res.unwrap_err().status, StatusCode::NOT_FOUND);
        assert_eq!(RESOURCE_REQUESTS_TOTAL.with_label_values(&["probe", "get", "not_found"]).get(), before + 1);

        assert_eq!(record("probe", "get", Ok(5)).unwrap(), 5);
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("marketplace_resource_requests_total"));
    }
}
