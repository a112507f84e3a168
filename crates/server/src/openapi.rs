use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// On PUT the `id` field may be sent but is ignored; the path id wins.
#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub role: String,
    pub phone: String,
}

#[derive(ToSchema)]
pub struct OrderDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

#[derive(ToSchema)]
pub struct OfferDoc {
    pub id: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::get,
        crate::routes::orders::update,
        crate::routes::orders::delete,
        crate::routes::offers::list,
        crate::routes::offers::create,
        crate::routes::offers::get,
        crate::routes::offers::update,
        crate::routes::offers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            UserDoc,
            OrderDoc,
            OfferDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "orders"),
        (name = "offers"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource_path() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/users", "/users/{id}", "/orders", "/order/{id}", "/offers", "/offer/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
