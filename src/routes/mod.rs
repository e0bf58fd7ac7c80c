use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{Method, StatusCode, Uri},
    middleware,
    routing::get,
};

use crate::{middleware::auth::require_auth, response::ErrorBody, state::AppState};

pub mod cart;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod users;

/// Largest request body accepted by the JSON extractors.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Public routes, the bearer-protected `/users/carts` and `/users/orders` routes, and docs.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(cart::router())
        .merge(orders::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(users::router())
        .merge(products::router())
        .merge(protected)
        .merge(doc::scalar_docs())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    let body = ErrorBody {
        message: "Not Found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    tracing::debug!(%method, path = %uri.path(), "method not allowed");
    let body = ErrorBody {
        message: "Method Not Allowed".to_string(),
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body))
}
