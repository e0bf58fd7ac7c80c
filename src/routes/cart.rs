use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};

use crate::{
    dto::cart::{AddToCartRequest, CartList, RemovedCartItem},
    error::AppResult,
    extract::{AppJson, AppPath},
    middleware::auth::AuthUser,
    models::CartItem,
    response::{ApiResponse, ErrorBody},
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/carts", get(cart_list).post(add_to_cart))
        .route("/users/carts/{id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/users/carts",
    responses(
        (status = 200, description = "Cart items of the current user", body = ApiResponse<CartList>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<CartList>>> {
    let resp = cart_service::list_cart(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/users/carts",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Item added to cart", body = ApiResponse<CartItem>),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CartItem>>)> {
    let resp = cart_service::add_to_cart(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/users/carts/{id}",
    params(
        ("id" = i64, Path, description = "Cart item ID")
    ),
    responses(
        (status = 200, description = "Item deleted from cart", body = ApiResponse<RemovedCartItem>),
        (status = 401, description = "Unauthorized", body = ErrorBody),
        (status = 404, description = "Cart item not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<ApiResponse<RemovedCartItem>>> {
    let resp = cart_service::remove_from_cart(&state, &user, id).await?;
    Ok(Json(resp))
}
