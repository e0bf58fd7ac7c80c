use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    dto::orders::{OrderList, PlacedOrder},
    error::AppResult,
    middleware::auth::AuthUser,
    response::{ApiResponse, ErrorBody},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/users/orders", get(list_orders).post(place_order))
}

#[utoipa::path(
    get,
    path = "/users/orders",
    responses(
        (status = 200, description = "Orders of the current user", body = ApiResponse<OrderList>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/users/orders",
    responses(
        (status = 201, description = "Order placed from the cart", body = ApiResponse<PlacedOrder>),
        (status = 400, description = "Cart is empty", body = ErrorBody),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<(StatusCode, Json<ApiResponse<PlacedOrder>>)> {
    let resp = order_service::place_order(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
