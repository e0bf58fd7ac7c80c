use crate::{
    db::timed,
    dto::cart::{AddToCartRequest, CartList, RemovedCartItem},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::CartItem,
    response::ApiResponse,
    state::AppState,
};

pub async fn list_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartList>> {
    let items = timed(
        state.db_timeout,
        sqlx::query_as::<_, CartItem>(
            r#"
            SELECT id, user_id, product_id, quantity, created_at
            FROM carts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user.user_id)
        .fetch_all(&state.pool),
    )
    .await?;

    Ok(ApiResponse::success("OK", CartList { items }, None))
}

pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    payload.validate()?;

    // Inserts nothing when the product does not exist.
    let item = timed(
        state.db_timeout,
        sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO carts (user_id, product_id, quantity)
            SELECT $1, p.id, $3 FROM products p WHERE p.id = $2
            RETURNING id, user_id, product_id, quantity, created_at
            "#,
        )
        .bind(user.user_id)
        .bind(payload.product_id)
        .bind(payload.quantity)
        .fetch_optional(&state.pool),
    )
    .await?;

    let item = match item {
        Some(i) => i,
        None => return Err(AppError::NotFound("Product not found")),
    };

    tracing::debug!(
        user_id = user.user_id,
        product_id = item.product_id,
        quantity = item.quantity,
        "item added to cart"
    );
    Ok(ApiResponse::success("Item added to cart", item, None))
}

pub async fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    cart_item_id: i64,
) -> AppResult<ApiResponse<RemovedCartItem>> {
    let result = timed(
        state.db_timeout,
        sqlx::query("DELETE FROM carts WHERE id = $1 AND user_id = $2")
            .bind(cart_item_id)
            .bind(user.user_id)
            .execute(&state.pool),
    )
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Cart item not found"));
    }

    Ok(ApiResponse::success(
        "Item deleted from cart",
        RemovedCartItem { id: cart_item_id },
        None,
    ))
}
