use anyhow::anyhow;
use sqlx::FromRow;

use crate::{
    db::timed,
    dto::orders::{OrderList, PlacedOrder},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Order,
    response::ApiResponse,
    state::AppState,
};

#[derive(Debug, FromRow)]
pub(crate) struct CartLine {
    pub(crate) cart_id: i64,
    pub(crate) quantity: i32,
    pub(crate) price: i64,
}

pub async fn list_orders(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<OrderList>> {
    let items = timed(
        state.db_timeout,
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, total_price, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user.user_id)
        .fetch_all(&state.pool),
    )
    .await?;

    Ok(ApiResponse::success("OK", OrderList { items }, None))
}

/// Turns the caller's cart into one order priced from the products table.
///
/// Cart rows are locked for the duration of the transaction, so a concurrent
/// placement for the same user waits and then finds an empty cart. Rows added
/// after the lock are neither charged nor removed. Any failure rolls back.
pub async fn place_order(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<PlacedOrder>> {
    let limit = state.db_timeout;
    let mut tx = timed(limit, state.pool.begin()).await?;

    let lines = timed(
        limit,
        sqlx::query_as::<_, CartLine>(
            r#"
            SELECT c.id AS cart_id, c.quantity, p.price
            FROM carts c
            JOIN products p ON p.id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.id
            FOR UPDATE OF c
            "#,
        )
        .bind(user.user_id)
        .fetch_all(&mut *tx),
    )
    .await?;

    if lines.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let total_price = order_total(&lines)
        .ok_or_else(|| AppError::Internal(anyhow!("order total overflowed")))?;
    let cart_ids: Vec<i64> = lines.iter().map(|line| line.cart_id).collect();

    let order = timed(
        limit,
        sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, total_price)
            VALUES ($1, $2)
            RETURNING id, user_id, total_price, created_at
            "#,
        )
        .bind(user.user_id)
        .bind(total_price)
        .fetch_one(&mut *tx),
    )
    .await?;

    timed(
        limit,
        sqlx::query("DELETE FROM carts WHERE user_id = $1 AND id = ANY($2)")
            .bind(user.user_id)
            .bind(&cart_ids)
            .execute(&mut *tx),
    )
    .await?;

    timed(limit, tx.commit()).await?;

    tracing::info!(
        user_id = user.user_id,
        order_id = order.id,
        total_price,
        lines = cart_ids.len(),
        "order placed"
    );
    Ok(ApiResponse::success(
        "Order placed successfully",
        PlacedOrder::from(order),
        None,
    ))
}

/// Sum of `quantity * price`, or `None` on overflow.
pub(crate) fn order_total(lines: &[CartLine]) -> Option<i64> {
    lines.iter().try_fold(0_i64, |total, line| {
        line.price
            .checked_mul(i64::from(line.quantity))
            .and_then(|amount| total.checked_add(amount))
    })
}
