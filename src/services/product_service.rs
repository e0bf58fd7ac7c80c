use crate::{
    db::timed,
    dto::products::ProductList,
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<ProductList>> {
    let paging = pagination.normalize();
    let (limit, offset) = match paging {
        Some((_, per_page, offset)) => (Some(per_page), Some(offset)),
        None => (None, None),
    };

    // NULL limit and offset make Postgres return every row.
    let items = timed(
        state.db_timeout,
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, created_at
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.pool),
    )
    .await?;

    let (total,): (i64,) = timed(
        state.db_timeout,
        sqlx::query_as("SELECT COUNT(*) FROM products").fetch_one(&state.pool),
    )
    .await?;

    let meta = match paging {
        Some((page, per_page, _)) => Meta::new(page, per_page, total),
        None => Meta::total_only(total),
    };
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i64) -> AppResult<ApiResponse<Product>> {
    let product = timed(
        state.db_timeout,
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, created_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&state.pool),
    )
    .await?;

    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product not found")),
    };
    Ok(ApiResponse::success("Product", product, None))
}
