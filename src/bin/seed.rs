use storefront_api::{
    auth::password::hash_password,
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_timeout,
    )
    .await?;
    run_migrations(&pool).await?;

    let user_id = ensure_user(&pool, "Demo User", "user@example.com", "user123").await?;
    seed_products(&pool).await?;

    println!("Seed completed. Demo user ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    pool: &DbPool,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i64> {
    let password_hash = hash_password(password)?;

    let row: Option<(i64,)> = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    // Already present from an earlier run.
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (i64,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured user {email}");
    Ok(user_id)
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    let products = vec![
        ("Ferris Plush", "Soft toy crab for your desk", 2_500_i64),
        ("Borrow Checker Mug", "Holds exactly one mutable coffee", 1_200),
        ("Rust Sticker Pack", "Decorate your laptop", 500),
        ("E-book: Async Rust", "Learn async Rust patterns", 2_000),
    ];

    for (name, description, price) in products {
        sqlx::query(
            r#"
            INSERT INTO products (name, description, price)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
