use sqlx::FromRow;

use crate::{
    auth::{
        password::{hash_password, verify_dummy, verify_password},
        token::IssuedToken,
    },
    db::{is_unique_violation, timed},
    dto::auth::{LoginRequest, LoginResponse, NewUser, RegisterRequest, normalize_email},
    error::{AppError, AppResult},
    models::User,
    response::ApiResponse,
    state::AppState,
};

#[derive(FromRow)]
struct StoredCredentials {
    id: i64,
    password_hash: String,
}

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    let NewUser {
        name,
        email,
        password,
    } = payload.validate()?;

    let password_hash = hash_password(&password)?;

    let user = timed(state.db_timeout, async {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(&name)
        .bind(&email)
        .bind(&password_hash)
        .fetch_one(&state.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict("Email already registered".into())
            } else {
                AppError::Db(err)
            }
        })
    })
    .await?;

    tracing::info!(user_id = user.id, "user registered");
    Ok(ApiResponse::success("User registered successfully", user, None))
}

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let email = normalize_email(&email);

    let credentials: Option<StoredCredentials> = timed(
        state.db_timeout,
        sqlx::query_as("SELECT id, password_hash FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(&state.pool),
    )
    .await?;

    let credentials = match credentials {
        Some(c) => c,
        None => {
            verify_dummy(&password);
            return Err(AppError::InvalidCredentials);
        }
    };

    if !verify_password(&credentials.password_hash, &password) {
        return Err(AppError::InvalidCredentials);
    }

    let IssuedToken { token, expires_at } = state
        .tokens
        .issue(credentials.id)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign token: {e}")))?;

    tracing::info!(user_id = credentials.id, "user logged in");
    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token,
            token_type: "Bearer".into(),
            expires_at,
        },
        None,
    ))
}
