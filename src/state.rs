use std::{sync::Arc, time::Duration};

use crate::{auth::token::TokenService, db::DbPool};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub tokens: Arc<TokenService>,
    pub db_timeout: Duration,
}

impl AppState {
    pub fn new(pool: DbPool, tokens: TokenService, db_timeout: Duration) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
            db_timeout,
        }
    }
}
