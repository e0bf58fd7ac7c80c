use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 255;

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A registration that passed validation, with name trimmed and email normalized.
#[derive(Debug, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(self) -> AppResult<NewUser> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::Validation(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }

        let email = normalize_email(&self.email);
        if email.len() > MAX_EMAIL_LEN || !is_valid_email(&email) {
            return Err(AppError::Validation("email is not valid".into()));
        }

        if self.password.is_empty() {
            return Err(AppError::Validation("password is required".into()));
        }

        Ok(NewUser {
            name: name.to_string(),
            email,
            password: self.password,
        })
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
