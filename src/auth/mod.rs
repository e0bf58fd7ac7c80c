//! Credentials and bearer tokens.

use thiserror::Error;

pub mod password;
pub mod token;

/// Why a request could not be authenticated.
///
/// Every kind renders as the same 401 response; the distinction only reaches the logs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization header is missing")]
    MissingHeader,
    #[error("authorization header is not of the form `Bearer <token>`")]
    MalformedHeader,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token subject claim is missing or invalid")]
    MissingClaim,
}
