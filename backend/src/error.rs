use axum::{http::StatusCode, response::IntoResponse, Json};
use rental_ledger::LedgerError;
use serde::Serialize;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Missing or malformed Authorization header")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Wallet signature verification failed")]
    InvalidSignature,
    #[error("Login message is not a current login request for this wallet")]
    InvalidLoginMessage,
    #[error("Invalid public key: {0}")]
    InvalidPubkey(String),
    #[error("Failed to issue token: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub code: Option<u32>,
    pub message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Ledger(e) => match e {
                LedgerError::PropertyNotFound => StatusCode::NOT_FOUND,
                LedgerError::Unauthorized => StatusCode::FORBIDDEN,
                LedgerError::AlreadyRegistered
                | LedgerError::InsufficientSupply
                | LedgerError::InsufficientBalance => StatusCode::CONFLICT,
                LedgerError::InvalidAmount
                | LedgerError::InvalidRating
                | LedgerError::MetadataTooLong => StatusCode::UNPROCESSABLE_ENTITY,
                LedgerError::ConservationViolated => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::MissingToken
            | ApiError::InvalidToken
            | ApiError::InvalidSignature
            | ApiError::InvalidLoginMessage => StatusCode::UNAUTHORIZED,
            ApiError::InvalidPubkey(_) => StatusCode::BAD_REQUEST,
            ApiError::TokenIssue(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ApiError::Ledger(e) => e.name(),
            ApiError::MissingToken => "MissingToken",
            ApiError::InvalidToken => "InvalidToken",
            ApiError::InvalidSignature => "InvalidSignature",
            ApiError::InvalidLoginMessage => "InvalidLoginMessage",
            ApiError::InvalidPubkey(_) => "InvalidPubkey",
            ApiError::TokenIssue(_) => "TokenIssue",
            ApiError::Store(_) => "Store",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        }
        let body = ErrorBody {
            error: self.name(),
            code: match &self {
                ApiError::Ledger(e) => Some(e.code()),
                _ => None,
            },
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
