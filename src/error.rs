use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::schemas::FriendId;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("couldn't find friend {0}")]
    FriendNotFound(FriendId),
    #[error("application state is unavailable")]
    StatePoisoned,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::FriendNotFound(_) => StatusCode::NOT_FOUND,
            AppError::StatePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}
