use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use notes_types::ErrorBody;
use thiserror::Error;

/// Errors surfaced by note operations. Every variant is a caller error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// Malformed body or missing/mistyped fields
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Note not found")]
    NotFound,
}

impl NoteError {
    pub fn invalid(message: impl Into<String>) -> Self {
        NoteError::InvalidRequest(message.into())
    }
}

impl ResponseError for NoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            NoteError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            NoteError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            code: status.as_u16(),
            status: status.canonical_reason().unwrap_or_default().to_string(),
            message: self.to_string(),
        })
    }
}
