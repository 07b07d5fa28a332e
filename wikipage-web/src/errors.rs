//! Any errors that wikipage-web might generate, and supporting implementations.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use wikipage_wikipedia::WikipediaError;

/// An error that happened in a web handler.
///
/// Errors are reported to clients as plain text, with the error's
/// description as the body.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A generic error, when there is nothing more specific to say.
    #[error("Internal error")]
    Internal,

    /// The request did not include the term to look up.
    #[error("q param is missing")]
    MissingQuery,

    /// Looking up the page failed.
    #[error(transparent)]
    Lookup(#[from] WikipediaError),
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            // Including pages that don't exist. Clients already depend on this.
            Self::Internal | Self::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
