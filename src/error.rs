use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    serde::json::json,
    Response,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Request-level failures. Every variant maps to a status code and a JSON
/// body of the form `{"error": "<message>"}`; no error aborts the server.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] mongodb::error::Error),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The status code this error surfaces as.
    pub fn status(&self) -> Status {
        match self {
            Self::Validation(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Db(_) | Self::Upstream(_) | Self::Internal(_) => Status::InternalServerError,
        }
    }

    /// The message placed in the error envelope. Database errors are logged
    /// in full but the client only sees a generic message.
    fn client_message(&self) -> String {
        match self {
            Self::Db(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> response::Result<'o> {
        match &self {
            Self::Db(err) => error!("Database error: {err}"),
            err => debug!("Request failed: {err}"),
        }
        let body = json!({ "error": self.client_message() }).to_string();
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        assert_eq!(Error::validation("x").status(), Status::BadRequest);
        assert_eq!(Error::not_found("x").status(), Status::NotFound);
        assert_eq!(Error::upstream("x").status(), Status::InternalServerError);
        assert_eq!(Error::internal("x").status(), Status::InternalServerError);
    }

    #[test]
    fn client_messages_are_verbatim() {
        let err = Error::upstream("Failed to fetch budget data");
        assert_eq!(err.client_message(), "Failed to fetch budget data");

        let err = Error::not_found("Province not found");
        assert_eq!(err.client_message(), "Province not found");
    }
}
