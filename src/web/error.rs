use crate::member::error::MemberError;
use dto::error_body::ErrorBody;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, response};
use thiserror::Error;

/// Errors returned by the API. Each of them is sent as an [ErrorBody].
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Content-Type must be application/json")]
    NotJson,
    #[error("Request body must be valid JSON")]
    MalformedBody,
    #[error(transparent)]
    InvalidMember(#[from] MemberError),
    #[error("Member not found")]
    MemberNotFound,
    /// The cause must be logged before returning this error, as it is never sent to the client.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotJson | ApiError::MalformedBody | ApiError::InvalidMember(_) => {
                Status::BadRequest
            }
            ApiError::MemberNotFound => Status::NotFound,
            ApiError::Internal => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status(), Json(ErrorBody::new(self.to_string()))).respond_to(request)
    }
}
