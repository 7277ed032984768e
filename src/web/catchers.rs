use crate::web::error::ApiError;
use dto::error_body::ErrorBody;
use rocket::Request;
use rocket::http::{Status, StatusClass};
use rocket::serde::json::Json;

#[catch(404)]
pub fn not_found() -> (Status, Json<ErrorBody>) {
    (Status::NotFound, Json(ErrorBody::from("Not found")))
}

/// Server errors are masked, other errors are described by their reason phrase.
#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    let message = if status.class() == StatusClass::ServerError {
        ApiError::Internal.to_string()
    } else {
        status.reason().unwrap_or("Unknown error").to_owned()
    };
    (status, Json(ErrorBody::new(message)))
}
