use rocket::Request;
use rocket::data::{self, Data, FromData, Limits};
use rocket::http::Status;
use rocket::outcome::Outcome;
use std::io;

/// Raw request body, read up to the `json` limit rather than the `string` one.
/// Its content type and content are checked by the handler.
#[derive(Debug)]
pub struct JsonBody(Vec<u8>);

impl JsonBody {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

#[rocket::async_trait]
impl<'r> FromData<'r> for JsonBody {
    type Error = io::Error;

    async fn from_data(request: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
        let limit = request.limits().get("json").unwrap_or(Limits::JSON);
        match data.open(limit).into_bytes().await {
            Ok(body) if body.is_complete() => Outcome::Success(JsonBody(body.into_inner())),
            Ok(_) => Outcome::Error((
                Status::PayloadTooLarge,
                io::Error::new(io::ErrorKind::Other, "Body exceeds the json limit"),
            )),
            Err(error) => Outcome::Error((Status::BadRequest, error)),
        }
    }
}
