use dto::sitemap::{Sitemap, SitemapEntry};
use rocket::Request;
use rocket::http::Method;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest};
use rocket::serde::json::Json;
use std::convert::Infallible;

pub const API_NAME: &str = "Family members API";

/// Every route mounted on the server handling the request, preflight requests aside.
pub struct RegisteredRoutes(Vec<SitemapEntry>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RegisteredRoutes {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let routes = request
            .rocket()
            .routes()
            .filter(|route| route.method != Method::Options)
            .map(|route| SitemapEntry::new(route.method.to_string(), route.uri.to_string()))
            .collect();

        Outcome::Success(RegisteredRoutes(routes))
    }
}

#[get("/")]
pub async fn sitemap(routes: RegisteredRoutes) -> Json<Sitemap> {
    Json(Sitemap::new(API_NAME.to_owned(), routes.0))
}
