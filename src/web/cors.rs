use crate::web::server::Server;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{Build, Request, Response, Rocket};

const ALLOWED_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Allow any origin to call the API.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", ALLOWED_ORIGIN));
        response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
        response.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
    }
}

/// Answer CORS preflight requests, whatever the path.
#[options("/<_..>")]
pub async fn preflight() -> Status {
    Status::NoContent
}

pub struct CorsServer {}

impl CorsServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for CorsServer {
    fn configure(self: Box<Self>, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.mount("/", routes![preflight]).attach(Cors)
    }
}

#[cfg(test)]
mod tests {
    use crate::web::cors::CorsServer;
    use crate::web::server::Server;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;

    #[get("/ping")]
    async fn ping() -> &'static str {
        "pong"
    }

    async fn client() -> Client {
        let rocket = Box::new(CorsServer::new()).configure(rocket::build().mount("/", routes![ping]));
        Client::tracked(rocket).await.unwrap()
    }

    #[async_test]
    async fn should_add_cors_headers() {
        let client = client().await;

        let response = client.get("/ping").dispatch().await;

        assert_eq!(Status::Ok, response.status());
        assert_eq!(
            Some("*"),
            response.headers().get_one("Access-Control-Allow-Origin")
        );
        assert_eq!(
            Some("GET, POST, DELETE, OPTIONS"),
            response.headers().get_one("Access-Control-Allow-Methods")
        );
    }

    #[async_test]
    async fn should_answer_preflight_request() {
        let client = client().await;

        let response = client.options("/members/1").dispatch().await;

        assert_eq!(Status::NoContent, response.status());
        assert_eq!(
            Some("Content-Type"),
            response.headers().get_one("Access-Control-Allow-Headers")
        );
    }
}
