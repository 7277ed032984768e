use rocket::{Build, Rocket};
use crate::web::server::build_server;

mod api;
mod catchers;
mod cors;
mod error;
mod server;
mod sitemap;

pub fn start_servers() -> Rocket<Build> {
    build_server()
}
