use crate::web::server::Server;
use crate::web::sitemap::sitemap_controller;
use rocket::{Build, Rocket};

pub struct SitemapServer {}

impl SitemapServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for SitemapServer {
    fn configure(self: Box<Self>, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.mount("/", routes![sitemap_controller::sitemap])
    }
}
