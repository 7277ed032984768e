pub mod server;
pub mod sitemap_controller;
