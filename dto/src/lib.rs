pub mod deletion;
pub mod error_body;
pub mod member;
pub mod new_member;
pub mod sitemap;
