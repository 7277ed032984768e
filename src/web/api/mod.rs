pub mod json_body;
pub mod member_id;
pub mod members_controller;
pub mod server;
