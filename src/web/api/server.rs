use crate::member::store::MemberStore;
use crate::web::api::members_controller;
use crate::web::server::Server;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub struct ApiServer {
    store: MemberStore,
}

impl ApiServer {
    pub fn new(store: MemberStore) -> Self {
        Self { store }
    }
}

impl Server for ApiServer {
    fn configure(self: Box<Self>, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build.manage(Mutex::new(self.store)).mount(
            "/",
            routes![
                members_controller::list_members,
                members_controller::get_member,
                members_controller::add_member,
                members_controller::delete_member,
            ],
        )
    }
}
