use std::net::{IpAddr, Ipv4Addr};

use log::error;
use rocket::{Build, Rocket};

use crate::member::config::FamilyConfig;
use crate::member::store::MemberStore;
use crate::tools::env_vars::retrieve_parsed_env_value;
use crate::web::api::server::ApiServer;
use crate::web::catchers;
use crate::web::cors::CorsServer;
use crate::web::sitemap::server::SitemapServer;

const PORT_ENV_VAR: &str = "PORT";
const DEFAULT_PORT: u16 = 3000;
const ADDRESS_ENV_VAR: &str = "ADDRESS";
const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub trait Server {
    fn configure(self: Box<Self>, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let family_config = FamilyConfig::from_env();
    let store = match MemberStore::from_config(&family_config) {
        Ok(store) => store,
        Err(error) => {
            error!("{error:#?}");
            panic!("Initialization failed, aborting.");
        }
    };

    let rocket_build = rocket::build().configure(
        rocket::Config::figment()
            .merge(("port", get_port()))
            .merge(("address", get_address())),
    );
    mount_servers(rocket_build, store)
}

/// Everything the API serves, on top of the given configuration.
pub fn mount_servers(rocket_build: Rocket<Build>, store: MemberStore) -> Rocket<Build> {
    let rocket_build =
        rocket_build.register("/", catchers![catchers::not_found, catchers::default_catcher]);

    let servers: Vec<Box<dyn Server>> = vec![
        Box::new(ApiServer::new(store)),
        Box::new(SitemapServer::new()),
        Box::new(CorsServer::new()),
    ];
    servers
        .into_iter()
        .fold(rocket_build, |rocket_build, server| server.configure(rocket_build))
}

fn get_port() -> u16 {
    retrieve_parsed_env_value(PORT_ENV_VAR, DEFAULT_PORT)
}

fn get_address() -> IpAddr {
    retrieve_parsed_env_value(ADDRESS_ENV_VAR, DEFAULT_ADDRESS)
}
