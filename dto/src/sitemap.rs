use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Clone)]
pub struct SitemapEntry {
    uri: String,
    method: String,
}

impl SitemapEntry {
    pub fn new(method: String, uri: String) -> Self {
        Self { uri, method }
    }
}

/// Every route served by the API, sorted by URI then method.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Sitemap {
    name: String,
    routes: Vec<SitemapEntry>,
}

impl Sitemap {
    pub fn new(name: String, mut routes: Vec<SitemapEntry>) -> Self {
        routes.sort();
        routes.dedup();
        Self { name, routes }
    }
}
