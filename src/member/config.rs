use crate::tools::env_vars::{retrieve_env_value, retrieve_parsed_env_value};
use derive_getters::Getters;

const LAST_NAME_ENV_VAR: &str = "FAMILY_LAST_NAME";
const SEED_ENV_VAR: &str = "SEED_MEMBERS";
pub const DEFAULT_LAST_NAME: &str = "Jackson";

/// How the family is set up when the server starts.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct FamilyConfig {
    last_name: String,
    seed: bool,
}

impl FamilyConfig {
    pub fn new(last_name: String, seed: bool) -> Self {
        Self { last_name, seed }
    }

    pub fn from_env() -> Self {
        let last_name =
            retrieve_env_value(LAST_NAME_ENV_VAR).unwrap_or_else(|| DEFAULT_LAST_NAME.to_owned());
        let seed = retrieve_parsed_env_value(SEED_ENV_VAR, true);
        Self::new(last_name, seed)
    }
}
