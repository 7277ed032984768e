use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Body of every error response: a single `error` message.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    error: String,
}

impl ErrorBody {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

impl From<&str> for ErrorBody {
    fn from(error: &str) -> Self {
        Self::new(error.to_owned())
    }
}
