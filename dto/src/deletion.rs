use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Acknowledgement of a deleted member.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct Deletion {
    done: bool,
}

impl Deletion {
    pub fn new() -> Self {
        Self { done: true }
    }
}
