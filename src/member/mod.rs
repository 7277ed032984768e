use crate::member::error::MemberError;

pub mod config;
pub mod error;
pub mod store;
pub mod validation;

type Result<T, E = MemberError> = std::result::Result<T, E>;
