use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MemberError {
    #[error("Missing required fields")]
    MissingFields(Vec<String>),
    #[error("Invalid fields: {}", .0.join("; "))]
    InvalidFields(Vec<String>),
    #[error("Member with id {0} already exists")]
    IdAlreadyInUse(u32),
    #[error("No id is available for a new member")]
    NoIdAvailable,
}
