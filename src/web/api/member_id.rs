use rocket::request::FromParam;
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};

/// Member id taken from a path segment.
/// A segment that isn't a `u32` can't match any member, so it is kept as `None`
/// instead of failing the route.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MemberId(Option<u32>);

impl MemberId {
    pub fn get(&self) -> Option<u32> {
        self.0
    }
}

impl<'a> FromParam<'a> for MemberId {
    type Error = Infallible;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        Ok(MemberId(param.parse::<u32>().ok()))
    }
}

impl Display for MemberId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => write!(f, "<invalid>"),
        }
    }
}
