mod jwt_claims;
mod user;

pub(super) use jwt_claims::*;
pub use user::*;
