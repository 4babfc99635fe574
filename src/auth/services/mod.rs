//! Application services for credential issuance and login.

mod login;
mod token;

pub use login::{LoginError, LoginService};
pub use token::{TokenService, TokenServiceError};
