mod login;
mod user;

pub use login::{LoginCredentials, LoginError, LoginToken};
pub use user::{UserListPage, UserRecord};
