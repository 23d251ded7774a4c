pub mod cases;
pub mod fixture;
pub mod harness;
pub mod http;
pub mod json;
pub mod models;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use harness::{CaseContext, CaseError, Outcome, RunSummary, TestCase, run_cases};
pub use http::{ApiClient, ApiClientBuilder, ApiClientTrait, HttpError, HttpResult};
pub use models::{LoginCredentials, LoginError, LoginToken, UserListPage, UserRecord};
pub use settings::{Settings, SettingsError};
