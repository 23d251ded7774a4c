//! In-process stand-ins for the remote API, used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::http::{ApiClientTrait, HttpError, HttpResult};
use crate::settings::Settings;


pub use fake_api::TOKEN;

/// Settings matching the data served by [`FakeReqres`].
pub fn fixture_settings() -> Settings {
    Settings {
        test_user_id: 7,
        test_user_email: "michael.lawson@reqres.in".to_string(),
        test_user_first_name: "Michael".to_string(),
        test_user_last_name: "Lawson".to_string(),
        test_user_avatar_url: "https://reqres.in/img/faces/7-image.jpg".to_string(),
        test_user_password: "cityslicka".to_string(),
        test_user_login_token: TOKEN.to_string(),
    }
}

/// Behaves like the public user-list and login endpoints over a fixed
/// set of twelve sequentially numbered users.
#[derive(Default)]
pub struct FakeReqres {
    overrides: HashMap<String, HttpResult>,
    requests: Mutex<Vec<String>>,
}

impl FakeReqres {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `result` for `path` instead of the simulated response.
    pub fn with_response(mut self, path: &str, result: HttpResult) -> Self {
        self.overrides.insert(path.to_string(), result);
        self
    }

    /// Requests seen so far, as `"METHOD path"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn respond(&self, method: &str, path: &str, body: &str) -> HttpResult {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(format!("{method} {path}"));
        }
        if let Some(result) = self.overrides.get(path) {
            return result.clone();
        }

        let (status, body) = fake_api::route(method, path, body);
        HttpResult::new(status, body)
    }
}

impl ApiClientTrait for FakeReqres {
    fn get(&self, path: &str) -> Result<HttpResult, HttpError> {
        Ok(self.respond("GET", path, ""))
    }

    fn post_json(&self, path: &str, body: &str) -> Result<HttpResult, HttpError> {
        Ok(self.respond("POST", path, body))
    }
}

/// Client whose every request fails before reaching a server.
pub struct UnreachableClient;

impl UnreachableClient {
    fn error() -> HttpError {
        let error = reqwest::blocking::Client::new()
            .get("not-a-valid-url")
            .build()
            .expect_err("invalid URL must not build");
        HttpError::Transport(error)
    }
}

impl ApiClientTrait for UnreachableClient {
    fn get(&self, _path: &str) -> Result<HttpResult, HttpError> {
        Err(Self::error())
    }

    fn post_json(&self, _path: &str, _body: &str) -> Result<HttpResult, HttpError> {
        Err(Self::error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn page(query: &str) -> Value {
        let (status, body) = fake_api::list_users(query);
        assert_eq!(status, 200);
        serde_json::from_str(&body).unwrap()
    }

    #[test]
    fn second_page_holds_users_seven_to_twelve() {
        let value = page("page=2");
        let ids: Vec<_> = value["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(value["data"][0]["email"], "michael.lawson@reqres.in");
    }

    #[test]
    fn non_positive_page_is_treated_as_first_page() {
        assert_eq!(page("page=0")["page"], 1);
        assert_eq!(page("page=-3")["data"][0]["id"], 1);
    }

    #[test]
    fn huge_page_is_empty() {
        let value = page(&format!("page={}", i64::MAX));
        assert!(value["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn unknown_route_is_not_found() {
        let client = FakeReqres::new();
        let result = client.get("/api/unknown").unwrap();
        assert_eq!(result.status, 404);
    }
}
