use serde::{Deserialize, Serialize};

/// Request body for the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// Creates a new credential pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqres_check::LoginCredentials;
    ///
    /// let credentials = LoginCredentials::new("eve.holt@reqres.in", "cityslicka");
    /// assert_eq!(credentials.email, "eve.holt@reqres.in");
    /// ```
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginToken {
    pub token: String,
}

/// Failed login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginError {
    pub error: String,
}
