//! Expected-value fixtures loaded from the settings file.
//!
//! The file is a flat JSON object whose keys use PascalCase
//! (`TestUserId`, `TestUserEmail`, ...). Every key is required.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default settings file name, resolved against the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "ReqresTestSettings.json";

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV_VAR: &str = "REQRES_SETTINGS";

/// Errors raised while loading the settings file.
///
/// Any of these is fatal for the run: no case executes without fixtures.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read (missing, permissions, ...)
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or a field is missing or mistyped
    #[error("Invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixture values the suite compares live responses against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    /// Id of the user looked up in the paginated list.
    pub test_user_id: i64,
    pub test_user_email: String,
    pub test_user_first_name: String,
    pub test_user_last_name: String,
    pub test_user_avatar_url: String,
    /// Password sent with the login requests.
    pub test_user_password: String,
    /// Token the login endpoint is expected to return.
    pub test_user_login_token: String,
}

impl Settings {
    /// Reads and parses the settings file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Read` if the file cannot be read and
    /// `SettingsError::Parse` if any of the seven fields is absent or invalid.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings =
            serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parses settings from JSON text. Used for inline fixtures.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Resolves the settings file location.
    ///
    /// An explicit path wins, then `REQRES_SETTINGS`, then
    /// `ReqresTestSettings.json` in the working directory.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        match std::env::var(SETTINGS_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
            _ => PathBuf::from(DEFAULT_SETTINGS_FILE),
        }
    }
}
