//! JSON encoding of request bodies and decoding of response bodies.
//!
//! Field naming is declared on each model with `serde` attributes, so this
//! module only adds error context on top of `serde_json`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Number of body characters kept in a decode error.
const BODY_EXCERPT_CHARS: usize = 200;

/// Errors raised while mapping between models and JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The body is not valid JSON or does not fit the target model
    #[error("Failed to decode {target} from response body ({source}); body: {excerpt}")]
    Decode {
        target: String,
        excerpt: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request model could not be encoded
    #[error("Failed to encode {target}: {source}")]
    Encode {
        target: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serializes a request model into a JSON body.
pub fn to_body<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(|source| JsonError::Encode {
        target: short_type_name::<T>(),
        source,
    })
}

/// Deserializes a response body into `T`.
///
/// Unknown fields are ignored; missing required fields and malformed JSON
/// are reported as `JsonError::Decode` with an excerpt of the body.
pub fn from_body<T: DeserializeOwned>(body: &str) -> Result<T, JsonError> {
    serde_json::from_str(body).map_err(|source| JsonError::Decode {
        target: short_type_name::<T>(),
        excerpt: excerpt(body),
        source,
    })
}

/// Drops module paths from every segment of the type name, so
/// `alloc::vec::Vec<reqres_check::models::UserRecord>` becomes
/// `Vec<UserRecord>`.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut word = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            word.push(c);
        } else {
            short.push_str(word.rsplit("::").next().unwrap_or(&word));
            word.clear();
            short.push(c);
        }
    }
    short.push_str(word.rsplit("::").next().unwrap_or(&word));
    short
}

fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
