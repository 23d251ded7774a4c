use std::fmt::Debug;

use super::CaseError;
use crate::http::HttpResult;

/// Fails unless `actual == expected`.
///
/// Values are rendered with `Debug`, so strings appear quoted in the reason.
pub fn expect_eq<T>(what: &str, expected: T, actual: T) -> Result<(), CaseError>
where
    T: PartialEq + Debug,
{
    if actual == expected {
        return Ok(());
    }

    Err(CaseError::Assertion {
        what: what.to_string(),
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}

/// Fails unless `actual > threshold`.
pub fn expect_gt<T>(what: &str, threshold: T, actual: T) -> Result<(), CaseError>
where
    T: PartialOrd + Debug,
{
    if actual > threshold {
        return Ok(());
    }

    Err(CaseError::Assertion {
        what: what.to_string(),
        expected: format!("more than {threshold:?}"),
        actual: format!("{actual:?}"),
    })
}

/// Fails unless a collection of length `len` is empty.
pub fn expect_empty(what: &str, len: usize) -> Result<(), CaseError> {
    if len == 0 {
        return Ok(());
    }

    Err(CaseError::Assertion {
        what: what.to_string(),
        expected: "none".to_string(),
        actual: len.to_string(),
    })
}

/// Fails unless the response has the expected status code.
pub fn expect_status(result: &HttpResult, expected: u16) -> Result<(), CaseError> {
    expect_eq("status code", expected, result.status)
}
