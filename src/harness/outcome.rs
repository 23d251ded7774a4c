use serde::Serialize;
use thiserror::Error;

use crate::fixture::FixtureError;
use crate::http::HttpError;
use crate::json::JsonError;

/// Everything that can make a single case fail.
#[derive(Debug, Error)]
pub enum CaseError {
    /// The request never produced a response
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body did not match the expected model
    #[error(transparent)]
    Deserialization(#[from] JsonError),

    /// A response value differs from the expectation
    #[error("{what}: expected {expected}, got {actual}")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    /// The fixture user could not be located on the page
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

impl CaseError {
    /// Short category name used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Deserialization(_) => "deserialization",
            Self::Assertion { .. } => "assertion",
            Self::Fixture(_) => "fixture",
        }
    }
}

/// Result of one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail { kind: &'static str, reason: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl From<&CaseError> for Outcome {
    fn from(error: &CaseError) -> Self {
        Self::Fail {
            kind: error.kind(),
            reason: error.to_string(),
        }
    }
}

/// Named outcome of one case with its wall-clock duration.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub elapsed_ms: u64,
}

/// Reports for every case that ran, in execution order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub reports: Vec<CaseReport>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// `true` when every case passed. An empty run counts as passed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Reports of the failed cases only.
    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.reports.iter().filter(|r| !r.outcome.is_pass())
    }
}
