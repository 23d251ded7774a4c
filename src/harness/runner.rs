use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use super::{CaseError, CaseReport, Outcome, RunSummary};
use crate::http::ApiClientTrait;
use crate::settings::Settings;

/// Read-only collaborators handed to every case.
#[derive(Clone, Copy)]
pub struct CaseContext<'a> {
    pub client: &'a dyn ApiClientTrait,
    pub settings: &'a Settings,
}

impl<'a> CaseContext<'a> {
    pub fn new(client: &'a dyn ApiClientTrait, settings: &'a Settings) -> Self {
        Self { client, settings }
    }
}

/// Body of a test case.
pub type CaseFn = fn(&CaseContext<'_>) -> Result<(), CaseError>;

/// A named, self-contained verification procedure.
#[derive(Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub run: CaseFn,
}

impl TestCase {
    pub const fn new(name: &'static str, run: CaseFn) -> Self {
        Self { name, run }
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// Runs one case and converts its result into a report.
///
/// Errors and panics both become `Outcome::Fail`.
pub fn run_case(case: &TestCase, ctx: &CaseContext<'_>) -> CaseReport {
    let started = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| (case.run)(ctx)));
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let outcome = match result {
        Ok(Ok(())) => Outcome::Pass,
        Ok(Err(error)) => Outcome::from(&error),
        Err(payload) => Outcome::Fail {
            kind: "panic",
            reason: panic_message(payload.as_ref()),
        },
    };

    match &outcome {
        Outcome::Pass => tracing::info!(case = case.name, elapsed_ms, "case passed"),
        Outcome::Fail { kind, reason } => {
            tracing::warn!(case = case.name, kind, reason = %reason, elapsed_ms, "case failed")
        }
    }

    CaseReport {
        name: case.name,
        outcome,
        elapsed_ms,
    }
}

/// Runs every case whose name contains `filter` (all cases when `None`).
///
/// Cases run sequentially and independently; a failure never stops the run.
pub fn run_cases(cases: &[TestCase], ctx: &CaseContext<'_>, filter: Option<&str>) -> RunSummary {
    let reports = cases
        .iter()
        .filter(|case| filter.is_none_or(|f| case.name.contains(f)))
        .map(|case| run_case(case, ctx))
        .collect();

    RunSummary { reports }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("case panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("case panicked: {message}")
    } else {
        "case panicked".to_string()
    }
}
