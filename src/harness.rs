//! Test case execution and reporting.
//!
//! A case is a plain function over a read-only [`CaseContext`]. The runner
//! turns whatever it returns, including a panic, into exactly one
//! [`Outcome`], so one broken case never stops the rest of the run.

mod expect;
mod outcome;
mod runner;

pub use expect::{expect_empty, expect_eq, expect_gt, expect_status};
pub use outcome::{CaseError, CaseReport, Outcome, RunSummary};
pub use runner::{CaseContext, CaseFn, TestCase, run_case, run_cases};
