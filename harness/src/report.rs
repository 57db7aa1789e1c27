//! Structured pass/fail reporting.
//!
//! One outcome per executed case, aggregated per suite and per run.
//! Reports live in memory for one invocation; rendering to text or JSON
//! is the CLI's concern.

use serde::Serialize;

/// Result of one example-table case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    /// Name of the function under test.
    pub function: String,
    /// Rendered argument list, e.g. `3, 7, 10`.
    pub arguments: String,
    pub expected: String,
    pub actual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub passed: bool,
}

impl CaseOutcome {
    /// Render the one-line mismatch report for a failing case.
    pub fn mismatch_line(&self) -> String {
        format!(
            "Expected {} when calling {}({}), got {}",
            self.expected, self.function, self.arguments, self.actual
        )
    }
}

/// Outcomes for one suite, in table order.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite_id: String,
    pub cases: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Failing cases in table order.
    pub fn mismatches(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.cases.iter().filter(|case| !case.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|case| case.passed)
    }
}

/// Aggregated report for one harness invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// RFC 3339 start time.
    pub started_at: String,
    pub duration_secs: f64,
    pub suites: Vec<SuiteReport>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.suites.iter().map(SuiteReport::total).sum()
    }

    pub fn passed(&self) -> usize {
        self.suites.iter().map(SuiteReport::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.suites.iter().map(SuiteReport::failed).sum()
    }

    pub fn all_passed(&self) -> bool {
        self.suites.iter().all(SuiteReport::all_passed)
    }
}
