//! Conformance report types: results, severity levels, and report aggregation.

use serde::Serialize;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed (blocks conformance).
    Failure,
}

impl Severity {
    /// Four-letter tag used in console output.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Short identifier of the suite that produced this result.
    pub suite: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    /// Creates a passing result.
    pub fn pass(suite: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result.
    pub fn fail(suite: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        suite: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            suite: suite.into(),
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Creates a warning result.
    pub fn warn(suite: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// Pass if `mismatches` is empty, otherwise fail listing them.
    pub fn from_mismatches(
        suite: impl Into<String>,
        message: impl Into<String>,
        mismatches: Vec<String>,
    ) -> Self {
        if mismatches.is_empty() {
            Self::pass(suite, message)
        } else {
            Self::fail_with_details(suite, message, mismatches)
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated conformance report from all suites.
#[derive(Debug, Serialize)]
pub struct ConformanceReport {
    /// All individual test results across all suites.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the count of passed checks.
    pub fn pass_count(&self) -> usize {
        self.count(Severity::Pass)
    }

    /// Returns the count of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

impl Default for ConformanceReport {
    fn default() -> Self {
        Self::new()
    }
}
