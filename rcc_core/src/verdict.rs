//! # Verdicts
//!
//! Advisory findings produced by the adequacy and code-limit checks.
//!
//! A verdict is an ordinary value, not an error: a section that fails a code
//! limit is still a completed calculation. Each result record carries the
//! verdicts raised while it was computed, in the order they were raised.
//!
//! Severity drives control flow inside a calculation:
//!
//! - `Info` — advisory note (e.g., "no shear reinforcement required")
//! - `Warning` — correctable by a design note; computation continues
//! - `Error` — the section must be revised; the calculation stops at that
//!   point and every downstream result field stays `None`
//!
//! Consumers must not read optional result fields once an `Error` verdict is
//! present (see the per-calculation result docs).

use serde::{Deserialize, Serialize};

/// Severity of an advisory finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Advisory note, no action required
    Info,
    /// Correctable finding, computation continued
    Warning,
    /// Section must be revised; downstream computation was aborted
    Error,
}

impl Severity {
    /// Display tag for console reporting
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single advisory finding: severity plus a human-readable message.
///
/// The engine only produces the severity and message; formatting and console
/// rendering belong to the reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub severity: Severity,
    pub message: String,
}

impl Verdict {
    /// Create an Info verdict
    pub fn info(message: impl Into<String>) -> Self {
        Verdict {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Create a Warning verdict
    pub fn warning(message: impl Into<String>) -> Self {
        Verdict {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create an Error verdict
    pub fn error(message: impl Into<String>) -> Self {
        Verdict {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// True if this verdict aborted downstream computation
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Helper for result records that carry a list of verdicts.
///
/// A calculation is adequate when no Error verdict was raised; Warnings and
/// Infos do not block.
pub fn is_adequate(verdicts: &[Verdict]) -> bool {
    !verdicts.iter().any(Verdict::is_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_tags() {
        assert_eq!(Severity::Info.tag(), "INFO");
        assert_eq!(Severity::Warning.tag(), "WARNING");
        assert_eq!(Severity::Error.tag(), "ERROR");
    }

    #[test]
    fn test_blocking() {
        assert!(!Verdict::info("note").is_blocking());
        assert!(!Verdict::warning("check this").is_blocking());
        assert!(Verdict::error("revise section").is_blocking());
    }

    #[test]
    fn test_is_adequate() {
        let ok = vec![Verdict::info("a"), Verdict::warning("b")];
        assert!(is_adequate(&ok));

        let bad = vec![Verdict::warning("b"), Verdict::error("c")];
        assert!(!is_adequate(&bad));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let v = Verdict::warning("rho is less than rho_min, consider increasing.");
        let json = serde_json::to_string(&v).unwrap();
        let roundtrip: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(v, roundtrip);
    }
}
