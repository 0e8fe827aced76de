//! # Error Types
//!
//! Structured error types for rcc_core. These cover misuse of the engine
//! (inputs outside the domain of the design formulas); code-limit findings
//! on a valid section are *not* errors — they are [`Verdict`]s carried in
//! the result records (see [`crate::verdict`]).
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_in: f64) -> CalcResult<()> {
//!     if width_in <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "width_in".to_string(),
//!             value: width_in.to_string(),
//!             reason: "Width must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Verdict`]: crate::verdict::Verdict

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-positive, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Derived geometry is degenerate (e.g., cover and stirrup allowance
    /// consume the whole section), so the formulas have no meaning
    #[error("Infeasible geometry: {quantity} = {value} - {reason}")]
    InfeasibleGeometry {
        quantity: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InfeasibleGeometry error
    pub fn infeasible_geometry(
        quantity: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InfeasibleGeometry {
            quantity: quantity.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InfeasibleGeometry { .. } => "INFEASIBLE_GEOMETRY",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
