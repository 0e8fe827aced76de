//! # Cracking Torsion of a Solid Rectangular Section
//!
//! Reports the plain-concrete cracking torsional capacity Tcr together with
//! the 0.85·Tcr and 0.75·Tcr companion values used in quick hand checks.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rcc_core::calculations::cracking_torsion::{CrackingTorsionInput, calculate};
//!
//! let input = CrackingTorsionInput {
//!     label: "B-5".to_string(),
//!     width_in: 12.0,
//!     overall_depth_in: 24.0,
//!     fc_psi: 4000.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Tcr = {:.1} kip-inch", result.tcr_inlb / 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::coefficients;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for the cracking-torsion lookup.
///
/// ## JSON Example
///
/// ```json
/// { "label": "B-5", "width_in": 12.0, "overall_depth_in": 24.0, "fc_psi": 4000.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackingTorsionInput {
    /// User label for this section
    pub label: String,

    /// Width of beam, b (inches)
    pub width_in: f64,

    /// Overall depth of beam, h (inches)
    pub overall_depth_in: f64,

    /// Specified compressive strength of concrete, f'c (psi)
    pub fc_psi: f64,
}

impl CrackingTorsionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_in",
                self.width_in.to_string(),
                "Width must be positive",
            ));
        }
        if self.overall_depth_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "overall_depth_in",
                self.overall_depth_in.to_string(),
                "Overall depth must be positive",
            ));
        }
        if self.fc_psi <= 0.0 {
            return Err(CalcError::invalid_input(
                "fc_psi",
                self.fc_psi.to_string(),
                "Concrete strength must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the cracking-torsion lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrackingTorsionResult {
    /// Cracking torsion, Tcr (lb-inch)
    pub tcr_inlb: f64,

    /// 0.85·Tcr (lb-inch)
    pub tcr_085_inlb: f64,

    /// 0.75·Tcr (lb-inch)
    pub tcr_075_inlb: f64,
}

/// Compute the cracking torsional capacity of a solid rectangular section.
pub fn calculate(input: &CrackingTorsionInput) -> CalcResult<CrackingTorsionResult> {
    input.validate()?;

    let tcr = coefficients::cracking_torsion(input.width_in, input.overall_depth_in, input.fc_psi);

    Ok(CrackingTorsionResult {
        tcr_inlb: tcr,
        tcr_085_inlb: 0.85 * tcr,
        tcr_075_inlb: 0.75 * tcr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> CrackingTorsionInput {
        CrackingTorsionInput {
            label: "Test".to_string(),
            width_in: 12.0,
            overall_depth_in: 24.0,
            fc_psi: 4000.0,
        }
    }

    #[test]
    fn test_companion_values() {
        let result = calculate(&test_input()).unwrap();

        assert!((result.tcr_inlb - 291_433.0).abs() < 100.0);
        assert_eq!(result.tcr_085_inlb, 0.85 * result.tcr_inlb);
        assert_eq!(result.tcr_075_inlb, 0.75 * result.tcr_inlb);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_input();
        input.fc_psi = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&test_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: CrackingTorsionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.tcr_inlb, roundtrip.tcr_inlb);
    }
}
