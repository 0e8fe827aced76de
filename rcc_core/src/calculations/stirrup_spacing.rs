//! # Stirrup Spacing for Combined Shear and Torsion Reinforcement
//!
//! Combines already-computed shear and torsion reinforcement intensities
//! with the hoop and extra-leg areas into a required tie spacing. Torsion is
//! resisted only by the closed hoop, so the shear intensity is first
//! apportioned to the hoop leg.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rcc_core::calculations::stirrup_spacing::{StirrupSpacingInput, calculate};
//!
//! let input = StirrupSpacingInput {
//!     label: "B-4 ties".to_string(),
//!     av_over_s: 0.02,
//!     at_over_s: 0.01,
//!     hoop_leg_area_in2: 0.11,
//!     extra_leg_area_in2: 0.22,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.spacing_in - 7.33).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for the spacing calculation.
///
/// The intensities are the outputs of the shear and torsion design modes;
/// this mode composes them, it does not recompute them.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-4 ties",
///   "av_over_s": 0.02,
///   "at_over_s": 0.01,
///   "hoop_leg_area_in2": 0.11,
///   "extra_leg_area_in2": 0.22
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StirrupSpacingInput {
    /// User label for this tie set
    pub label: String,

    /// Required shear reinforcement intensity, Av/s (in²/in)
    pub av_over_s: f64,

    /// Required torsion reinforcement intensity, At/s (in²/in)
    pub at_over_s: f64,

    /// Area of a single leg of the outer closed hoop, Ast (square inches)
    pub hoop_leg_area_in2: f64,

    /// Total area of the remaining vertical shear legs (square inches)
    pub extra_leg_area_in2: f64,
}

impl StirrupSpacingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.av_over_s < 0.0 {
            return Err(CalcError::invalid_input(
                "av_over_s",
                self.av_over_s.to_string(),
                "Shear intensity cannot be negative",
            ));
        }
        if self.at_over_s < 0.0 {
            return Err(CalcError::invalid_input(
                "at_over_s",
                self.at_over_s.to_string(),
                "Torsion intensity cannot be negative",
            ));
        }
        if self.hoop_leg_area_in2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "hoop_leg_area_in2",
                self.hoop_leg_area_in2.to_string(),
                "Hoop leg area must be positive",
            ));
        }
        if self.extra_leg_area_in2 < 0.0 {
            return Err(CalcError::invalid_input(
                "extra_leg_area_in2",
                self.extra_leg_area_in2.to_string(),
                "Extra leg area cannot be negative",
            ));
        }
        if self.av_over_s + self.at_over_s <= 0.0 {
            return Err(CalcError::invalid_input(
                "av_over_s + at_over_s",
                (self.av_over_s + self.at_over_s).to_string(),
                "Total required intensity must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the spacing calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StirrupSpacingResult {
    /// Total vertical shear leg area, 2·Ast + extra (square inches)
    pub total_shear_area_in2: f64,

    /// Shear intensity apportioned to the hoop leg (in²/in)
    pub scaled_av_over_s: f64,

    /// Combined hoop intensity, At/s + scaled Av/s (in²/in)
    pub total_intensity: f64,

    /// Required hoop spacing (inches)
    pub spacing_in: f64,
}

/// Compute the required closed-hoop spacing.
///
/// This is a pure function suitable for LLM invocation.
pub fn calculate(input: &StirrupSpacingInput) -> CalcResult<StirrupSpacingResult> {
    input.validate()?;

    // The hoop contributes two legs to shear; torsion sees only one leg.
    let total_shear_area = 2.0 * input.hoop_leg_area_in2 + input.extra_leg_area_in2;
    let scaled_av_over_s = input.av_over_s * input.hoop_leg_area_in2 / total_shear_area;

    let total_intensity = input.at_over_s + scaled_av_over_s;

    Ok(StirrupSpacingResult {
        total_shear_area_in2: total_shear_area,
        scaled_av_over_s,
        total_intensity,
        spacing_in: input.hoop_leg_area_in2 / total_intensity,
    })
}
