//! # Flexural Design of a Singly Reinforced Rectangular Section
//!
//! Solves the Whitney-block quadratic for the reinforcement ratio required
//! to carry a factored moment, then clamps the answer to the code limits.
//!
//! Design always targets the tension-controlled zone, so a fixed phi = 0.9
//! is used; the result is checked against rho_max to keep that assumption
//! honest.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rcc_core::calculations::flexure_design::{FlexureDesignInput, calculate};
//! use rcc_core::materials::MaterialProperties;
//!
//! let input = FlexureDesignInput {
//!     label: "B-2".to_string(),
//!     width_in: 12.0,
//!     eff_depth_in: 17.5,
//!     material: MaterialProperties::new(4000.0, 60000.0),
//!     moment_kipft: 120.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("As = {:.2} sq.inch", result.as_provided_in2.unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::limits::ReinforcementLimits;
use crate::materials::MaterialProperties;
use crate::units::{InLb, KipFt};
use crate::verdict::{self, Verdict};

/// Strength reduction factor assumed for flexural design (tension-controlled)
pub const PHI_DESIGN: f64 = 0.9;

/// Input parameters for flexural design.
///
/// The factored moment is given in kip-ft (the usual hand-calculation unit)
/// and converted to lb-inch before any formula is applied.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-2",
///   "width_in": 12.0,
///   "eff_depth_in": 17.5,
///   "material": { "fc_psi": 4000.0, "fy_psi": 60000.0 },
///   "moment_kipft": 120.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexureDesignInput {
    /// User label for this section
    pub label: String,

    /// Width of beam, b (inches)
    pub width_in: f64,

    /// Effective depth of beam, d (inches)
    pub eff_depth_in: f64,

    /// Concrete and steel strengths
    pub material: MaterialProperties,

    /// Factored design moment, Mu (kip-ft)
    pub moment_kipft: f64,
}

impl FlexureDesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_in",
                self.width_in.to_string(),
                "Width must be positive",
            ));
        }
        if self.eff_depth_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "eff_depth_in",
                self.eff_depth_in.to_string(),
                "Effective depth must be positive",
            ));
        }
        if self.moment_kipft <= 0.0 {
            return Err(CalcError::invalid_input(
                "moment_kipft",
                self.moment_kipft.to_string(),
                "Design moment must be positive",
            ));
        }
        self.material.validate()
    }
}

/// Results from flexural design.
///
/// `rho_provided`/`as_provided_in2` are `None` when an Error verdict aborted
/// the design (moment infeasible at phi = 0.9, or rho_calc beyond rho_max).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexureDesignResult {
    /// Code limits on the reinforcement ratio (includes beta1 used)
    pub limits: ReinforcementLimits,

    /// Reinforcement ratio required by the quadratic, before clamping
    /// (`None` when the discriminant is negative: the section cannot carry
    /// the moment at phi = 0.9)
    pub rho_calc: Option<f64>,

    /// Calculated reinforcement as an area (square inches)
    pub as_calc_in2: Option<f64>,

    /// Minimum reinforcement as an area (square inches)
    pub as_min_in2: f64,

    /// Balanced reinforcement as an area (square inches)
    pub as_balanced_in2: f64,

    /// Maximum reinforcement as an area (square inches)
    pub as_max_in2: f64,

    /// Design findings, in the order raised
    pub verdicts: Vec<Verdict>,

    /// Reinforcement ratio to provide, after the minimum-steel clamp
    pub rho_provided: Option<f64>,

    /// Reinforcement area to provide (square inches)
    pub as_provided_in2: Option<f64>,
}

impl FlexureDesignResult {
    /// True when no Error verdict was raised (provided-steel fields present)
    pub fn is_adequate(&self) -> bool {
        verdict::is_adequate(&self.verdicts)
    }
}

/// Design the tension reinforcement for a factored moment.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Returns
///
/// * `Ok(FlexureDesignResult)` - required ratios, limits, and verdicts
/// * `Err(CalcError)` - structured error if inputs are invalid
pub fn calculate(input: &FlexureDesignInput) -> CalcResult<FlexureDesignResult> {
    input.validate()?;

    let b = input.width_in;
    let d = input.eff_depth_in;
    let fc = input.material.fc_psi;
    let fy = input.material.fy_psi;

    let mu: InLb = KipFt(input.moment_kipft).into();

    let limits = ReinforcementLimits::compute(fc, fy);

    let mut result = FlexureDesignResult {
        limits,
        rho_calc: None,
        as_calc_in2: None,
        as_min_in2: limits.rho_min * b * d,
        as_balanced_in2: limits.rho_balanced * b * d,
        as_max_in2: limits.rho_max * b * d,
        verdicts: Vec::new(),
        rho_provided: None,
        as_provided_in2: None,
    };

    // Whitney-block quadratic: Ru = Mu/(b·d²), f1 = 2·Ru/(0.85·f'c·phi).
    // A negative discriminant (f1 > 1) means no real rho satisfies the
    // moment at phi = 0.9: the section itself is too small.
    let ru = mu.0 / (b * d * d);
    let f1 = 2.0 * ru / (0.85 * fc * PHI_DESIGN);

    if f1 > 1.0 {
        result.verdicts.push(Verdict::error(
            "Section cannot carry Mu at phi = 0.9 (discriminant is negative). Revise section.",
        ));
        return Ok(result);
    }

    let f2 = 1.0 - (1.0 - f1).sqrt();
    let rho_calc = 0.85 * fc * f2 / fy;

    result.rho_calc = Some(rho_calc);
    result.as_calc_in2 = Some(rho_calc * b * d);

    if rho_calc > limits.rho_max {
        result.verdicts.push(Verdict::error(
            "Calculated reinforcement is more than maximum allowed (rho-calc > rho-max). Revise section.",
        ));
        return Ok(result);
    }

    // Round up toward rho_min, but never prescribe more than 4/3 of the
    // calculated requirement for a lightly loaded section.
    let rho = rho_calc.max(limits.rho_min.min(4.0 * rho_calc / 3.0));

    result.rho_provided = Some(rho);
    result.as_provided_in2 = Some(rho * b * d);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::flexure_analysis::{
        self, FlexureAnalysisInput,
    };
    use crate::verdict::Severity;

    fn test_input(moment_kipft: f64) -> FlexureDesignInput {
        FlexureDesignInput {
            label: "Test".to_string(),
            width_in: 12.0,
            eff_depth_in: 17.5,
            material: MaterialProperties::new(4000.0, 60000.0),
            moment_kipft,
        }
    }

    #[test]
    fn test_typical_design() {
        let result = calculate(&test_input(120.0)).unwrap();

        assert!(result.is_adequate());
        let rho_calc = result.rho_calc.unwrap();
        let rho = result.rho_provided.unwrap();

        // Ru = 120*12000/(12*17.5²) = 391.8 psi
        // f1 = 2*391.8/(0.85*4000*0.9) = 0.2561
        // f2 = 1 - sqrt(0.7439) = 0.1375; rho_calc = 0.85*4000*0.1375/60000
        assert!((rho_calc - 0.007794).abs() < 1e-4);

        // Above rho_min: provided equals calculated
        assert!(rho_calc > result.limits.rho_min);
        assert_eq!(rho, rho_calc);
        assert!((result.as_provided_in2.unwrap() - rho * 12.0 * 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_light_moment_clamps_toward_minimum() {
        // Small moment: rho_calc falls below rho_min and the 4/3 relaxation
        // governs (4/3·rho_calc < rho_min).
        let result = calculate(&test_input(10.0)).unwrap();

        let rho_calc = result.rho_calc.unwrap();
        let rho = result.rho_provided.unwrap();

        assert!(rho_calc < result.limits.rho_min);
        assert!((rho - 4.0 * rho_calc / 3.0).abs() < 1e-12);
        assert!(rho < result.limits.rho_min);
    }

    #[test]
    fn test_moderate_moment_clamps_to_minimum() {
        // rho_calc just below rho_min, 4/3·rho_calc above it: rho_min governs.
        // rho_min = 0.003333 -> target rho_calc ~ 0.0030: Mu ~ 47 kip-ft
        let result = calculate(&test_input(47.0)).unwrap();

        let rho_calc = result.rho_calc.unwrap();
        let rho = result.rho_provided.unwrap();

        assert!(rho_calc < result.limits.rho_min);
        assert!(4.0 * rho_calc / 3.0 > result.limits.rho_min);
        assert_eq!(rho, result.limits.rho_min);
    }

    #[test]
    fn test_excessive_moment_aborts() {
        // rho_calc beyond rho_max but discriminant still real
        let result = calculate(&test_input(280.0)).unwrap();

        let rho_calc = result.rho_calc.unwrap();
        assert!(rho_calc > result.limits.rho_max);
        assert!(!result.is_adequate());
        assert_eq!(result.verdicts[0].severity, Severity::Error);
        assert!(result.rho_provided.is_none());
        assert!(result.as_provided_in2.is_none());
    }

    #[test]
    fn test_infeasible_moment_is_explicit_error() {
        // f1 > 1: Mu > 0.85·f'c·phi·b·d²/2 = 468.6 kip-ft for this section
        let result = calculate(&test_input(600.0)).unwrap();

        assert!(!result.is_adequate());
        assert_eq!(result.verdicts.len(), 1);
        assert_eq!(result.verdicts[0].severity, Severity::Error);

        // No NaN anywhere: the quadratic was never evaluated
        assert!(result.rho_calc.is_none());
        assert!(result.as_calc_in2.is_none());
        assert!(result.rho_provided.is_none());
    }

    #[test]
    fn test_design_then_analyze_never_under_designs() {
        // Idempotence: the designed As, analyzed back, must give
        // phi·Mn >= Mu and rho_provided <= rho_max.
        for mu_kipft in [20.0, 60.0, 120.0, 180.0] {
            let design = calculate(&test_input(mu_kipft)).unwrap();
            assert!(design.is_adequate(), "Mu={}", mu_kipft);

            let rho = design.rho_provided.unwrap();
            assert!(rho <= design.limits.rho_max);

            let check = flexure_analysis::calculate(&FlexureAnalysisInput {
                label: "check".to_string(),
                width_in: 12.0,
                eff_depth_in: 17.5,
                material: MaterialProperties::new(4000.0, 60000.0),
                steel_area_in2: design.as_provided_in2.unwrap(),
            })
            .unwrap();

            let capacity_inlb = check.design_moment_inlb.unwrap();
            assert!(
                capacity_inlb >= mu_kipft * 12000.0 - 1.0,
                "Mu={} capacity={}",
                mu_kipft,
                capacity_inlb / 12000.0
            );
        }
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_input(120.0);
        input.eff_depth_in = 0.0;
        assert!(calculate(&input).is_err());

        let input = test_input(-5.0);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input(120.0);
        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("rho_provided"));
        let roundtrip: FlexureDesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.rho_provided, roundtrip.rho_provided);
    }
}
