//! # Flexural Analysis of a Singly Reinforced Rectangular Section
//!
//! Checks the provided reinforcement against the code ratio limits and, when
//! the section is not over-reinforced past the balanced point, computes the
//! Whitney-block moment capacity.
//!
//! ## Assumptions
//!
//! - Singly reinforced rectangular section
//! - Whitney rectangular stress block
//! - Strength design, lb-inch units throughout
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rcc_core::calculations::flexure_analysis::{FlexureAnalysisInput, calculate};
//! use rcc_core::materials::MaterialProperties;
//!
//! let input = FlexureAnalysisInput {
//!     label: "B-1".to_string(),
//!     width_in: 12.0,
//!     eff_depth_in: 17.5,
//!     material: MaterialProperties::new(4000.0, 60000.0),
//!     steel_area_in2: 2.4,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.is_adequate());
//! println!("Mu = {:.1} kip-ft", result.design_moment_inlb.unwrap() / 12000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::coefficients::phi_flexure;
use crate::errors::{CalcError, CalcResult};
use crate::limits::ReinforcementLimits;
use crate::materials::MaterialProperties;
use crate::verdict::{self, Verdict};

/// Input parameters for flexural analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "width_in": 12.0,
///   "eff_depth_in": 17.5,
///   "material": { "fc_psi": 4000.0, "fy_psi": 60000.0 },
///   "steel_area_in2": 2.4
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexureAnalysisInput {
    /// User label for this section (e.g., "B-1")
    pub label: String,

    /// Width of beam, b (inches)
    pub width_in: f64,

    /// Effective depth of beam, d (inches)
    pub eff_depth_in: f64,

    /// Concrete and steel strengths
    pub material: MaterialProperties,

    /// Provided tension reinforcement area, As (square inches)
    pub steel_area_in2: f64,
}

impl FlexureAnalysisInput {
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
        if self.steel_area_in2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "steel_area_in2",
                self.steel_area_in2.to_string(),
                "Reinforcement area must be positive",
            ));
        }
        self.material.validate()
    }
}

/// Results from flexural analysis.
///
/// The ratio fields are always present; the capacity fields are `None` when
/// an Error verdict aborted the calculation (reinforcement beyond the
/// balanced ratio).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexureAnalysisResult {
    /// Code limits on the reinforcement ratio (includes beta1 used)
    pub limits: ReinforcementLimits,

    /// Provided reinforcement ratio, rho = As/(b·d)
    pub rho: f64,

    /// Minimum reinforcement as an area, rho_min·b·d (square inches)
    pub as_min_in2: f64,

    /// Balanced reinforcement as an area (square inches)
    pub as_balanced_in2: f64,

    /// Maximum reinforcement as an area (square inches)
    pub as_max_in2: f64,

    /// Adequacy findings, in the order raised
    pub verdicts: Vec<Verdict>,

    // === Capacity (None after an Error verdict) ===
    /// Depth of Whitney block, a (inches)
    pub block_depth_in: Option<f64>,

    /// Depth of neutral axis, c = a/beta1 (inches)
    pub neutral_axis_in: Option<f64>,

    /// Net tensile strain at the extreme tension steel, epsilon_t
    pub net_tensile_strain: Option<f64>,

    /// Strength reduction factor interpolated from epsilon_t
    pub phi: Option<f64>,

    /// Nominal moment capacity, Mn (lb-inch)
    pub nominal_moment_inlb: Option<f64>,

    /// Design moment capacity, phi·Mn (lb-inch)
    pub design_moment_inlb: Option<f64>,
}

impl FlexureAnalysisResult {
    /// True when no Error verdict was raised (capacity fields are present)
    pub fn is_adequate(&self) -> bool {
        verdict::is_adequate(&self.verdicts)
    }
}

/// Analyze a singly reinforced rectangular section.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Returns
///
/// * `Ok(FlexureAnalysisResult)` - ratios and verdicts, plus capacity when
///   the section is not past the balanced ratio
/// * `Err(CalcError)` - structured error if inputs are invalid
pub fn calculate(input: &FlexureAnalysisInput) -> CalcResult<FlexureAnalysisResult> {
    input.validate()?;

    let b = input.width_in;
    let d = input.eff_depth_in;
    let fc = input.material.fc_psi;
    let fy = input.material.fy_psi;
    let as_provided = input.steel_area_in2;

    let limits = ReinforcementLimits::compute(fc, fy);
    let rho = as_provided / (b * d);

    let mut verdicts = Vec::new();
    let mut aborted = false;

    // Over-maximum first: past the balanced ratio the capacity formulas no
    // longer apply and the calculation stops.
    if rho > limits.rho_max {
        if rho <= limits.rho_balanced {
            verdicts.push(Verdict::warning(
                "rho is greater than rho_max, consider reducing.",
            ));
        } else {
            verdicts.push(Verdict::error(
                "rho is greater than rho_balance, reduce reinforcement percentage.",
            ));
            aborted = true;
        }
    }

    if !aborted && rho < limits.rho_min {
        verdicts.push(Verdict::warning(
            "rho is less than rho_min, consider increasing.",
        ));
    }

    let mut result = FlexureAnalysisResult {
        limits,
        rho,
        as_min_in2: limits.rho_min * b * d,
        as_balanced_in2: limits.rho_balanced * b * d,
        as_max_in2: limits.rho_max * b * d,
        verdicts,
        block_depth_in: None,
        neutral_axis_in: None,
        net_tensile_strain: None,
        phi: None,
        nominal_moment_inlb: None,
        design_moment_inlb: None,
    };

    if aborted {
        return Ok(result);
    }

    // Whitney block and strain-based phi
    let a = as_provided * fy / (0.85 * fc * b);
    let c = a / limits.beta1;
    let epsilon_t = ((d - c) / c) * 0.003;
    let phi = phi_flexure(epsilon_t);

    let mn = as_provided * fy * (d - a / 2.0);

    result.block_depth_in = Some(a);
    result.neutral_axis_in = Some(c);
    result.net_tensile_strain = Some(epsilon_t);
    result.phi = Some(phi);
    result.nominal_moment_inlb = Some(mn);
    result.design_moment_inlb = Some(phi * mn);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Severity;

    fn test_section(as_in2: f64) -> FlexureAnalysisInput {
        FlexureAnalysisInput {
            label: "Test".to_string(),
            width_in: 12.0,
            eff_depth_in: 17.5,
            material: MaterialProperties::new(4000.0, 60000.0),
            steel_area_in2: as_in2,
        }
    }

    #[test]
    fn test_typical_section() {
        // b=12, d=17.5, fc=4000, fy=60000, As=2.4
        let result = calculate(&test_section(2.4)).unwrap();

        // rho = 2.4/(12*17.5) = 0.011429
        assert!((result.rho - 0.011429).abs() < 1e-5);

        // Within [rho_min, rho_max]: no verdicts at all
        assert!(result.rho > result.limits.rho_min);
        assert!(result.rho < result.limits.rho_max);
        assert!(result.verdicts.is_empty());
        assert!(result.is_adequate());

        // a = 2.4*60000/(0.85*4000*12) = 3.529; c = 4.152
        assert!((result.block_depth_in.unwrap() - 3.529).abs() < 1e-3);
        assert!((result.neutral_axis_in.unwrap() - 4.152).abs() < 1e-3);

        // epsilon_t = ((17.5-4.152)/4.152)*0.003 = 0.00964 -> tension controlled
        assert!(result.net_tensile_strain.unwrap() > 0.005);
        assert!((result.phi.unwrap() - 0.90).abs() < 1e-12);

        // Mn = 2.4*60000*(17.5 - 3.529/2) = 2,265,882 lb-in (188.8 kip-ft)
        let mn = result.nominal_moment_inlb.unwrap();
        assert!((mn - 2_265_882.0).abs() < 1000.0);
        assert!(result.design_moment_inlb.unwrap() > 0.0);
    }

    #[test]
    fn test_under_minimum_warns() {
        let result = calculate(&test_section(0.4)).unwrap();

        assert!(result.rho < result.limits.rho_min);
        assert_eq!(result.verdicts.len(), 1);
        assert_eq!(result.verdicts[0].severity, Severity::Warning);

        // Capacity is still reported
        assert!(result.design_moment_inlb.is_some());
        assert!(result.is_adequate());
    }

    #[test]
    fn test_over_maximum_warns() {
        // Between rho_max (0.01806) and rho_balanced (0.02851):
        // As between 3.79 and 5.99 in²
        let result = calculate(&test_section(4.5)).unwrap();

        assert!(result.rho > result.limits.rho_max);
        assert!(result.rho <= result.limits.rho_balanced);
        assert_eq!(result.verdicts.len(), 1);
        assert_eq!(result.verdicts[0].severity, Severity::Warning);
        assert!(result.design_moment_inlb.is_some());
    }

    #[test]
    fn test_over_balanced_aborts() {
        let result = calculate(&test_section(7.0)).unwrap();

        assert!(result.rho > result.limits.rho_balanced);
        assert!(!result.is_adequate());
        assert_eq!(result.verdicts.len(), 1);
        assert_eq!(result.verdicts[0].severity, Severity::Error);

        // Everything past the abort point is absent
        assert!(result.block_depth_in.is_none());
        assert!(result.neutral_axis_in.is_none());
        assert!(result.net_tensile_strain.is_none());
        assert!(result.phi.is_none());
        assert!(result.nominal_moment_inlb.is_none());
        assert!(result.design_moment_inlb.is_none());
    }

    #[test]
    fn test_tension_controlled_boundary_strain() {
        // At the tension-controlled limit c/d = 3/8, epsilon_t is exactly
        // 0.005: eps = ((d-c)/c)*0.003 = (5/3)*0.003.
        // Choose As so that c = 3/8*d: a = beta1*c, As = 0.85*fc*b*a/fy.
        let d = 17.5;
        let c = 3.0 / 8.0 * d;
        let a = 0.85 * c;
        let as_in2 = 0.85 * 4000.0 * 12.0 * a / 60000.0;

        let result = calculate(&test_section(as_in2)).unwrap();
        let eps = result.net_tensile_strain.unwrap();
        assert!((eps - 0.005).abs() < 1e-12);
        assert!((result.phi.unwrap() - 0.90).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_section(2.4);
        input.width_in = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_section(2.4);
        input.eff_depth_in = -17.5;
        assert!(calculate(&input).is_err());

        let input = test_section(0.0);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_section(2.4);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: FlexureAnalysisInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.steel_area_in2, roundtrip.steel_area_in2);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("design_moment_inlb"));
        let roundtrip: FlexureAnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.rho, roundtrip.rho);
    }
}
