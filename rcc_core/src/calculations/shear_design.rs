//! # Shear Design of a Rectangular Section
//!
//! Concrete shear capacity and required transverse reinforcement intensity
//! for a factored shear force.
//!
//! The three-way branch (no reinforcement / minimum / computed) lives in
//! [`design_shear`], which the combined shear+torsion calculation reuses so
//! the two modes can never drift apart.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rcc_core::calculations::shear_design::{ShearDesignInput, calculate};
//! use rcc_core::materials::MaterialProperties;
//!
//! let input = ShearDesignInput {
//!     label: "B-3".to_string(),
//!     width_in: 12.0,
//!     eff_depth_in: 17.5,
//!     material: MaterialProperties::new(4000.0, 60000.0),
//!     shear_kip: 15.0,
//!     phi: 0.75,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Vc = {:.1} kip", result.shear.vc_lb / 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;
use crate::units::{Kips, Pounds};
use crate::verdict::{self, Verdict};

/// Which branch of the shear provisions governed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShearRequirement {
    /// Vu < phi·Vc/2: no shear reinforcement required
    NotRequired,
    /// phi·Vc/2 <= Vu <= phi·Vc: minimum reinforcement governs
    Minimum,
    /// Vu > phi·Vc: reinforcement sized for Vs
    Computed,
}

/// Outcome of the shared shear-design branch.
///
/// `vs_lb` is present only on the `Computed` branch; `av_over_s` is `None`
/// either when no reinforcement is required or when Vs exceeded the 4·Vc
/// ceiling (Error verdict).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearOutcome {
    /// Concrete shear capacity, Vc = 2·sqrt(f'c)·b·d (lb)
    pub vc_lb: f64,

    /// phi·Vc (lb), echoed for reporting
    pub phi_vc_lb: f64,

    /// Minimum transverse intensity, max(50·b/fy, 0.75·sqrt(f'c)·b/fy)
    pub av_over_s_min: f64,

    /// Governing branch
    pub requirement: ShearRequirement,

    /// Steel shear demand, Vs = (Vu - phi·Vc)/phi (lb), `Computed` branch only
    pub vs_lb: Option<f64>,

    /// Required transverse intensity, Av/s (in²/in)
    pub av_over_s: Option<f64>,

    /// Findings, in the order raised
    pub verdicts: Vec<Verdict>,
}

impl ShearOutcome {
    /// True when no Error verdict was raised
    pub fn is_adequate(&self) -> bool {
        verdict::is_adequate(&self.verdicts)
    }
}

/// Shared shear-design branch, in lb-inch units.
///
/// Callers supply phi explicitly because the combined shear+torsion mode
/// shares one reduction factor across both actions.
pub fn design_shear(
    width_in: f64,
    eff_depth_in: f64,
    fc_psi: f64,
    fy_psi: f64,
    vu_lb: f64,
    phi: f64,
) -> ShearOutcome {
    let root_fc = fc_psi.sqrt();

    let vc = 2.0 * root_fc * width_in * eff_depth_in;
    let av_over_s_min = (50.0 * width_in / fy_psi).max(0.75 * root_fc * width_in / fy_psi);

    let mut outcome = ShearOutcome {
        vc_lb: vc,
        phi_vc_lb: phi * vc,
        av_over_s_min,
        requirement: ShearRequirement::NotRequired,
        vs_lb: None,
        av_over_s: None,
        verdicts: Vec::new(),
    };

    if vu_lb < phi * vc / 2.0 {
        outcome.verdicts.push(Verdict::info(
            "Vu < (phi * Vc) / 2, No shear reinforcement is required.",
        ));
    } else if vu_lb <= phi * vc {
        // Vs = 0, minimum reinforcement governs
        outcome.requirement = ShearRequirement::Minimum;
        outcome.av_over_s = Some(av_over_s_min);
    } else {
        outcome.requirement = ShearRequirement::Computed;
        let vs = (vu_lb - phi * vc) / phi;
        outcome.vs_lb = Some(vs);

        if vs > 4.0 * vc {
            outcome
                .verdicts
                .push(Verdict::error("Vs > 4 * Vc, Section need to be revised"));
        } else {
            let av_over_s = (vs / (fy_psi * eff_depth_in)).max(av_over_s_min);
            outcome.av_over_s = Some(av_over_s);
        }
    }

    outcome
}

/// Input parameters for shear design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-3",
///   "width_in": 12.0,
///   "eff_depth_in": 17.5,
///   "material": { "fc_psi": 4000.0, "fy_psi": 60000.0 },
///   "shear_kip": 15.0,
///   "phi": 0.75
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearDesignInput {
    /// User label for this section
    pub label: String,

    /// Width of section, b (inches)
    pub width_in: f64,

    /// Effective depth of section, d (inches)
    pub eff_depth_in: f64,

    /// Concrete and steel strengths
    pub material: MaterialProperties,

    /// Factored shear force, Vu (kip)
    pub shear_kip: f64,

    /// Strength reduction factor for shear
    pub phi: f64,
}

impl ShearDesignInput {
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
        if self.shear_kip < 0.0 {
            return Err(CalcError::invalid_input(
                "shear_kip",
                self.shear_kip.to_string(),
                "Shear force cannot be negative",
            ));
        }
        if self.phi <= 0.0 || self.phi > 1.0 {
            return Err(CalcError::invalid_input(
                "phi",
                self.phi.to_string(),
                "Strength reduction factor must be in (0, 1]",
            ));
        }
        self.material.validate()
    }
}

/// Results from shear design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShearDesignResult {
    /// Factored shear converted to lb, echoed for reporting
    pub vu_lb: f64,

    /// The shared shear outcome
    pub shear: ShearOutcome,
}

impl ShearDesignResult {
    /// True when no Error verdict was raised
    pub fn is_adequate(&self) -> bool {
        self.shear.is_adequate()
    }
}

/// Design transverse shear reinforcement for a factored shear force.
///
/// This is a pure function suitable for LLM invocation.
pub fn calculate(input: &ShearDesignInput) -> CalcResult<ShearDesignResult> {
    input.validate()?;

    let vu: Pounds = Kips(input.shear_kip).into();

    let shear = design_shear(
        input.width_in,
        input.eff_depth_in,
        input.material.fc_psi,
        input.material.fy_psi,
        vu.0,
        input.phi,
    );

    Ok(ShearDesignResult { vu_lb: vu.0, shear })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Severity;

    fn test_input(shear_kip: f64) -> ShearDesignInput {
        ShearDesignInput {
            label: "Test".to_string(),
            width_in: 12.0,
            eff_depth_in: 17.5,
            material: MaterialProperties::new(4000.0, 60000.0),
            shear_kip,
            phi: 0.75,
        }
    }

    #[test]
    fn test_low_shear_no_reinforcement() {
        // Vc = 2·sqrt(4000)·12·17.5 = 26,564 lb; phi·Vc/2 = 9,961 lb.
        // Vu = 15,000 lb is above phi·Vc/2 (9,961) but below phi·Vc (19,923):
        // the minimum-reinforcement branch governs.
        let result = calculate(&test_input(15.0)).unwrap();

        assert!((result.shear.vc_lb - 26_563.5).abs() < 1.0);
        assert!((result.shear.phi_vc_lb - 19_922.6).abs() < 1.0);
        assert_eq!(result.shear.requirement, ShearRequirement::Minimum);
        assert_eq!(result.shear.av_over_s, Some(result.shear.av_over_s_min));
        assert!(result.shear.vs_lb.is_none());
        assert!(result.is_adequate());
    }

    #[test]
    fn test_very_low_shear() {
        // Vu = 5 kip < phi·Vc/2: Info verdict, nothing required
        let result = calculate(&test_input(5.0)).unwrap();

        assert_eq!(result.shear.requirement, ShearRequirement::NotRequired);
        assert!(result.shear.av_over_s.is_none());
        assert_eq!(result.shear.verdicts.len(), 1);
        assert_eq!(result.shear.verdicts[0].severity, Severity::Info);
    }

    #[test]
    fn test_boundary_at_half_phi_vc() {
        // At Vu = phi·Vc/2 exactly, the minimum branch is taken (inclusive)
        let vc = 2.0 * 4000.0_f64.sqrt() * 12.0 * 17.5;
        let outcome = design_shear(12.0, 17.5, 4000.0, 60000.0, 0.75 * vc / 2.0, 0.75);

        assert_eq!(outcome.requirement, ShearRequirement::Minimum);
        assert_eq!(outcome.av_over_s, Some(outcome.av_over_s_min));
    }

    #[test]
    fn test_vs_continuous_above_phi_vc() {
        // Just above phi·Vc, Vs starts from zero and the minimum still
        // governs the provided intensity.
        let vc = 2.0 * 4000.0_f64.sqrt() * 12.0 * 17.5;
        let outcome = design_shear(12.0, 17.5, 4000.0, 60000.0, 0.75 * vc + 1.0, 0.75);

        assert_eq!(outcome.requirement, ShearRequirement::Computed);
        let vs = outcome.vs_lb.unwrap();
        assert!(vs > 0.0 && vs < 2.0);
        assert_eq!(outcome.av_over_s, Some(outcome.av_over_s_min));
    }

    #[test]
    fn test_high_shear_computed_reinforcement() {
        // Vu = 60 kip: Vs = (60,000 - 19,923)/0.75 = 53,437 lb
        let result = calculate(&test_input(60.0)).unwrap();

        assert_eq!(result.shear.requirement, ShearRequirement::Computed);
        let vs = result.shear.vs_lb.unwrap();
        assert!((vs - 53_436.6).abs() < 1.0);

        // Av/s = Vs/(fy·d) = 53,437/(60000·17.5) = 0.0509 in²/in
        let av_over_s = result.shear.av_over_s.unwrap();
        assert!((av_over_s - 0.05089).abs() < 1e-4);
        assert!(av_over_s > result.shear.av_over_s_min);
        assert!(result.is_adequate());
    }

    #[test]
    fn test_excessive_shear_aborts() {
        // Vs > 4·Vc = 106,254 lb requires Vu > phi·(Vs + Vc) ≈ 99.6 kip
        let result = calculate(&test_input(120.0)).unwrap();

        assert_eq!(result.shear.requirement, ShearRequirement::Computed);
        assert!(!result.is_adequate());
        assert_eq!(result.shear.verdicts[0].severity, Severity::Error);
        assert!(result.shear.av_over_s.is_none());
    }

    #[test]
    fn test_min_intensity_governed_by_sqrt_term() {
        // 0.75·sqrt(fc) > 50 for fc > 4445 psi
        let outcome = design_shear(12.0, 17.5, 5000.0, 60000.0, 0.0, 0.75);
        let expected = 0.75 * 5000.0_f64.sqrt() * 12.0 / 60000.0;
        assert_eq!(outcome.av_over_s_min, expected);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = test_input(15.0);
        input.phi = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input(15.0);
        input.width_in = -12.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = calculate(&test_input(60.0)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("av_over_s"));
        let roundtrip: ShearDesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.shear.vs_lb, roundtrip.shear.vs_lb);
    }
}
