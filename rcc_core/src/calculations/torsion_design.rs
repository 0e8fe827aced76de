//! # Combined Shear and Torsion Design of a Rectangular Section
//!
//! Runs the shared shear branch, then the torsion provisions: threshold
//! (negligible) torsion, the combined shear+torsion cross-sectional stress
//! limit, and the transverse and longitudinal torsional reinforcement.
//!
//! ## Assumptions
//!
//! The effective depth and hoop geometry are derived from a detailing
//! assumptions record (cover, stirrup bar, main bar) rather than supplied
//! directly; the defaults match common practice (1.5" cover, #4 stirrup,
//! #8 main bar) and are echoed in the result for the report.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use rcc_core::calculations::torsion_design::{TorsionDesignInput, calculate};
//! use rcc_core::geometry::SectionAssumptions;
//! use rcc_core::materials::MaterialProperties;
//!
//! let input = TorsionDesignInput {
//!     label: "B-4".to_string(),
//!     width_in: 12.0,
//!     overall_depth_in: 24.0,
//!     material: MaterialProperties::new(4000.0, 60000.0),
//!     shear_kip: 40.0,
//!     torsion_kipin: 200.0,
//!     phi: 0.75,
//!     assumptions: SectionAssumptions::default(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("At/s = {:.6} in²/in", result.at_over_s.unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::shear_design::{design_shear, ShearOutcome};
use crate::coefficients::cracking_torsion;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{SectionAssumptions, TorsionGeometry};
use crate::materials::MaterialProperties;
use crate::units::{InLb, KipIn, Kips, Pounds};
use crate::verdict::{self, Verdict};

/// Input parameters for combined shear and torsion design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-4",
///   "width_in": 12.0,
///   "overall_depth_in": 24.0,
///   "material": { "fc_psi": 4000.0, "fy_psi": 60000.0 },
///   "shear_kip": 40.0,
///   "torsion_kipin": 200.0,
///   "phi": 0.75,
///   "assumptions": { "clear_cover_in": 1.5, "stirrup_bar": "No4", "main_bar": "No8" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorsionDesignInput {
    /// User label for this section
    pub label: String,

    /// Width of (web of) beam, b (inches)
    pub width_in: f64,

    /// Overall depth of beam, h (inches)
    pub overall_depth_in: f64,

    /// Concrete and steel strengths
    pub material: MaterialProperties,

    /// Factored shear force, Vu (kip)
    pub shear_kip: f64,

    /// Factored torsional moment, Tu (kip-inch)
    pub torsion_kipin: f64,

    /// Strength reduction factor shared by shear and torsion
    pub phi: f64,

    /// Detailing assumptions for effective depth and hoop geometry
    #[serde(default)]
    pub assumptions: SectionAssumptions,
}

impl TorsionDesignInput {
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
        if self.shear_kip < 0.0 {
            return Err(CalcError::invalid_input(
                "shear_kip",
                self.shear_kip.to_string(),
                "Shear force cannot be negative",
            ));
        }
        if self.torsion_kipin < 0.0 {
            return Err(CalcError::invalid_input(
                "torsion_kipin",
                self.torsion_kipin.to_string(),
                "Torsional moment cannot be negative",
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

/// Results from combined shear and torsion design.
///
/// The shear findings live in `shear` (same record as the shear-only mode);
/// `verdicts` holds the torsion findings. `at_over_s` and `al_in2` are
/// present only when torsion is non-negligible and the combined-stress check
/// passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorsionDesignResult {
    /// Detailing assumptions used, echoed for the report
    pub assumptions: SectionAssumptions,

    /// Derived effective depth, d (inches)
    pub eff_depth_in: f64,

    /// Derived hoop/core geometry
    pub geometry: TorsionGeometry,

    /// Factored shear in lb, echoed for reporting
    pub vu_lb: f64,

    /// Factored torsion in lb-inch, echoed for reporting
    pub tu_inlb: f64,

    /// Outcome of the shared shear branch
    pub shear: ShearOutcome,

    /// Cracking torsion, Tcr (lb-inch)
    pub tcr_inlb: f64,

    /// phi·Tcr (lb-inch), echoed for reporting
    pub phi_tcr_inlb: f64,

    /// True when Tu < phi·Tcr/4 and no torsional reinforcement is needed
    pub torsion_negligible: bool,

    /// Left-hand side of the combined shear+torsion stress check (psi)
    pub combined_stress_lhs_psi: Option<f64>,

    /// Right-hand side (limit) of the combined check (psi)
    pub combined_stress_rhs_psi: Option<f64>,

    /// Torsion findings, in the order raised
    pub verdicts: Vec<Verdict>,

    /// Required transverse torsional intensity, At/s (in²/in)
    pub at_over_s: Option<f64>,

    /// Required longitudinal torsional reinforcement, Al (square inches)
    pub al_in2: Option<f64>,
}

impl TorsionDesignResult {
    /// True when neither the shear branch nor the torsion checks raised an
    /// Error verdict
    pub fn is_adequate(&self) -> bool {
        self.shear.is_adequate() && verdict::is_adequate(&self.verdicts)
    }
}

/// Design a rectangular section for combined shear and torsion.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Returns
///
/// * `Ok(TorsionDesignResult)` - geometry, shear outcome, torsion findings
/// * `Err(CalcError)` - structured error if inputs are invalid or the
///   detailing assumptions leave no effective depth or hoop core
pub fn calculate(input: &TorsionDesignInput) -> CalcResult<TorsionDesignResult> {
    input.validate()?;

    let b = input.width_in;
    let h = input.overall_depth_in;
    let fc = input.material.fc_psi;
    let fy = input.material.fy_psi;
    let phi = input.phi;

    let d = input.assumptions.effective_depth(h);
    if d <= 0.0 {
        return Err(CalcError::infeasible_geometry(
            "eff_depth_in",
            d.to_string(),
            "Cover and bar allowances exceed the overall depth",
        ));
    }

    let geometry = TorsionGeometry::from_section(b, h, &input.assumptions)?;

    let vu: Pounds = Kips(input.shear_kip).into();
    let tu: InLb = KipIn(input.torsion_kipin).into();

    let shear = design_shear(b, d, fc, fy, vu.0, phi);

    let tcr = cracking_torsion(b, h, fc);

    let mut result = TorsionDesignResult {
        assumptions: input.assumptions,
        eff_depth_in: d,
        geometry,
        vu_lb: vu.0,
        tu_inlb: tu.0,
        shear,
        tcr_inlb: tcr,
        phi_tcr_inlb: phi * tcr,
        torsion_negligible: false,
        combined_stress_lhs_psi: None,
        combined_stress_rhs_psi: None,
        verdicts: Vec::new(),
        at_over_s: None,
        al_in2: None,
    };

    if tu.0 < phi * tcr / 4.0 {
        result.torsion_negligible = true;
        result
            .verdicts
            .push(Verdict::info("No need for torsion reinforcement."));
        return Ok(result);
    }

    // Combined shear + torsion cross-sectional stress check
    let shear_stress = vu.0 / (b * d);
    let torsion_stress = tu.0 * geometry.ph_in / (1.7 * geometry.a0h_in2 * geometry.a0h_in2);
    let lhs = (shear_stress * shear_stress + torsion_stress * torsion_stress).sqrt();
    let rhs = phi * (result.shear.vc_lb / (b * d) + 8.0 * fc.sqrt());

    result.combined_stress_lhs_psi = Some(lhs);
    result.combined_stress_rhs_psi = Some(rhs);

    if lhs > rhs {
        result.verdicts.push(Verdict::error(
            "Section is inadequate for shear + torsion. Revise Section",
        ));
        return Ok(result);
    }

    // Transverse and longitudinal torsional reinforcement
    let at_over_s = (tu.0 / phi) / (2.0 * geometry.a0_in2 * fy);
    let al_min = (5.0 * fc.sqrt() * geometry.acp_in2 / fy - at_over_s * geometry.ph_in)
        .max(25.0 * b / fy);
    let al = (at_over_s * geometry.ph_in).max(al_min);

    result.at_over_s = Some(at_over_s);
    result.al_in2 = Some(al);

    Ok(result)
}
