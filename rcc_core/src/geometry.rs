//! # Section Geometry
//!
//! Derived geometry for rectangular beam sections: effective depth from the
//! overall depth and detailing allowances, and the core geometry used by
//! torsion design.
//!
//! Detailing assumptions (cover, stirrup bar, main bar) live in an explicit
//! [`SectionAssumptions`] record rather than scattered constants, so a
//! calculation can substitute alternate assumptions without touching any
//! formula.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::geometry::{SectionAssumptions, TorsionGeometry};
//!
//! let assume = SectionAssumptions::default(); // 1.5" cover, #4 stirrup, #8 main
//! let d = assume.effective_depth(24.0);
//! assert_eq!(d, 21.5);
//!
//! let core = TorsionGeometry::from_section(12.0, 24.0, &assume).unwrap();
//! assert_eq!(core.acp_in2, 288.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::BarSize;

/// Detailing assumptions used to derive effective depth and core geometry.
///
/// ## JSON Example
///
/// ```json
/// { "clear_cover_in": 1.5, "stirrup_bar": "No4", "main_bar": "No8" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionAssumptions {
    /// Clear cover to the stirrup (inches)
    pub clear_cover_in: f64,

    /// Stirrup (transverse) bar size
    pub stirrup_bar: BarSize,

    /// Main (longitudinal) bar size
    pub main_bar: BarSize,
}

impl Default for SectionAssumptions {
    /// 1.5 inch cover, #4 stirrup, #8 main bar
    fn default() -> Self {
        SectionAssumptions {
            clear_cover_in: 1.5,
            stirrup_bar: BarSize::No4,
            main_bar: BarSize::No8,
        }
    }
}

impl SectionAssumptions {
    /// Effective depth from the overall depth:
    /// `d = h - cover - stirrup_dia - main_dia/2`
    pub fn effective_depth(&self, overall_depth_in: f64) -> f64 {
        overall_depth_in
            - self.clear_cover_in
            - self.stirrup_bar.diameter_in()
            - self.main_bar.diameter_in() / 2.0
    }

    /// Allowance from the section face to the stirrup centerline:
    /// `cover + stirrup_dia/2`
    pub fn stirrup_centerline_offset(&self) -> f64 {
        self.clear_cover_in + self.stirrup_bar.diameter_in() / 2.0
    }
}

/// Core geometry for torsion design of a solid rectangular section.
///
/// Outer dimensions are the section itself (x0 = b, y0 = h); reduced
/// dimensions x1, y1 are measured to the stirrup centerline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsionGeometry {
    /// Reduced width to stirrup centerline, x1 (inches)
    pub x1_in: f64,
    /// Reduced depth to stirrup centerline, y1 (inches)
    pub y1_in: f64,
    /// Gross area Acp = b·h (square inches)
    pub acp_in2: f64,
    /// Gross perimeter Pcp = 2(b+h) (inches)
    pub pcp_in: f64,
    /// Area enclosed by the hoop centerline, A0h = x1·y1 (square inches)
    pub a0h_in2: f64,
    /// Effective shear-flow area, A0 = 0.85·A0h (square inches)
    pub a0_in2: f64,
    /// Hoop centerline perimeter, Ph = 2(x1+y1) (inches)
    pub ph_in: f64,
}

impl TorsionGeometry {
    /// Derive the core geometry from the outer section and detailing
    /// assumptions.
    ///
    /// Returns an error when the cover and stirrup allowance consume either
    /// outer dimension (x1 or y1 would be non-positive), since every torsion
    /// formula divides by the core dimensions.
    pub fn from_section(
        width_in: f64,
        depth_in: f64,
        assumptions: &SectionAssumptions,
    ) -> CalcResult<Self> {
        let offset = assumptions.stirrup_centerline_offset();
        let x1 = width_in - 2.0 * offset;
        let y1 = depth_in - 2.0 * offset;

        if x1 <= 0.0 {
            return Err(CalcError::infeasible_geometry(
                "x1_in",
                x1.to_string(),
                "Cover and stirrup allowance exceed the section width",
            ));
        }
        if y1 <= 0.0 {
            return Err(CalcError::infeasible_geometry(
                "y1_in",
                y1.to_string(),
                "Cover and stirrup allowance exceed the section depth",
            ));
        }

        let a0h = x1 * y1;

        Ok(TorsionGeometry {
            x1_in: x1,
            y1_in: y1,
            acp_in2: width_in * depth_in,
            pcp_in: 2.0 * (width_in + depth_in),
            a0h_in2: a0h,
            a0_in2: 0.85 * a0h,
            ph_in: 2.0 * (x1 + y1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_depth_defaults() {
        // d = 24 - 1.5 - 0.5 - 1.0/2 = 21.5
        let assume = SectionAssumptions::default();
        assert_eq!(assume.effective_depth(24.0), 21.5);
    }

    #[test]
    fn test_effective_depth_alternate_bars() {
        let assume = SectionAssumptions {
            clear_cover_in: 2.0,
            stirrup_bar: BarSize::No3,
            main_bar: BarSize::No10,
        };
        // d = 20 - 2.0 - 0.375 - 1.27/2 = 16.99
        assert!((assume.effective_depth(20.0) - 16.99).abs() < 1e-9);
    }

    #[test]
    fn test_torsion_geometry() {
        let assume = SectionAssumptions::default();
        let core = TorsionGeometry::from_section(12.0, 24.0, &assume).unwrap();

        // offset = 1.5 + 0.25 = 1.75; x1 = 12 - 3.5 = 8.5; y1 = 24 - 3.5 = 20.5
        assert_eq!(core.x1_in, 8.5);
        assert_eq!(core.y1_in, 20.5);
        assert_eq!(core.acp_in2, 288.0);
        assert_eq!(core.pcp_in, 72.0);
        assert_eq!(core.a0h_in2, 8.5 * 20.5);
        assert_eq!(core.a0_in2, 0.85 * 8.5 * 20.5);
        assert_eq!(core.ph_in, 58.0);
    }

    #[test]
    fn test_degenerate_core_rejected() {
        let assume = SectionAssumptions::default();
        // Width 3.5 gives x1 = 0 exactly; still degenerate
        let err = TorsionGeometry::from_section(3.5, 24.0, &assume).unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE_GEOMETRY");

        let err = TorsionGeometry::from_section(12.0, 3.0, &assume).unwrap_err();
        assert_eq!(err.error_code(), "INFEASIBLE_GEOMETRY");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let assume = SectionAssumptions::default();
        let json = serde_json::to_string(&assume).unwrap();
        let roundtrip: SectionAssumptions = serde_json::from_str(&json).unwrap();
        assert_eq!(assume, roundtrip);
    }
}
