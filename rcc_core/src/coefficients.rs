//! # Code Coefficients
//!
//! Strength-design code coefficients consumed by the section calculations:
//! the concrete stress-block depth factor beta1, the flexural
//! strength-reduction factor phi interpolated from net tensile strain, and
//! the cracking torsional capacity of a plain rectangular section.
//!
//! ## Overview
//!
//! ```text
//! beta1 = 0.85                          for f'c <= 4000 psi
//!       = 0.85 - 0.05 per 1000 psi      above 4000 psi, floored at 0.65
//!
//! phi   = 0.65                          for eps_t <= 0.002
//!       = 0.90                          for eps_t >= 0.005
//!       = linear interpolation          in between
//!
//! Tcr   = 4 * sqrt(f'c) * Acp^2 / Pcp   (lb-inch)
//! ```
//!
//! All stresses in psi, lengths in inches.

// ============================================================================
// ACI Code Section References
// ============================================================================

/// ACI 318 code section references for the coefficients and checks used by
/// the section calculations. These constants provide traceable references.
pub mod aci_ref {
    /// Equivalent rectangular stress block, beta1
    pub const BETA1: &str = "ACI 318 22.2.2.4.3";
    /// Strength reduction factor, moment (strain interpolation)
    pub const PHI_FLEXURE: &str = "ACI 318 Table 21.2.2";
    /// Threshold (cracking) torsion, solid section
    pub const CRACKING_TORSION: &str = "ACI 318 Table 22.7.5.1";
    /// Minimum flexural reinforcement
    pub const RHO_MIN: &str = "ACI 318 9.6.1.2";
    /// Concrete shear strength, non-prestressed
    pub const VC: &str = "ACI 318 22.5.5.1";
    /// Minimum shear reinforcement
    pub const AV_MIN: &str = "ACI 318 10.6.2.2";
    /// Combined shear and torsion cross-sectional limit
    pub const SHEAR_TORSION_LIMIT: &str = "ACI 318 22.7.7.1";
    /// Transverse torsional reinforcement
    pub const AT_REQUIRED: &str = "ACI 318 22.7.6.1";
    /// Minimum longitudinal torsional reinforcement
    pub const AL_MIN: &str = "ACI 318 9.6.4.3";
}

/// Strain at which flexural behavior is compression-controlled (phi = 0.65)
pub const COMPRESSION_CONTROLLED_STRAIN: f64 = 0.002;

/// Strain at which flexural behavior is tension-controlled (phi = 0.90)
pub const TENSION_CONTROLLED_STRAIN: f64 = 0.005;

/// Concrete stress-block depth factor beta1.
///
/// 0.85 for f'c up to 4000 psi, reduced by 0.05 for every 1000 psi above
/// 4000, never below 0.65.
///
/// # Example
///
/// ```rust
/// use rcc_core::coefficients::beta1;
///
/// assert_eq!(beta1(3000.0), 0.85);
/// assert!((beta1(5000.0) - 0.80).abs() < 1e-12);
/// assert_eq!(beta1(12000.0), 0.65);
/// ```
pub fn beta1(fc_psi: f64) -> f64 {
    if fc_psi <= 4000.0 {
        0.85
    } else {
        (0.85 - 0.05 * (fc_psi - 4000.0) / 1000.0).max(0.65)
    }
}

/// Flexural strength-reduction factor phi from net tensile strain.
///
/// 0.65 when compression-controlled (eps_t <= 0.002), 0.90 when
/// tension-controlled (eps_t >= 0.005), linearly interpolated in the
/// transition zone.
pub fn phi_flexure(epsilon_t: f64) -> f64 {
    if epsilon_t <= COMPRESSION_CONTROLLED_STRAIN {
        0.65
    } else if epsilon_t >= TENSION_CONTROLLED_STRAIN {
        0.90
    } else {
        0.65 + 0.25 * (epsilon_t - COMPRESSION_CONTROLLED_STRAIN)
            / (TENSION_CONTROLLED_STRAIN - COMPRESSION_CONTROLLED_STRAIN)
    }
}

/// Cracking torsional capacity of a solid rectangular plain-concrete section.
///
/// `Tcr = 4 * sqrt(f'c) * Acp^2 / Pcp` with `Acp = b*h` and `Pcp = 2(b+h)`.
/// Result in lb-inch for b, h in inches and f'c in psi.
pub fn cracking_torsion(width_in: f64, depth_in: f64, fc_psi: f64) -> f64 {
    let acp = width_in * depth_in;
    let pcp = 2.0 * (width_in + depth_in);
    4.0 * fc_psi.sqrt() * acp * acp / pcp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta1_low_strength() {
        // Constant 0.85 at and below 4000 psi
        assert_eq!(beta1(2500.0), 0.85);
        assert_eq!(beta1(3000.0), 0.85);
        assert_eq!(beta1(4000.0), 0.85);
    }

    #[test]
    fn test_beta1_linear_reduction() {
        assert!((beta1(5000.0) - 0.80).abs() < 1e-12);
        assert!((beta1(6000.0) - 0.75).abs() < 1e-12);
        assert!((beta1(4500.0) - 0.825).abs() < 1e-12);
    }

    #[test]
    fn test_beta1_floor() {
        // 0.65 floor reached at 8000 psi and held for any higher strength
        assert!((beta1(8000.0) - 0.65).abs() < 1e-12);
        assert_eq!(beta1(12000.0), 0.65);
        assert_eq!(beta1(20000.0), 0.65);
    }

    #[test]
    fn test_phi_flexure_endpoints() {
        assert_eq!(phi_flexure(0.001), 0.65);
        assert_eq!(phi_flexure(0.002), 0.65);
        assert_eq!(phi_flexure(0.005), 0.90);
        assert_eq!(phi_flexure(0.008), 0.90);
    }

    #[test]
    fn test_phi_flexure_interpolation() {
        // Midpoint of the transition zone
        let phi = phi_flexure(0.0035);
        assert!((phi - 0.775).abs() < 1e-12);

        // Monotone increasing across the zone
        assert!(phi_flexure(0.003) < phi_flexure(0.004));
    }

    #[test]
    fn test_cracking_torsion() {
        // b=12, h=24: Acp = 288, Pcp = 72
        // Tcr = 4 * sqrt(4000) * 288^2 / 72 = 4 * 63.246 * 1152 = 291,434 lb-in
        let tcr = cracking_torsion(12.0, 24.0, 4000.0);
        assert!((tcr - 291_433.0).abs() < 100.0);
    }

    #[test]
    fn test_cracking_torsion_symmetric() {
        // Swapping b and h leaves Acp and Pcp unchanged
        let a = cracking_torsion(12.0, 24.0, 4000.0);
        let b = cracking_torsion(24.0, 12.0, 4000.0);
        assert_eq!(a, b);
    }
}
