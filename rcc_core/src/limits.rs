//! # Reinforcement Ratio Limits
//!
//! Code limits on the flexural reinforcement ratio rho = As/(b·d), shared by
//! the analysis and design calculations so the two modes can never drift
//! apart.
//!
//! ```text
//! rho_min      = max(3·sqrt(f'c)/fy, 200/fy)
//! rho_balanced = 0.85·beta1·(f'c/fy)·(87000/(87000+fy))
//! rho_max      = ((0.003 + fy/Es)/0.008)·rho_balanced
//! ```

use serde::{Deserialize, Serialize};

use crate::coefficients::beta1;
use crate::materials::STEEL_MODULUS_PSI;

/// Code limits on the flexural reinforcement ratio for a given material pair.
///
/// Under typical material strengths (fy below ~145 ksi) the ordering is
/// `rho_min < rho_max < rho_balanced`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementLimits {
    /// Stress-block factor used for the balanced ratio
    pub beta1: f64,
    /// Minimum reinforcement ratio
    pub rho_min: f64,
    /// Balanced-failure reinforcement ratio
    pub rho_balanced: f64,
    /// Maximum permitted reinforcement ratio
    pub rho_max: f64,
}

impl ReinforcementLimits {
    /// Compute all three limits from the material strengths (psi).
    pub fn compute(fc_psi: f64, fy_psi: f64) -> Self {
        let beta1 = beta1(fc_psi);

        let rho_min = (3.0 * fc_psi.sqrt() / fy_psi).max(200.0 / fy_psi);

        let rho_balanced = 0.85 * beta1 * (fc_psi / fy_psi) * (87000.0 / (87000.0 + fy_psi));

        let rho_max = ((0.003 + fy_psi / STEEL_MODULUS_PSI) / 0.008) * rho_balanced;

        ReinforcementLimits {
            beta1,
            rho_min,
            rho_balanced,
            rho_max,
        }
    }
}
