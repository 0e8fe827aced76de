//! # Materials
//!
//! Concrete and reinforcing-steel material properties, plus the standard US
//! reinforcing bar table.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::materials::{MaterialProperties, BarSize};
//!
//! let mat = MaterialProperties::new(4000.0, 60000.0);
//! assert!(mat.validate().is_ok());
//!
//! let bar = BarSize::No8;
//! assert_eq!(bar.diameter_in(), 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Modulus of elasticity of reinforcing steel (psi), fixed by code
pub const STEEL_MODULUS_PSI: f64 = 29.0e6;

/// Material strengths for a reinforced-concrete section.
///
/// ## JSON Example
///
/// ```json
/// { "fc_psi": 4000.0, "fy_psi": 60000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Specified (cylinder) compressive strength of concrete, f'c (psi)
    pub fc_psi: f64,

    /// Yield strength of reinforcing steel, fy (psi)
    pub fy_psi: f64,
}

impl MaterialProperties {
    /// Create material properties from f'c and fy in psi
    pub fn new(fc_psi: f64, fy_psi: f64) -> Self {
        MaterialProperties { fc_psi, fy_psi }
    }

    /// Validate that both strengths are positive.
    pub fn validate(&self) -> CalcResult<()> {
        if self.fc_psi <= 0.0 {
            return Err(CalcError::invalid_input(
                "fc_psi",
                self.fc_psi.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if self.fy_psi <= 0.0 {
            return Err(CalcError::invalid_input(
                "fy_psi",
                self.fy_psi.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for MaterialProperties {
    /// 4000 psi concrete with Grade 60 reinforcement
    fn default() -> Self {
        MaterialProperties::new(4000.0, 60000.0)
    }
}

/// Standard US reinforcing bar size designation.
///
/// The number is the nominal diameter in eighths of an inch (#8 = 1.0 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BarSize {
    /// #3 (0.375" dia, 0.11 in²)
    No3,
    /// #4 (0.5" dia, 0.20 in²)
    #[default]
    No4,
    /// #5 (0.625" dia, 0.31 in²)
    No5,
    /// #6 (0.75" dia, 0.44 in²)
    No6,
    /// #7 (0.875" dia, 0.60 in²)
    No7,
    /// #8 (1.0" dia, 0.79 in²)
    No8,
    /// #9 (1.128" dia, 1.00 in²)
    No9,
    /// #10 (1.27" dia, 1.27 in²)
    No10,
    /// #11 (1.41" dia, 1.56 in²)
    No11,
}

impl BarSize {
    /// All bar sizes for UI selection
    pub const ALL: [BarSize; 9] = [
        BarSize::No3,
        BarSize::No4,
        BarSize::No5,
        BarSize::No6,
        BarSize::No7,
        BarSize::No8,
        BarSize::No9,
        BarSize::No10,
        BarSize::No11,
    ];

    /// Nominal bar diameter (inches)
    pub fn diameter_in(&self) -> f64 {
        match self {
            BarSize::No3 => 0.375,
            BarSize::No4 => 0.5,
            BarSize::No5 => 0.625,
            BarSize::No6 => 0.75,
            BarSize::No7 => 0.875,
            BarSize::No8 => 1.0,
            BarSize::No9 => 1.128,
            BarSize::No10 => 1.27,
            BarSize::No11 => 1.41,
        }
    }

    /// Nominal cross-sectional area of one bar (square inches)
    pub fn area_in2(&self) -> f64 {
        match self {
            BarSize::No3 => 0.11,
            BarSize::No4 => 0.20,
            BarSize::No5 => 0.31,
            BarSize::No6 => 0.44,
            BarSize::No7 => 0.60,
            BarSize::No8 => 0.79,
            BarSize::No9 => 1.00,
            BarSize::No10 => 1.27,
            BarSize::No11 => 1.56,
        }
    }

    /// Display designation (e.g., "#4")
    pub fn designation(&self) -> &'static str {
        match self {
            BarSize::No3 => "#3",
            BarSize::No4 => "#4",
            BarSize::No5 => "#5",
            BarSize::No6 => "#6",
            BarSize::No7 => "#7",
            BarSize::No8 => "#8",
            BarSize::No9 => "#9",
            BarSize::No10 => "#10",
            BarSize::No11 => "#11",
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let mat = MaterialProperties::default();
        assert_eq!(mat.fc_psi, 4000.0);
        assert_eq!(mat.fy_psi, 60000.0);
        assert!(mat.validate().is_ok());
    }

    #[test]
    fn test_invalid_material() {
        assert!(MaterialProperties::new(0.0, 60000.0).validate().is_err());
        assert!(MaterialProperties::new(4000.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_bar_dimensions() {
        assert_eq!(BarSize::No4.diameter_in(), 0.5);
        assert_eq!(BarSize::No8.diameter_in(), 1.0);
        assert_eq!(BarSize::No3.area_in2(), 0.11);
        assert_eq!(BarSize::No9.area_in2(), 1.00);
    }

    #[test]
    fn test_bar_display() {
        assert_eq!(BarSize::No4.to_string(), "#4");
        assert_eq!(BarSize::No11.to_string(), "#11");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mat = MaterialProperties::new(5000.0, 75000.0);
        let json = serde_json::to_string(&mat).unwrap();
        let roundtrip: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, roundtrip);
    }
}
