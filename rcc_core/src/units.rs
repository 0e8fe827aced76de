//! # Unit Types
//!
//! Type-safe wrappers for the lb-inch unit system used by US strength-design
//! provisions. These provide compile-time safety against unit confusion while
//! remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Every internal formula runs in a single consistent system (lb, inch, psi)
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Kip-based units exist only at the CLI boundary: demand forces arrive in
//! kip / kip-ft / kip-inch and are converted to lb / lb-inch before any
//! formula sees them.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::units::{Kips, Pounds, KipFt, InLb};
//!
//! let shear = Kips(15.0);
//! let shear_lb: Pounds = shear.into();
//! assert_eq!(shear_lb.0, 15000.0);
//!
//! let moment = KipFt(100.0);
//! let moment_inlb: InLb = moment.into();
//! assert_eq!(moment_inlb.0, 1_200_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

impl From<Pounds> for Kips {
    fn from(lb: Pounds) -> Self {
        Kips(lb.0 / 1000.0)
    }
}

impl From<Kips> for Pounds {
    fn from(k: Kips) -> Self {
        Pounds(k.0 * 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in inch-pounds (the internal moment unit)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

/// Moment in kip-feet (flexural demand at the CLI boundary)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipFt(pub f64);

/// Moment in kip-inches (torsional demand at the CLI boundary)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipIn(pub f64);

impl From<KipFt> for InLb {
    fn from(kipft: KipFt) -> Self {
        InLb(kipft.0 * 12000.0)
    }
}

impl From<InLb> for KipFt {
    fn from(inlb: InLb) -> Self {
        KipFt(inlb.0 / 12000.0)
    }
}

impl From<KipIn> for InLb {
    fn from(kipin: KipIn) -> Self {
        InLb(kipin.0 * 1000.0)
    }
}

impl From<InLb> for KipIn {
    fn from(inlb: InLb) -> Self {
        KipIn(inlb.0 / 1000.0)
    }
}

// ============================================================================
// Area and Reinforcement-Intensity Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Transverse-reinforcement intensity in square inches per inch of member
/// length (the Av/s and At/s quantities of shear and torsion design)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqInPerIn(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kips);
impl_arithmetic!(Psi);
impl_arithmetic!(InLb);
impl_arithmetic!(KipFt);
impl_arithmetic!(KipIn);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqInPerIn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kips_to_pounds() {
        let k = Kips(1.5);
        let lb: Pounds = k.into();
        assert_eq!(lb.0, 1500.0);
    }

    #[test]
    fn test_kipft_to_inlb() {
        let m = KipFt(100.0);
        let inlb: InLb = m.into();
        assert_eq!(inlb.0, 1_200_000.0);

        let back: KipFt = inlb.into();
        assert_eq!(back.0, 100.0);
    }

    #[test]
    fn test_kipin_to_inlb() {
        let t = KipIn(160.0);
        let inlb: InLb = t.into();
        assert_eq!(inlb.0, 160_000.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Inches(10.0);
        let b = Inches(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let d = Inches(17.5);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "17.5");

        let roundtrip: Inches = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
