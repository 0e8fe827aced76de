//! # Section Calculations
//!
//! This module contains all RCC section calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Code-limit findings are returned as [`Verdict`]s inside the result, in
//! the order they were raised; an Error verdict means the downstream
//! optional fields of that result are `None`.
//!
//! ## Available Calculations
//!
//! - [`flexure_analysis`] - Moment capacity of a singly reinforced section
//! - [`flexure_design`] - Required reinforcement for a factored moment
//! - [`shear_design`] - Transverse reinforcement for a factored shear
//! - [`torsion_design`] - Combined shear + torsion design
//! - [`cracking_torsion`] - Plain-concrete cracking torsion lookup
//! - [`stirrup_spacing`] - Closed-hoop spacing from required intensities
//!
//! [`Verdict`]: crate::verdict::Verdict

pub mod cracking_torsion;
pub mod flexure_analysis;
pub mod flexure_design;
pub mod shear_design;
pub mod stirrup_spacing;
pub mod torsion_design;

// Re-export commonly used types
pub use cracking_torsion::{CrackingTorsionInput, CrackingTorsionResult};
pub use flexure_analysis::{FlexureAnalysisInput, FlexureAnalysisResult};
pub use flexure_design::{FlexureDesignInput, FlexureDesignResult};
pub use shear_design::{ShearDesignInput, ShearDesignResult, ShearOutcome, ShearRequirement};
pub use stirrup_spacing::{StirrupSpacingInput, StirrupSpacingResult};
pub use torsion_design::{TorsionDesignInput, TorsionDesignResult};
