//! # Beam Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`beam`] - Peak deflection and bending moment for one beam/load case

pub mod beam;

pub use beam::{calculate, BeamInput, BeamResult};
