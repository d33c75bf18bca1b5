//! # Beam Equations
//!
//! Closed-form formulas for the four supported cases: simply supported or
//! cantilever, under a point load or a uniformly distributed load.
//!
//! ## Modules
//!
//! - [`deflection`] - Peak deflection δ_max
//! - [`moment`] - Peak bending moment M_max
//! - [`profile`] - Deflection curve shapes for plotting
//!
//! ## Conventions
//!
//! - SI units throughout (m, Pa, m⁴, N, N/m, N·m)
//! - Peak values are magnitudes (always positive for positive inputs)
//! - Simply supported: x measured from the left support
//! - Cantilever: x measured from the fixed end, free end at x = L
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

pub mod deflection;
pub mod moment;
pub mod profile;

pub use deflection::max_deflection;
pub use moment::max_moment;
pub use profile::{DeflectionProfile, ProfileSamples, DEFAULT_SAMPLE_COUNT};
