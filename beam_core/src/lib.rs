//! # beam_core - Beam Deflection and Bending Moment Engine
//!
//! `beam_core` evaluates the classic closed-form formulas for simply
//! supported and cantilever beams under a point load or a uniformly
//! distributed load, and provides the deflection curve shape used for
//! plotting. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Closed cases**: (beam, load) dispatch is an exhaustive `match`
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{calculate, BeamInput, BeamSpec, BeamType, LoadSpec, LoadType};
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     beam_type: BeamType::SimplySupported,
//!     load_type: LoadType::PointLoad,
//!     beam: BeamSpec::new(2.0, 200e9, 1e-4),
//!     load: LoadSpec::point(1000.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_moment_nm - 500.0).abs() < 1e-9);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam and load value types
//! - [`equations`] - Deflection, moment, and profile formulas
//! - [`calculations`] - Validated input → result composition
//! - [`units`] - SI unit wrappers for display conversions
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic output file writes

pub mod beam;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use beam::{BeamSpec, BeamType, LoadSpec, LoadType};
pub use calculations::{calculate, BeamInput, BeamResult};
pub use equations::{DeflectionProfile, DEFAULT_SAMPLE_COUNT};
pub use errors::{CalcError, CalcResult};
pub use file_io::{replace_file, temp_path_for, write_atomic};
