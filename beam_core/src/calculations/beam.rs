//! # Beam Calculation
//!
//! Peak deflection and peak bending moment for a simply supported or
//! cantilever beam under a single point load or a full-span uniform load.
//!
//! ## Assumptions
//!
//! - Linear elastic, prismatic beam (constant E and I)
//! - One load per calculation; no superposition
//! - Simply supported point loads act at midspan, cantilever point loads at
//!   the free end
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{BeamSpec, BeamType, LoadSpec, LoadType};
//! use beam_core::calculations::beam::{calculate, BeamInput};
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     beam_type: BeamType::Cantilever,
//!     load_type: LoadType::PointLoad,
//!     beam: BeamSpec::new(2.0, 200e9, 1e-4),
//!     load: LoadSpec::point(1000.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_moment_nm - 2000.0).abs() < 1e-9);
//! println!("Max deflection: {:.6} cm", result.max_deflection_cm());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::beam::{BeamSpec, BeamType, LoadSpec, LoadType};
use crate::equations::{deflection, max_deflection, max_moment, moment, DeflectionProfile};
use crate::errors::CalcResult;
use crate::units::{Centimeters, Meters, NewtonMeters};

/// Input parameters for one beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "beam_type": "simply_supported",
///   "load_type": "uniformly_distributed",
///   "beam": { "span_m": 2.0, "modulus_pa": 200000000000.0, "inertia_m4": 0.0001 },
///   "load": { "kind": "uniformly_distributed", "intensity_n_per_m": 500.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    pub beam_type: BeamType,

    pub load_type: LoadType,

    /// Span and stiffness
    pub beam: BeamSpec,

    /// Load magnitude; its variant must match `load_type`
    pub load: LoadSpec,
}

impl BeamInput {
    /// Validate input parameters: L, E, I, and the load magnitude must all be
    /// finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        self.beam.validate()?;
        self.load.validate()?;
        Ok(())
    }
}

/// Results of a beam calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    pub beam_type: BeamType,
    pub load_type: LoadType,

    /// Peak deflection magnitude (m)
    pub max_deflection_m: f64,

    /// Peak bending moment magnitude (N·m)
    pub max_moment_nm: f64,

    /// Deflection formula used, for display
    pub deflection_formula: String,

    /// Moment formula used, for display
    pub moment_formula: String,
}

impl BeamResult {
    /// Peak deflection in centimeters
    pub fn max_deflection_cm(&self) -> f64 {
        Centimeters::from(Meters(self.max_deflection_m)).value()
    }

    /// Peak bending moment as a unit value
    pub fn max_moment(&self) -> NewtonMeters {
        NewtonMeters(self.max_moment_nm)
    }

    /// Deflection curve for this result over the given span
    pub fn profile(&self, span_m: f64) -> CalcResult<DeflectionProfile> {
        DeflectionProfile::new(self.beam_type, self.load_type, span_m, self.max_deflection_m)
    }
}

/// Run the beam calculation.
///
/// Validates the input, then evaluates the peak deflection and peak moment
/// formulas for the (beam, load) case.
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    input.validate()?;

    let max_deflection_m = max_deflection(input.beam_type, input.load_type, &input.beam, &input.load)?;
    let max_moment_nm = max_moment(input.beam_type, input.load_type, input.beam.span_m, &input.load)?;

    debug!(
        label = %input.label,
        beam_type = %input.beam_type,
        load_type = %input.load_type,
        max_deflection_m,
        max_moment_nm,
        "beam calculated"
    );

    Ok(BeamResult {
        beam_type: input.beam_type,
        load_type: input.load_type,
        max_deflection_m,
        max_moment_nm,
        deflection_formula: deflection::formula_text(input.beam_type, input.load_type).to_string(),
        moment_formula: moment::formula_text(input.beam_type, input.load_type).to_string(),
    })
}
