//! # Peak Bending Moment Formulas
//!
//! | Beam             | Load  | M_max   |
//! |------------------|-------|---------|
//! | Simply supported | Point | P·L/4   |
//! | Simply supported | UDL   | w·L²/8  |
//! | Cantilever       | Point | P·L     |
//! | Cantilever       | UDL   | w·L²/2  |

use tracing::debug;

use crate::beam::{BeamType, LoadSpec, LoadType};
use crate::errors::{CalcError, CalcResult};

/// M_max = PL/4 at midspan
#[inline]
pub fn simply_supported_point(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// M_max = wL²/8 at midspan
#[inline]
pub fn simply_supported_uniform(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// M_max = PL at the fixed support
#[inline]
pub fn cantilever_point(p: f64, l: f64) -> f64 {
    p * l
}

/// M_max = wL²/2 at the fixed support
#[inline]
pub fn cantilever_uniform(w: f64, l: f64) -> f64 {
    w * l * l / 2.0
}

/// Peak bending moment in N·m.
///
/// Same dispatch and error policy as
/// [`max_deflection`](crate::equations::deflection::max_deflection).
pub fn max_moment(beam_type: BeamType, load_type: LoadType, span_m: f64, load: &LoadSpec) -> CalcResult<f64> {
    let l = span_m;

    let moment = match (beam_type, load_type, *load) {
        (BeamType::SimplySupported, LoadType::PointLoad, LoadSpec::PointLoad { magnitude_n }) => {
            simply_supported_point(magnitude_n, l)
        }
        (
            BeamType::SimplySupported,
            LoadType::UniformlyDistributed,
            LoadSpec::UniformlyDistributed { intensity_n_per_m },
        ) => simply_supported_uniform(intensity_n_per_m, l),
        (BeamType::Cantilever, LoadType::PointLoad, LoadSpec::PointLoad { magnitude_n }) => {
            cantilever_point(magnitude_n, l)
        }
        (
            BeamType::Cantilever,
            LoadType::UniformlyDistributed,
            LoadSpec::UniformlyDistributed { intensity_n_per_m },
        ) => cantilever_uniform(intensity_n_per_m, l),
        (beam_type, load_type, _) => {
            return Err(CalcError::invalid_combination(
                beam_type.key(),
                format!("{} (given {})", load_type, load.load_type()),
            ))
        }
    };

    debug!(%beam_type, %load_type, moment_nm = moment, "peak bending moment");
    Ok(moment)
}

/// Display form of the bending moment formula for a case
pub fn formula_text(beam_type: BeamType, load_type: LoadType) -> &'static str {
    match (beam_type, load_type) {
        (BeamType::SimplySupported, LoadType::PointLoad) => "M = P·L / 4",
        (BeamType::SimplySupported, LoadType::UniformlyDistributed) => "M = w·L² / 8",
        (BeamType::Cantilever, LoadType::PointLoad) => "M = P·L",
        (BeamType::Cantilever, LoadType::UniformlyDistributed) => "M = w·L² / 2",
    }
}
