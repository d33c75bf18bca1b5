//! # Peak Deflection Formulas
//!
//! Maximum deflection magnitude for the four supported (beam, load) cases.
//!
//! | Beam             | Load  | δ_max               |
//! |------------------|-------|---------------------|
//! | Simply supported | Point | P·L³ / (48·E·I)     |
//! | Simply supported | UDL   | 5·w·L⁴ / (384·E·I)  |
//! | Cantilever       | Point | P·L³ / (3·E·I)      |
//! | Cantilever       | UDL   | w·L⁴ / (8·E·I)      |
//!
//! Simply-supported point loads are taken at midspan; cantilever point loads
//! at the free end.

use tracing::debug;

use crate::beam::{BeamSpec, BeamType, LoadSpec, LoadType};
use crate::errors::{CalcError, CalcResult};

/// δ_max = PL³ / (48EI), point load at midspan
#[inline]
pub fn simply_supported_point(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}

/// δ_max = 5wL⁴ / (384EI), at midspan
#[inline]
pub fn simply_supported_uniform(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

/// δ_max = PL³ / (3EI), point load at the free end
#[inline]
pub fn cantilever_point(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (3.0 * e * i)
}

/// δ_max = wL⁴ / (8EI), at the free end
#[inline]
pub fn cantilever_uniform(w: f64, l: f64, e: f64, i: f64) -> f64 {
    w * l.powi(4) / (8.0 * e * i)
}

/// Peak deflection magnitude in meters.
///
/// Fails with [`CalcError::InvalidCombination`] when `load` is not a
/// magnitude of `load_type`. Inputs are assumed validated; see
/// [`crate::calculations::calculate`] for the checked entry point.
///
/// ```
/// use beam_core::beam::{BeamSpec, BeamType, LoadSpec, LoadType};
/// use beam_core::equations::deflection::max_deflection;
///
/// let beam = BeamSpec::new(2.0, 200e9, 1e-4);
/// let delta = max_deflection(
///     BeamType::SimplySupported,
///     LoadType::PointLoad,
///     &beam,
///     &LoadSpec::point(1000.0),
/// ).unwrap();
/// assert!((delta - 8.333333e-6).abs() < 1e-11);
/// ```
pub fn max_deflection(
    beam_type: BeamType,
    load_type: LoadType,
    beam: &BeamSpec,
    load: &LoadSpec,
) -> CalcResult<f64> {
    let (l, e, i) = (beam.span_m, beam.modulus_pa, beam.inertia_m4);

    let delta = match (beam_type, load_type, *load) {
        (BeamType::SimplySupported, LoadType::PointLoad, LoadSpec::PointLoad { magnitude_n }) => {
            simply_supported_point(magnitude_n, l, e, i)
        }
        (
            BeamType::SimplySupported,
            LoadType::UniformlyDistributed,
            LoadSpec::UniformlyDistributed { intensity_n_per_m },
        ) => simply_supported_uniform(intensity_n_per_m, l, e, i),
        (BeamType::Cantilever, LoadType::PointLoad, LoadSpec::PointLoad { magnitude_n }) => {
            cantilever_point(magnitude_n, l, e, i)
        }
        (
            BeamType::Cantilever,
            LoadType::UniformlyDistributed,
            LoadSpec::UniformlyDistributed { intensity_n_per_m },
        ) => cantilever_uniform(intensity_n_per_m, l, e, i),
        (beam_type, load_type, _) => {
            return Err(CalcError::invalid_combination(
                beam_type.key(),
                format!("{} (given {})", load_type, load.load_type()),
            ))
        }
    };

    debug!(%beam_type, %load_type, delta_m = delta, "peak deflection");
    Ok(delta)
}

/// Display form of the deflection formula for a case
pub fn formula_text(beam_type: BeamType, load_type: LoadType) -> &'static str {
    match (beam_type, load_type) {
        (BeamType::SimplySupported, LoadType::PointLoad) => "δ = P·L³ / (48·E·I)",
        (BeamType::SimplySupported, LoadType::UniformlyDistributed) => "δ = 5·w·L⁴ / (384·E·I)",
        (BeamType::Cantilever, LoadType::PointLoad) => "δ = P·L³ / (3·E·I)",
        (BeamType::Cantilever, LoadType::UniformlyDistributed) => "δ = w·L⁴ / (8·E·I)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() / b.abs().max(f64::MIN_POSITIVE) < 1e-6
    }

    fn steel_beam(span_m: f64) -> BeamSpec {
        BeamSpec::new(span_m, 200e9, 1e-4)
    }

    #[test]
    fn test_simply_supported_point_load() {
        // 1000 N at midspan of a 2 m steel beam
        let d = max_deflection(
            BeamType::SimplySupported,
            LoadType::PointLoad,
            &steel_beam(2.0),
            &LoadSpec::point(1000.0),
        )
        .unwrap();
        assert!(approx_eq(d, 8.333333e-6), "δ = {}", d);
    }

    #[test]
    fn test_cantilever_point_load() {
        let d = max_deflection(
            BeamType::Cantilever,
            LoadType::PointLoad,
            &steel_beam(2.0),
            &LoadSpec::point(1000.0),
        )
        .unwrap();
        assert!(approx_eq(d, 1.333333e-4), "δ = {}", d);
    }

    #[test]
    fn test_uniform_loads() {
        // 5 * 500 * 16 / (384 * 2e7) = 5.208333e-6
        let ss = max_deflection(
            BeamType::SimplySupported,
            LoadType::UniformlyDistributed,
            &steel_beam(2.0),
            &LoadSpec::uniform(500.0),
        )
        .unwrap();
        assert!(approx_eq(ss, 5.208333e-6), "δ = {}", ss);

        // 500 * 16 / (8 * 2e7) = 5.0e-5
        let cant = max_deflection(
            BeamType::Cantilever,
            LoadType::UniformlyDistributed,
            &steel_beam(2.0),
            &LoadSpec::uniform(500.0),
        )
        .unwrap();
        assert!(approx_eq(cant, 5.0e-5), "δ = {}", cant);
    }

    #[test]
    fn test_span_scaling() {
        // Point loads scale with L³, uniform loads with L⁴
        for beam_type in BeamType::ALL {
            let point = |l| max_deflection(beam_type, LoadType::PointLoad, &steel_beam(l), &LoadSpec::point(1000.0)).unwrap();
            assert!(approx_eq(point(4.0) / point(2.0), 8.0));

            let udl = |l| {
                max_deflection(beam_type, LoadType::UniformlyDistributed, &steel_beam(l), &LoadSpec::uniform(500.0))
                    .unwrap()
            };
            assert!(approx_eq(udl(4.0) / udl(2.0), 16.0));
        }
    }

    #[test]
    fn test_deterministic_and_positive() {
        for beam_type in BeamType::ALL {
            for (load_type, load) in [
                (LoadType::PointLoad, LoadSpec::point(750.0)),
                (LoadType::UniformlyDistributed, LoadSpec::uniform(120.0)),
            ] {
                let a = max_deflection(beam_type, load_type, &steel_beam(3.5), &load).unwrap();
                let b = max_deflection(beam_type, load_type, &steel_beam(3.5), &load).unwrap();
                assert_eq!(a.to_bits(), b.to_bits());
                assert!(a > 0.0);
            }
        }
    }

    #[test]
    fn test_mismatched_load_is_invalid_combination() {
        let err = max_deflection(
            BeamType::Cantilever,
            LoadType::UniformlyDistributed,
            &steel_beam(2.0),
            &LoadSpec::point(1000.0),
        )
        .unwrap_err();
        assert!(matches!(err, CalcError::InvalidCombination { .. }));

        let err = max_deflection(
            BeamType::SimplySupported,
            LoadType::PointLoad,
            &steel_beam(2.0),
            &LoadSpec::uniform(500.0),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_COMBINATION");
    }
}
