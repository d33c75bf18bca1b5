//! # Beam Data Model
//!
//! Value types describing one calculation: the support configuration, the
//! load type, the beam's span and stiffness, and the load magnitude.
//!
//! All values are SI:
//! - Length: meters (m)
//! - Modulus of elasticity: pascals (Pa)
//! - Moment of inertia: m⁴
//! - Point load: newtons (N)
//! - Distributed load: newtons per meter (N/m)
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{BeamSpec, BeamType, LoadSpec, LoadType};
//!
//! let beam_type: BeamType = "simply_supported".parse().unwrap();
//! assert_eq!(beam_type, BeamType::SimplySupported);
//!
//! let load = LoadSpec::point(1000.0);
//! assert_eq!(load.load_type(), LoadType::PointLoad);
//!
//! let beam = BeamSpec::new(2.0, 200e9, 1e-4);
//! assert!(beam.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Support configuration of the beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamType {
    /// Pinned at one end, roller at the other
    SimplySupported,
    /// Fixed at x = 0, free at x = L
    Cantilever,
}

impl BeamType {
    /// All beam types in menu order
    pub const ALL: [BeamType; 2] = [BeamType::SimplySupported, BeamType::Cantilever];

    /// Stable snake_case key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            BeamType::SimplySupported => "simply_supported",
            BeamType::Cantilever => "cantilever",
        }
    }

    /// Human-readable title for reports and plot captions
    pub fn title(&self) -> &'static str {
        match self {
            BeamType::SimplySupported => "Simply Supported",
            BeamType::Cantilever => "Cantilever",
        }
    }

    /// Map a menu entry ("1" or "2") to a beam type.
    ///
    /// ```
    /// use beam_core::beam::BeamType;
    /// assert_eq!(BeamType::from_menu_choice("2").unwrap(), BeamType::Cantilever);
    /// assert!(BeamType::from_menu_choice("3").is_err());
    /// ```
    pub fn from_menu_choice(choice: &str) -> CalcResult<Self> {
        match choice.trim() {
            "1" => Ok(BeamType::SimplySupported),
            "2" => Ok(BeamType::Cantilever),
            other => Err(CalcError::invalid_selection("beam type", other)),
        }
    }
}

impl fmt::Display for BeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BeamType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "simply_supported" | "ss" => Ok(BeamType::SimplySupported),
            "cantilever" | "cant" => Ok(BeamType::Cantilever),
            _ => Err(CalcError::invalid_selection("beam type", s)),
        }
    }
}

/// Kind of load applied to the beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadType {
    /// Concentrated load P
    PointLoad,
    /// Constant load w per unit length over the full span (UDL)
    UniformlyDistributed,
}

impl LoadType {
    /// All load types in menu order
    pub const ALL: [LoadType; 2] = [LoadType::PointLoad, LoadType::UniformlyDistributed];

    /// Stable snake_case key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            LoadType::PointLoad => "point_load",
            LoadType::UniformlyDistributed => "uniformly_distributed",
        }
    }

    /// Human-readable title for reports and plot captions
    pub fn title(&self) -> &'static str {
        match self {
            LoadType::PointLoad => "Point Load",
            LoadType::UniformlyDistributed => "Uniformly Distributed",
        }
    }

    /// Map a menu entry ("1" or "2") to a load type.
    pub fn from_menu_choice(choice: &str) -> CalcResult<Self> {
        match choice.trim() {
            "1" => Ok(LoadType::PointLoad),
            "2" => Ok(LoadType::UniformlyDistributed),
            other => Err(CalcError::invalid_selection("load type", other)),
        }
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LoadType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "point_load" | "point" => Ok(LoadType::PointLoad),
            "uniformly_distributed" | "uniform" | "udl" => Ok(LoadType::UniformlyDistributed),
            _ => Err(CalcError::invalid_selection("load type", s)),
        }
    }
}

fn normalize_key(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Check that a value is finite and strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Span and stiffness of the beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span length L in meters
    pub span_m: f64,
    /// Modulus of elasticity E in pascals
    pub modulus_pa: f64,
    /// Moment of inertia I in m⁴
    pub inertia_m4: f64,
}

impl BeamSpec {
    pub fn new(span_m: f64, modulus_pa: f64, inertia_m4: f64) -> Self {
        BeamSpec {
            span_m,
            modulus_pa,
            inertia_m4,
        }
    }

    /// Flexural rigidity E·I (N·m²)
    pub fn flexural_rigidity(&self) -> f64 {
        self.modulus_pa * self.inertia_m4
    }

    /// Validate that L, E, and I are all finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_positive("modulus_pa", self.modulus_pa)?;
        require_positive("inertia_m4", self.inertia_m4)?;
        Ok(())
    }
}

/// Load magnitude; exactly one variant is populated per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadSpec {
    /// Point load P in newtons
    PointLoad { magnitude_n: f64 },
    /// Uniform load w in newtons per meter
    UniformlyDistributed { intensity_n_per_m: f64 },
}

impl LoadSpec {
    /// Create a point load of `magnitude_n` newtons
    pub fn point(magnitude_n: f64) -> Self {
        LoadSpec::PointLoad { magnitude_n }
    }

    /// Create a uniform load of `intensity_n_per_m` newtons per meter
    pub fn uniform(intensity_n_per_m: f64) -> Self {
        LoadSpec::UniformlyDistributed { intensity_n_per_m }
    }

    /// Build a load from a load type and optional P / w magnitudes.
    ///
    /// The magnitude matching `load_type` must be present (`InvalidInput`
    /// naming the missing field otherwise); the other one is ignored.
    ///
    /// ```
    /// use beam_core::beam::{LoadSpec, LoadType};
    ///
    /// let load = LoadSpec::from_parts(LoadType::UniformlyDistributed, None, Some(500.0)).unwrap();
    /// assert_eq!(load, LoadSpec::uniform(500.0));
    /// assert!(LoadSpec::from_parts(LoadType::PointLoad, None, Some(500.0)).is_err());
    /// ```
    pub fn from_parts(load_type: LoadType, p: Option<f64>, w: Option<f64>) -> CalcResult<Self> {
        match (load_type, p, w) {
            (LoadType::PointLoad, Some(p), _) => Ok(LoadSpec::point(p)),
            (LoadType::UniformlyDistributed, _, Some(w)) => Ok(LoadSpec::uniform(w)),
            (LoadType::PointLoad, None, _) => Err(CalcError::invalid_input(
                "magnitude_n",
                "",
                "A point load needs its magnitude P",
            )),
            (LoadType::UniformlyDistributed, _, None) => Err(CalcError::invalid_input(
                "intensity_n_per_m",
                "",
                "A uniformly distributed load needs its intensity w",
            )),
        }
    }

    /// The load type this magnitude belongs to
    pub fn load_type(&self) -> LoadType {
        match self {
            LoadSpec::PointLoad { .. } => LoadType::PointLoad,
            LoadSpec::UniformlyDistributed { .. } => LoadType::UniformlyDistributed,
        }
    }

    /// Raw magnitude (N for point loads, N/m for uniform loads)
    pub fn magnitude(&self) -> f64 {
        match self {
            LoadSpec::PointLoad { magnitude_n } => *magnitude_n,
            LoadSpec::UniformlyDistributed { intensity_n_per_m } => *intensity_n_per_m,
        }
    }

    /// Validate that the magnitude is finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            LoadSpec::PointLoad { magnitude_n } => require_positive("magnitude_n", *magnitude_n),
            LoadSpec::UniformlyDistributed { intensity_n_per_m } => {
                require_positive("intensity_n_per_m", *intensity_n_per_m)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_beam_type_keys_and_aliases() {
        assert_eq!("simply_supported".parse::<BeamType>().unwrap(), BeamType::SimplySupported);
        assert_eq!("Simply-Supported".parse::<BeamType>().unwrap(), BeamType::SimplySupported);
        assert_eq!("ss".parse::<BeamType>().unwrap(), BeamType::SimplySupported);
        assert_eq!(" cantilever ".parse::<BeamType>().unwrap(), BeamType::Cantilever);
    }

    #[test]
    fn test_parse_invalid_types() {
        let err = "invalid_beam".parse::<BeamType>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SELECTION");
        assert!("invalid_load".parse::<LoadType>().is_err());
    }

    #[test]
    fn test_parse_load_type() {
        assert_eq!("point_load".parse::<LoadType>().unwrap(), LoadType::PointLoad);
        assert_eq!("udl".parse::<LoadType>().unwrap(), LoadType::UniformlyDistributed);
        assert_eq!("uniformly-distributed".parse::<LoadType>().unwrap(), LoadType::UniformlyDistributed);
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(BeamType::from_menu_choice("1").unwrap(), BeamType::SimplySupported);
        assert_eq!(LoadType::from_menu_choice(" 2 ").unwrap(), LoadType::UniformlyDistributed);
        assert!(BeamType::from_menu_choice("0").is_err());
        assert!(LoadType::from_menu_choice("").is_err());
    }

    #[test]
    fn test_display_matches_serde_key() {
        for beam in BeamType::ALL {
            let json = serde_json::to_string(&beam).unwrap();
            assert_eq!(json, format!("\"{}\"", beam));
        }
        for load in LoadType::ALL {
            let json = serde_json::to_string(&load).unwrap();
            assert_eq!(json, format!("\"{}\"", load));
        }
    }

    #[test]
    fn test_beam_spec_validation() {
        assert!(BeamSpec::new(2.0, 200e9, 1e-4).validate().is_ok());
        assert!(BeamSpec::new(0.0, 200e9, 1e-4).validate().is_err());
        assert!(BeamSpec::new(2.0, -1.0, 1e-4).validate().is_err());
        assert!(BeamSpec::new(2.0, 200e9, f64::NAN).validate().is_err());
        assert!(BeamSpec::new(f64::INFINITY, 200e9, 1e-4).validate().is_err());
    }

    #[test]
    fn test_load_spec_from_parts() {
        assert_eq!(
            LoadSpec::from_parts(LoadType::PointLoad, Some(1000.0), None).unwrap(),
            LoadSpec::point(1000.0)
        );
        // The unused magnitude is ignored
        assert_eq!(
            LoadSpec::from_parts(LoadType::PointLoad, Some(1000.0), Some(3.0)).unwrap(),
            LoadSpec::point(1000.0)
        );
        let err = LoadSpec::from_parts(LoadType::UniformlyDistributed, Some(1000.0), None).unwrap_err();
        assert!(matches!(&err, CalcError::InvalidInput { field, .. } if field == "intensity_n_per_m"));
        assert!(!err.to_string().contains("beam type"));

        let err = LoadSpec::from_parts(LoadType::PointLoad, None, None).unwrap_err();
        assert!(matches!(&err, CalcError::InvalidInput { field, .. } if field == "magnitude_n"));
    }

    #[test]
    fn test_load_spec_validation() {
        assert!(LoadSpec::point(1.0).validate().is_ok());
        assert!(LoadSpec::point(0.0).validate().is_err());
        assert!(LoadSpec::uniform(-5.0).validate().is_err());
    }

    #[test]
    fn test_load_spec_json() {
        let json = serde_json::to_string(&LoadSpec::uniform(500.0)).unwrap();
        assert_eq!(json, r#"{"kind":"uniformly_distributed","intensity_n_per_m":500.0}"#);
        let roundtrip: LoadSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.load_type(), LoadType::UniformlyDistributed);
        assert_eq!(roundtrip.magnitude(), 500.0);
    }
}
