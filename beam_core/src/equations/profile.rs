//! # Deflection Profile
//!
//! Curve shapes used to draw the deflected beam between x = 0 and x = L.
//! Each shape is a polynomial scaled by the peak deflection:
//!
//! | Beam             | Load  | y(x)                                  |
//! |------------------|-------|---------------------------------------|
//! | Simply supported | Point | (δ/(L/2)³)·(−x³ + L·x²)               |
//! | Simply supported | UDL   | (δ/L⁴)·(−x⁴ + 2L·x³ − L²·x²)          |
//! | Cantilever       | Point | (δ/L³)·(x³ − 3L·x² + 2L²·x)           |
//! | Cantilever       | UDL   | (δ/L⁴)·(x⁴ − 4L·x³ + 6L²·x²)          |
//!
//! These are presentation shapes and must be reproduced coefficient for
//! coefficient; they are not elastic-curve solutions. In particular the
//! extremum of each shape is not always δ:
//!
//! - simply supported, point: max 32δ/27 at x = 2L/3, zero at both ends
//! - simply supported, UDL: min −δ/16 at x = L/2, zero at both ends
//! - cantilever, point: max ≈ 0.385δ at x = L(1 − 1/√3), zero at both ends
//! - cantilever, UDL: rises monotonically to 3δ at x = L
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{BeamType, LoadType};
//! use beam_core::equations::profile::DeflectionProfile;
//!
//! let profile = DeflectionProfile::new(BeamType::Cantilever, LoadType::UniformlyDistributed, 2.0, 1e-3).unwrap();
//! let points: Vec<(f64, f64)> = profile.samples(5).collect();
//! assert_eq!(points.len(), 5);
//! assert_eq!(points[0], (0.0, 0.0));
//! assert_eq!(points[4].0, 2.0);
//! ```

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::beam::{require_positive, BeamType, LoadType};
use crate::errors::{CalcError, CalcResult};

/// Number of samples used for rendered curves
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Deflection shape for one (beam, load) case, evaluated on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionProfile {
    pub beam_type: BeamType,
    pub load_type: LoadType,
    /// Span length L in meters
    pub span_m: f64,
    /// Peak deflection δ in meters used to scale the shape
    pub peak_deflection_m: f64,
}

impl DeflectionProfile {
    /// Create a profile. The span must be finite and positive; the peak
    /// deflection must be finite.
    pub fn new(beam_type: BeamType, load_type: LoadType, span_m: f64, peak_deflection_m: f64) -> CalcResult<Self> {
        require_positive("span_m", span_m)?;
        if !peak_deflection_m.is_finite() {
            return Err(CalcError::invalid_input(
                "peak_deflection_m",
                peak_deflection_m.to_string(),
                "Value must be finite",
            ));
        }
        Ok(DeflectionProfile {
            beam_type,
            load_type,
            span_m,
            peak_deflection_m,
        })
    }

    /// Deflection y at position x (meters from the left end / fixed end).
    pub fn at(&self, x: f64) -> f64 {
        let l = self.span_m;
        let peak = self.peak_deflection_m;

        match (self.beam_type, self.load_type) {
            (BeamType::SimplySupported, LoadType::PointLoad) => (peak / (l / 2.0).powi(3)) * (-x.powi(3) + l * x * x),
            (BeamType::SimplySupported, LoadType::UniformlyDistributed) => {
                (peak / l.powi(4)) * (-x.powi(4) + 2.0 * l * x.powi(3) - l * l * x * x)
            }
            (BeamType::Cantilever, LoadType::PointLoad) => {
                (peak / l.powi(3)) * (x.powi(3) - 3.0 * l * x * x + 2.0 * l * l * x)
            }
            (BeamType::Cantilever, LoadType::UniformlyDistributed) => {
                (peak / l.powi(4)) * (x.powi(4) - 4.0 * l * x.powi(3) + 6.0 * l * l * x * x)
            }
        }
    }

    /// Evenly spaced `(x, y)` samples over [0, L], both endpoints included.
    ///
    /// Every call returns a fresh iterator; the profile itself holds no cursor.
    pub fn samples(&self, count: usize) -> ProfileSamples {
        ProfileSamples {
            profile: *self,
            count,
            next: 0,
        }
    }
}

/// Iterator over evenly spaced profile samples.
#[derive(Debug, Clone)]
pub struct ProfileSamples {
    profile: DeflectionProfile,
    count: usize,
    next: usize,
}

impl ProfileSamples {
    fn sample_x(&self, index: usize) -> f64 {
        let l = self.profile.span_m;
        if self.count <= 1 || index == 0 {
            0.0
        } else if index + 1 == self.count {
            l
        } else {
            l * index as f64 / (self.count - 1) as f64
        }
    }
}

impl Iterator for ProfileSamples {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let x = self.sample_x(self.next);
        self.next += 1;
        Some((x, self.profile.at(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProfileSamples {}

impl FusedIterator for ProfileSamples {}
