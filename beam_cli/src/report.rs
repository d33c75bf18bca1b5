//! Console and JSON rendering of calculation results.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use beam_core::units::{Gigapascals, Pascals};
use beam_core::{BeamInput, BeamResult, CalcResult, LoadSpec};

/// JSON document written by `--json` and `--report`
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub input: &'a BeamInput,
    pub result: &'a BeamResult,
}

/// Peak deflection (cm, 6 decimals) and peak moment (N·m, 2 decimals).
pub fn render_summary(result: &BeamResult) -> String {
    format!(
        "The maximum deflection is: {:.6} centimeters\nThe maximum bending moment is: {:.2} Nm",
        result.max_deflection_cm(),
        result.max_moment().value()
    )
}

/// Inputs and formulas, shown in verbose mode.
pub fn render_details(input: &BeamInput, result: &BeamResult) -> String {
    let mut out = String::new();
    let load_line = match input.load {
        LoadSpec::PointLoad { magnitude_n } => format!("P = {} N", magnitude_n),
        LoadSpec::UniformlyDistributed { intensity_n_per_m } => format!("w = {} N/m", intensity_n_per_m),
    };

    // Writing to a String cannot fail
    let _ = writeln!(out, "Case:   {} with {}", input.beam_type.title(), input.load_type.title());
    let _ = writeln!(
        out,
        "Input:  L = {} m, E = {} GPa, I = {:e} m^4, {}",
        input.beam.span_m,
        Gigapascals::from(Pascals(input.beam.modulus_pa)).value(),
        input.beam.inertia_m4,
        load_line
    );
    let _ = writeln!(out, "        E·I = {:.3e} N·m²", input.beam.flexural_rigidity());
    let _ = writeln!(out, "        {}  ->  {:.6e} m", result.deflection_formula, result.max_deflection_m);
    let _ = write!(out, "        {}  ->  {:.2} Nm", result.moment_formula, result.max_moment().value());
    out
}

pub fn render_json(input: &BeamInput, result: &BeamResult) -> CalcResult<String> {
    let report = RunReport {
        generated_at: Utc::now(),
        input,
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
