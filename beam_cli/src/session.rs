//! Interactive session and one-shot calculation flow.
//!
//! One iteration: menus → numeric inputs → calculate → print → plot. Each
//! iteration is independent; nothing carries over except the plot file,
//! which is overwritten.

use std::io::{BufRead, Write};

use tracing::debug;

use beam_core::{calculate, write_atomic, BeamInput, BeamResult, BeamSpec, BeamType, CalcError, CalcResult, LoadSpec, LoadType};

use crate::cli::RunConfig;
use crate::plot;
use crate::prompt::Prompter;
use crate::report;

const MODULUS_REMINDER: &str = "Reminder: Modulus of Elasticity (E) is typically very large. \
For steel, it's usually around 200 GPa (200e9 Pa).";

fn write_line<W: Write>(out: &mut W, line: &str) -> CalcResult<()> {
    writeln!(out, "{}", line).map_err(|e| CalcError::file_error("write", "<terminal>", e.to_string()))
}

/// Calculate, print, and save outputs for one input.
pub fn run_calculation<W: Write>(input: &BeamInput, config: &RunConfig, out: &mut W) -> CalcResult<BeamResult> {
    let result = calculate(input)?;

    write_line(out, &format!("\n{}", report::render_summary(&result)))?;
    if config.verbose {
        write_line(out, &report::render_details(input, &result))?;
    }

    if config.json || config.report.is_some() {
        let json = report::render_json(input, &result)?;
        if config.json {
            write_line(out, &json)?;
        }
        if let Some(path) = &config.report {
            write_atomic(path, json.as_bytes())?;
            debug!(path = %path.display(), "report saved");
        }
    }

    if config.plot {
        let profile = result.profile(input.beam.span_m)?;
        plot::render_deflection_png(&profile, &config.output, config.samples)?;
        write_line(out, &format!("Deflection plot saved as '{}'.", config.output.display()))?;
    }

    Ok(result)
}

fn select<R: BufRead, W: Write, T>(
    prompter: &mut Prompter<R, W>,
    parse: fn(&str) -> CalcResult<T>,
) -> CalcResult<T> {
    let choice = prompter.menu_choice("Enter your choice (1/2): ")?;
    match parse(&choice) {
        Ok(value) => Ok(value),
        Err(e) => {
            prompter.say("Invalid choice. Exiting.")?;
            Err(e)
        }
    }
}

/// Ask for the beam type, load type, and all numeric values.
pub fn collect_input<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> CalcResult<BeamInput> {
    prompter.say("Select the beam type:")?;
    prompter.say("1. Simply Supported Beam")?;
    prompter.say("2. Cantilever Beam")?;
    let beam_type = select(prompter, BeamType::from_menu_choice)?;

    prompter.say("\nSelect the load type:")?;
    prompter.say("1. Point Load")?;
    prompter.say("2. Uniformly Distributed Load (UDL)")?;
    let load_type = select(prompter, LoadType::from_menu_choice)?;

    let span_m = prompter.numeric("\nEnter the span length of the beam (m): ", true)?;
    prompter.say(MODULUS_REMINDER)?;
    let modulus_pa = prompter.numeric("Enter the modulus of elasticity (Pa): ", true)?;
    let inertia_m4 = prompter.numeric("Enter the moment of inertia (m^4): ", true)?;

    let load = match load_type {
        LoadType::PointLoad => LoadSpec::point(prompter.numeric("Enter the magnitude of the point load (N): ", true)?),
        LoadType::UniformlyDistributed => {
            LoadSpec::uniform(prompter.numeric("Enter the load per unit length (N/m): ", true)?)
        }
    };

    Ok(BeamInput {
        label: String::new(),
        beam_type,
        load_type,
        beam: BeamSpec::new(span_m, modulus_pa, inertia_m4),
        load,
    })
}

/// Run calculations until the user declines another one.
///
/// An invalid menu choice ends the session with `InvalidSelection`.
pub fn run_interactive<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, config: &RunConfig) -> CalcResult<()> {
    let mut run = 0usize;
    loop {
        run += 1;
        prompter.say("\nBeam Deflection and Bending Moment Calculator")?;

        let input = collect_input(prompter)?;
        debug!(run, beam_type = %input.beam_type, load_type = %input.load_type, "collected input");
        run_calculation(&input, config, prompter.output())?;

        if !prompter.confirm("\nWould you like to calculate another beam deflection? (y/n): ")? {
            prompter.say("Exiting the program. Thank you!")?;
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_plot() -> RunConfig {
        RunConfig {
            plot: false,
            ..RunConfig::default()
        }
    }

    fn run(script: &str, config: &RunConfig) -> (CalcResult<()>, String) {
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = run_interactive(&mut prompter, config);
        (result, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn test_single_simply_supported_point_run() {
        let (result, out) = run("1\n1\n2\n200e9\n1e-4\n1000\nn\n", &no_plot());
        result.unwrap();
        assert!(out.contains("Beam Deflection and Bending Moment Calculator"));
        assert!(out.contains(MODULUS_REMINDER));
        assert!(out.contains("Enter the magnitude of the point load (N): "));
        assert!(out.contains("The maximum deflection is: 0.000833 centimeters"));
        assert!(out.contains("The maximum bending moment is: 500.00 Nm"));
        assert!(out.ends_with("Exiting the program. Thank you!\n"));
    }

    #[test]
    fn test_repeat_runs_until_declined() {
        let script = "2\n2\n2\n200e9\n1e-4\n500\ny\n2\n1\n2\n200e9\n1e-4\n1000\nno\n";
        let (result, out) = run(script, &no_plot());
        result.unwrap();
        assert_eq!(out.matches("Beam Deflection and Bending Moment Calculator").count(), 2);
        assert!(out.contains("Enter the load per unit length (N/m): "));
        assert!(out.contains("The maximum bending moment is: 1000.00 Nm"));
        assert!(out.contains("The maximum bending moment is: 2000.00 Nm"));
    }

    #[test]
    fn test_invalid_beam_choice_exits() {
        let (result, out) = run("3\n", &no_plot());
        assert!(matches!(result, Err(CalcError::InvalidSelection { .. })));
        assert!(out.ends_with("Invalid choice. Exiting.\n"));
        assert!(!out.contains("Select the load type"));
    }

    #[test]
    fn test_invalid_load_choice_exits() {
        let (result, out) = run("1\nx\n", &no_plot());
        let err = result.unwrap_err();
        assert_eq!(err, CalcError::invalid_selection("load type", "x"));
        assert!(!out.contains("span length"));
    }

    #[test]
    fn test_bad_numbers_are_reprompted() {
        let (result, out) = run("1\n2\n-2\nzero\n2\n200e9\n1e-4\n500\nn\n", &no_plot());
        result.unwrap();
        assert_eq!(out.matches("Enter the span length of the beam (m): ").count(), 3);
        assert!(out.contains("The maximum bending moment is: 250.00 Nm"));
    }

    #[test]
    fn test_input_closed_mid_run() {
        let (result, _) = run("1\n1\n2\n", &no_plot());
        assert_eq!(result.unwrap_err(), CalcError::InputClosed);
    }

    #[test]
    fn test_end_of_input_at_repeat_prompt_exits_cleanly() {
        let (result, out) = run("2\n1\n2\n200e9\n1e-4\n1000\n", &no_plot());
        result.unwrap();
        assert!(out.contains("Exiting the program. Thank you!"));
    }

    #[test]
    fn test_run_with_plot_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            output: dir.path().join("beam_deflection.png"),
            samples: 60,
            report: Some(dir.path().join("report.json")),
            ..RunConfig::default()
        };
        let (result, out) = run("2\n2\n2\n200e9\n1e-4\n500\nn\n", &config);
        result.unwrap();

        assert!(config.output.exists());
        assert!(out.contains("Deflection plot saved as '"));
        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("report.json")).unwrap()).unwrap();
        assert_eq!(report["result"]["max_moment_nm"], 1000.0);
    }

    #[test]
    fn test_default_plot_path_is_reported() {
        let config = RunConfig::default();
        assert_eq!(config.output, std::path::PathBuf::from(crate::cli::DEFAULT_PLOT_PATH));

        let input = BeamInput {
            label: String::new(),
            beam_type: BeamType::SimplySupported,
            load_type: LoadType::PointLoad,
            beam: BeamSpec::new(2.0, 200e9, 1e-4),
            load: LoadSpec::point(1000.0),
        };
        let mut out = Vec::new();
        let outcome = run_calculation(&input, &config, &mut out);
        let written = config.output.exists();
        let _ = std::fs::remove_file(&config.output);

        outcome.unwrap();
        assert!(written);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Deflection plot saved as 'beam_deflection.png'.\n"), "{}", text);
    }

    #[test]
    fn test_run_calculation_json_output() {
        let input = BeamInput {
            label: "S-1".to_string(),
            beam_type: BeamType::SimplySupported,
            load_type: LoadType::UniformlyDistributed,
            beam: BeamSpec::new(2.0, 200e9, 1e-4),
            load: LoadSpec::uniform(500.0),
        };
        let config = RunConfig {
            json: true,
            verbose: true,
            ..no_plot()
        };
        let mut out = Vec::new();
        let result = run_calculation(&input, &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(result.max_moment_nm, 250.0);
        assert!(text.contains("\"label\": \"S-1\""));
        assert!(text.contains("M = w·L² / 8"));
    }

    #[test]
    fn test_run_calculation_rejects_invalid_input() {
        let input = BeamInput {
            label: String::new(),
            beam_type: BeamType::Cantilever,
            load_type: LoadType::PointLoad,
            beam: BeamSpec::new(-1.0, 200e9, 1e-4),
            load: LoadSpec::point(10.0),
        };
        let mut out = Vec::new();
        let err = run_calculation(&input, &no_plot(), &mut out).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { .. }));
        assert!(out.is_empty());
    }
}
