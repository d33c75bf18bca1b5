//! PNG rendering of the deflection curve.
//!
//! The image is drawn to a sibling temp file and then moved over the
//! destination, so the previous plot survives a failed render. Text is
//! rasterised with the DejaVu Sans font shipped in `assets/`.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use tracing::info;

use beam_core::{replace_file, temp_path_for, BeamType, CalcError, CalcResult, DeflectionProfile, LoadType};

const IMAGE_SIZE: (u32, u32) = (1024, 768);

const FONT_FAMILY: &str = "sans-serif";
static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Register the bundled font under the family every label uses.
fn ensure_font() -> CalcResult<()> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA).map_err(|_| "bundled font: invalid font data".to_string())
        })
        .clone()
        .map_err(CalcError::plot_error)
}

/// Temp file handed to the encoder. It always ends in `.png`, which selects
/// the format, whatever the destination is called.
fn png_temp_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("png") => temp_path_for(path),
        _ => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "plot".to_string());
            path.with_file_name(format!("{}.tmp.png", name))
        }
    }
}

pub fn plot_title(beam_type: BeamType, load_type: LoadType) -> String {
    format!("Beam Deflection: {} with {}", beam_type.title(), load_type.title())
}

/// Vertical axis bounds covering the curve and the zero line, with margin.
fn y_range(points: &[(f64, f64)]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let pad = (hi - lo) * 0.1;
    if pad > 0.0 {
        (lo - pad, hi + pad)
    } else {
        (-1.0, 1.0)
    }
}

fn draw(profile: &DeflectionProfile, path: &Path, samples: usize) -> Result<(), Box<dyn Error>> {
    let points: Vec<(f64, f64)> = profile.samples(samples).collect();
    let (y_min, y_max) = y_range(&points);
    let span = profile.span_m;

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(plot_title(profile.beam_type, profile.load_type), (FONT_FAMILY, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..span, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Length along the Beam (m)")
        .y_desc("Deflection (m)")
        .label_style((FONT_FAMILY, 14))
        .axis_desc_style((FONT_FAMILY, 16))
        .y_label_formatter(&|y| format!("{:.2e}", y))
        .draw()?;

    chart.draw_series(LineSeries::new(vec![(0.0, 0.0), (span, 0.0)], BLACK.stroke_width(1)))?;

    chart
        .draw_series(LineSeries::new(points, BLUE.stroke_width(2)))?
        .label("Deflection Curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, 16))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render the profile with `samples` points and save it as a PNG at `path`,
/// replacing any existing file.
pub fn render_deflection_png(profile: &DeflectionProfile, path: &Path, samples: usize) -> CalcResult<()> {
    ensure_font()?;
    let tmp_path = png_temp_path(path);

    draw(profile, &tmp_path, samples).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::plot_error(e.to_string())
    })?;
    replace_file(&tmp_path, path)?;

    info!(path = %path.display(), samples, "deflection plot written");
    Ok(())
}
