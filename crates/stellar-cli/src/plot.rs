//! HR diagram rendering.
//!
//! Plotters axes only run low to high, so magnitudes are drawn negated and
//! the tick labels are negated back. Brighter stars end up at the top.

use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use kinematics::HrPoint;
use plotters::coord::Shift;
use plotters::prelude::*;
use stellar::ReferenceStar;

const PLOT_SIZE: (u32, u32) = (1200, 900);
const COLOR_MARGIN: f64 = 0.2;
const MAGNITUDE_MARGIN: f64 = 1.5;

/// Plot extent as (B-V range, negated-Mv range), covering every reference
/// and analyzed star with a margin.
pub fn axis_ranges(reference: &[ReferenceStar], points: &[HrPoint]) -> (Range<f64>, Range<f64>) {
    let coords = reference
        .iter()
        .map(|s| (s.color_index, s.absolute_magnitude))
        .chain(points.iter().map(|p| (p.color_index, p.absolute_magnitude)))
        .filter(|(x, y)| x.is_finite() && y.is_finite());

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut mv_min, mut mv_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, mv) in coords {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        mv_min = mv_min.min(mv);
        mv_max = mv_max.max(mv);
    }

    if !x_min.is_finite() {
        // Nothing to plot; fall back to the classical diagram extent
        return (-0.5..2.0, -17.0..7.0);
    }

    (
        (x_min - COLOR_MARGIN)..(x_max + COLOR_MARGIN),
        (-mv_max - MAGNITUDE_MARGIN)..(-mv_min + MAGNITUDE_MARGIN),
    )
}

fn draw_hr_diagram<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    reference: &[ReferenceStar],
    points: &[HrPoint],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x_range, y_range) = axis_ranges(reference, points);
    let mut chart = ChartBuilder::on(&root)
        .caption("Hertzsprung-Russell Diagram", ("sans-serif", 26).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_labels(12)
        .x_label_formatter(&|x| format!("{x:.1}"))
        .y_labels(12)
        .y_label_formatter(&|y| format!("{:.0}", -y))
        .x_desc("Color index (B-V)")
        .y_desc("Absolute magnitude (Mv)")
        .axis_desc_style(("sans-serif", 18))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    // Main sequence curve through the sorted reference stars
    let curve: Vec<(f64, f64)> = reference
        .iter()
        .map(|s| (s.color_index, -s.absolute_magnitude))
        .collect();
    chart
        .draw_series(LineSeries::new(curve.clone(), BLUE.mix(0.5).stroke_width(2)))?
        .label("Main sequence")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.mix(0.5)));

    chart
        .draw_series(
            curve
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 6, BLUE.filled())),
        )?
        .label("Standard stars")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, BLUE.filled()));

    chart.draw_series(reference.iter().map(|s| {
        EmptyElement::at((s.color_index, -s.absolute_magnitude))
            + Text::new(
                s.spectral_type,
                (-8, -20),
                ("sans-serif", 13).into_font().color(&BLUE),
            )
    }))?;

    if !points.is_empty() {
        chart
            .draw_series(points.iter().map(|p| {
                EmptyElement::at((p.color_index, -p.absolute_magnitude))
                    + Rectangle::new([(-6, -6), (6, 6)], RED.filled())
                    + Rectangle::new([(-6, -6), (6, 6)], BLACK.stroke_width(1))
                    + Text::new(
                        p.name.clone(),
                        (9, -6),
                        ("sans-serif", 14).into_font().color(&RED),
                    )
            }))?
            .label("Analyzed stars")
            .legend(|(x, y)| Rectangle::new([(x + 5, y - 5), (x + 15, y + 5)], RED.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Renders the HR diagram to `path`: PNG for a `.png` extension, SVG
/// otherwise. Missing parent directories are created.
pub fn render_hr_diagram(path: &Path, reference: &[ReferenceStar], points: &[HrPoint]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    let drawn = if is_png {
        let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
        draw_hr_diagram(root, reference, points).map_err(|e| e.to_string())
    } else {
        let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
        draw_hr_diagram(root, reference, points).map_err(|e| e.to_string())
    };
    drawn.map_err(|e| anyhow!("failed to draw HR diagram to {}: {e}", path.display()))
}
