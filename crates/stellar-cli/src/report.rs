//! Plain-text tables for the terminal.

use std::fmt::Write;

use kinematics::tables::{input_rows, result_rows, INPUT_HEADERS, RESULT_HEADERS};
use kinematics::{DerivedResult, MainSequenceComparison, RawObservation};
use stellar::ReferenceStar;

/// Lays out `rows` under `headers` with every column padded to its widest
/// cell. The first column is left-aligned, the rest right-aligned.
pub fn render_table<R: AsRef<[String]>>(headers: &[&str], rows: &[R]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.as_ref()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header_cells, &widths);

    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in rows {
        push_line(&mut out, row.as_ref(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, &width))| {
            // Pad by chars, format width counts bytes for "Δ" and '"'
            let pad = " ".repeat(width.saturating_sub(cell.chars().count()));
            if col == 0 {
                format!("{cell}{pad}")
            } else {
                format!("{pad}{cell}")
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

pub fn input_table(observations: &[RawObservation]) -> String {
    render_table(&INPUT_HEADERS, &input_rows(observations))
}

pub fn result_table(results: &[DerivedResult]) -> String {
    render_table(&RESULT_HEADERS, &result_rows(results))
}

pub fn comparison_table(comparisons: &[MainSequenceComparison]) -> String {
    let rows: Vec<Vec<String>> = comparisons
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.nearest_type.clone(),
                c.main_sequence_magnitude
                    .map_or_else(|| "-".to_string(), |mv| format!("{mv:.2}")),
                c.magnitude_offset
                    .map_or_else(|| "-".to_string(), |dm| format!("{dm:+.2}")),
            ]
        })
        .collect();
    render_table(&["Name", "Nearest type", "Main-sequence Mv", "Offset"], &rows)
}

pub fn reference_table(reference: &[ReferenceStar]) -> String {
    let rows: Vec<Vec<String>> = reference
        .iter()
        .map(|s| {
            vec![
                s.spectral_type.to_string(),
                format!("{:.2}", s.color_index),
                format!("{:.1}", s.absolute_magnitude),
            ]
        })
        .collect();
    render_table(&["Type", "B-V", "Mv"], &rows)
}

/// Full terminal report: inputs, results and the main-sequence comparison.
pub fn full_report(
    observations: &[RawObservation],
    results: &[DerivedResult],
    comparisons: &[MainSequenceComparison],
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "Input data\n\n{}", input_table(observations));
    let _ = writeln!(out, "Results\n\n{}", result_table(results));
    let _ = write!(out, "Main sequence comparison\n\n{}", comparison_table(comparisons));
    out
}
