//! Writing the input and result tables to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use kinematics::tables::{input_rows, result_rows, INPUT_HEADERS, RESULT_HEADERS};
use kinematics::{DerivedResult, RawObservation};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Two CSV files, one per table
    Csv,
    /// One .tex file holding both tables as booktabs tabulars
    Latex,
    /// One workbook with a worksheet per table
    Xlsx,
}

pub const INPUT_SHEET: &str = "Input data";
pub const RESULT_SHEET: &str = "Results";

fn write_csv<R: AsRef<[String]>>(path: &Path, headers: &[&str], rows: &[R]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

fn escape_latex(cell: &str) -> String {
    let mut escaped = String::with_capacity(cell.len());
    for c in cell.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\\' => escaped.push_str("\\textbackslash{}"),
            '^' => escaped.push_str("\\^{}"),
            '~' => escaped.push_str("\\~{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_sheet<R: AsRef<[String]>>(
    worksheet: &mut Worksheet,
    name: &str,
    headers: &[&str],
    rows: &[R],
) -> Result<()> {
    worksheet.set_name(name)?;
    let bold = Format::new().set_bold();
    for (col, header) in (0u16..).zip(headers) {
        worksheet.write_string_with_format(0, col, *header, &bold)?;
    }
    for (row, cells) in (1u32..).zip(rows) {
        for (col, cell) in (0u16..).zip(cells.as_ref()) {
            // Numeric cells stay numeric so the sheet can be sorted and summed
            match cell.parse::<f64>() {
                Ok(value) if value.is_finite() => worksheet.write_number(row, col, value)?,
                _ => worksheet.write_string(row, col, cell)?,
            };
        }
    }
    worksheet.autofit();
    Ok(())
}

/// Renders one table as a booktabs `tabular`, first column left-aligned
/// and the numeric columns right-aligned.
pub fn latex_table<R: AsRef<[String]>>(headers: &[&str], rows: &[R]) -> String {
    let columns = format!("l{}", "r".repeat(headers.len().saturating_sub(1)));
    let mut out = format!("\\begin{{tabular}}{{{columns}}}\n\\toprule\n");

    let header_cells: Vec<String> = headers.iter().map(|h| escape_latex(h)).collect();
    out.push_str(&header_cells.join(" & "));
    out.push_str(" \\\\\n\\midrule\n");

    for row in rows {
        let cells: Vec<String> = row.as_ref().iter().map(|c| escape_latex(c)).collect();
        out.push_str(&cells.join(" & "));
        out.push_str(" \\\\\n");
    }

    out.push_str("\\bottomrule\n\\end{tabular}\n");
    out
}

/// Writes both tables in `format` under `out_dir`, file names suffixed with
/// `timestamp`. Returns the paths written.
pub fn export_tables(
    observations: &[RawObservation],
    results: &[DerivedResult],
    format: ExportFormat,
    out_dir: &Path,
    timestamp: &str,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let inputs = input_rows(observations);
    let outputs = result_rows(results);

    match format {
        ExportFormat::Csv => {
            let input_path = out_dir.join(format!("input_data_{timestamp}.csv"));
            let result_path = out_dir.join(format!("results_{timestamp}.csv"));
            write_csv(&input_path, &INPUT_HEADERS, &inputs)?;
            write_csv(&result_path, &RESULT_HEADERS, &outputs)?;
            Ok(vec![input_path, result_path])
        }
        ExportFormat::Latex => {
            let path = out_dir.join(format!("tables_{timestamp}.tex"));
            let document = format!(
                "% Input data\n{}\n\n% Results\n{}",
                latex_table(&INPUT_HEADERS, &inputs),
                latex_table(&RESULT_HEADERS, &outputs)
            );
            fs::write(&path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(vec![path])
        }
        ExportFormat::Xlsx => {
            let path = out_dir.join(format!("results_{timestamp}.xlsx"));
            let mut workbook = Workbook::new();
            write_sheet(workbook.add_worksheet(), INPUT_SHEET, &INPUT_HEADERS, &inputs)?;
            write_sheet(workbook.add_worksheet(), RESULT_SHEET, &RESULT_HEADERS, &outputs)?;
            workbook
                .save(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(vec![path])
        }
    }
}
