use std::fs;

use kinematics::{compute_all, ObservationDraft, RawObservation};
use tempfile::TempDir;

use crate::export::{export_tables, latex_table, ExportFormat};

fn observations() -> Vec<RawObservation> {
    let draft = ObservationDraft {
        angular_displacement_arcsec: Some(0.5),
        observation_date_1: "2020-01-01".parse().ok(),
        observation_date_2: "2021-01-01".parse().ok(),
        parallax_arcsec: Some(0.1),
        radial_velocity_km_s: Some(20.0),
        magnitude_b: Some(6.0),
        magnitude_v: Some(5.5),
        ..ObservationDraft::new("Star_1 & co")
    };
    vec![draft.build().unwrap()]
}

#[test]
fn csv_export_writes_both_tables() {
    let dir = TempDir::new().unwrap();
    let observations = observations();
    let results = compute_all(&observations).unwrap();

    let written = export_tables(
        &observations,
        &results,
        ExportFormat::Csv,
        dir.path(),
        "20240101_120000",
    )
    .unwrap();

    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("input_data_20240101_120000.csv"));
    assert!(written[1].ends_with("results_20240101_120000.csv"));

    let results_csv = fs::read_to_string(&written[1]).unwrap();
    let mut lines = results_csv.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Name,"));
    assert!(header.contains("Proper motion"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("Star_1 & co,0.4990,10.00,0.50,5.50"));
    assert!(lines.next().is_none());
}

#[test]
fn latex_export_holds_both_tables() {
    let dir = TempDir::new().unwrap();
    let observations = observations();
    let results = compute_all(&observations).unwrap();

    let written = export_tables(
        &observations,
        &results,
        ExportFormat::Latex,
        &dir.path().join("out"),
        "ts",
    )
    .unwrap();

    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("tables_ts.tex"));
    let tex = fs::read_to_string(&written[0]).unwrap();
    assert!(tex.contains("% Input data"));
    assert!(tex.contains("% Results"));
    assert_eq!(tex.matches("\\begin{tabular}").count(), 2);
    assert!(tex.contains("Star\\_1 \\& co"));
}

#[test]
fn latex_table_layout() {
    let rows = vec![vec!["A".to_string(), "1.00".to_string()]];
    let table = latex_table(&["Name", "Mv"], &rows);

    assert!(table.starts_with("\\begin{tabular}{lr}\n\\toprule\n"));
    assert!(table.contains("Name & Mv \\\\\n\\midrule\n"));
    assert!(table.contains("A & 1.00 \\\\\n"));
    assert!(table.ends_with("\\bottomrule\n\\end{tabular}\n"));
}

#[test]
fn xlsx_export_writes_one_workbook() {
    let dir = TempDir::new().unwrap();
    let observations = observations();
    let results = compute_all(&observations).unwrap();

    let written = export_tables(
        &observations,
        &results,
        ExportFormat::Xlsx,
        dir.path(),
        "20240101_120000",
    )
    .unwrap();

    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("results_20240101_120000.xlsx"));
    // An xlsx workbook is a zip archive
    let bytes = fs::read(&written[0]).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn latex_escapes_backslash_caret_and_tilde() {
    let rows = vec![vec![r"a\b^c~d".to_string(), "1.00".to_string()]];
    let table = latex_table(&["Name", "Mv"], &rows);
    assert!(table.contains(r"a\textbackslash{}b\^{}c\~{}d & 1.00"));
}
