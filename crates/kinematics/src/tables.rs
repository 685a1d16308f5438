//! Display rows for the input and result tables.
//!
//! Values are pre-formatted to the precision an observer reads them at, so
//! every exporter (terminal, CSV, LaTeX, spreadsheet) shows the same digits.
//! Angles carry four decimals, velocities and magnitudes two.

use crate::observation::RawObservation;
use crate::result::DerivedResult;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const INPUT_HEADERS: [&str; 9] = [
    "Name",
    "Displacement (\")",
    "1st observation",
    "2nd observation",
    "Δt (years)",
    "Parallax (\")",
    "Vr (km/s)",
    "B",
    "V",
];

pub const RESULT_HEADERS: [&str; 7] = [
    "Name",
    "Proper motion (\"/yr)",
    "Distance (pc)",
    "Color index (B-V)",
    "Mv",
    "Vt (km/s)",
    "V total (km/s)",
];

/// A formatted row of the input table
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow(pub [String; 9]);

impl InputRow {
    pub fn from_observation(observation: &RawObservation) -> Self {
        Self([
            observation.name().to_string(),
            format!("{:.4}", observation.angular_displacement().to_arcsec()),
            observation
                .observation_date_1()
                .format(DATE_FORMAT)
                .to_string(),
            observation
                .observation_date_2()
                .format(DATE_FORMAT)
                .to_string(),
            format!("{:.2}", observation.elapsed_years().to_years()),
            format!("{:.4}", observation.parallax().to_arcsec()),
            format!("{:.2}", observation.radial_velocity().to_km_per_sec()),
            format!("{:.2}", observation.magnitude_b()),
            format!("{:.2}", observation.magnitude_v()),
        ])
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

/// A formatted row of the result table
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow(pub [String; 7]);

impl ResultRow {
    pub fn from_result(result: &DerivedResult) -> Self {
        Self([
            result.name.clone(),
            format!("{:.4}", result.proper_motion_arcsec_per_year),
            format!("{:.2}", result.distance_parsecs),
            format!("{:.2}", result.color_index),
            format!("{:.2}", result.absolute_magnitude_mv),
            format!("{:.2}", result.tangential_velocity_km_s),
            format!("{:.2}", result.total_space_velocity_km_s),
        ])
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl AsRef<[String]> for InputRow {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl AsRef<[String]> for ResultRow {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

pub fn input_rows(observations: &[RawObservation]) -> Vec<InputRow> {
    observations.iter().map(InputRow::from_observation).collect()
}

pub fn result_rows(results: &[DerivedResult]) -> Vec<ResultRow> {
    results.iter().map(ResultRow::from_result).collect()
}
