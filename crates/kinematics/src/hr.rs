//! Placing computed stars on the HR diagram.

use serde::{Deserialize, Serialize};
use stellar::{main_sequence_magnitude, nearest_reference};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::result::DerivedResult;

/// One analyzed star on the HR diagram: x = B-V, y = Mv.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HrPoint {
    pub color_index: f64,
    pub absolute_magnitude: f64,
    pub name: String,
}

/// Projects results onto HR diagram coordinates, keeping their order.
/// Duplicated names are kept as separate points.
pub fn positions_for_plot(results: &[DerivedResult]) -> Vec<HrPoint> {
    results
        .iter()
        .map(|result| HrPoint {
            color_index: result.color_index,
            absolute_magnitude: result.absolute_magnitude_mv,
            name: result.name.clone(),
        })
        .collect()
}

/// Where a star sits relative to the reference main sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct MainSequenceComparison {
    pub name: String,
    /// Spectral type of the reference star with the closest color index
    pub nearest_type: String,
    /// Main-sequence Mv at the star's color, if the color is within the table
    pub main_sequence_magnitude: Option<f64>,
    /// Mv minus the main-sequence Mv; negative means brighter than a dwarf
    /// of the same color (a giant candidate), positive means fainter
    pub magnitude_offset: Option<f64>,
}

pub fn compare_to_main_sequence(result: &DerivedResult) -> MainSequenceComparison {
    let reference_mv = main_sequence_magnitude(result.color_index);
    MainSequenceComparison {
        name: result.name.clone(),
        nearest_type: nearest_reference(result.color_index)
            .spectral_type
            .to_string(),
        main_sequence_magnitude: reference_mv,
        magnitude_offset: reference_mv.map(|mv| result.absolute_magnitude_mv - mv),
    }
}
