//! WASM bindings for HR diagram data.

use wasm_bindgen::prelude::*;

use kinematics::{compare_to_main_sequence, positions_for_plot, DerivedResult, MainSequenceComparison};
use stellar::sorted_reference_sequence;

use crate::{from_js, to_js};

/// The standard main sequence, ordered by color index.
///
/// Returns an array of `{ spectralType, colorIndex, absoluteMagnitude }`,
/// ready to draw as the reference curve.
#[wasm_bindgen]
pub fn reference_sequence() -> Result<JsValue, JsError> {
    to_js(sorted_reference_sequence())
}

/// HR diagram coordinates for computed results.
///
/// # Arguments
/// * `results` - Array of result objects (as returned by `compute_stars`)
///
/// # Returns
/// Array of `{ colorIndex, absoluteMagnitude, name }` in input order.
#[wasm_bindgen]
pub fn hr_positions(results: JsValue) -> Result<JsValue, JsError> {
    let results: Vec<DerivedResult> = from_js(results)?;
    to_js(&positions_for_plot(&results))
}

/// Position of each result relative to the main sequence.
#[wasm_bindgen]
pub fn main_sequence_comparison(results: JsValue) -> Result<JsValue, JsError> {
    let results: Vec<DerivedResult> = from_js(results)?;
    let comparisons: Vec<MainSequenceComparison> =
        results.iter().map(compare_to_main_sequence).collect();
    to_js(&comparisons)
}
