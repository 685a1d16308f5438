use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Derived kinematic and photometric quantities for one star.
///
/// Fully determined by the [`RawObservation`](crate::RawObservation) it was
/// computed from and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct DerivedResult {
    pub name: String,
    pub proper_motion_arcsec_per_year: f64,
    pub distance_parsecs: f64,
    /// B - V
    pub color_index: f64,
    #[serde(rename = "absoluteMagnitudeMv")]
    pub absolute_magnitude_mv: f64,
    pub tangential_velocity_km_s: f64,
    pub total_space_velocity_km_s: f64,
}
