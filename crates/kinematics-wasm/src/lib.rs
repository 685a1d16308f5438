//! WASM bindings for the stellar kinematics engine.
//!
//! This crate is the contract with the browser front-end: it submits a list
//! of star records and receives a list of result records. Values cross the
//! boundary as plain JS objects via `serde-wasm-bindgen`.
//!
//! Missing values are sent as `null` and dates as `"YYYY-MM-DD"` strings,
//! matching the JSON the command-line tool reads and writes.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

mod hr;
mod stars;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// The km/s per (arcsec/yr x pc) shortcut observers use for tangential
/// velocity. The engine itself converts units exactly.
#[wasm_bindgen]
pub fn tangential_velocity_factor() -> f64 {
    kinematics::TANGENTIAL_VELOCITY_FACTOR
}
