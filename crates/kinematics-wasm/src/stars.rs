//! WASM bindings for star records and the kinematics batch.

use std::cell::RefCell;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use kinematics::{
    compute_all, compute_each, CatalogRecord, DerivedResult, ObservationDraft, ObservationField,
    RawObservation,
};

use crate::{from_js, to_js};

// Stars added through the input form (WASM is single-threaded)
thread_local! {
    static SESSION_STARS: RefCell<Vec<RawObservation>> = const { RefCell::new(Vec::new()) };
}

fn build_drafts(drafts: Vec<ObservationDraft>) -> Result<Vec<RawObservation>, JsError> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.build().map_err(|err| {
                let name = draft.name.as_deref().unwrap_or("<unnamed>");
                JsError::new(&format!("star #{index} '{name}': {err}"))
            })
        })
        .collect()
}

fn compute_strict(observations: &[RawObservation]) -> Result<JsValue, JsError> {
    let results = compute_all(observations).map_err(|err| JsError::new(&err.to_string()))?;
    to_js(&results)
}

/// Compute derived quantities for a list of star records.
///
/// # Arguments
/// * `observations` - Array of observation objects (`name`,
///   `angularDisplacementArcsec`, `observationDate1`, `observationDate2`,
///   `parallaxArcsec`, `radialVelocityKmS`, `magnitudeB`, `magnitudeV`)
///
/// # Returns
/// Array of results in the same order. Fails on the first invalid or
/// uncomputable star, naming it in the error message.
#[wasm_bindgen]
pub fn compute_stars(observations: JsValue) -> Result<JsValue, JsError> {
    let drafts: Vec<ObservationDraft> = from_js(observations)?;
    let observations = build_drafts(drafts)?;
    compute_strict(&observations)
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum StarOutcome {
    Ok {
        result: DerivedResult,
    },
    Error {
        index: usize,
        name: Option<String>,
        message: String,
    },
}

/// Like `compute_stars`, but never fails as a whole.
///
/// # Returns
/// One entry per input star: `{ status: "ok", result }` or
/// `{ status: "error", index, name, message }`.
#[wasm_bindgen]
pub fn compute_stars_lenient(observations: JsValue) -> Result<JsValue, JsError> {
    let drafts: Vec<ObservationDraft> = from_js(observations)?;

    let mut outcomes = Vec::with_capacity(drafts.len());
    let mut valid = Vec::new();
    let mut valid_slots = Vec::new();
    for (index, draft) in drafts.iter().enumerate() {
        match draft.build() {
            Ok(observation) => {
                valid_slots.push(index);
                valid.push(observation);
                outcomes.push(None);
            }
            Err(err) => outcomes.push(Some(StarOutcome::Error {
                index,
                name: draft.name.clone(),
                message: err.to_string(),
            })),
        }
    }

    for (slot, outcome) in valid_slots.into_iter().zip(compute_each(&valid)) {
        outcomes[slot] = Some(match outcome {
            Ok(result) => StarOutcome::Ok { result },
            Err(err) => StarOutcome::Error {
                index: slot,
                name: Some(err.name.clone()),
                message: err.source.to_string(),
            },
        });
    }

    let outcomes: Vec<StarOutcome> = outcomes.into_iter().flatten().collect();
    to_js(&outcomes)
}

/// Validate a form entry and add it to the session list.
///
/// # Returns
/// The number of stars in the session after adding.
#[wasm_bindgen]
pub fn add_star(draft: JsValue) -> Result<usize, JsError> {
    let draft: ObservationDraft = from_js(draft)?;
    let observation = draft
        .build()
        .map_err(|err| JsError::new(&err.to_string()))?;
    Ok(SESSION_STARS.with(|stars| {
        let mut stars = stars.borrow_mut();
        stars.push(observation);
        stars.len()
    }))
}

/// Remove the star at `index` from the session list.
#[wasm_bindgen]
pub fn remove_star(index: usize) -> Result<(), JsError> {
    SESSION_STARS.with(|stars| {
        let mut stars = stars.borrow_mut();
        if index >= stars.len() {
            return Err(JsError::new(&format!(
                "no star at index {index}, session has {}",
                stars.len()
            )));
        }
        stars.remove(index);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn clear_stars() {
    SESSION_STARS.with(|stars| stars.borrow_mut().clear());
}

/// Stars currently in the session, as observation objects.
#[wasm_bindgen]
pub fn session_stars() -> Result<JsValue, JsError> {
    SESSION_STARS.with(|stars| to_js(&*stars.borrow()))
}

/// Compute results for every star in the session list.
#[wasm_bindgen]
pub fn compute_session() -> Result<JsValue, JsError> {
    SESSION_STARS.with(|stars| compute_strict(&stars.borrow()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MergeOutcome {
    draft: ObservationDraft,
    filled: Vec<ObservationField>,
}

/// Merge a catalog lookup into a form draft.
///
/// # Arguments
/// * `draft` - The form's current (possibly partial) observation
/// * `record` - Catalog record with any of `radialVelocityKmS`,
///   `parallaxArcsec`, `magnitudeB`, `magnitudeV`
///
/// # Returns
/// `{ draft, filled }` where `filled` lists the fields the catalog supplied.
/// An empty `filled` means the star was found without usable data.
#[wasm_bindgen]
pub fn merge_catalog_record(draft: JsValue, record: JsValue) -> Result<JsValue, JsError> {
    let mut draft: ObservationDraft = from_js(draft)?;
    let record: CatalogRecord = from_js(record)?;
    let filled = draft.merge_catalog(&record);
    to_js(&MergeOutcome { draft, filled })
}
