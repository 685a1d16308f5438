//! Partial star records from an astronomical catalog.
//!
//! A catalog query returns whatever it has for a star: radial velocity,
//! parallax and B/V photometry, any of them possibly missing. Records are
//! merged into an [`ObservationDraft`]; the angular displacement and the
//! observation dates always come from the observer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use units::Angle;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::observation::{ObservationDraft, ObservationField};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("no catalog entry for '{0}'")]
    NotFound(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("a star name is required for a catalog lookup")]
    MissingName,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CatalogRecord {
    pub name: String,
    #[serde(default)]
    pub radial_velocity_km_s: Option<f64>,
    #[serde(default)]
    pub parallax_arcsec: Option<f64>,
    #[serde(default)]
    pub magnitude_b: Option<f64>,
    #[serde(default)]
    pub magnitude_v: Option<f64>,
}

impl CatalogRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the parallax from a catalog value in milliarcseconds
    pub fn with_parallax_milliarcsec(mut self, parallax_mas: f64) -> Self {
        self.parallax_arcsec = Some(Angle::from_milliarcsec(parallax_mas).to_arcsec());
        self
    }

    /// True when the catalog knew the star but had none of the usable fields
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    fn fields(&self) -> [(ObservationField, Option<f64>); 4] {
        [
            (ObservationField::RadialVelocity, self.radial_velocity_km_s),
            (ObservationField::Parallax, self.parallax_arcsec),
            (ObservationField::MagnitudeB, self.magnitude_b),
            (ObservationField::MagnitudeV, self.magnitude_v),
        ]
    }
}

/// Anything that can answer "what do you know about this star?"
pub trait CatalogSource {
    fn lookup(&self, name: &str) -> Result<CatalogRecord, LookupError>;
}

/// A catalog held in memory, keyed by case-insensitive star name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: HashMap<String, CatalogRecord>,
}

fn catalog_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Adds a record, replacing any previous entry with the same name
    pub fn insert(&mut self, record: CatalogRecord) {
        self.records.insert(catalog_key(&record.name), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CatalogSource for InMemoryCatalog {
    fn lookup(&self, name: &str) -> Result<CatalogRecord, LookupError> {
        self.records
            .get(&catalog_key(name))
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.trim().to_string()))
    }
}

impl ObservationDraft {
    fn slot(&mut self, field: ObservationField) -> Option<&mut Option<f64>> {
        match field {
            ObservationField::RadialVelocity => Some(&mut self.radial_velocity_km_s),
            ObservationField::Parallax => Some(&mut self.parallax_arcsec),
            ObservationField::MagnitudeB => Some(&mut self.magnitude_b),
            ObservationField::MagnitudeV => Some(&mut self.magnitude_v),
            _ => None,
        }
    }

    fn merge(&mut self, record: &CatalogRecord, overwrite: bool) -> Vec<ObservationField> {
        let mut filled = Vec::new();
        for (field, value) in record.fields() {
            let (Some(value), Some(slot)) = (value, self.slot(field)) else {
                continue;
            };
            if overwrite || slot.is_none() {
                *slot = Some(value);
                filled.push(field);
            }
        }
        debug!(star = %record.name, ?filled, overwrite, "merged catalog record");
        filled
    }

    /// Copies every value the catalog has into the draft, replacing what was
    /// there. Absent catalog fields leave the draft untouched.
    ///
    /// Returns the fields that were written; an empty list means the star
    /// was found but the catalog had nothing usable.
    pub fn merge_catalog(&mut self, record: &CatalogRecord) -> Vec<ObservationField> {
        self.merge(record, true)
    }

    /// Like [`merge_catalog`](Self::merge_catalog) but only fills fields the
    /// draft does not have yet.
    pub fn fill_missing_from_catalog(&mut self, record: &CatalogRecord) -> Vec<ObservationField> {
        self.merge(record, false)
    }
}

/// Looks the draft's star up in `source` and fills its missing fields.
pub fn complete_from_catalog(
    source: &impl CatalogSource,
    draft: &mut ObservationDraft,
) -> Result<Vec<ObservationField>, LookupError> {
    let name = draft
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(LookupError::MissingName)?;
    let record = source.lookup(name)?;
    Ok(draft.fill_missing_from_catalog(&record))
}
