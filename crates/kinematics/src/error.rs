//! Error kinds for observation input and kinematic computation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::observation::ObservationField;

/// Raw input that violates an observation invariant.
///
/// Raised while building a [`RawObservation`](crate::RawObservation); the
/// engine itself never produces it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("star name is required")]
    EmptyName,

    #[error("missing value for {0}")]
    MissingField(ObservationField),

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: ObservationField, value: f64 },

    #[error("angular displacement must be positive, got {0} arcsec")]
    NonPositiveDisplacement(f64),

    #[error("parallax must be positive, got {0} arcsec")]
    NonPositiveParallax(f64),

    #[error("second observation date {second} must be later than the first {first}")]
    DatesNotIncreasing { first: NaiveDate, second: NaiveDate },
}

/// A physically undefined operation inside the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("elapsed time must be positive, got {0} years")]
    NonPositiveElapsedTime(f64),

    #[error("distance is undefined for parallax {0} arcsec")]
    NonPositiveParallax(f64),

    #[error("distance modulus is undefined for distance {0} pc")]
    NonPositiveDistance(f64),

    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

/// A [`DomainError`] attributed to one star of a batch.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("star #{index} '{name}': {source}")]
pub struct StarError {
    /// Position of the star in the submitted batch
    pub index: usize,
    pub name: String,
    pub source: DomainError,
}

pub type Result<T, E = DomainError> = std::result::Result<T, E>;
