//! Observation records for one star.
//!
//! [`ObservationDraft`] is the incomplete state an input form or a catalog
//! lookup works on; [`RawObservation`] is the validated record the engine
//! accepts. The only way from one to the other is [`ObservationDraft::build`],
//! so every invariant is checked exactly once, at construction.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use units::{Angle, Time, Velocity};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::ValidationError;

/// Input fields of an observation, used to attribute validation failures
/// and to report which fields a catalog lookup filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ObservationField {
    Name,
    AngularDisplacement,
    ObservationDate1,
    ObservationDate2,
    Parallax,
    RadialVelocity,
    MagnitudeB,
    MagnitudeV,
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            ObservationField::Name => "name",
            ObservationField::AngularDisplacement => "angular displacement",
            ObservationField::ObservationDate1 => "first observation date",
            ObservationField::ObservationDate2 => "second observation date",
            ObservationField::Parallax => "parallax",
            ObservationField::RadialVelocity => "radial velocity",
            ObservationField::MagnitudeB => "B magnitude",
            ObservationField::MagnitudeV => "V magnitude",
        };
        write!(f, "{}", str)
    }
}

/// One star's measurements, every field possibly still missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ObservationDraft {
    #[serde(default)]
    pub name: Option<String>,
    /// Total angular shift between the two epochs, arcsec
    #[serde(default)]
    pub angular_displacement_arcsec: Option<f64>,
    #[serde(default)]
    #[cfg_attr(feature = "tsify", tsify(type = "string | undefined"))]
    pub observation_date_1: Option<NaiveDate>,
    #[serde(default)]
    #[cfg_attr(feature = "tsify", tsify(type = "string | undefined"))]
    pub observation_date_2: Option<NaiveDate>,
    #[serde(default)]
    pub parallax_arcsec: Option<f64>,
    /// Negative when approaching
    #[serde(default)]
    pub radial_velocity_km_s: Option<f64>,
    #[serde(default)]
    pub magnitude_b: Option<f64>,
    #[serde(default)]
    pub magnitude_v: Option<f64>,
}

impl ObservationDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Fields that still need a value before the draft can be built
    pub fn missing_fields(&self) -> Vec<ObservationField> {
        let mut missing = Vec::new();
        if self.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            missing.push(ObservationField::Name);
        }
        if self.angular_displacement_arcsec.is_none() {
            missing.push(ObservationField::AngularDisplacement);
        }
        if self.observation_date_1.is_none() {
            missing.push(ObservationField::ObservationDate1);
        }
        if self.observation_date_2.is_none() {
            missing.push(ObservationField::ObservationDate2);
        }
        if self.parallax_arcsec.is_none() {
            missing.push(ObservationField::Parallax);
        }
        if self.radial_velocity_km_s.is_none() {
            missing.push(ObservationField::RadialVelocity);
        }
        if self.magnitude_b.is_none() {
            missing.push(ObservationField::MagnitudeB);
        }
        if self.magnitude_v.is_none() {
            missing.push(ObservationField::MagnitudeV);
        }
        missing
    }

    /// Validates the draft into an engine-ready observation.
    pub fn build(&self) -> Result<RawObservation, ValidationError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let displacement = require(
            self.angular_displacement_arcsec,
            ObservationField::AngularDisplacement,
        )?;
        let date_1 = self
            .observation_date_1
            .ok_or(ValidationError::MissingField(ObservationField::ObservationDate1))?;
        let date_2 = self
            .observation_date_2
            .ok_or(ValidationError::MissingField(ObservationField::ObservationDate2))?;
        let parallax = require(self.parallax_arcsec, ObservationField::Parallax)?;
        let radial_velocity = require(self.radial_velocity_km_s, ObservationField::RadialVelocity)?;
        let magnitude_b = require(self.magnitude_b, ObservationField::MagnitudeB)?;
        let magnitude_v = require(self.magnitude_v, ObservationField::MagnitudeV)?;

        RawObservation::new(
            name,
            Angle::from_arcsec(displacement),
            date_1,
            date_2,
            Angle::from_arcsec(parallax),
            Velocity::from_km_per_sec(radial_velocity),
            magnitude_b,
            magnitude_v,
        )
    }
}

fn require(value: Option<f64>, field: ObservationField) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field, value });
    }
    Ok(value)
}

/// A fully validated two-epoch observation of one star.
///
/// Invariants, checked by [`RawObservation::new`]:
/// * the name is non-empty
/// * the angular displacement and the parallax are finite and positive
/// * the second date is strictly later than the first
/// * radial velocity and magnitudes are finite
///
/// The elapsed time between the epochs is derived once, as days / 365.25,
/// and stored with the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ObservationDraft")]
pub struct RawObservation {
    name: String,
    #[serde(rename = "angularDisplacementArcsec")]
    angular_displacement: Angle,
    observation_date_1: NaiveDate,
    observation_date_2: NaiveDate,
    elapsed_years: Time,
    #[serde(rename = "parallaxArcsec")]
    parallax: Angle,
    #[serde(rename = "radialVelocityKmS")]
    radial_velocity: Velocity,
    magnitude_b: f64,
    magnitude_v: f64,
}

impl RawObservation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        angular_displacement: Angle,
        observation_date_1: NaiveDate,
        observation_date_2: NaiveDate,
        parallax: Angle,
        radial_velocity: Velocity,
        magnitude_b: f64,
        magnitude_v: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let displacement = angular_displacement.to_arcsec();
        if !displacement.is_finite() {
            return Err(ValidationError::NonFinite {
                field: ObservationField::AngularDisplacement,
                value: displacement,
            });
        }
        if displacement <= 0.0 {
            return Err(ValidationError::NonPositiveDisplacement(displacement));
        }

        if observation_date_2 <= observation_date_1 {
            return Err(ValidationError::DatesNotIncreasing {
                first: observation_date_1,
                second: observation_date_2,
            });
        }

        let plx = parallax.to_arcsec();
        if !plx.is_finite() {
            return Err(ValidationError::NonFinite {
                field: ObservationField::Parallax,
                value: plx,
            });
        }
        if plx <= 0.0 {
            return Err(ValidationError::NonPositiveParallax(plx));
        }

        for (field, value) in [
            (
                ObservationField::RadialVelocity,
                radial_velocity.to_km_per_sec(),
            ),
            (ObservationField::MagnitudeB, magnitude_b),
            (ObservationField::MagnitudeV, magnitude_v),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field, value });
            }
        }

        Ok(Self {
            name,
            angular_displacement,
            observation_date_1,
            observation_date_2,
            elapsed_years: Time::from_day_count(
                (observation_date_2 - observation_date_1).num_days(),
            ),
            parallax,
            radial_velocity,
            magnitude_b,
            magnitude_v,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn angular_displacement(&self) -> Angle {
        self.angular_displacement
    }

    pub fn observation_date_1(&self) -> NaiveDate {
        self.observation_date_1
    }

    pub fn observation_date_2(&self) -> NaiveDate {
        self.observation_date_2
    }

    /// Time between the two epochs in Julian years
    pub fn elapsed_years(&self) -> Time {
        self.elapsed_years
    }

    pub fn parallax(&self) -> Angle {
        self.parallax
    }

    pub fn radial_velocity(&self) -> Velocity {
        self.radial_velocity
    }

    pub fn magnitude_b(&self) -> f64 {
        self.magnitude_b
    }

    pub fn magnitude_v(&self) -> f64 {
        self.magnitude_v
    }

    /// Turns the record back into an editable draft
    pub fn to_draft(&self) -> ObservationDraft {
        ObservationDraft {
            name: Some(self.name.clone()),
            angular_displacement_arcsec: Some(self.angular_displacement.to_arcsec()),
            observation_date_1: Some(self.observation_date_1),
            observation_date_2: Some(self.observation_date_2),
            parallax_arcsec: Some(self.parallax.to_arcsec()),
            radial_velocity_km_s: Some(self.radial_velocity.to_km_per_sec()),
            magnitude_b: Some(self.magnitude_b),
            magnitude_v: Some(self.magnitude_v),
        }
    }
}

impl TryFrom<ObservationDraft> for RawObservation {
    type Error = ValidationError;

    fn try_from(draft: ObservationDraft) -> Result<Self, Self::Error> {
        draft.build()
    }
}
