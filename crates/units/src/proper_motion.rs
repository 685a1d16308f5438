use serde::{Deserialize, Serialize};
use std::ops::Div;

use crate::angle::{Angle, ARCSEC_TO_RAD};
use crate::time::Time;

/// Total proper motion in arcsec/year
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProperMotion(f64);

impl ProperMotion {
    pub fn from_arcsec_per_year(value: f64) -> Self {
        Self(value)
    }

    pub fn to_arcsec_per_year(&self) -> f64 {
        self.0
    }

    pub fn to_milliarcsec_per_year(&self) -> f64 {
        self.0 * 1000.0
    }

    pub fn to_rad_per_year(&self) -> f64 {
        self.0 * ARCSEC_TO_RAD
    }
}

/// Angular displacement over an elapsed time
impl Div<Time> for Angle {
    type Output = ProperMotion;

    fn div(self, rhs: Time) -> ProperMotion {
        ProperMotion(self.to_arcsec() / rhs.to_years())
    }
}
