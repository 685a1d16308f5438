use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;
pub const MILLIARCSEC_PER_ARCSEC: f64 = 1000.0;

/// One arcsecond expressed in radians: π / (180 · 3600)
pub const ARCSEC_TO_RAD: f64 = PI / (180.0 * ARCSEC_PER_DEGREE);

/// A small sky angle using f64 precision.
///
/// Arcseconds are the base unit, since both angular displacements between
/// epochs and trigonometric parallaxes are quoted in arcseconds.
///
/// # Examples
///
/// ```rust
/// use units::Angle;
///
/// let parallax = Angle::from_milliarcsec(100.0);
/// assert_eq!(parallax.to_arcsec(), 0.1);
///
/// let shift = Angle::from_degrees(1.0);
/// assert_eq!(shift.to_arcsec(), 3600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: arcseconds

impl Angle {
    /// Creates a zero angle
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Angle` from a value in arcseconds.
    pub fn from_arcsec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Angle` from a value in milliarcseconds.
    ///
    /// Catalogs such as SIMBAD and Gaia publish parallaxes in mas.
    pub fn from_milliarcsec(value: f64) -> Self {
        Self(value / MILLIARCSEC_PER_ARCSEC)
    }

    /// Creates a new `Angle` from a value in degrees.
    pub fn from_degrees(value: f64) -> Self {
        Self(value * ARCSEC_PER_DEGREE)
    }

    /// Creates a new `Angle` from a value in radians.
    pub fn from_radians(value: f64) -> Self {
        Self(value / ARCSEC_TO_RAD)
    }

    /// Returns the angle in arcseconds.
    pub fn to_arcsec(&self) -> f64 {
        self.0
    }

    /// Converts the angle to milliarcseconds.
    pub fn to_milliarcsec(&self) -> f64 {
        self.0 * MILLIARCSEC_PER_ARCSEC
    }

    /// Converts the angle to degrees.
    pub fn to_degrees(&self) -> f64 {
        self.0 / ARCSEC_PER_DEGREE
    }

    /// Converts the angle to radians.
    pub fn to_radians(&self) -> f64 {
        self.0 * ARCSEC_TO_RAD
    }

    /// Returns true for a finite, strictly positive angle
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Angle {
        Angle(self.0 / rhs)
    }
}
