use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Kilometres in one parsec, to the four figures used for tangential velocities
pub const PARSEC_TO_KM: f64 = 3.086e13;
pub const PARSEC_TO_LIGHT_YEARS: f64 = 3.26156;
pub const PARSEC_TO_AU: f64 = 206_264.806;

/// A stellar distance using f64 precision.
///
/// Parsecs are the base unit: a parallax of one arcsecond corresponds to
/// exactly one parsec, which keeps the parallax inversion free of constants.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let sirius = Length::from_parsecs(2.64);
/// let km = sirius.to_km();
/// let ly = sirius.to_light_years();
/// assert!(km > 8.0e13);
/// assert!(ly > 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: parsecs

impl Length {
    /// Creates a new `Length` from a value in parsecs.
    pub fn from_parsecs(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / PARSEC_TO_KM)
    }

    /// Creates a new `Length` from a value in light years.
    pub fn from_light_years(value: f64) -> Self {
        Self(value / PARSEC_TO_LIGHT_YEARS)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value / PARSEC_TO_AU)
    }

    /// Returns the length in parsecs.
    pub fn to_parsecs(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * PARSEC_TO_KM
    }

    /// Converts the length to light years.
    pub fn to_light_years(&self) -> f64 {
        self.0 * PARSEC_TO_LIGHT_YEARS
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 * PARSEC_TO_AU
    }

    /// Base-10 logarithm of the distance in parsecs
    pub fn log10(&self) -> f64 {
        self.0.log10()
    }

    /// Returns true for a finite, strictly positive distance
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
