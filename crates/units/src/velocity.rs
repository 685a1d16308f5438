use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

const METERS_PER_KM: f64 = 1000.0;

/// A stellar velocity component in km/s.
///
/// Radial velocities are signed: negative values mean the star is
/// approaching the observer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: km/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value / METERS_PER_KM)
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0 * METERS_PER_KM
    }

    /// Magnitude of the vector sum of two orthogonal components,
    /// `sqrt(self² + other²)`.
    ///
    /// # Examples
    /// ```
    /// use units::Velocity;
    ///
    /// let radial = Velocity::from_km_per_sec(-3.0);
    /// let tangential = Velocity::from_km_per_sec(4.0);
    /// assert_eq!(radial.quadrature(tangential).to_km_per_sec(), 5.0);
    /// ```
    pub fn quadrature(self, other: Velocity) -> Velocity {
        Velocity((self.0 * self.0 + other.0 * other.0).sqrt())
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity(-self.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
