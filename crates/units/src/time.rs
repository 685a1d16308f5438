use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Julian year length used to turn an epoch difference in days into years
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // 365.25 * 86400
const SECONDS_PER_DAY: f64 = 86_400.0;

/// The baseline between two observing epochs, in Julian years.
///
/// Proper motions are quoted per year and a baseline is usually a whole
/// number of calendar days, so the day count is the natural constructor.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// // 2020-01-01 to 2021-01-01 crosses a leap day
/// let baseline = Time::from_day_count(366);
/// assert!(baseline.to_years() > 1.0);
/// assert!(baseline.is_positive());
///
/// assert_eq!(Time::from_years(1.0).to_seconds(), units::SECONDS_PER_YEAR);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64);

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_years(years: f64) -> Self {
        Self(years)
    }

    pub fn from_days(days: f64) -> Self {
        Self(days / DAYS_PER_YEAR)
    }

    /// Baseline of `days` whole calendar days, as produced by a date difference.
    pub fn from_day_count(days: i64) -> Self {
        Self::from_days(days as f64)
    }

    pub fn from_seconds(seconds: f64) -> Self {
        Self(seconds / SECONDS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }

    pub fn to_seconds(&self) -> f64 {
        self.to_days() * SECONDS_PER_DAY
    }

    /// True for a finite baseline strictly greater than zero. Only such a
    /// baseline can turn an angular shift into a rate.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} yr", precision, self.0),
            None => write!(f, "{} yr", self.0),
        }
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}
