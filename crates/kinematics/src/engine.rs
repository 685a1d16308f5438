//! Closed-form kinematics for a single star.
//!
//! Every function is pure. Physically undefined inputs (zero elapsed time,
//! non-positive parallax or distance, non-finite values) are reported as
//! [`DomainError`] instead of leaking NaN or infinity into later formulas.

use units::{Angle, Length, ProperMotion, Time, Velocity, SECONDS_PER_YEAR};

use crate::error::{DomainError, Result};
use crate::observation::RawObservation;
use crate::result::DerivedResult;

/// km/s per (arcsec/year · parsec), the textbook shortcut for tangential
/// velocity. Only used to cross-check [`tangential_velocity`].
pub const TANGENTIAL_VELOCITY_FACTOR: f64 = 4.74;

/// Proper motion in arcsec/year from the displacement between two epochs.
///
/// # Arguments
/// * `angular_displacement` - Total angular shift between the epochs
/// * `elapsed` - Time between the epochs, must be positive
pub fn proper_motion(angular_displacement: Angle, elapsed: Time) -> Result<ProperMotion> {
    if !elapsed.is_positive() {
        return Err(DomainError::NonPositiveElapsedTime(elapsed.to_years()));
    }
    if !angular_displacement.to_arcsec().is_finite() {
        return Err(DomainError::NonFinite("angular displacement"));
    }
    Ok(angular_displacement / elapsed)
}

/// Distance in parsecs from a trigonometric parallax: `d = 1 / p`.
///
/// A zero or negative parallax has no finite distance and is rejected.
///
/// # Examples
/// ```
/// use kinematics::distance;
/// use units::Angle;
///
/// let d = distance(Angle::from_arcsec(0.1)).unwrap();
/// assert_eq!(d.to_parsecs(), 10.0);
/// assert!(distance(Angle::zero()).is_err());
/// ```
pub fn distance(parallax: Angle) -> Result<Length> {
    let p = parallax.to_arcsec();
    if p.is_nan() || p <= 0.0 {
        return Err(DomainError::NonPositiveParallax(p));
    }
    if p.is_infinite() {
        return Err(DomainError::NonFinite("parallax"));
    }
    // Subnormal parallaxes overflow
    let parsecs = 1.0 / p;
    if !parsecs.is_finite() {
        return Err(DomainError::NonFinite("distance"));
    }
    Ok(Length::from_parsecs(parsecs))
}

/// B - V color index
pub fn color_index(magnitude_b: f64, magnitude_v: f64) -> f64 {
    magnitude_b - magnitude_v
}

/// Absolute visual magnitude from the distance modulus:
/// `Mv = V - 5 (log10 d - 1)` with `d` in parsecs.
pub fn absolute_magnitude(magnitude_v: f64, distance: Length) -> Result<f64> {
    if !distance.is_positive() {
        return Err(DomainError::NonPositiveDistance(distance.to_parsecs()));
    }
    if !magnitude_v.is_finite() {
        return Err(DomainError::NonFinite("V magnitude"));
    }
    Ok(magnitude_v - 5.0 * (distance.log10() - 1.0))
}

/// Velocity across the line of sight.
///
/// Expanded in units rather than through [`TANGENTIAL_VELOCITY_FACTOR`]:
/// proper motion in rad/year times distance in km gives km/year, divided by
/// the seconds in a Julian year.
pub fn tangential_velocity(proper_motion: ProperMotion, distance: Length) -> Velocity {
    let km_per_year = proper_motion.to_rad_per_year() * distance.to_km();
    Velocity::from_km_per_sec(km_per_year / SECONDS_PER_YEAR)
}

/// Total space velocity, treating radial and tangential velocity as
/// orthogonal components.
pub fn total_velocity(radial: Velocity, tangential: Velocity) -> Velocity {
    radial.quadrature(tangential)
}

/// Runs the full pipeline for one observation.
///
/// Either every field of the result is computed or an error is returned;
/// there is no partially filled result.
pub fn compute(observation: &RawObservation) -> Result<DerivedResult> {
    let pm = proper_motion(
        observation.angular_displacement(),
        observation.elapsed_years(),
    )?;
    let d = distance(observation.parallax())?;
    let b_v = color_index(observation.magnitude_b(), observation.magnitude_v());
    let mv = absolute_magnitude(observation.magnitude_v(), d)?;
    let vt = tangential_velocity(pm, d);
    let v_total = total_velocity(observation.radial_velocity(), vt);

    Ok(DerivedResult {
        name: observation.name().to_string(),
        proper_motion_arcsec_per_year: pm.to_arcsec_per_year(),
        distance_parsecs: d.to_parsecs(),
        color_index: b_v,
        absolute_magnitude_mv: mv,
        tangential_velocity_km_s: vt.to_km_per_sec(),
        total_space_velocity_km_s: v_total.to_km_per_sec(),
    })
}
