use approx::assert_relative_eq;
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use units::{Angle, Length, ProperMotion, Time, Velocity};

use crate::engine::{
    absolute_magnitude, color_index, compute, distance, proper_motion, tangential_velocity,
    total_velocity, TANGENTIAL_VELOCITY_FACTOR,
};
use crate::error::DomainError;
use crate::observation::RawObservation;

const SAMPLES: usize = 1_000;

// ============================================================================
// proper_motion
// ============================================================================

#[test]
fn proper_motion_is_displacement_over_time() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let d: f64 = rng.random_range(1e-3..100.0);
        let t: f64 = rng.random_range(1e-3..50.0);
        let pm = proper_motion(Angle::from_arcsec(d), Time::from_years(t)).unwrap();
        assert_relative_eq!(pm.to_arcsec_per_year(), d / t, max_relative = 1e-9);
    }
}

#[test]
fn proper_motion_rejects_non_positive_elapsed_time() {
    let shift = Angle::from_arcsec(0.5);
    assert_eq!(
        proper_motion(shift, Time::zero()),
        Err(DomainError::NonPositiveElapsedTime(0.0))
    );
    assert_eq!(
        proper_motion(shift, Time::from_years(-1.0)),
        Err(DomainError::NonPositiveElapsedTime(-1.0))
    );
    assert!(proper_motion(shift, Time::from_years(f64::NAN)).is_err());
}

#[test]
fn proper_motion_rejects_non_finite_displacement() {
    assert_eq!(
        proper_motion(Angle::from_arcsec(f64::INFINITY), Time::from_years(1.0)),
        Err(DomainError::NonFinite("angular displacement"))
    );
}

// ============================================================================
// distance
// ============================================================================

#[test]
fn distance_is_inverse_parallax() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let p: f64 = rng.random_range(1e-4..1.0);
        let d = distance(Angle::from_arcsec(p)).unwrap();
        assert_relative_eq!(d.to_parsecs(), 1.0 / p, max_relative = 1e-12);
    }
}

#[test]
fn distance_decreases_with_parallax() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    for _ in 0..SAMPLES {
        let a: f64 = rng.random_range(1e-4..1.0);
        let b: f64 = a * rng.random_range(1.001..10.0);
        let near = distance(Angle::from_arcsec(b)).unwrap();
        let far = distance(Angle::from_arcsec(a)).unwrap();
        assert!(far > near, "parallax {a} should be farther than {b}");
    }
}

#[test]
fn distance_rejects_zero_and_negative_parallax() {
    assert_eq!(
        distance(Angle::zero()),
        Err(DomainError::NonPositiveParallax(0.0))
    );
    assert_eq!(
        distance(Angle::from_arcsec(-0.01)),
        Err(DomainError::NonPositiveParallax(-0.01))
    );
    assert!(distance(Angle::from_arcsec(f64::NAN)).is_err());
}

#[test]
fn distance_rejects_overflowing_parallax() {
    assert_eq!(
        distance(Angle::from_arcsec(1e-320)),
        Err(DomainError::NonFinite("distance"))
    );
}

// ============================================================================
// color_index
// ============================================================================

#[test]
fn color_index_is_b_minus_v() {
    assert_relative_eq!(color_index(6.0, 5.5), 0.5);
    assert_relative_eq!(color_index(-1.46, -1.46), 0.0);
    // Blue stars have negative B-V
    assert_relative_eq!(color_index(-0.3, 0.0), -0.3);
    assert_relative_eq!(color_index(-2.0, -3.5), 1.5);
}

// ============================================================================
// absolute_magnitude
// ============================================================================

#[test]
fn absolute_magnitude_at_ten_parsecs_equals_apparent() {
    let mv = absolute_magnitude(5.5, Length::from_parsecs(10.0)).unwrap();
    assert_relative_eq!(mv, 5.5);
}

#[test]
fn absolute_magnitude_distance_modulus() {
    // 100 pc is a distance modulus of 5
    let mv = absolute_magnitude(8.0, Length::from_parsecs(100.0)).unwrap();
    assert_relative_eq!(mv, 3.0, epsilon = 1e-12);

    // 1 pc brings the star 5 magnitudes fainter
    let mv = absolute_magnitude(0.0, Length::from_parsecs(1.0)).unwrap();
    assert_relative_eq!(mv, 5.0, epsilon = 1e-12);
}

#[test]
fn absolute_magnitude_decreases_with_distance() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let v: f64 = rng.random_range(-2.0..15.0);
        let d1: f64 = rng.random_range(1.0..5_000.0);
        let d2: f64 = d1 * rng.random_range(1.01..10.0);
        let near = absolute_magnitude(v, Length::from_parsecs(d1)).unwrap();
        let far = absolute_magnitude(v, Length::from_parsecs(d2)).unwrap();
        assert!(far < near);
    }
}

#[test]
fn absolute_magnitude_rejects_non_positive_distance() {
    assert_eq!(
        absolute_magnitude(5.0, Length::from_parsecs(0.0)),
        Err(DomainError::NonPositiveDistance(0.0))
    );
    assert_eq!(
        absolute_magnitude(5.0, Length::from_parsecs(-3.0)),
        Err(DomainError::NonPositiveDistance(-3.0))
    );
    assert!(absolute_magnitude(5.0, Length::from_parsecs(f64::INFINITY)).is_err());
}

// ============================================================================
// tangential_velocity
// ============================================================================

#[test]
fn tangential_velocity_matches_shortcut() {
    let mut rng = ChaChaRng::seed_from_u64(1234);
    for _ in 0..SAMPLES {
        let pm: f64 = rng.random_range(1e-3..10.0);
        let d: f64 = rng.random_range(1.0..1_000.0);
        let vt = tangential_velocity(
            ProperMotion::from_arcsec_per_year(pm),
            Length::from_parsecs(d),
        );
        let shortcut = TANGENTIAL_VELOCITY_FACTOR * pm * d;
        assert_relative_eq!(vt.to_km_per_sec(), shortcut, max_relative = 1e-3);
    }
}

#[test]
fn tangential_velocity_unit_expansion() {
    // 1"/yr at 1 pc: 4.8481e-6 rad * 3.086e13 km / 31557600 s
    let vt = tangential_velocity(
        ProperMotion::from_arcsec_per_year(1.0),
        Length::from_parsecs(1.0),
    );
    assert_relative_eq!(vt.to_km_per_sec(), 4.741, epsilon = 1e-3);
}

#[test]
fn tangential_velocity_scales_linearly() {
    let base = tangential_velocity(
        ProperMotion::from_arcsec_per_year(0.2),
        Length::from_parsecs(50.0),
    );
    let doubled = tangential_velocity(
        ProperMotion::from_arcsec_per_year(0.4),
        Length::from_parsecs(50.0),
    );
    assert_relative_eq!(doubled.to_km_per_sec(), 2.0 * base.to_km_per_sec());
}

// ============================================================================
// total_velocity
// ============================================================================

#[test]
fn total_velocity_is_euclidean_norm() {
    let mut rng = ChaChaRng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let vr: f64 = rng.random_range(-500.0..500.0);
        let vt: f64 = rng.random_range(0.0..500.0);
        let v = total_velocity(Velocity::from_km_per_sec(vr), Velocity::from_km_per_sec(vt));
        assert_relative_eq!(v.to_km_per_sec(), (vr * vr + vt * vt).sqrt());
    }
}

#[test]
fn total_velocity_ignores_radial_sign() {
    let vt = Velocity::from_km_per_sec(23.7);
    let receding = total_velocity(Velocity::from_km_per_sec(20.0), vt);
    let approaching = total_velocity(Velocity::from_km_per_sec(-20.0), vt);
    assert_eq!(receding, approaching);
}

// ============================================================================
// compute
// ============================================================================

fn observation(parallax: f64) -> RawObservation {
    RawObservation::new(
        "Altair",
        Angle::from_arcsec(0.5),
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        Angle::from_arcsec(parallax),
        Velocity::from_km_per_sec(20.0),
        6.0,
        5.5,
    )
    .unwrap()
}

#[test]
fn compute_reference_scenario() {
    let result = compute(&observation(0.1)).unwrap();

    let elapsed = 366.0 / 365.25;
    assert_eq!(result.name, "Altair");
    assert_relative_eq!(result.proper_motion_arcsec_per_year, 0.5 / elapsed);
    assert_relative_eq!(result.proper_motion_arcsec_per_year, 0.49898, epsilon = 1e-5);
    assert_relative_eq!(result.distance_parsecs, 10.0);
    assert_relative_eq!(result.color_index, 0.5);
    assert_relative_eq!(result.absolute_magnitude_mv, 5.5);
    assert_relative_eq!(
        result.tangential_velocity_km_s,
        TANGENTIAL_VELOCITY_FACTOR * result.proper_motion_arcsec_per_year * 10.0,
        max_relative = 1e-3
    );
    assert_relative_eq!(result.tangential_velocity_km_s, 23.66, epsilon = 0.01);
    assert_relative_eq!(result.total_space_velocity_km_s, 30.98, epsilon = 0.01);
}

#[test]
fn compute_is_deterministic() {
    let obs = observation(0.037);
    assert_eq!(compute(&obs).unwrap(), compute(&obs).unwrap());
}

#[test]
fn compute_fails_atomically() {
    assert_eq!(
        compute(&observation(1e-320)),
        Err(DomainError::NonFinite("distance"))
    );
}
