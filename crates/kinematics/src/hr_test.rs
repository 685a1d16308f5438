use approx::assert_relative_eq;

use crate::hr::{compare_to_main_sequence, positions_for_plot};
use crate::result::DerivedResult;

fn result(name: &str, color_index: f64, mv: f64) -> DerivedResult {
    DerivedResult {
        name: name.to_string(),
        proper_motion_arcsec_per_year: 0.5,
        distance_parsecs: 10.0,
        color_index,
        absolute_magnitude_mv: mv,
        tangential_velocity_km_s: 23.7,
        total_space_velocity_km_s: 31.0,
    }
}

#[test]
fn positions_are_a_straight_projection() {
    let results = vec![result("Sun-like", 0.65, 4.8), result("Red dwarf", 1.5, 10.2)];
    let points = positions_for_plot(&results);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].name, "Sun-like");
    assert_relative_eq!(points[0].color_index, 0.65);
    assert_relative_eq!(points[0].absolute_magnitude, 4.8);
    assert_eq!(points[1].name, "Red dwarf");
    assert_relative_eq!(points[1].color_index, 1.5);
    assert_relative_eq!(points[1].absolute_magnitude, 10.2);
}

#[test]
fn positions_keep_duplicates_and_order() {
    let results = vec![
        result("Dup", 0.1, 1.0),
        result("Other", 0.2, 2.0),
        result("Dup", 0.1, 1.0),
    ];
    let names: Vec<String> = positions_for_plot(&results)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Dup", "Other", "Dup"]);
}

#[test]
fn positions_of_nothing() {
    assert!(positions_for_plot(&[]).is_empty());
}

#[test]
fn dwarf_sits_on_main_sequence() {
    // G0 calibration point
    let comparison = compare_to_main_sequence(&result("Dwarf", 0.58, 4.4));
    assert_eq!(comparison.nearest_type, "G0");
    assert_relative_eq!(comparison.main_sequence_magnitude.unwrap(), 4.4, epsilon = 1e-12);
    assert_relative_eq!(comparison.magnitude_offset.unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn giant_is_brighter_than_main_sequence() {
    // Arcturus-like: K1.5 III, B-V 1.23, Mv -0.3
    let comparison = compare_to_main_sequence(&result("Giant", 1.23, -0.3));
    assert_eq!(comparison.nearest_type, "K5");
    assert!(comparison.magnitude_offset.unwrap() < -7.0);
}

#[test]
fn color_outside_table_has_no_offset() {
    let comparison = compare_to_main_sequence(&result("Very red", 2.4, 18.0));
    assert_eq!(comparison.nearest_type, "M8");
    assert_eq!(comparison.main_sequence_magnitude, None);
    assert_eq!(comparison.magnitude_offset, None);
}
