use approx::assert_relative_eq;

use crate::catalog::{
    complete_from_catalog, CatalogRecord, CatalogSource, InMemoryCatalog, LookupError,
};
use crate::observation::{ObservationDraft, ObservationField};

fn sirius() -> CatalogRecord {
    CatalogRecord {
        name: "Sirius".to_string(),
        radial_velocity_km_s: Some(-5.5),
        parallax_arcsec: Some(0.37921),
        magnitude_b: Some(-1.46),
        magnitude_v: Some(-1.46),
    }
}

#[test]
fn parallax_from_milliarcseconds() {
    let record = CatalogRecord::new("Vega").with_parallax_milliarcsec(130.23);
    assert_relative_eq!(record.parallax_arcsec.unwrap(), 0.13023);
}

#[test]
fn empty_record() {
    assert!(CatalogRecord::new("Nothing known").is_empty());
    assert!(!sirius().is_empty());
}

#[test]
fn lookup_is_case_insensitive() {
    let catalog = InMemoryCatalog::from_records([sirius()]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.lookup("  sIRIUS ").unwrap(), sirius());
}

#[test]
fn lookup_missing_star() {
    let catalog = InMemoryCatalog::new();
    assert!(catalog.is_empty());
    assert_eq!(
        catalog.lookup("Betelgeuse"),
        Err(LookupError::NotFound("Betelgeuse".to_string()))
    );
}

#[test]
fn insert_replaces_existing_entry() {
    let mut catalog = InMemoryCatalog::from_records([sirius()]);
    catalog.insert(CatalogRecord::new("SIRIUS"));
    assert_eq!(catalog.len(), 1);
    assert!(catalog.lookup("Sirius").unwrap().is_empty());
}

#[test]
fn merge_overwrites_present_fields_only() {
    let mut draft = ObservationDraft::new("Sirius");
    draft.radial_velocity_km_s = Some(1.0);
    draft.magnitude_v = Some(9.9);

    let record = CatalogRecord {
        magnitude_v: None,
        ..sirius()
    };
    let filled = draft.merge_catalog(&record);

    assert_eq!(
        filled,
        vec![
            ObservationField::RadialVelocity,
            ObservationField::Parallax,
            ObservationField::MagnitudeB,
        ]
    );
    assert_eq!(draft.radial_velocity_km_s, Some(-5.5));
    assert_eq!(draft.parallax_arcsec, Some(0.37921));
    assert_eq!(draft.magnitude_b, Some(-1.46));
    // Absent in the catalog, left for manual entry
    assert_eq!(draft.magnitude_v, Some(9.9));
}

#[test]
fn merge_empty_record_reports_nothing() {
    let mut draft = ObservationDraft::new("Sirius");
    let before = draft.clone();
    assert!(draft.merge_catalog(&CatalogRecord::new("Sirius")).is_empty());
    assert_eq!(draft, before);
}

#[test]
fn fill_missing_keeps_observer_values() {
    let mut draft = ObservationDraft::new("Sirius");
    draft.parallax_arcsec = Some(0.38);

    let filled = draft.fill_missing_from_catalog(&sirius());
    assert!(!filled.contains(&ObservationField::Parallax));
    assert_eq!(filled.len(), 3);
    assert_eq!(draft.parallax_arcsec, Some(0.38));
    assert_eq!(draft.magnitude_b, Some(-1.46));
}

#[test]
fn complete_from_catalog_needs_a_name() {
    let catalog = InMemoryCatalog::from_records([sirius()]);
    let mut draft = ObservationDraft::default();
    assert_eq!(
        complete_from_catalog(&catalog, &mut draft),
        Err(LookupError::MissingName)
    );

    let mut draft = ObservationDraft::new("sirius");
    let filled = complete_from_catalog(&catalog, &mut draft).unwrap();
    assert_eq!(filled.len(), 4);
    assert_eq!(draft.radial_velocity_km_s, Some(-5.5));
}

#[test]
fn catalog_never_touches_observer_only_fields() {
    let mut draft = ObservationDraft::new("Sirius");
    draft.merge_catalog(&sirius());
    assert_eq!(
        draft.missing_fields(),
        vec![
            ObservationField::AngularDisplacement,
            ObservationField::ObservationDate1,
            ObservationField::ObservationDate2,
        ]
    );
}
