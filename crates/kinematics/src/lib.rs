//! Stellar kinematics from two-epoch astrometry.
//!
//! A [`RawObservation`] holds what an observer measures for one star: the
//! angular shift between two dated exposures, the trigonometric parallax,
//! the spectroscopic radial velocity and B/V photometry. [`compute`] turns
//! it into a [`DerivedResult`] (proper motion, distance, B-V, Mv,
//! tangential and total space velocity). The [`hr`] module projects results
//! onto the HR diagram next to the reference main sequence from the
//! `stellar` crate.

pub mod batch;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod hr;
pub mod observation;
pub mod result;
pub mod tables;

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod hr_test;

pub use batch::{compute_all, compute_each, run_batch, BatchPolicy};
pub use catalog::{
    complete_from_catalog, CatalogRecord, CatalogSource, InMemoryCatalog, LookupError,
};
pub use engine::{
    absolute_magnitude, color_index, compute, distance, proper_motion, tangential_velocity,
    total_velocity, TANGENTIAL_VELOCITY_FACTOR,
};
pub use error::{DomainError, StarError, ValidationError};
pub use hr::{compare_to_main_sequence, positions_for_plot, HrPoint, MainSequenceComparison};
pub use observation::{ObservationDraft, ObservationField, RawObservation};
pub use result::DerivedResult;
pub use tables::{InputRow, ResultRow, INPUT_HEADERS, RESULT_HEADERS};
