//! Running the engine over a list of stars.
//!
//! Output order always matches input order. The two policies differ only in
//! what happens when one star fails: [`compute_all`] stops at the first
//! failure, [`compute_each`] keeps going and reports every failure in place.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::compute;
use crate::error::StarError;
use crate::observation::RawObservation;
use crate::result::DerivedResult;

/// What a batch does when one star cannot be computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchPolicy {
    /// Fail the whole batch on the first error
    #[default]
    Abort,
    /// Drop failing stars and keep the rest
    Skip,
}

fn compute_indexed(index: usize, observation: &RawObservation) -> Result<DerivedResult, StarError> {
    match compute(observation) {
        Ok(result) => {
            debug!(
                index,
                star = observation.name(),
                distance_pc = result.distance_parsecs,
                mv = result.absolute_magnitude_mv,
                v_total_km_s = result.total_space_velocity_km_s,
                "computed star"
            );
            Ok(result)
        }
        Err(source) => Err(StarError {
            index,
            name: observation.name().to_string(),
            source,
        }),
    }
}

/// One result per observation, or the first failure.
pub fn compute_all(observations: &[RawObservation]) -> Result<Vec<DerivedResult>, StarError> {
    observations
        .iter()
        .enumerate()
        .map(|(index, observation)| compute_indexed(index, observation))
        .collect()
}

/// One outcome per observation, failures attributed to their star.
pub fn compute_each(observations: &[RawObservation]) -> Vec<Result<DerivedResult, StarError>> {
    observations
        .iter()
        .enumerate()
        .map(|(index, observation)| {
            compute_indexed(index, observation).inspect_err(|err| warn!("{err}"))
        })
        .collect()
}

/// Applies a [`BatchPolicy`].
///
/// Returns the computed results together with the failures that were
/// skipped. Under [`BatchPolicy::Abort`] the failure list is always empty.
pub fn run_batch(
    observations: &[RawObservation],
    policy: BatchPolicy,
) -> Result<(Vec<DerivedResult>, Vec<StarError>), StarError> {
    match policy {
        BatchPolicy::Abort => compute_all(observations).map(|results| (results, Vec::new())),
        BatchPolicy::Skip => {
            let mut results = Vec::with_capacity(observations.len());
            let mut skipped = Vec::new();
            for outcome in compute_each(observations) {
                match outcome {
                    Ok(result) => results.push(result),
                    Err(err) => skipped.push(err),
                }
            }
            Ok((results, skipped))
        }
    }
}
