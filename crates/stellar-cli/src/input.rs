//! Loading observation and catalog files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use kinematics::{
    complete_from_catalog, run_batch, BatchPolicy, CatalogRecord, DerivedResult, InMemoryCatalog,
    LookupError, ObservationDraft, RawObservation, StarError,
};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Csv,
}

fn file_format(path: &Path) -> Result<FileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => Ok(FileFormat::Json),
        Some("csv") => Ok(FileFormat::Csv),
        _ => bail!(
            "unsupported input file {}: expected a .json or .csv extension",
            path.display()
        ),
    }
}

/// Reads star records from a JSON array or a CSV file with a header row.
///
/// Records may be incomplete; they are validated later by [`prepare`].
pub fn load_drafts(path: &Path) -> Result<Vec<ObservationDraft>> {
    let drafts = match file_format(path)? {
        FileFormat::Json => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse JSON in {}", path.display()))?
        }
        FileFormat::Csv => {
            let mut reader = csv::Reader::from_path(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            reader
                .deserialize()
                .enumerate()
                .map(|(row, record)| {
                    record.with_context(|| format!("{}: bad CSV row {}", path.display(), row + 1))
                })
                .collect::<Result<Vec<ObservationDraft>>>()?
        }
    };
    info!(count = drafts.len(), path = %path.display(), "loaded star records");
    Ok(drafts)
}

/// Reads a JSON array of catalog records.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let file =
        File::open(path).with_context(|| format!("failed to open catalog {}", path.display()))?;
    let records: Vec<CatalogRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    let catalog = InMemoryCatalog::from_records(records);
    info!(entries = catalog.len(), "loaded catalog");
    Ok(catalog)
}

fn star_label(index: usize, draft: &ObservationDraft) -> String {
    let name = draft.name.as_deref().unwrap_or("<unnamed>");
    format!("star #{index} '{name}'")
}

/// Validated observations, each paired with its position in the input file.
#[derive(Debug, Clone, Default)]
pub struct Prepared {
    pub observations: Vec<RawObservation>,
    pub positions: Vec<usize>,
}

/// Output of [`compute_prepared`]: the stars that were computed, their
/// results in the same order, and the failures that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Computed {
    pub observations: Vec<RawObservation>,
    pub results: Vec<DerivedResult>,
    pub skipped: Vec<StarError>,
}

/// Fills gaps from the catalog and validates every record.
///
/// Under [`BatchPolicy::Abort`] the first invalid record is an error; under
/// [`BatchPolicy::Skip`] it is logged and left out.
pub fn prepare(
    drafts: Vec<ObservationDraft>,
    catalog: Option<&InMemoryCatalog>,
    policy: BatchPolicy,
) -> Result<Prepared> {
    let mut prepared = Prepared::default();

    for (index, mut draft) in drafts.into_iter().enumerate() {
        if let Some(catalog) = catalog {
            if !draft.missing_fields().is_empty() {
                match complete_from_catalog(catalog, &mut draft) {
                    Ok(filled) if filled.is_empty() => {
                        warn!("{}: catalog has no usable data", star_label(index, &draft))
                    }
                    Ok(filled) => {
                        info!(?filled, "{}: completed from catalog", star_label(index, &draft))
                    }
                    Err(err @ (LookupError::NotFound(_) | LookupError::MissingName)) => {
                        warn!("{}: {err}", star_label(index, &draft))
                    }
                    Err(err) => return Err(err).context(star_label(index, &draft)),
                }
            }
        }

        match draft.build() {
            Ok(observation) => {
                prepared.observations.push(observation);
                prepared.positions.push(index);
            }
            Err(err) => match policy {
                BatchPolicy::Abort => {
                    return Err(err).with_context(|| star_label(index, &draft));
                }
                BatchPolicy::Skip => warn!("skipping {}: {err}", star_label(index, &draft)),
            },
        }
    }

    Ok(prepared)
}

/// Runs the batch over prepared observations.
///
/// Failures are reported by their position in the input file, not in the
/// validated subset. Skipped stars are dropped from `observations` so it
/// stays aligned with `results`.
pub fn compute_prepared(prepared: Prepared, policy: BatchPolicy) -> Result<Computed, StarError> {
    let Prepared {
        observations,
        positions,
    } = prepared;
    let to_input_position = |mut err: StarError| {
        err.index = positions.get(err.index).copied().unwrap_or(err.index);
        err
    };

    let (results, failures) = run_batch(&observations, policy).map_err(to_input_position)?;

    let observations = if failures.is_empty() {
        observations
    } else {
        observations
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !failures.iter().any(|f| f.index == *index))
            .map(|(_, observation)| observation)
            .collect()
    };

    Ok(Computed {
        observations,
        results,
        skipped: failures.into_iter().map(to_input_position).collect(),
    })
}
