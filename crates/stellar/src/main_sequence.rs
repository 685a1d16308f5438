//! Standard main-sequence stars used as the reference curve of an HR diagram.

use std::sync::LazyLock;

use serde::Serialize;

use crate::spectral::{SpectralClassification, SpectralParseError};

/// A standard dwarf star: spectral type, B-V color index and absolute
/// visual magnitude Mv.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceStar {
    pub spectral_type: &'static str,
    pub color_index: f64,
    pub absolute_magnitude: f64,
}

impl ReferenceStar {
    const fn new(spectral_type: &'static str, color_index: f64, absolute_magnitude: f64) -> Self {
        Self {
            spectral_type,
            color_index,
            absolute_magnitude,
        }
    }

    /// Parses the spectral type label into a typed classification
    pub fn classification(&self) -> Result<SpectralClassification, SpectralParseError> {
        self.spectral_type.parse()
    }
}

/// Main-sequence calibration points, O5 through M8.
pub const REFERENCE_STARS: [ReferenceStar; 14] = [
    ReferenceStar::new("O5", -0.35, -5.8),
    ReferenceStar::new("B0", -0.31, -4.1),
    ReferenceStar::new("B5", -0.16, -1.1),
    ReferenceStar::new("A0", 0.00, 0.7),
    ReferenceStar::new("A5", 0.13, 2.0),
    ReferenceStar::new("F0", 0.27, 2.6),
    ReferenceStar::new("F5", 0.42, 3.4),
    ReferenceStar::new("G0", 0.58, 4.4),
    ReferenceStar::new("G5", 0.70, 5.1),
    ReferenceStar::new("K0", 0.89, 5.9),
    ReferenceStar::new("K5", 1.18, 7.3),
    ReferenceStar::new("M0", 1.45, 9.0),
    ReferenceStar::new("M5", 1.63, 11.8),
    ReferenceStar::new("M8", 1.80, 16.0),
];

static SORTED_REFERENCE_SEQUENCE: LazyLock<Vec<ReferenceStar>> = LazyLock::new(|| {
    let mut sequence = REFERENCE_STARS.to_vec();
    sequence.sort_by(|a, b| a.color_index.total_cmp(&b.color_index));
    sequence
});

/// The reference table ordered by ascending color index.
///
/// Sorting is stable and happens once per process; the result is what the
/// main-sequence curve of an HR diagram is drawn through.
pub fn sorted_reference_sequence() -> &'static [ReferenceStar] {
    &SORTED_REFERENCE_SEQUENCE
}

/// Main-sequence absolute magnitude at a given color index.
///
/// Linear interpolation between the two bracketing reference stars. Returns
/// `None` outside the tabulated color range (bluer than O5 or redder than M8)
/// and for non-finite input.
///
/// # Examples
/// ```
/// use stellar::main_sequence_magnitude;
///
/// // Exactly on a calibration point (A0)
/// assert_eq!(main_sequence_magnitude(0.0), Some(0.7));
/// assert_eq!(main_sequence_magnitude(2.5), None);
/// ```
pub fn main_sequence_magnitude(color_index: f64) -> Option<f64> {
    let sequence = sorted_reference_sequence();
    let first = sequence.first()?;
    let last = sequence.last()?;
    if !color_index.is_finite()
        || color_index < first.color_index
        || color_index > last.color_index
    {
        return None;
    }

    sequence.windows(2).find_map(|pair| {
        let (lo, hi) = (&pair[0], &pair[1]);
        if color_index < lo.color_index || color_index > hi.color_index {
            return None;
        }
        let span = hi.color_index - lo.color_index;
        if span == 0.0 {
            return Some(lo.absolute_magnitude);
        }
        let t = (color_index - lo.color_index) / span;
        Some(lo.absolute_magnitude * (1.0 - t) + hi.absolute_magnitude * t)
    })
}

/// The reference star closest in color index. Ties go to the bluer star.
pub fn nearest_reference(color_index: f64) -> &'static ReferenceStar {
    let sequence = sorted_reference_sequence();
    let mut nearest = &sequence[0];
    for star in &sequence[1..] {
        if (star.color_index - color_index).abs() < (nearest.color_index - color_index).abs() {
            nearest = star;
        }
    }
    nearest
}
