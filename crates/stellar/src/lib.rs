//! Spectral classification and the standard main sequence.
//!
//! The reference table is the comparison data an HR diagram is drawn
//! against: fourteen dwarf stars from O5 to M8 with their B-V color index
//! and absolute visual magnitude.

pub mod main_sequence;
pub mod spectral;


// Re-export spectral types
pub use spectral::{SpectralClassification, SpectralParseError, SpectralType};

// Re-export the reference sequence
pub use main_sequence::{
    main_sequence_magnitude, nearest_reference, sorted_reference_sequence, ReferenceStar,
    REFERENCE_STARS,
};
