use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Harvard spectral classes of the main sequence, hottest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpectralParseError {
    #[error("empty spectral type")]
    Empty,

    #[error("unknown spectral class '{0}'")]
    UnknownClass(char),

    #[error("invalid spectral subclass '{0}', expected a digit 0-9")]
    InvalidSubclass(String),
}

impl FromStr for SpectralType {
    type Err = SpectralParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let first = chars.next().ok_or(SpectralParseError::Empty)?;
        if let Some(extra) = chars.next() {
            return Err(SpectralParseError::InvalidSubclass(extra.to_string()));
        }
        Self::from_letter(first)
    }
}

impl SpectralType {
    fn from_letter(letter: char) -> Result<Self, SpectralParseError> {
        match letter.to_ascii_uppercase() {
            'O' => Ok(SpectralType::O),
            'B' => Ok(SpectralType::B),
            'A' => Ok(SpectralType::A),
            'F' => Ok(SpectralType::F),
            'G' => Ok(SpectralType::G),
            'K' => Ok(SpectralType::K),
            'M' => Ok(SpectralType::M),
            other => Err(SpectralParseError::UnknownClass(other)),
        }
    }
}

/// A spectral class with its numeric subclass, e.g. `G2` for the Sun.
///
/// Ordering follows temperature: `O5 < B0 < ... < M8`, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SpectralClassification {
    pub spectral_type: SpectralType,
    /// Subclass 0-9
    pub subclass: u8,
}

impl SpectralClassification {
    pub fn new(spectral_type: SpectralType, subclass: u8) -> Result<Self, SpectralParseError> {
        if subclass > 9 {
            return Err(SpectralParseError::InvalidSubclass(subclass.to_string()));
        }
        Ok(Self {
            spectral_type,
            subclass,
        })
    }
}

impl fmt::Display for SpectralClassification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.spectral_type, self.subclass)
    }
}

impl FromStr for SpectralClassification {
    type Err = SpectralParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(SpectralParseError::Empty)?;
        let spectral_type = SpectralType::from_letter(letter)?;

        let rest = chars.as_str();
        let subclass = match rest.as_bytes() {
            [digit @ b'0'..=b'9'] => digit - b'0',
            _ => return Err(SpectralParseError::InvalidSubclass(rest.to_string())),
        };

        Self::new(spectral_type, subclass)
    }
}
