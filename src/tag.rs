//! Type descriptor table and tag detection.
//!
//! The first byte of every encoded value carries a tag identifying the wire
//! type, and for DTS/DTSZ a 2-bit sub-second precision selector. The 256
//! possible first-byte values partition into seven disjoint bands; detection
//! is done by numeric comparison rather than bit extraction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, InvalidTypeError};

/// The six canonical temporenc wire types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum TemporencType {
    /// Date only, 3 bytes
    D,
    /// Time only, 3 bytes
    T,
    /// Date and time, 5 bytes
    DT,
    /// Date, time and timezone, 6 bytes
    DTZ,
    /// Date, time and sub-second, 6-9 bytes depending on precision
    DTS,
    /// Date, time, sub-second and timezone, 7-10 bytes
    DTSZ,
}

/// Sub-second precision selector for DTS/DTSZ values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precision {
    Millisecond,
    Microsecond,
    Nanosecond,
    /// No sub-second component (distinct wire variant, not the same as DT)
    None,
}

/// Result of classifying the first byte of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Detected {
    pub kind: TemporencType,
    /// Only meaningful for DTS/DTSZ
    pub precision: Precision,
    pub expected_len: usize,
}

/// Total byte length of a DTS value, indexed by precision bits
pub(crate) const DTS_LENGTHS: [usize; 4] = [7, 8, 9, 6];

/// Total byte length of a DTSZ value, indexed by precision bits
pub(crate) const DTSZ_LENGTHS: [usize; 4] = [8, 9, 10, 7];

impl Precision {
    /// Decode a 2-bit precision selector
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Millisecond,
            0b01 => Self::Microsecond,
            0b10 => Self::Nanosecond,
            _ => Self::None,
        }
    }

    /// The 2-bit selector encoded in the tag byte
    pub(crate) fn bits(self) -> u128 {
        match self {
            Self::Millisecond => 0b00,
            Self::Microsecond => 0b01,
            Self::Nanosecond => 0b10,
            Self::None => 0b11,
        }
    }

    /// Width of the sub-second field for this precision
    pub(crate) fn subsecond_width(self) -> u32 {
        match self {
            Self::Millisecond => 10,
            Self::Microsecond => 20,
            Self::Nanosecond => 30,
            Self::None => 0,
        }
    }
}

/// Classify the first byte of a candidate buffer
///
/// Returns the wire type, its precision where applicable, and the exact
/// total length the buffer must have. Bytes 0xa2..=0xbf are a reserved band
/// and fail with [`DecodeError::InvalidTag`].
pub(crate) fn detect(first: u8) -> Result<Detected, DecodeError> {
    if first <= 0b0011_1111 {
        // 00DDDDDD...
        Ok(Detected {
            kind: TemporencType::DT,
            precision: Precision::None,
            expected_len: 5,
        })
    } else if first <= 0b0111_1111 {
        // 01PPDDDD...
        let precision = Precision::from_bits(first >> 4);
        Ok(Detected {
            kind: TemporencType::DTS,
            precision,
            expected_len: DTS_LENGTHS[(first >> 4 & 0b11) as usize],
        })
    } else if first <= 0b1001_1111 {
        // 100DDDDD...
        Ok(Detected {
            kind: TemporencType::D,
            precision: Precision::None,
            expected_len: 3,
        })
    } else if first <= 0b1010_0001 {
        // 1010000T...
        Ok(Detected {
            kind: TemporencType::T,
            precision: Precision::None,
            expected_len: 3,
        })
    } else if first <= 0b1011_1111 {
        Err(DecodeError::InvalidTag { first })
    } else if first <= 0b1101_1111 {
        // 110DDDDD...
        Ok(Detected {
            kind: TemporencType::DTZ,
            precision: Precision::None,
            expected_len: 6,
        })
    } else {
        // 111PPDDD...
        let precision = Precision::from_bits(first >> 3);
        Ok(Detected {
            kind: TemporencType::DTSZ,
            precision,
            expected_len: DTSZ_LENGTHS[(first >> 3 & 0b11) as usize],
        })
    }
}

impl TemporencType {
    /// Canonical name of this type
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::T => "T",
            Self::DT => "DT",
            Self::DTZ => "DTZ",
            Self::DTS => "DTS",
            Self::DTSZ => "DTSZ",
        }
    }

    /// Whether this type carries date components on the wire
    pub(crate) fn has_date(self) -> bool {
        !matches!(self, Self::T)
    }

    /// Whether this type carries time components on the wire
    pub(crate) fn has_time(self) -> bool {
        !matches!(self, Self::D)
    }

    /// Whether this type carries a timezone offset on the wire
    pub(crate) fn has_tz(self) -> bool {
        matches!(self, Self::DTZ | Self::DTSZ)
    }

    /// Whether this type carries a sub-second component on the wire
    pub(crate) fn has_subsecond(self) -> bool {
        matches!(self, Self::DTS | Self::DTSZ)
    }
}

impl fmt::Display for TemporencType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemporencType {
    type Err = InvalidTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(Self::D),
            "T" => Ok(Self::T),
            "DT" => Ok(Self::DT),
            "DTZ" => Ok(Self::DTZ),
            "DTS" => Ok(Self::DTS),
            "DTSZ" => Ok(Self::DTSZ),
            _ => Err(InvalidTypeError { name: s.to_owned() }),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Millisecond => "millisecond",
            Self::Microsecond => "microsecond",
            Self::Nanosecond => "nanosecond",
            Self::None => "no sub-second",
        })
    }
}
