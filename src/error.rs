//! Error types for temporenc packing and unpacking operations.

use std::fmt;

use crate::tag::{Precision, TemporencType};

/// Error returned when packing date/time components fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Component value outside its supported range
    ComponentRange {
        component: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// Timezone offset is not a multiple of 15 minutes, or outside the
    /// encodable range [-960, 930]
    InvalidTimezoneOffset { minutes: i32 },
}

/// Error returned when unpacking fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer has no tag byte to detect a type from
    BufferTooShort { expected: usize, actual: usize },
    /// First byte falls in the reserved tag band (0xa2..=0xbf)
    InvalidTag { first: u8 },
    /// Buffer length does not match the length implied by the tag byte
    InvalidLength {
        kind: TemporencType,
        precision: Option<Precision>,
        expected: usize,
        actual: usize,
    },
    /// Extracted component value is neither its empty sentinel nor in range
    ComponentRange {
        component: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Error returned when parsing a type name fails
///
/// The wire types have a closed set of names (`D`, `T`, `DT`, `DTZ`, `DTS`,
/// `DTSZ`); anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTypeError {
    pub(crate) name: String,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentRange {
                component,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "'{component}' value {value} not within supported range [{min}, {max}]"
                )
            }
            Self::InvalidTimezoneOffset { minutes } => {
                if minutes % 15 != 0 {
                    write!(f, "timezone offset {minutes} is not a multiple of 15 minutes")
                } else {
                    write!(
                        f,
                        "timezone offset {minutes} outside encodable range [-960, 930]"
                    )
                }
            }
        }
    }
}

impl std::error::Error for EncodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort { expected, actual } => {
                write!(f, "buffer too short: expected at least {expected} bytes, got {actual}")
            }
            Self::InvalidTag { first } => {
                write!(f, "first byte {first:#04x} does not contain a valid tag")
            }
            Self::InvalidLength {
                kind,
                precision,
                expected,
                actual,
            } => match precision {
                Some(p) => write!(
                    f,
                    "{kind} values with {p} precision must be {expected} bytes; got {actual}"
                ),
                None => write!(f, "{kind} values must be {expected} bytes; got {actual}"),
            },
            Self::ComponentRange {
                component,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "'{component}' value {value} not within supported range [{min}, {max}]"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl fmt::Display for InvalidTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid temporenc type: {:?}", self.name)
    }
}

impl std::error::Error for InvalidTypeError {}
