//! Decoded value container.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An immutable decoded temporenc value
///
/// Produced by [`unpack`](crate::unpack); never mutated after construction.
/// When a sub-second component is present on the wire, all three scaled
/// views (millisecond/microsecond/nanosecond) are derived and present
/// together. When a timezone is present, `tz_hour`/`tz_minute` are derived
/// from the offset with Euclidean division.
///
/// Equality, ordering and hashing cover only the date/time components plus
/// nanosecond. The encoded date/time is always UTC when a timezone is
/// present, so two values describing the same instant compare equal
/// regardless of the originally supplied offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Value {
    year: Option<u16>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    millisecond: Option<u16>,
    microsecond: Option<u32>,
    nanosecond: Option<u32>,
    tz_offset: Option<i32>,
}

impl Value {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        year: Option<u16>,
        month: Option<u8>,
        day: Option<u8>,
        hour: Option<u8>,
        minute: Option<u8>,
        second: Option<u8>,
        millisecond: Option<u16>,
        microsecond: Option<u32>,
        nanosecond: Option<u32>,
        tz_offset: Option<i32>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            microsecond,
            nanosecond,
            tz_offset,
        }
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> Option<u8> {
        self.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> Option<u8> {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> Option<u8> {
        self.minute
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> Option<u8> {
        self.second
    }

    #[inline]
    #[must_use]
    pub fn millisecond(&self) -> Option<u16> {
        self.millisecond
    }

    #[inline]
    #[must_use]
    pub fn microsecond(&self) -> Option<u32> {
        self.microsecond
    }

    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> Option<u32> {
        self.nanosecond
    }

    /// UTC offset in minutes, a multiple of 15
    #[inline]
    #[must_use]
    pub fn tz_offset(&self) -> Option<i32> {
        self.tz_offset
    }

    /// Hour part of the UTC offset (Euclidean: offset -90 gives hour -2)
    #[inline]
    #[must_use]
    pub fn tz_hour(&self) -> Option<i32> {
        self.tz_offset.map(|o| o.div_euclid(60))
    }

    /// Minute part of the UTC offset (always 0, 15, 30 or 45)
    #[inline]
    #[must_use]
    pub fn tz_minute(&self) -> Option<u32> {
        self.tz_offset.map(|o| o.rem_euclid(60) as u32)
    }

    /// The comparison key: date/time components in UTC, timezone excluded
    fn key(
        &self,
    ) -> (
        Option<u16>,
        Option<u8>,
        Option<u8>,
        Option<u8>,
        Option<u8>,
        Option<u8>,
        Option<u32>,
    ) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
        )
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Value {
    /// `1983-01-15 18:25:12.123+01:00` style; missing components render as
    /// fixed-width placeholders, sub-second digits are trimmed of trailing
    /// zeros but keep at least one digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(y) => write!(f, "{y:04}")?,
            None => f.write_str("????")?,
        }
        write_2(f, '-', self.month)?;
        write_2(f, '-', self.day)?;
        write_2(f, ' ', self.hour)?;
        write_2(f, ':', self.minute)?;
        write_2(f, ':', self.second)?;
        if let Some(ns) = self.nanosecond {
            let digits = format!("{ns:09}");
            let trimmed = digits.trim_end_matches('0');
            let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
            write!(f, ".{trimmed}")?;
        }
        if let Some(offset) = self.tz_offset {
            let sign = if offset < 0 { '-' } else { '+' };
            let abs = offset.unsigned_abs();
            write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)?;
        }
        Ok(())
    }
}

fn write_2(f: &mut fmt::Formatter<'_>, sep: char, value: Option<u8>) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{sep}{v:02}"),
        None => write!(f, "{sep}??"),
    }
}
