//! Unpacking: tag detection, length check and bit-level extraction.

use crate::error::DecodeError;
use crate::field;
use crate::tag::{self, Precision, TemporencType};
use crate::value::Value;

/// Unpack an encoded temporenc value
///
/// The buffer must be exactly the length implied by its tag byte; nothing is
/// returned on failure.
///
/// # Errors
/// [`DecodeError::InvalidTag`] for a first byte in the reserved band,
/// [`DecodeError::InvalidLength`] for a buffer that is too short or too
/// long for the detected type, [`DecodeError::ComponentRange`] for a bit
/// pattern between a component's maximum and its empty sentinel.
///
/// # Example
/// ```
/// use temporenc::unpack;
///
/// let value = unpack(&[0x8f, 0x7e, 0x0e]).unwrap();
/// assert_eq!(value.year(), Some(1983));
/// assert_eq!(value.month(), Some(1));
/// assert_eq!(value.day(), Some(15));
/// assert_eq!(value.hour(), None);
/// ```
pub fn unpack(bytes: &[u8]) -> Result<Value, DecodeError> {
    let Some(&first) = bytes.first() else {
        return Err(DecodeError::BufferTooShort {
            expected: 3,
            actual: 0,
        });
    };
    let detected = tag::detect(first)?;
    if bytes.len() != detected.expected_len {
        return Err(DecodeError::InvalidLength {
            kind: detected.kind,
            precision: detected.kind.has_subsecond().then_some(detected.precision),
            expected: detected.expected_len,
            actual: bytes.len(),
        });
    }

    let kind = detected.kind;
    let precision = detected.precision;

    // The whole value fits a single 80-bit composite; widen to u128 and
    // discard the trailing zero padding so extraction can walk the fields
    // in reverse order from the least significant end.
    let mut acc: u128 = bytes.iter().fold(0, |acc, &b| acc << 8 | u128::from(b));
    acc >>= padding_bits(kind, precision, bytes.len());

    let z = kind.has_tz().then(|| field::TZ.take(&mut acc));
    let sub = kind
        .has_subsecond()
        .then(|| subsecond_field(precision).map(|f| f.take(&mut acc)))
        .flatten();

    let (hour, minute, second) = if kind.has_time() {
        let second = field::SECOND.take(&mut acc);
        let minute = field::MINUTE.take(&mut acc);
        let hour = field::HOUR.take(&mut acc);
        (
            field::HOUR.decode(hour)?,
            field::MINUTE.decode(minute)?,
            field::SECOND.decode(second)?,
        )
    } else {
        (None, None, None)
    };

    let (year, month, day) = if kind.has_date() {
        let day = field::DAY.take(&mut acc);
        let month = field::MONTH.take(&mut acc);
        let year = field::YEAR.take(&mut acc);
        (
            field::YEAR.decode(year)?,
            field::MONTH.decode(month)?,
            field::DAY.decode(day)?,
        )
    } else {
        (None, None, None)
    };

    let (millisecond, microsecond, nanosecond) = match (precision, sub) {
        (Precision::Millisecond, Some(raw)) => {
            let ms = require(field::MILLISECOND.decode(raw))?;
            (Some(ms), Some(ms * 1000), Some(ms * 1_000_000))
        }
        (Precision::Microsecond, Some(raw)) => {
            let us = require(field::MICROSECOND.decode(raw))?;
            (Some(us / 1000), Some(us), Some(us * 1000))
        }
        (Precision::Nanosecond, Some(raw)) => {
            let ns = require(field::NANOSECOND.decode(raw))?;
            (Some(ns / 1_000_000), Some(ns / 1000), Some(ns))
        }
        _ => (None, None, None),
    };

    let tz_offset = match z {
        Some(raw) => field::TZ.decode(raw)?.map(|z| 15 * (z as i32 - 64)),
        None => None,
    };

    Ok(Value::new(
        year.map(|v| v as u16),
        month.map(|v| v as u8),
        day.map(|v| v as u8),
        hour.map(|v| v as u8),
        minute.map(|v| v as u8),
        second.map(|v| v as u8),
        millisecond.map(|v| v as u16),
        microsecond,
        nanosecond,
        tz_offset,
    ))
}

/// Zero bits between the last field and the byte boundary
fn padding_bits(kind: TemporencType, precision: Precision, len: usize) -> u32 {
    let used = match kind {
        TemporencType::D | TemporencType::T => 24,
        TemporencType::DT => 40,
        TemporencType::DTZ => 48,
        TemporencType::DTS => 2 + 2 + 21 + 17 + precision.subsecond_width(),
        TemporencType::DTSZ => 3 + 2 + 21 + 17 + precision.subsecond_width() + 7,
    };
    len as u32 * 8 - used
}

/// The sub-second field for a precision variant, if it has one
fn subsecond_field(precision: Precision) -> Option<&'static field::Field> {
    match precision {
        Precision::Millisecond => Some(&field::MILLISECOND),
        Precision::Microsecond => Some(&field::MICROSECOND),
        Precision::Nanosecond => Some(&field::NANOSECOND),
        Precision::None => None,
    }
}

/// Sub-second fields have no sentinel, so a successful decode is always a
/// value
fn require(decoded: Result<Option<u32>, DecodeError>) -> Result<u32, DecodeError> {
    // The empty pattern sits above the field mask and can never be
    // extracted, so unwrap_or is unreachable in practice.
    Ok(decoded?.unwrap_or(0))
}
