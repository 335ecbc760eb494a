//! Packing: type selection, validation and bit-level serialization.

use crate::error::EncodeError;
use crate::field;
use crate::moment::Moment;
use crate::tag::{Precision, TemporencType, DTSZ_LENGTHS, DTS_LENGTHS};

/// Pack a moment, automatically picking the smallest wire type that can
/// represent the supplied components
///
/// # Errors
/// Returns [`EncodeError`] when any supplied component is out of range or
/// the timezone offset is not encodable. Nothing is emitted on failure.
///
/// # Example
/// ```
/// use temporenc::{pack, Moment};
///
/// let bytes = pack(&Moment::new().time(18, 25, 12)).unwrap();
/// assert_eq!(bytes, [0xa1, 0x26, 0x4c]);
/// ```
pub fn pack(moment: &Moment) -> Result<Vec<u8>, EncodeError> {
    pack_as(select(moment), moment)
}

/// Pack a moment as an explicitly chosen wire type
///
/// Supplied components the chosen type cannot carry are validated and then
/// omitted from the wire. For DTS/DTSZ the precision variant follows the
/// most precise supplied sub-second unit (none, if none is supplied).
///
/// # Errors
/// Returns [`EncodeError`] as for [`pack`].
pub fn pack_as(kind: TemporencType, moment: &Moment) -> Result<Vec<u8>, EncodeError> {
    // Validate everything that was supplied, carried on the wire or not.
    let year = field::YEAR.encode(moment.year.map(u32::from))?;
    let month = field::MONTH.encode(moment.month.map(u32::from))?;
    let day = field::DAY.encode(moment.day.map(u32::from))?;
    let hour = field::HOUR.encode(moment.hour.map(u32::from))?;
    let minute = field::MINUTE.encode(moment.minute.map(u32::from))?;
    let second = field::SECOND.encode(moment.second.map(u32::from))?;

    if let Some(ms) = moment.millisecond {
        field::MILLISECOND.check(u32::from(ms))?;
    }
    if let Some(us) = moment.microsecond {
        field::MICROSECOND.check(us)?;
    }
    if let Some(ns) = moment.nanosecond {
        field::NANOSECOND.check(ns)?;
    }

    let z = match moment.tz_offset {
        None => field::TZ.empty,
        Some(minutes) => {
            if minutes % 15 != 0 {
                return Err(EncodeError::InvalidTimezoneOffset { minutes });
            }
            let z = minutes / 15 + 64;
            if !(0..=126).contains(&z) {
                return Err(EncodeError::InvalidTimezoneOffset { minutes });
            }
            z as u64
        }
    };

    let d = year << 9 | month << 5 | day;
    let t = hour << 12 | minute << 6 | second;

    let mut w = BitWriter::default();
    match kind {
        TemporencType::D => {
            w.push(0b100, 3);
            w.push(d, 21);
            Ok(w.finish(3))
        }
        TemporencType::T => {
            w.push(0b1010000, 7);
            w.push(t, 17);
            Ok(w.finish(3))
        }
        TemporencType::DT => {
            w.push(0b00, 2);
            w.push(d, 21);
            w.push(t, 17);
            Ok(w.finish(5))
        }
        TemporencType::DTZ => {
            w.push(0b110, 3);
            w.push(d, 21);
            w.push(t, 17);
            w.push(z, 7);
            Ok(w.finish(6))
        }
        TemporencType::DTS => {
            let (precision, sub) = subsecond(moment);
            w.push(0b01, 2);
            w.push(precision.bits() as u64, 2);
            w.push(d, 21);
            w.push(t, 17);
            w.push(sub, precision.subsecond_width());
            Ok(w.finish(DTS_LENGTHS[precision.bits() as usize]))
        }
        TemporencType::DTSZ => {
            let (precision, sub) = subsecond(moment);
            w.push(0b111, 3);
            w.push(precision.bits() as u64, 2);
            w.push(d, 21);
            w.push(t, 17);
            w.push(sub, precision.subsecond_width());
            w.push(z, 7);
            Ok(w.finish(DTSZ_LENGTHS[precision.bits() as usize]))
        }
    }
}

/// Pick the smallest type able to represent the supplied components
pub(crate) fn select(moment: &Moment) -> TemporencType {
    let has_date = moment.has_date();
    let has_time = moment.has_time();
    let has_subsecond = moment.has_subsecond();
    let has_tz = moment.tz_offset.is_some();

    if has_tz && has_subsecond {
        TemporencType::DTSZ
    } else if has_tz {
        TemporencType::DTZ
    } else if has_subsecond {
        TemporencType::DTS
    } else if has_date && has_time {
        TemporencType::DT
    } else if has_date {
        TemporencType::D
    } else if has_time {
        TemporencType::T
    } else {
        // Nothing at all; the smallest type with every component empty.
        TemporencType::D
    }
}

/// Precision variant and raw sub-second value; the most precise supplied
/// unit wins
fn subsecond(moment: &Moment) -> (Precision, u64) {
    if let Some(ns) = moment.nanosecond {
        (Precision::Nanosecond, u64::from(ns))
    } else if let Some(us) = moment.microsecond {
        (Precision::Microsecond, u64::from(us))
    } else if let Some(ms) = moment.millisecond {
        (Precision::Millisecond, u64::from(ms))
    } else {
        (Precision::None, 0)
    }
}

/// Accumulates tag and field bits most-significant first, then serializes
/// as exactly `len` big-endian bytes (zero-padding the tail to the byte
/// boundary)
#[derive(Default)]
struct BitWriter {
    acc: u128,
    bits: u32,
}

impl BitWriter {
    #[inline]
    fn push(&mut self, value: u64, width: u32) {
        debug_assert!(width == 0 || u128::from(value) < 1 << width);
        self.acc = self.acc << width | u128::from(value);
        self.bits += width;
    }

    fn finish(self, len: usize) -> Vec<u8> {
        let pad = len as u32 * 8 - self.bits;
        let acc = self.acc << pad;
        acc.to_be_bytes()[16 - len..].to_vec()
    }
}
