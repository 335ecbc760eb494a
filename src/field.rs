//! Field descriptor table and per-field pack/unpack helpers.
//!
//! Each wire field has a fixed bit width, a valid range, and (for the
//! date/time/timezone fields) a reserved all-ones-or-topmost bit pattern
//! meaning "component not supplied". Month and day are stored zero-based
//! on the wire to fit one extra value per bit width.

use crate::error::{DecodeError, EncodeError};

/// Static metadata for one wire field
pub(crate) struct Field {
    pub name: &'static str,
    pub width: u32,
    pub mask: u64,
    pub min: u64,
    pub max: u64,
    /// Bit pattern meaning "absent"; must be representable in `width` bits
    pub empty: u64,
    /// Stored as (value - 1) on the wire
    pub zero_based: bool,
}

pub(crate) const YEAR: Field = Field {
    name: "year",
    width: 12,
    mask: 0xfff,
    min: 0,
    max: 4094,
    empty: 4095,
    zero_based: false,
};

pub(crate) const MONTH: Field = Field {
    name: "month",
    width: 4,
    mask: 0xf,
    min: 0,
    max: 11,
    empty: 15,
    zero_based: true,
};

pub(crate) const DAY: Field = Field {
    name: "day",
    width: 5,
    mask: 0x1f,
    min: 0,
    max: 30,
    empty: 31,
    zero_based: true,
};

pub(crate) const HOUR: Field = Field {
    name: "hour",
    width: 5,
    mask: 0x1f,
    min: 0,
    max: 23,
    empty: 31,
    zero_based: false,
};

pub(crate) const MINUTE: Field = Field {
    name: "minute",
    width: 6,
    mask: 0x3f,
    min: 0,
    max: 59,
    empty: 63,
    zero_based: false,
};

// Second reuses the top of its 6-bit range: 60 (leap second) is valid,
// 61 and 62 are invalid, 63 is the empty sentinel.
pub(crate) const SECOND: Field = Field {
    name: "second",
    width: 6,
    mask: 0x3f,
    min: 0,
    max: 60,
    empty: 63,
    zero_based: false,
};

// Sub-second fields have no sentinel; absence is expressed through the
// precision selector in the tag byte. `empty` is set above the mask so it
// never matches an extracted value.
pub(crate) const MILLISECOND: Field = Field {
    name: "millisecond",
    width: 10,
    mask: 0x3ff,
    min: 0,
    max: 999,
    empty: 0x400,
    zero_based: false,
};

pub(crate) const MICROSECOND: Field = Field {
    name: "microsecond",
    width: 20,
    mask: 0xf_ffff,
    min: 0,
    max: 999_999,
    empty: 0x10_0000,
    zero_based: false,
};

pub(crate) const NANOSECOND: Field = Field {
    name: "nanosecond",
    width: 30,
    mask: 0x3fff_ffff,
    min: 0,
    max: 999_999_999,
    empty: 0x4000_0000,
    zero_based: false,
};

// Timezone offsets are stored as offset/15 + 64, giving 0..=126 for
// -960..=930 minutes; 127 is the empty sentinel.
pub(crate) const TZ: Field = Field {
    name: "tz_offset",
    width: 7,
    mask: 0x7f,
    min: 0,
    max: 126,
    empty: 127,
    zero_based: false,
};

impl Field {
    /// Validate a supplied value and return its on-wire bit pattern
    pub(crate) fn check(&self, value: u32) -> Result<u64, EncodeError> {
        let adjustment = u64::from(self.zero_based);
        let raw = u64::from(value).wrapping_sub(adjustment);
        if raw < self.min || raw > self.max {
            return Err(EncodeError::ComponentRange {
                component: self.name,
                value: i64::from(value),
                min: (self.min + adjustment) as i64,
                max: (self.max + adjustment) as i64,
            });
        }
        Ok(raw)
    }

    /// On-wire bit pattern for an optional value: sentinel when absent
    pub(crate) fn encode(&self, value: Option<u32>) -> Result<u64, EncodeError> {
        match value {
            Some(v) => self.check(v),
            None => Ok(self.empty),
        }
    }

    /// Reverse of [`Field::encode`]: sentinel back to `None`, range check
    /// otherwise. `raw` must already be masked to `width` bits.
    pub(crate) fn decode(&self, raw: u64) -> Result<Option<u32>, DecodeError> {
        debug_assert_eq!(raw & self.mask, raw);
        if raw == self.empty {
            return Ok(None);
        }
        if raw < self.min || raw > self.max {
            let adjustment = u64::from(self.zero_based);
            return Err(DecodeError::ComponentRange {
                component: self.name,
                value: (raw + adjustment) as i64,
                min: (self.min + adjustment) as i64,
                max: (self.max + adjustment) as i64,
            });
        }
        Ok(Some((raw + u64::from(self.zero_based)) as u32))
    }

    /// Extract this field from the low bits of `acc`, advancing the cursor
    pub(crate) fn take(&self, acc: &mut u128) -> u64 {
        let raw = (*acc as u64) & self.mask;
        *acc >>= self.width;
        raw
    }
}
