//! `temporenc` - Compact tagged binary encoding for date and time
//!
//! An encoder/decoder for the temporenc wire format: partial, optionally
//! timezone-annotated, optionally sub-second-precise date/time values in
//! 3 to 10 bytes. Every component (year, month, day, hour, minute, second,
//! sub-second unit, UTC offset) may be individually absent, and the encoder
//! picks the most compact layout that can hold whatever was supplied.
//!
//! # Features
//! - **Partial values**: absent components cost a reserved bit pattern, not
//!   a whole byte
//! - **Automatic type selection**: the smallest of the six wire types that
//!   fits the supplied components
//! - **Leap seconds**: second 60 round-trips losslessly next to the empty
//!   sentinel
//! - **Stateless**: pack/unpack are pure functions, safe to call from any
//!   number of threads
//!
//! # Example
//! ```
//! use temporenc::{pack, unpack, Moment};
//!
//! let moment = Moment::new().date(1983, 1, 15).time(18, 25, 12);
//! let bytes = pack(&moment).unwrap();
//! assert_eq!(bytes.len(), 5); // date + time fits the 5-byte DT type
//!
//! let value = unpack(&bytes).unwrap();
//! assert_eq!(value.year(), Some(1983));
//! assert_eq!(value.second(), Some(12));
//! assert_eq!(value.to_string(), "1983-01-15 18:25:12");
//! ```
//!
//! # Wire Format
//!
//! Big-endian, MSB-first. The first byte carries a tag identifying the wire
//! type; the 256 possible first-byte values partition into seven bands:
//!
//! | First byte | Type | Length | Contents |
//! |------------|------|--------|----------|
//! | `0x00..=0x3f` | DT | 5 | date + time |
//! | `0x40..=0x7f` | DTS | 6-9 | date + time + sub-second |
//! | `0x80..=0x9f` | D | 3 | date |
//! | `0xa0..=0xa1` | T | 3 | time |
//! | `0xa2..=0xbf` | — | — | reserved (invalid) |
//! | `0xc0..=0xdf` | DTZ | 6 | date + time + UTC offset |
//! | `0xe0..=0xff` | DTSZ | 7-10 | date + time + sub-second + UTC offset |
//!
//! DTS and DTSZ carry a 2-bit precision selector right after the tag
//! (`00` millisecond, `01` microsecond, `10` nanosecond, `11` none), which
//! determines the total length: 7/8/9/6 bytes for DTS, 8/9/10/7 for DTSZ.
//!
//! ## Component sub-fields
//!
//! After the tag, components are packed MSB-first with these widths; each
//! has one reserved all-ones pattern meaning "not supplied":
//!
//! | Component | Bits | Range | Empty | Notes |
//! |-----------|------|-------|-------|-------|
//! | year | 12 | 0-4094 | 4095 | |
//! | month | 4 | 0-11 | 15 | stored zero-based |
//! | day | 5 | 0-30 | 31 | stored zero-based |
//! | hour | 5 | 0-23 | 31 | |
//! | minute | 6 | 0-59 | 63 | |
//! | second | 6 | 0-60 | 63 | 60 is a leap second |
//! | millisecond | 10 | 0-999 | — | absence via precision |
//! | microsecond | 20 | 0-999999 | — | absence via precision |
//! | nanosecond | 30 | 0-999999999 | — | absence via precision |
//! | UTC offset | 7 | 0-126 | 127 | stored as minutes/15 + 64 |
//!
//! Types whose field bits do not end on a byte boundary are padded with
//! trailing zero bits. The date/time components are UTC whenever an offset
//! is present; the offset is informational, and [`Value`] comparisons
//! ignore it.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod decoder;
mod encoder;
mod error;
mod field;
mod moment;
mod stream;
mod tag;
mod value;


// Re-export public API
pub use decoder::unpack;
pub use encoder::{pack, pack_as};
pub use error::{DecodeError, EncodeError, InvalidTypeError};
pub use moment::Moment;
pub use stream::{pack_as_to, pack_to, unpack_from};
pub use tag::{Precision, TemporencType};
pub use value::Value;
