//! Stream adapters over `std::io`.
//!
//! Thin wrappers around [`pack`](crate::pack) and [`unpack`](crate::unpack):
//! the reader side detects the tag first and then reads exactly the number
//! of bytes the tag implies, so multiple values can be read back to back
//! from one stream.

use std::io::{self, Read, Write};

use crate::decoder::unpack;
use crate::encoder::{pack, pack_as};
use crate::moment::Moment;
use crate::tag::{self, TemporencType};
use crate::value::Value;

/// Pack a moment and write all its bytes to `sink`
///
/// Returns the number of bytes written.
///
/// # Errors
/// Encoding failures surface as [`io::ErrorKind::InvalidInput`]; write
/// failures are passed through.
pub fn pack_to<W: Write>(sink: &mut W, moment: &Moment) -> io::Result<usize> {
    let bytes = pack(moment).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    sink.write_all(&bytes)?;
    Ok(bytes.len())
}

/// Pack a moment as an explicitly chosen wire type and write it to `sink`
///
/// # Errors
/// As for [`pack_to`].
pub fn pack_as_to<W: Write>(
    sink: &mut W,
    kind: TemporencType,
    moment: &Moment,
) -> io::Result<usize> {
    let bytes = pack_as(kind, moment).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    sink.write_all(&bytes)?;
    Ok(bytes.len())
}

/// Read exactly one encoded value from `source` and unpack it
///
/// Reads the tag byte, then exactly the remaining bytes of the detected
/// type; bytes following the value are left unread.
///
/// # Errors
/// Decoding failures surface as [`io::ErrorKind::InvalidData`]; read
/// failures (including EOF inside a value) are passed through.
pub fn unpack_from<R: Read>(source: &mut R) -> io::Result<Value> {
    let mut buf = [0u8; 10];
    source.read_exact(&mut buf[..1])?;
    let detected =
        tag::detect(buf[0]).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    source.read_exact(&mut buf[1..detected.expected_len])?;
    unpack(&buf[..detected.expected_len])
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
