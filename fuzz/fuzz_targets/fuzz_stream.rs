#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use temporenc::unpack_from;

fuzz_target!(|data: &[u8]| {
    // Reading values back to back from an arbitrary stream must never
    // panic and must always terminate: each iteration either consumes at
    // least one byte or errors out.
    let mut cursor = Cursor::new(data);
    while unpack_from(&mut cursor).is_ok() {}
});
