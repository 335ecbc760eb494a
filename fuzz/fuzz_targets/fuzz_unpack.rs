#![no_main]

use libfuzzer_sys::fuzz_target;
use temporenc::unpack;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to unpack() - should never panic.
    // May return a decode error for malformed input, but should not crash.
    if let Ok(value) = unpack(data) {
        // Display and the derived accessors must not panic either
        let _ = value.to_string();
        let _ = (value.tz_hour(), value.tz_minute());
    }
});
