#![no_main]

use libfuzzer_sys::fuzz_target;
use temporenc::{pack, unpack, Moment};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    // Interpret bytes as loosely-ranged components; pack() rejects the
    // ones that are out of range, and everything it accepts must survive
    // a roundtrip.
    let moment = Moment {
        year: (data[0] != 0).then(|| u16::from_be_bytes([data[0], data[1]]) & 0x0fff),
        month: (data[2] != 0).then(|| data[2] % 16),
        day: (data[3] != 0).then(|| data[3] % 33),
        hour: (data[4] != 0).then(|| data[4] % 25),
        minute: (data[5] != 0).then(|| data[5] % 61),
        second: (data[6] != 0).then(|| data[6] % 62),
        millisecond: (data[7] != 0).then(|| u16::from(data[7]) * 4),
        microsecond: None,
        nanosecond: None,
        tz_offset: (data[8] != 0).then(|| (i32::from(data[8] as i8)) * 15),
    };

    let Ok(bytes) = pack(&moment) else { return };
    let value = unpack(&bytes).expect("packed bytes must unpack");

    assert_eq!(value.year(), moment.year);
    assert_eq!(value.month(), moment.month);
    assert_eq!(value.day(), moment.day);
    assert_eq!(value.hour(), moment.hour);
    assert_eq!(value.minute(), moment.minute);
    assert_eq!(value.second(), moment.second);
    assert_eq!(value.millisecond(), moment.millisecond);
    assert_eq!(value.tz_offset(), moment.tz_offset);
});
