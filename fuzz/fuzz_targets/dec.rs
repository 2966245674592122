#![no_main]
use libfuzzer_sys::fuzz_target;
use urlencode::{unescape, Kind};

fuzz_target!(|data: &[u8]| {
    if let Err(e) = unescape(Kind::QueryComponent, data) {
        assert_eq!(data[e.offset()], b'%');
    }
});
