#![no_main]
use libfuzzer_sys::fuzz_target;
use urlencode::{escape, unescape, Kind};

fuzz_target!(|data: &[u8]| {
    for kind in Kind::ALL {
        let encoded = escape(kind, data);
        assert!(encoded.bytes().all(|x| x == b'%' || x.is_ascii_hexdigit() || kind.is_safe(x)));
        assert_eq!(data, &*unescape(kind, &encoded).unwrap());
    }
});
