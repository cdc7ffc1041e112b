#![no_main]

use fform_codec::{Marker, PrimitiveValue, decode, encode, is_numeral};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(key) = std::str::from_utf8(data) else {
        return;
    };
    let value = decode(key);
    match &value {
        PrimitiveValue::String(s) => {
            assert_eq!(s, key);
            assert!(!Marker::is_reserved(key) && !is_numeral(key));
            assert_eq!(encode(&value), key);
        }
        // Numerals too long for f64 saturate to infinity, never NaN.
        PrimitiveValue::Number(n) if is_numeral(key) => assert!(!n.is_nan()),
        _ => assert!(Marker::from_marker_str(key).is_some()),
    }
});
