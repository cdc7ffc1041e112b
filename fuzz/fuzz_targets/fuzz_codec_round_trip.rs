#![no_main]

use arbitrary::Arbitrary;
use fform_codec::{Marker, PrimitiveValue, decode, encode, is_numeral};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Input {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

fuzz_target!(|input: Input| {
    let value = match input {
        Input::Undefined => PrimitiveValue::Undefined,
        Input::Null => PrimitiveValue::Null,
        Input::Bool(b) => PrimitiveValue::Bool(b),
        Input::Number(n) => PrimitiveValue::Number(n),
        // Numeral text shares its key with the number; marker text is reserved.
        Input::Text(s) if is_numeral(&s) || Marker::is_reserved(&s) => return,
        Input::Text(s) => PrimitiveValue::String(s),
    };
    let key = encode(&value);
    let back = decode(&key);
    assert_eq!(back, value, "key {key:?}");
});
