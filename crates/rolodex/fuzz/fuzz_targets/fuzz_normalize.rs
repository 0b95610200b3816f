//! Fuzz target for field normalization.
//!
//! Checks that every role's rule never panics and that accepted values are
//! already in canonical form.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rolodex::{FieldRole, normalize::normalize_as};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    role: u8,
    value: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let role = match input.role % 4 {
        0 => FieldRole::Name,
        1 => FieldRole::Email,
        2 => FieldRole::Phone,
        _ => FieldRole::Passthrough,
    };

    if let Ok(once) = normalize_as(role, "Fuzzed", input.value) {
        let twice = normalize_as(role, "Fuzzed", &once).expect("canonical value rejected");
        assert_eq!(once, twice);
    }
});
