//! Fuzz target for color hex parsing.
//!
//! `Rgba::from_hex` must never panic, and anything it accepts must survive
//! a format/parse round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtext::Rgba;

fuzz_target!(|data: &str| {
    if let Some(color) = Rgba::from_hex(data) {
        assert_eq!(Rgba::from_hex(&color.to_hex()), Some(color));
    }
    let _ = data.parse::<Rgba>();
});
