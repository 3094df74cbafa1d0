//! Shared fixtures for rich text integration tests.
//!
//! - [`palette`] - A small set of distinct attribute sets
//! - [`segments_strategy`] - Random, non-canonical segment lists
//! - [`rich_text_strategy`] - Random canonical values
//! - [`sized_text_strategy`] - Canonical values with arbitrary font sizes
//! - [`char_range`] - Char-offset range to `RichIndex` range

#![allow(dead_code)]
#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry

use proptest::prelude::*;
use richtext::{AttributeSet, Font, RichIndex, RichText, Rgba, Segment};
use std::ops::Range;

/// Four distinct attribute sets; small enough that random lists often
/// contain equal neighbours.
pub fn palette() -> Vec<AttributeSet> {
    vec![
        AttributeSet::new(),
        AttributeSet::builder().fg(Rgba::RED).build(),
        AttributeSet::builder().bold().italic().build(),
        AttributeSet::builder()
            .font(Font::new("Serif", 14.0).unwrap())
            .link("https://example.com")
            .build(),
    ]
}

/// Attribute set drawn from [`palette`].
pub fn attributes_strategy() -> impl Strategy<Value = AttributeSet> {
    prop::sample::select(palette())
}

/// Palette sets mixed with fonts of arbitrary size.
pub fn sized_attributes_strategy() -> impl Strategy<Value = AttributeSet> {
    prop_oneof![
        attributes_strategy(),
        (6.0f64..96.0).prop_map(|size| {
            AttributeSet::builder()
                .font(Font::system(size).unwrap())
                .build()
        }),
    ]
}

/// Short strings mixing ASCII, accented, and wide characters (may be empty).
pub fn fragment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', '.', 'é', '中', '😀']), 0..5)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Segment lists that are usually not canonical.
pub fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(
        (fragment_strategy(), attributes_strategy())
            .prop_map(|(text, attributes)| Segment::new(text, attributes)),
        0..8,
    )
}

/// Canonical rich text values.
pub fn rich_text_strategy() -> impl Strategy<Value = RichText> {
    segments_strategy().prop_map(RichText::from_segments)
}

/// Canonical rich text whose runs often carry explicit font sizes.
pub fn sized_text_strategy() -> impl Strategy<Value = RichText> {
    prop::collection::vec(
        (fragment_strategy(), sized_attributes_strategy())
            .prop_map(|(text, attributes)| Segment::new(text, attributes)),
        0..8,
    )
    .prop_map(RichText::from_segments)
}

/// Convert a char-offset range into an index range.
pub fn char_range(text: &RichText, range: Range<usize>) -> Range<RichIndex> {
    let start = text.index_at_char(range.start).expect("start in bounds");
    let end = text.index_at_char(range.end).expect("end in bounds");
    start..end
}

/// Substring by char offsets.
pub fn char_substring(s: &str, range: Range<usize>) -> String {
    s.chars().skip(range.start).take(range.end - range.start).collect()
}
