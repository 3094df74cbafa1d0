//! Fuzz target for rich text editing.
//!
//! Applies arbitrary edit sequences and checks that the segment list stays
//! canonical and the raw text matches a plain `String` model.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use richtext::text::is_canonical;
use richtext::{AttributeSet, RichText, Rgba, TextAttributes};

#[derive(Arbitrary, Debug)]
enum Op {
    Push { text: String, style: u8 },
    Replace { start: u16, end: u16, text: String, style: u8 },
    Bold { start: u16, end: u16 },
    Superscript { start: u16, end: u16 },
    Reset { start: u16, end: u16 },
}

fn style(tag: u8) -> AttributeSet {
    match tag % 3 {
        0 => AttributeSet::new(),
        1 => AttributeSet::builder().fg(Rgba::RED).build(),
        _ => AttributeSet::builder().italic().build(),
    }
}

fn clamp(text: &RichText, start: u16, end: u16) -> (usize, usize) {
    let len = text.len();
    let a = usize::from(start).min(len);
    let b = usize::from(end).min(len);
    (a.min(b), a.max(b))
}

fuzz_target!(|ops: Vec<Op>| {
    let mut text = RichText::new();
    let mut model = String::new();

    for op in ops {
        match op {
            Op::Push { text: s, style: tag } => {
                text.push_str(&s, style(tag));
                model.push_str(&s);
            }
            Op::Replace { start, end, text: s, style: tag } => {
                let (a, b) = clamp(&text, start, end);
                let range = text.index_at_char(a).unwrap()..text.index_at_char(b).unwrap();
                text.replace_subrange(range, &RichText::from_raw(s.clone(), style(tag)));
                let head: String = model.chars().take(a).collect();
                let tail: String = model.chars().skip(b).collect();
                model = format!("{head}{s}{tail}");
            }
            Op::Bold { start, end } => {
                let (a, b) = clamp(&text, start, end);
                let range = text.index_at_char(a).unwrap()..text.index_at_char(b).unwrap();
                text.toggle_traits(range, TextAttributes::BOLD);
            }
            Op::Superscript { start, end } => {
                let (a, b) = clamp(&text, start, end);
                let range = text.index_at_char(a).unwrap()..text.index_at_char(b).unwrap();
                text.superscript(range);
            }
            Op::Reset { start, end } => {
                let (a, b) = clamp(&text, start, end);
                let range = text.index_at_char(a).unwrap()..text.index_at_char(b).unwrap();
                text.reset_baseline(range);
            }
        }
        assert!(is_canonical(text.segments()));
        assert_eq!(text.raw_text(), model);
    }
});
