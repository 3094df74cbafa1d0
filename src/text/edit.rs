//! Range-based attribute editing.

use super::index::RichIndex;
use super::rich::RichText;
use crate::error::{Error, Result};
use crate::style::{Attribute, AttributeKey, AttributeSet, TextAttributes};
use std::ops::Range;

impl RichText {
    /// Transform the attributes of every run covering `range`.
    ///
    /// Runs that straddle a bound are split first; the result is
    /// re-canonicalized, so runs that end up equal merge.
    ///
    /// # Panics
    ///
    /// Panics if either bound is invalid or the range is reversed.
    pub fn update_attributes<F>(&mut self, range: Range<RichIndex>, mut f: F)
    where
        F: FnMut(&mut AttributeSet),
    {
        let prefix = self.slice(self.start_index()..range.start);
        let middle = self.slice(range.clone());
        let suffix = self.slice(range.end..self.end_index());
        if middle.is_empty() {
            return;
        }

        let mut segments = prefix.into_segments();
        segments.extend(middle.into_segments().into_iter().map(|mut segment| {
            f(&mut segment.attributes);
            segment
        }));
        segments.extend(suffix.into_segments());
        self.set_segments(segments);
    }

    /// Set `attribute` on every character in `range`.
    pub fn set_attribute(&mut self, range: Range<RichIndex>, attribute: &Attribute) {
        self.update_attributes(range, |attributes| {
            attributes.insert(attribute.clone());
        });
    }

    /// Remove the attribute stored under `key` from every character in `range`.
    pub fn remove_attribute(&mut self, range: Range<RichIndex>, key: &AttributeKey) {
        self.update_attributes(range, |attributes| {
            attributes.remove(key);
        });
    }

    /// Add typographic traits over `range`, keeping existing ones.
    pub fn add_traits(&mut self, range: Range<RichIndex>, traits: TextAttributes) {
        self.update_attributes(range, |attributes| {
            let merged = attributes.traits() | traits;
            attributes.insert(Attribute::Traits(merged));
        });
    }

    /// Remove typographic traits over `range`.
    pub fn remove_traits(&mut self, range: Range<RichIndex>, traits: TextAttributes) {
        self.update_attributes(range, |attributes| {
            let remaining = attributes.traits().difference(traits);
            attributes.insert(Attribute::Traits(remaining));
        });
    }

    /// Check whether every character in `range` has all of `traits`.
    ///
    /// An empty range has none.
    #[must_use]
    pub fn has_traits(&self, range: Range<RichIndex>, traits: TextAttributes) -> bool {
        let covered = self.slice(range);
        !covered.is_empty()
            && covered
                .segments()
                .iter()
                .all(|segment| segment.attributes.traits().contains(traits))
    }

    /// Toggle traits over `range`: remove them if every character already
    /// has them, add them otherwise.
    pub fn toggle_traits(&mut self, range: Range<RichIndex>, traits: TextAttributes) {
        if self.has_traits(range.clone(), traits) {
            self.remove_traits(range, traits);
        } else {
            self.add_traits(range, traits);
        }
    }

    /// Multiply every explicit font size in `range` by `factor`.
    ///
    /// Runs without a font are left alone. If any resulting size would be
    /// invalid, nothing is changed and the error is returned.
    pub fn scale_font(&mut self, range: Range<RichIndex>, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::InvalidFontSize(factor));
        }
        let mut next = self.clone();
        let mut failure = None;
        next.update_attributes(range, |attributes| {
            let Some(font) = attributes.font() else {
                return;
            };
            match font.scaled(factor) {
                Ok(scaled) => {
                    attributes.insert(Attribute::Font(scaled));
                }
                Err(err) => failure = Some(err),
            }
        });
        match failure {
            Some(err) => Err(err),
            None => {
                *self = next;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::style::Font;
    use crate::text::Segment;

    fn char_range(text: &RichText, range: Range<usize>) -> Range<RichIndex> {
        text.index_at_char(range.start).unwrap()..text.index_at_char(range.end).unwrap()
    }

    #[test]
    fn test_set_attribute_splits_runs() {
        let mut text = RichText::plain("hello world");
        let range = char_range(&text, 6..11);
        text.set_attribute(range, &Attribute::Foreground(Rgba::RED));
        assert_eq!(
            text.segments(),
            &[
                Segment::plain("hello "),
                Segment::new("world", AttributeSet::builder().fg(Rgba::RED).build()),
            ]
        );
    }

    #[test]
    fn test_remove_attribute_merges_back() {
        let mut text = RichText::plain("hello world");
        text.set_attribute(char_range(&text, 2..5), &Attribute::Link("https://a.b".into()));
        assert_eq!(text.segments().len(), 3);
        text.remove_attribute(char_range(&text, 2..5), &AttributeKey::Link);
        assert_eq!(text, RichText::plain("hello world"));
    }

    #[test]
    fn test_empty_range_is_noop() {
        let mut text = RichText::plain("abc");
        let at = text.index_at_char(1).unwrap();
        text.add_traits(at..at, TextAttributes::BOLD);
        assert_eq!(text, RichText::plain("abc"));
    }

    #[test]
    fn test_toggle_traits() {
        let mut text = RichText::plain("abcd");
        text.toggle_traits(char_range(&text, 0..2), TextAttributes::BOLD);
        assert!(text.has_traits(char_range(&text, 0..2), TextAttributes::BOLD));
        assert!(!text.has_traits(char_range(&text, 0..3), TextAttributes::BOLD));

        let range = char_range(&text, 0..2);
        text.toggle_traits(range, TextAttributes::BOLD);
        assert_eq!(text, RichText::plain("abcd"));
    }

    #[test]
    fn test_toggle_partially_bold_adds() {
        let mut text = RichText::plain("abcd");
        text.add_traits(char_range(&text, 0..2), TextAttributes::BOLD);
        text.toggle_traits(char_range(&text, 0..4), TextAttributes::BOLD);
        assert_eq!(text.segments().len(), 1);
        assert!(text.segments()[0].attributes.traits().contains(TextAttributes::BOLD));
    }

    #[test]
    fn test_remove_traits_keeps_others() {
        let both = AttributeSet::builder().bold().italic().build();
        let mut text = RichText::from_raw("xy", both);
        let all = text.start_index()..text.end_index();
        text.remove_traits(all, TextAttributes::BOLD);
        assert_eq!(text.segments()[0].attributes.traits(), TextAttributes::ITALIC);
    }

    #[test]
    fn test_scale_font() {
        let font = Font::system(10.0).unwrap();
        let mut text = RichText::from_raw("ab", AttributeSet::builder().font(font).build())
            + RichText::plain("cd");
        let all = text.start_index()..text.end_index();
        text.scale_font(all, 2.0).unwrap();
        assert_eq!(
            text.segments()[0].attributes.font().map(Font::size),
            Some(20.0)
        );
        assert!(text.segments()[1].attributes.font().is_none());
    }

    #[test]
    fn test_scale_font_rejects_bad_factor() {
        let mut text = RichText::from_raw(
            "ab",
            AttributeSet::builder().font(Font::system(10.0).unwrap()).build(),
        );
        let before = text.clone();
        let all = text.start_index()..text.end_index();
        assert!(text.scale_font(all.clone(), 0.0).is_err());
        assert!(text.scale_font(all, f64::MAX).is_err());
        assert_eq!(text, before);
    }
}
