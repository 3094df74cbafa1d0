//! The canonical segmented rich text value.

use super::index::RichIndex;
use super::scalar::{Indices, Scalar, ScalarRef, Scalars};
use super::segment::{Segment, canonicalize, is_canonical};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::style::AttributeSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Range};

/// Offsets derived from the segment list.
///
/// Kept in step with the segment list by `RichText`; never mutated on its
/// own.
#[derive(Clone, Debug, Default)]
struct Layout {
    raw: String,
    /// Byte offset of each segment in `raw`.
    byte_starts: Vec<usize>,
    /// Char offset of each segment in `raw`.
    char_starts: Vec<usize>,
    char_len: usize,
}

impl Layout {
    fn compute(segments: &[Segment]) -> Self {
        let mut layout = Self {
            raw: String::with_capacity(segments.iter().map(Segment::len).sum()),
            byte_starts: Vec::with_capacity(segments.len()),
            char_starts: Vec::with_capacity(segments.len()),
            char_len: 0,
        };
        for segment in segments {
            layout.push(&segment.text);
        }
        layout
    }

    fn push(&mut self, text: &str) {
        self.byte_starts.push(self.raw.len());
        self.char_starts.push(self.char_len);
        self.extend_last(text);
    }

    fn extend_last(&mut self, text: &str) {
        self.raw.push_str(text);
        self.char_len += text.chars().count();
    }
}

/// Styled text stored as canonical attribute runs.
///
/// A `RichText` is a sequence of [`Segment`]s such that no segment is empty
/// and no two neighbouring segments have equal attribute sets. Every
/// mutation restores that form, so two values with the same logical content
/// always have the same segments and compare equal.
///
/// Positions are [`RichIndex`] values (segment, offset) rather than plain
/// integers; use [`RichText::index_at_char`] and [`RichText::char_offset`]
/// to bridge to raw character offsets.
///
/// # Examples
///
/// ```
/// use richtext::{AttributeSet, RichText, Rgba};
///
/// let red = AttributeSet::builder().fg(Rgba::RED).build();
/// let text = RichText::from_raw("abc", red.clone()) + RichText::from_raw("def", red);
/// assert_eq!(text.segments().len(), 1);
/// assert_eq!(text.raw_text(), "abcdef");
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct RichText {
    segments: Vec<Segment>,
    layout: Layout,
}

impl RichText {
    /// Create empty rich text.
    #[must_use]
    pub fn new() -> Self {
        Self::from_canonical(Vec::new())
    }

    /// Create rich text from one run of text.
    #[must_use]
    pub fn from_raw(text: impl Into<String>, attributes: AttributeSet) -> Self {
        Self::from_segments([Segment::new(text, attributes)])
    }

    /// Create rich text with no attributes.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_raw(text, AttributeSet::new())
    }

    /// Create rich text from arbitrary segments, canonicalizing them.
    #[must_use]
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        Self::from_canonical(canonicalize(segments))
    }

    /// Decompose text annotated with byte-range attribute runs.
    ///
    /// Runs must be sorted, non-overlapping, in bounds, and start and end on
    /// char boundaries. Text not covered by any run gets an empty attribute
    /// set.
    pub fn from_runs(text: &str, runs: &[(Range<usize>, AttributeSet)]) -> Result<Self> {
        let len = text.len();
        let mut segments = Vec::with_capacity(runs.len() * 2 + 1);
        let mut cursor = 0;
        let mut gaps = 0usize;

        for (range, attributes) in runs {
            if range.start < cursor || range.start > range.end || range.end > len {
                return Err(Error::InvalidRange {
                    start: range.start,
                    end: range.end,
                    len,
                });
            }
            for offset in [range.start, range.end] {
                if !text.is_char_boundary(offset) {
                    return Err(Error::NotCharBoundary(offset));
                }
            }
            if range.start > cursor {
                segments.push(Segment::plain(&text[cursor..range.start]));
                gaps += 1;
            }
            segments.push(Segment::new(&text[range.clone()], attributes.clone()));
            cursor = range.end;
        }
        if cursor < len {
            segments.push(Segment::plain(&text[cursor..]));
            gaps += 1;
        }

        if gaps > 0 {
            emit_log_with(LogLevel::Debug, || {
                format!("from_runs: filled {gaps} unstyled gap(s) in {len} bytes")
            });
        }
        Ok(Self::from_segments(segments))
    }

    /// Wrap a list already known to be canonical.
    fn from_canonical(segments: Vec<Segment>) -> Self {
        debug_assert!(is_canonical(&segments), "segments are not canonical");
        let layout = Layout::compute(&segments);
        Self { segments, layout }
    }

    /// Replace the segment list, restoring canonical form.
    pub fn set_segments<I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = Segment>,
    {
        *self = Self::from_segments(segments);
    }

    /// The canonical segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Take ownership of the canonical segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// The text without attributes.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.layout.raw
    }

    /// Number of scalars (chars).
    #[must_use]
    pub fn len(&self) -> usize {
        self.layout.char_len
    }

    /// Length of the raw text in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.layout.raw.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// One run per segment, as byte ranges into [`RichText::raw_text`].
    #[must_use]
    pub fn runs(&self) -> Vec<(Range<usize>, &AttributeSet)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let start = self.layout.byte_starts[i];
                (start..start + segment.len(), &segment.attributes)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Indices
    // ------------------------------------------------------------------

    /// Index of the first scalar (equal to the end index when empty).
    #[must_use]
    pub fn start_index(&self) -> RichIndex {
        RichIndex::new(0, 0)
    }

    /// One past the last scalar.
    #[must_use]
    pub fn end_index(&self) -> RichIndex {
        RichIndex::new(self.segments.len(), 0)
    }

    /// Check whether `index` is a position in this value (end included).
    #[must_use]
    pub fn is_valid_index(&self, index: RichIndex) -> bool {
        if index == self.end_index() {
            return true;
        }
        self.segments.get(index.segment()).is_some_and(|segment| {
            index.offset_in_segment() < segment.len()
                && segment.text.is_char_boundary(index.offset_in_segment())
        })
    }

    /// The index following `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end index or not a valid index.
    #[must_use]
    pub fn index_after(&self, index: RichIndex) -> RichIndex {
        let Some(scalar) = self.get(index) else {
            panic!("cannot advance past {index:?} (end is {:?})", self.end_index());
        };
        let offset = index.offset_in_segment() + scalar.ch.len_utf8();
        if offset == self.segments[index.segment()].len() {
            RichIndex::new(index.segment() + 1, 0)
        } else {
            RichIndex::new(index.segment(), offset)
        }
    }

    /// The index preceding `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the start index or not a valid index.
    #[must_use]
    pub fn index_before(&self, index: RichIndex) -> RichIndex {
        assert!(
            self.is_valid_index(index) && index > self.start_index(),
            "cannot retreat before {index:?}"
        );
        let (segment, end) = if index.offset_in_segment() == 0 {
            let previous = index.segment() - 1;
            (previous, self.segments[previous].len())
        } else {
            (index.segment(), index.offset_in_segment())
        };
        let offset = self.segments[segment].text[..end]
            .char_indices()
            .next_back()
            .map_or(0, |(offset, _)| offset);
        RichIndex::new(segment, offset)
    }

    /// The scalar at `index`, or `None` for the end index or invalid indices.
    #[must_use]
    pub fn get(&self, index: RichIndex) -> Option<ScalarRef<'_>> {
        let segment = self.segments.get(index.segment())?;
        let ch = segment.text.get(index.offset_in_segment()..)?.chars().next()?;
        Some(ScalarRef {
            ch,
            attributes: &segment.attributes,
        })
    }

    /// The scalar at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end index or not a valid index.
    #[must_use]
    pub fn scalar_at(&self, index: RichIndex) -> ScalarRef<'_> {
        match self.get(index) {
            Some(scalar) => scalar,
            None => panic!("no scalar at {index:?}"),
        }
    }

    /// Attributes in effect at `index`.
    #[must_use]
    pub fn attributes_at(&self, index: RichIndex) -> Option<&AttributeSet> {
        self.get(index).map(|scalar| scalar.attributes)
    }

    /// Iterate scalars in order.
    #[must_use]
    pub fn scalars(&self) -> Scalars<'_> {
        Scalars::new(self)
    }

    /// Iterate every index except the end index.
    #[must_use]
    pub fn indices(&self) -> Indices<'_> {
        Indices::new(self)
    }

    /// Index of the `char_offset`-th scalar; the length maps to the end index.
    #[must_use]
    pub fn index_at_char(&self, char_offset: usize) -> Option<RichIndex> {
        let len = self.len();
        if char_offset == len {
            return Some(self.end_index());
        }
        if char_offset > len {
            return None;
        }
        let starts = &self.layout.char_starts;
        let segment = starts.partition_point(|&start| start <= char_offset) - 1;
        let local = char_offset - starts[segment];
        self.segments[segment]
            .text
            .char_indices()
            .nth(local)
            .map(|(offset, _)| RichIndex::new(segment, offset))
    }

    /// Index of the scalar starting at byte `byte_offset` of the raw text.
    #[must_use]
    pub fn index_at_byte(&self, byte_offset: usize) -> Option<RichIndex> {
        if byte_offset == self.byte_len() {
            return Some(self.end_index());
        }
        if !self.layout.raw.is_char_boundary(byte_offset) || byte_offset > self.byte_len() {
            return None;
        }
        let starts = &self.layout.byte_starts;
        let segment = starts.partition_point(|&start| start <= byte_offset) - 1;
        Some(RichIndex::new(segment, byte_offset - starts[segment]))
    }

    /// Raw char offset of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid index.
    #[must_use]
    pub fn char_offset(&self, index: RichIndex) -> usize {
        assert!(self.is_valid_index(index), "invalid index {index:?}");
        if index == self.end_index() {
            return self.len();
        }
        let segment = &self.segments[index.segment()];
        self.layout.char_starts[index.segment()]
            + segment.text[..index.offset_in_segment()].chars().count()
    }

    /// Raw byte offset of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid index.
    #[must_use]
    pub fn byte_offset(&self, index: RichIndex) -> usize {
        assert!(self.is_valid_index(index), "invalid index {index:?}");
        if index == self.end_index() {
            return self.byte_len();
        }
        self.layout.byte_starts[index.segment()] + index.offset_in_segment()
    }

    fn assert_range(&self, range: &Range<RichIndex>) {
        assert!(
            self.is_valid_index(range.start)
                && self.is_valid_index(range.end)
                && range.start <= range.end,
            "invalid range {range:?} (end is {:?})",
            self.end_index()
        );
    }

    // ------------------------------------------------------------------
    // Slicing and concatenation
    // ------------------------------------------------------------------

    /// Copy out the scalars in `range`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is invalid or the range is reversed.
    #[must_use]
    pub fn slice(&self, range: Range<RichIndex>) -> Self {
        self.assert_range(&range);
        let (start, end) = (range.start, range.end);
        let mut out = Vec::new();
        for (i, segment) in self
            .segments
            .iter()
            .enumerate()
            .take(end.segment() + 1)
            .skip(start.segment())
        {
            let from = if i == start.segment() {
                start.offset_in_segment()
            } else {
                0
            };
            let to = if i == end.segment() {
                end.offset_in_segment()
            } else {
                segment.len()
            };
            if from < to {
                out.push(Segment::new(
                    &segment.text[from..to],
                    segment.attributes.clone(),
                ));
            }
        }
        Self::from_canonical(out)
    }

    /// Copy out the scalars between two raw char offsets.
    pub fn slice_chars(&self, range: Range<usize>) -> Result<Self> {
        let invalid = || Error::InvalidRange {
            start: range.start,
            end: range.end,
            len: self.len(),
        };
        if range.start > range.end {
            return Err(invalid());
        }
        let start = self.index_at_char(range.start).ok_or_else(invalid)?;
        let end = self.index_at_char(range.end).ok_or_else(invalid)?;
        Ok(self.slice(start..end))
    }

    /// Join two values, reconciling only the segments at the seam.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.extend_canonical(other.segments);
        self
    }

    /// Append `other` to the end.
    pub fn append(&mut self, other: &Self) {
        self.extend_canonical(other.segments.iter().cloned());
    }

    /// Append canonical segments, merging the first into our last segment
    /// when their attributes are equal (the later attributes win, as in
    /// [`canonicalize`]). Only the seam is examined.
    fn extend_canonical<I>(&mut self, incoming: I)
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut incoming = incoming.into_iter();
        let Some(first) = incoming.next() else {
            return;
        };
        let merges = self
            .segments
            .last()
            .is_some_and(|last| last.same_attributes(&first));
        if let (true, Some(last)) = (merges, self.segments.last_mut()) {
            self.layout.extend_last(&first.text);
            last.text.push_str(&first.text);
            last.attributes = first.attributes;
        } else {
            self.push_segment(first);
        }
        for segment in incoming {
            self.push_segment(segment);
        }
    }

    fn push_segment(&mut self, segment: Segment) {
        self.layout.push(&segment.text);
        self.segments.push(segment);
    }

    /// Append one scalar.
    pub fn push(&mut self, scalar: Scalar) {
        let mut text = String::new();
        text.push(scalar.ch);
        self.append(&Self::from_raw(text, scalar.attributes));
    }

    /// Append a run of text with the given attributes.
    pub fn push_str(&mut self, text: &str, attributes: AttributeSet) {
        self.append(&Self::from_raw(text, attributes));
    }

    /// Replace the scalars in `range` with `replacement`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is invalid or the range is reversed.
    pub fn replace_subrange(&mut self, range: Range<RichIndex>, replacement: &Self) {
        self.assert_range(&range);
        let mut joined = self.slice(self.start_index()..range.start);
        let suffix = self.slice(range.end..self.end_index());
        joined.extend_canonical(replacement.segments.iter().cloned());
        joined.extend_canonical(suffix.segments);
        *self = joined;
    }

    /// Insert `other` before `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a valid index.
    pub fn insert(&mut self, at: RichIndex, other: &Self) {
        self.replace_subrange(at..at, other);
    }

    /// Remove the scalars in `range`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is invalid or the range is reversed.
    pub fn remove_subrange(&mut self, range: Range<RichIndex>) {
        self.replace_subrange(range, &Self::new());
    }
}

impl Default for RichText {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichText")
            .field("segments", &self.segments)
            .finish()
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_text())
    }
}

impl PartialEq for RichText {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for RichText {}

impl Hash for RichText {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<Vec<Segment>> for RichText {
    fn from(segments: Vec<Segment>) -> Self {
        let count = segments.len();
        let text = Self::from_segments(segments);
        if text.segments.len() != count {
            emit_log_with(LogLevel::Debug, || {
                format!(
                    "canonicalized {count} segment(s) into {}",
                    text.segments.len()
                )
            });
        }
        text
    }
}

impl From<RichText> for Vec<Segment> {
    fn from(text: RichText) -> Self {
        text.segments
    }
}

impl FromIterator<Segment> for RichText {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl FromIterator<Scalar> for RichText {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        let mut segments: Vec<Segment> = Vec::new();
        for scalar in iter {
            match segments.last_mut() {
                Some(last) if last.attributes == scalar.attributes => last.text.push(scalar.ch),
                _ => segments.push(Segment::new(scalar.ch.to_string(), scalar.attributes)),
            }
        }
        Self::from_canonical(segments)
    }
}

impl<'a> FromIterator<ScalarRef<'a>> for RichText {
    fn from_iter<I: IntoIterator<Item = ScalarRef<'a>>>(iter: I) -> Self {
        let mut segments: Vec<Segment> = Vec::new();
        for scalar in iter {
            match segments.last_mut() {
                Some(last) if last.attributes == *scalar.attributes => last.text.push(scalar.ch),
                _ => segments.push(Segment::new(
                    scalar.ch.to_string(),
                    scalar.attributes.clone(),
                )),
            }
        }
        Self::from_canonical(segments)
    }
}

impl Extend<Scalar> for RichText {
    fn extend<I: IntoIterator<Item = Scalar>>(&mut self, iter: I) {
        let tail: Self = iter.into_iter().collect();
        self.append(&tail);
    }
}

impl Add for RichText {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.concat(rhs)
    }
}

impl Add<&RichText> for RichText {
    type Output = Self;

    fn add(mut self, rhs: &RichText) -> Self {
        self.append(rhs);
        self
    }
}

impl AddAssign for RichText {
    fn add_assign(&mut self, rhs: Self) {
        self.extend_canonical(rhs.segments);
    }
}

impl AddAssign<&RichText> for RichText {
    fn add_assign(&mut self, rhs: &RichText) {
        self.append(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn attrs(color: Rgba) -> AttributeSet {
        AttributeSet::builder().fg(color).build()
    }

    fn three_runs() -> RichText {
        RichText::from_segments(vec![
            Segment::new("ab", attrs(Rgba::RED)),
            Segment::new("cd", attrs(Rgba::GREEN)),
            Segment::new("ef", attrs(Rgba::BLUE)),
        ])
    }

    #[test]
    fn test_three_periods() {
        let text = RichText::plain("...");
        assert_eq!(text.raw_text(), "...");
        assert_eq!(text.len(), 3);
        let chars: Vec<char> = text.scalars().map(|s| s.ch).collect();
        assert_eq!(chars, vec!['.', '.', '.']);
    }

    #[test]
    fn test_empty_text_indices() {
        let text = RichText::new();
        assert!(text.is_empty());
        assert_eq!(text.start_index(), text.end_index());
        assert_eq!(text.len(), 0);
        assert_eq!(text.raw_text(), "");
        assert!(text.get(text.start_index()).is_none());
        assert_eq!(RichText::plain(""), text);
    }

    #[test]
    fn test_index_after_crosses_segments() {
        let text = three_runs();
        let second = text.index_after(text.start_index());
        assert_eq!(second, RichIndex::new(0, 1));
        let third = text.index_after(second);
        assert_eq!(third, RichIndex::new(1, 0));
        assert_eq!(text.scalar_at(third).ch, 'c');
    }

    #[test]
    fn test_index_before_from_end_reads_last_char() {
        let text = RichText::from_segments(vec![
            Segment::new("aé", attrs(Rgba::RED)),
            Segment::new("ü", attrs(Rgba::BLUE)),
        ]);
        let last = text.index_before(text.end_index());
        assert_eq!(last, RichIndex::new(1, 0));
        let before = text.index_before(last);
        assert_eq!(before, RichIndex::new(0, 1));
        assert_eq!(text.scalar_at(before).ch, 'é');
        assert_eq!(text.index_before(before), text.start_index());
    }

    #[test]
    #[should_panic(expected = "cannot advance")]
    fn test_index_after_end_panics() {
        let text = RichText::plain("a");
        let _ = text.index_after(text.end_index());
    }

    #[test]
    #[should_panic(expected = "cannot retreat")]
    fn test_index_before_start_panics() {
        let text = RichText::plain("a");
        let _ = text.index_before(text.start_index());
    }

    #[test]
    fn test_invalid_index_inside_multibyte_char() {
        let text = RichText::plain("é");
        assert!(!text.is_valid_index(RichIndex::new(0, 1)));
        assert!(text.get(RichIndex::new(0, 1)).is_none());
    }

    #[test]
    fn test_char_offset_bridging() {
        let text = RichText::from_segments(vec![
            Segment::new("héllo", attrs(Rgba::RED)),
            Segment::new(" wörld", attrs(Rgba::BLUE)),
        ]);
        for n in 0..=text.len() {
            let index = text.index_at_char(n).unwrap();
            assert_eq!(text.char_offset(index), n);
        }
        assert_eq!(text.index_at_char(text.len() + 1), None);
        assert_eq!(text.index_at_char(5), Some(RichIndex::new(1, 0)));
    }

    #[test]
    fn test_index_at_byte() {
        let text = three_runs();
        assert_eq!(text.index_at_byte(3), Some(RichIndex::new(1, 1)));
        assert_eq!(text.index_at_byte(6), Some(text.end_index()));
        assert_eq!(text.index_at_byte(7), None);
        let accented = RichText::plain("é");
        assert_eq!(accented.index_at_byte(1), None);
    }

    #[test]
    fn test_concat_same_attributes_merges() {
        let a = RichText::from_raw("abc", attrs(Rgba::RED));
        let b = RichText::from_raw("def", attrs(Rgba::RED));
        let joined = a + b;
        assert_eq!(joined.segments(), &[Segment::new("abcdef", attrs(Rgba::RED))]);
    }

    #[test]
    fn test_concat_different_attributes_kept() {
        let a = RichText::from_raw("abc", attrs(Rgba::RED));
        let b = RichText::from_raw("def", attrs(Rgba::BLUE));
        let joined = a + b;
        assert_eq!(
            joined.segments(),
            &[
                Segment::new("abc", attrs(Rgba::RED)),
                Segment::new("def", attrs(Rgba::BLUE)),
            ]
        );
    }

    #[test]
    fn test_concat_identity() {
        let x = three_runs();
        assert_eq!(RichText::new() + x.clone(), x);
        assert_eq!(x.clone() + RichText::new(), x);
    }

    #[test]
    fn test_slice_partial_segments() {
        let text = three_runs();
        let start = text.index_at_char(1).unwrap();
        let end = text.index_at_char(5).unwrap();
        let slice = text.slice(start..end);
        assert_eq!(slice.raw_text(), "bcde");
        assert_eq!(slice.segments().len(), 3);
        assert_eq!(slice.segments()[1], Segment::new("cd", attrs(Rgba::GREEN)));
    }

    #[test]
    fn test_slice_at_segment_boundary_has_no_empty_segment() {
        let text = three_runs();
        let start = text.index_at_char(2).unwrap();
        let end = text.index_at_char(4).unwrap();
        let slice = text.slice(start..end);
        assert_eq!(slice.segments(), &[Segment::new("cd", attrs(Rgba::GREEN))]);
    }

    #[test]
    fn test_slice_chars_errors() {
        let text = three_runs();
        assert_eq!(
            text.slice_chars(4..2),
            Err(Error::InvalidRange {
                start: 4,
                end: 2,
                len: 6
            })
        );
        assert!(text.slice_chars(0..7).is_err());
        assert_eq!(text.slice_chars(0..6).unwrap(), text);
    }

    #[test]
    fn test_replace_subrange_merges_at_both_seams() {
        let mut text = RichText::from_segments(vec![
            Segment::new("ab", attrs(Rgba::RED)),
            Segment::new("XY", attrs(Rgba::BLUE)),
            Segment::new("cd", attrs(Rgba::RED)),
        ]);
        let start = text.index_at_char(2).unwrap();
        let end = text.index_at_char(4).unwrap();
        text.replace_subrange(start..end, &RichText::from_raw("-", attrs(Rgba::RED)));
        assert_eq!(text.segments(), &[Segment::new("ab-cd", attrs(Rgba::RED))]);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut text = RichText::plain("helld");
        let at = text.index_at_char(3).unwrap();
        text.insert(at, &RichText::plain("lo wor"));
        assert_eq!(text.raw_text(), "hello world");
        assert_eq!(text.segments().len(), 1);

        let start = text.index_at_char(5).unwrap();
        text.remove_subrange(start..text.end_index());
        assert_eq!(text, RichText::plain("hello"));
    }

    #[test]
    fn test_push_character_by_character() {
        let mut text = RichText::new();
        for ch in "typing".chars() {
            text.push(Scalar::plain(ch));
        }
        assert_eq!(text.segments().len(), 1);
        assert_eq!(text.raw_text(), "typing");
    }

    #[test]
    fn test_from_runs_fills_gaps() {
        let bold = AttributeSet::builder().bold().build();
        let text = RichText::from_runs("hello world", &[(6..11, bold.clone())]).unwrap();
        assert_eq!(
            text.segments(),
            &[Segment::plain("hello "), Segment::new("world", bold)]
        );
        let runs = text.runs();
        assert_eq!(runs[1].0, 6..11);
    }

    #[test]
    fn test_from_runs_rejects_bad_input() {
        let bold = AttributeSet::builder().bold().build();
        assert_eq!(
            RichText::from_runs("abc", &[(0..2, bold.clone()), (1..3, bold.clone())]),
            Err(Error::InvalidRange {
                start: 1,
                end: 3,
                len: 3
            })
        );
        assert_eq!(
            RichText::from_runs("é", &[(0..1, bold.clone())]),
            Err(Error::NotCharBoundary(1))
        );
        assert!(RichText::from_runs("abc", &[(0..4, bold)]).is_err());
    }

    #[test]
    fn test_scalar_round_trip() {
        let text = three_runs();
        let owned: RichText = text.scalars().map(ScalarRef::to_scalar).collect();
        let borrowed: RichText = text.scalars().collect();
        assert_eq!(owned, text);
        assert_eq!(borrowed, text);
    }

    #[test]
    fn test_display_is_raw_text() {
        assert_eq!(three_runs().to_string(), "abcdef");
    }
}
