//! Two-level positions into a [`RichText`](super::RichText).

/// A position in a rich text value.
///
/// An index pairs a segment number with a byte offset inside that segment's
/// text. Indices are only meaningful for the value that produced them (or an
/// unmodified copy of it); obtain them from `start_index`, `end_index`,
/// `index_after`, `index_before`, or `index_at_char`.
///
/// Ordering is lexicographic on (segment, offset), which matches sequence
/// order. The end index is `(segment_count, 0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RichIndex {
    segment: usize,
    offset: usize,
}

impl RichIndex {
    pub(crate) const fn new(segment: usize, offset: usize) -> Self {
        Self { segment, offset }
    }

    /// Segment number.
    #[must_use]
    pub const fn segment(self) -> usize {
        self.segment
    }

    /// Byte offset inside the segment's text.
    #[must_use]
    pub const fn offset_in_segment(self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = RichIndex::new(0, 5);
        let b = RichIndex::new(1, 0);
        let c = RichIndex::new(1, 2);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.max(c), c);
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(RichIndex::default(), RichIndex::new(0, 0));
    }
}
