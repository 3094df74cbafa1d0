//! Per-character views of rich text.

use super::index::RichIndex;
use super::rich::RichText;
use crate::style::AttributeSet;
use std::iter::FusedIterator;

/// One character together with the attributes of its segment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scalar {
    /// The character.
    pub ch: char,
    /// Attributes of the segment it came from.
    pub attributes: AttributeSet,
}

impl Scalar {
    /// Create a styled scalar.
    #[must_use]
    pub fn new(ch: char, attributes: AttributeSet) -> Self {
        Self { ch, attributes }
    }

    /// Create a scalar with no attributes.
    #[must_use]
    pub fn plain(ch: char) -> Self {
        Self::new(ch, AttributeSet::new())
    }
}

/// Borrowed form of [`Scalar`] yielded during iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarRef<'a> {
    /// The character.
    pub ch: char,
    /// Attributes of the containing segment.
    pub attributes: &'a AttributeSet,
}

impl ScalarRef<'_> {
    /// Clone the attributes into an owned [`Scalar`].
    #[must_use]
    pub fn to_scalar(self) -> Scalar {
        Scalar::new(self.ch, self.attributes.clone())
    }
}

/// Double-ended iterator over the scalars of a [`RichText`].
#[derive(Clone, Debug)]
pub struct Scalars<'a> {
    text: &'a RichText,
    front: RichIndex,
    back: RichIndex,
    remaining: usize,
}

impl<'a> Scalars<'a> {
    pub(crate) fn new(text: &'a RichText) -> Self {
        Self {
            text,
            front: text.start_index(),
            back: text.end_index(),
            remaining: text.len(),
        }
    }
}

impl<'a> Iterator for Scalars<'a> {
    type Item = ScalarRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let scalar = self.text.get(self.front)?;
        self.front = self.text.index_after(self.front);
        self.remaining -= 1;
        Some(scalar)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Scalars<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.text.index_before(self.back);
        self.remaining -= 1;
        self.text.get(self.back)
    }
}

impl ExactSizeIterator for Scalars<'_> {}

impl FusedIterator for Scalars<'_> {}

/// Iterator over every valid (non-end) index of a [`RichText`].
#[derive(Clone, Debug)]
pub struct Indices<'a> {
    text: &'a RichText,
    next: RichIndex,
    end: RichIndex,
}

impl<'a> Indices<'a> {
    pub(crate) fn new(text: &'a RichText) -> Self {
        Self {
            text,
            next: text.start_index(),
            end: text.end_index(),
        }
    }
}

impl Iterator for Indices<'_> {
    type Item = RichIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let current = self.next;
        self.next = self.text.index_after(current);
        Some(current)
    }
}

impl FusedIterator for Indices<'_> {}
