//! Styled text segments and the canonical segment store.

use crate::style::AttributeSet;
use serde::{Deserialize, Serialize};

/// A run of text with one uniform attribute set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Raw text of the run.
    pub text: String,
    /// Attributes applied to every character of the run.
    pub attributes: AttributeSet,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(text: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// Create a segment with no attributes.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, AttributeSet::new())
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Number of chars.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether this segment would merge with `other`.
    #[must_use]
    pub fn same_attributes(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}

/// Normalize a segment list: drop empty runs and merge equal neighbours.
///
/// A merged run keeps the attributes of the later segment. The output never
/// contains an empty segment or two adjacent segments with equal attributes,
/// and canonicalizing it again returns it unchanged.
#[must_use]
pub fn canonicalize<I>(segments: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    let mut out: Vec<Segment> = Vec::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.same_attributes(&segment) => {
                last.text.push_str(&segment.text);
                last.attributes = segment.attributes;
            }
            _ => out.push(segment),
        }
    }
    out
}

/// Check the canonical form invariants.
#[must_use]
pub fn is_canonical(segments: &[Segment]) -> bool {
    segments.iter().all(|s| !s.is_empty())
        && segments.windows(2).all(|pair| !pair[0].same_attributes(&pair[1]))
}
