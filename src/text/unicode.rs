//! Unicode-aware helpers over the raw text projection.

use super::index::RichIndex;
use super::rich::RichText;
use super::segment::Segment;
use unicode_normalization::{UnicodeNormalization, is_nfc};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

impl RichText {
    /// Terminal display width of the raw text.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.raw_text().width()
    }

    /// Number of extended grapheme clusters.
    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.raw_text().graphemes(true).count()
    }

    /// Index of the first scalar of each grapheme cluster.
    ///
    /// Clusters are computed over the whole raw text, so a cluster may span
    /// a segment boundary.
    #[must_use]
    pub fn grapheme_boundaries(&self) -> Vec<RichIndex> {
        self.raw_text()
            .grapheme_indices(true)
            .filter_map(|(offset, _)| self.index_at_byte(offset))
            .collect()
    }

    /// Check whether every segment is in Normalization Form C.
    #[must_use]
    pub fn is_nfc(&self) -> bool {
        self.segments().iter().all(|segment| is_nfc(&segment.text))
    }

    /// Normalize each segment to NFC, keeping attributes per segment.
    ///
    /// Composition never crosses a segment boundary: a base letter and a
    /// combining mark with different attributes stay separate. Char offsets
    /// after the first changed character may shift.
    #[must_use]
    pub fn normalized_nfc(&self) -> Self {
        Self::from_segments(self.segments().iter().map(|segment| {
            Segment::new(
                segment.text.nfc().collect::<String>(),
                segment.attributes.clone(),
            )
        }))
    }
}
