//! Rich text stored as canonical attribute runs.
//!
//! Key types:
//!
//! - [`RichText`]: Styled text as a list of [`Segment`]s, kept canonical
//! - [`RichIndex`]: Two-level (segment, offset) position
//! - [`Scalar`] / [`ScalarRef`]: One character plus its attributes
//! - [`BaselineOptions`]: Configuration for superscript/subscript nesting
//!
//! # Canonical form
//!
//! After every mutation no segment is empty and no two neighbouring segments
//! carry equal [`AttributeSet`](crate::AttributeSet)s. Concatenation only
//! re-checks the two segments that meet at the seam, so building text one
//! character at a time stays linear.
//!
//! # Examples
//!
//! ## Building and editing
//!
//! ```
//! use richtext::{RichText, TextAttributes};
//!
//! let mut text = RichText::plain("Hello world");
//! let start = text.index_at_char(6).unwrap();
//! text.add_traits(start..text.end_index(), TextAttributes::BOLD);
//! assert_eq!(text.segments().len(), 2);
//!
//! // Edits can re-split segments, so indices are re-derived afterwards.
//! let start = text.index_at_char(6).unwrap();
//! let tail = text.slice(start..text.end_index());
//! assert_eq!(tail.raw_text(), "world");
//! ```
//!
//! ## Superscript
//!
//! ```
//! use richtext::{AttributeSet, Font, RichText};
//!
//! let body = AttributeSet::builder().font(Font::system(12.0).unwrap()).build();
//! let mut text = RichText::from_raw("x2", body);
//! let two = text.index_at_char(1).unwrap();
//! text.superscript(two..text.end_index());
//!
//! let raised = &text.segments()[1].attributes;
//! assert_eq!(raised.baseline_level(), 1);
//! assert!(raised.font().unwrap().size() < 12.0);
//!
//! // Resetting restores the exact font, so the runs merge again.
//! let two = text.index_at_char(1).unwrap();
//! text.reset_baseline(two..text.end_index());
//! assert_eq!(text.segments().len(), 1);
//! ```

mod baseline;
mod edit;
mod index;
mod rich;
mod scalar;
mod segment;
mod unicode;

pub use baseline::BaselineOptions;
pub use index::RichIndex;
pub use rich::RichText;
pub use scalar::{Indices, Scalar, ScalarRef, Scalars};
pub use segment::{Segment, canonicalize, is_canonical};
