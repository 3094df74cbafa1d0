//! `richtext` - Canonical styled text
//!
//! Rich text stored as run-length attribute segments, with a two-level
//! index type, seam-only concatenation, and nested superscript/subscript.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow text::RichText etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::float_cmp)] // Font sizes compare by bits on purpose
#![allow(clippy::return_self_not_must_use)] // Builder methods are already must_use
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod color;
pub mod error;
pub mod event;
pub mod style;
pub mod text;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_log_callback, emit_log, log_enabled, set_log_callback, set_min_log_level,
};
pub use style::{
    Alignment, Attribute, AttributeKey, AttributeSet, AttributeSetBuilder, Font, ParagraphStyle,
    TextAttributes,
};
pub use text::{BaselineOptions, RichIndex, RichText, Scalar, ScalarRef, Segment};
