//! Text attributes attached to rich text segments.
//!
//! This module provides the closed attribute vocabulary used by
//! [`RichText`](crate::RichText):
//!
//! - [`TextAttributes`]: Bitflags for bold, italic, underline, strikethrough
//! - [`Font`]: Family name and point size
//! - [`ParagraphStyle`]: Alignment, spacing, and indents
//! - [`Attribute`] / [`AttributeKey`]: One tagged attribute and its slot
//! - [`AttributeSet`]: At most one attribute per key, with exact equality
//! - [`AttributeSetBuilder`]: Fluent builder for constructing sets
//!
//! Adjacent segments merge exactly when their attribute sets compare equal,
//! so equality here is structural and total. Floating point members
//! (font size, paragraph metrics) compare by bit pattern: `12.0` equals
//! `12.0`, but `0.0` and `-0.0` are different values.
//!
//! # Examples
//!
//! ```
//! use richtext::{AttributeSet, Font, Rgba, TextAttributes};
//!
//! let heading = AttributeSet::builder()
//!     .font(Font::system(18.0).unwrap())
//!     .fg(Rgba::BLUE)
//!     .bold()
//!     .build();
//!
//! assert_eq!(heading.font().map(Font::size), Some(18.0));
//! assert!(heading.traits().contains(TextAttributes::BOLD));
//! assert_ne!(heading, AttributeSet::new());
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

bitflags! {
    /// Typographic traits (bold, italic, underline, strikethrough).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
    pub struct TextAttributes: u8 {
        /// Bold weight.
        const BOLD          = 0x01;
        /// Italic or oblique.
        const ITALIC        = 0x02;
        /// Single underline.
        const UNDERLINE     = 0x04;
        /// Strikethrough.
        const STRIKETHROUGH = 0x08;
    }
}

/// A font family and point size.
///
/// Sizes are always finite and strictly positive.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "FontRepr")]
pub struct Font {
    family: String,
    size: f64,
}

#[derive(Deserialize)]
struct FontRepr {
    family: String,
    size: f64,
}

impl TryFrom<FontRepr> for Font {
    type Error = Error;

    fn try_from(repr: FontRepr) -> Result<Self> {
        Self::new(repr.family, repr.size)
    }
}

impl Font {
    /// Family name used by [`Font::system`].
    pub const SYSTEM_FAMILY: &'static str = "system";
    /// Point size used by [`Font::default`].
    pub const DEFAULT_SIZE: f64 = 12.0;

    /// Create a font, validating the size.
    pub fn new(family: impl Into<String>, size: f64) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(Error::InvalidFontSize(size));
        }
        Ok(Self {
            family: family.into(),
            size,
        })
    }

    /// Create a font in the system family.
    pub fn system(size: f64) -> Result<Self> {
        Self::new(Self::SYSTEM_FAMILY, size)
    }

    /// Family name.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Point size.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Same family at a different size.
    pub fn with_size(&self, size: f64) -> Result<Self> {
        Self::new(self.family.clone(), size)
    }

    /// Multiply the size by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        self.with_size(self.size * factor)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: Self::SYSTEM_FAMILY.to_string(),
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.size.to_bits() == other.size.to_bits()
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.size.to_bits().hash(state);
    }
}

/// Horizontal paragraph alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Follow the writing direction of the text.
    #[default]
    Natural,
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Stretched to both margins.
    Justified,
}

/// Paragraph-level layout attributes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Extra space between lines, in points.
    pub line_spacing: f64,
    /// Indent of the first line, in points.
    pub first_line_indent: f64,
    /// Indent of every other line, in points.
    pub head_indent: f64,
}

impl ParagraphStyle {
    /// Natural alignment, no spacing, no indents.
    pub const NATURAL: Self = Self {
        alignment: Alignment::Natural,
        line_spacing: 0.0,
        first_line_indent: 0.0,
        head_indent: 0.0,
    };

    /// Default paragraph with a specific alignment.
    #[must_use]
    pub const fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Self::NATURAL
        }
    }

    fn metric_bits(&self) -> [u64; 3] {
        [
            self.line_spacing.to_bits(),
            self.first_line_indent.to_bits(),
            self.head_indent.to_bits(),
        ]
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::NATURAL
    }
}

impl PartialEq for ParagraphStyle {
    fn eq(&self, other: &Self) -> bool {
        self.alignment == other.alignment && self.metric_bits() == other.metric_bits()
    }
}

impl Eq for ParagraphStyle {}

impl Hash for ParagraphStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alignment.hash(state);
        self.metric_bits().hash(state);
    }
}

/// The slot an [`Attribute`] occupies in an [`AttributeSet`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    /// Slot of [`Attribute::Font`].
    Font,
    /// Slot of [`Attribute::Foreground`].
    Foreground,
    /// Slot of [`Attribute::Background`].
    Background,
    /// Slot of [`Attribute::Traits`].
    Traits,
    /// Slot of [`Attribute::Paragraph`].
    Paragraph,
    /// Slot of [`Attribute::BaselineLevel`].
    BaselineLevel,
    /// Slot of [`Attribute::BaselineOrigin`].
    BaselineOrigin,
    /// Slot of [`Attribute::Link`].
    Link,
    /// Slot of a [`Attribute::Custom`] marker with this name.
    Custom(String),
}

/// One style attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Font family and size.
    Font(Font),
    /// Text color.
    Foreground(Rgba),
    /// Highlight color behind the text.
    Background(Rgba),
    /// Bold, italic, underline, strikethrough.
    Traits(TextAttributes),
    /// Paragraph layout.
    Paragraph(ParagraphStyle),
    /// Superscript (positive) or subscript (negative) nesting depth.
    BaselineLevel(i32),
    /// Font the run had at level zero, before its first baseline shift.
    ///
    /// Shifted font sizes are derived from this rather than from the
    /// previous level, so returning to the baseline restores it exactly.
    BaselineOrigin(Font),
    /// Link target URL.
    Link(String),
    /// Application-defined marker.
    Custom { key: String, value: String },
}

impl Attribute {
    /// The key this attribute is stored under.
    #[must_use]
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::Foreground(_) => AttributeKey::Foreground,
            Self::Background(_) => AttributeKey::Background,
            Self::Traits(_) => AttributeKey::Traits,
            Self::Paragraph(_) => AttributeKey::Paragraph,
            Self::BaselineLevel(_) => AttributeKey::BaselineLevel,
            Self::BaselineOrigin(_) => AttributeKey::BaselineOrigin,
            Self::Link(_) => AttributeKey::Link,
            Self::Custom { key, .. } => AttributeKey::Custom(key.clone()),
        }
    }

    /// Attributes that carry no information and are never stored.
    fn is_neutral(&self) -> bool {
        matches!(self, Self::BaselineLevel(0)) || matches!(self, Self::Traits(t) if t.is_empty())
    }
}

/// A set of attributes, at most one per [`AttributeKey`].
///
/// Neutral values (baseline level `0`, empty traits) are never stored, so a
/// set that "has" them compares equal to one that does not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct AttributeSet {
    entries: BTreeMap<AttributeKey, Attribute>,
}

impl AttributeSet {
    /// Empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder.
    #[must_use]
    pub fn builder() -> AttributeSetBuilder {
        AttributeSetBuilder::default()
    }

    /// Insert an attribute, returning the one it replaced.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        let key = attribute.key();
        if attribute.is_neutral() {
            return self.entries.remove(&key);
        }
        self.entries.insert(key, attribute)
    }

    /// Remove the attribute stored under `key`.
    pub fn remove(&mut self, key: &AttributeKey) -> Option<Attribute> {
        self.entries.remove(key)
    }

    /// Look up an attribute by key.
    #[must_use]
    pub fn get(&self, key: &AttributeKey) -> Option<&Attribute> {
        self.entries.get(key)
    }

    /// Check whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no attributes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    /// Return a copy with `attribute` inserted.
    #[must_use]
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.insert(attribute);
        self
    }

    /// Merge two sets, with `other` taking precedence per key.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for attribute in other.iter() {
            self.insert(attribute.clone());
        }
        self
    }

    /// Explicit font, if any.
    #[must_use]
    pub fn font(&self) -> Option<&Font> {
        match self.entries.get(&AttributeKey::Font) {
            Some(Attribute::Font(font)) => Some(font),
            _ => None,
        }
    }

    /// Text color, if any.
    #[must_use]
    pub fn foreground(&self) -> Option<Rgba> {
        match self.entries.get(&AttributeKey::Foreground) {
            Some(Attribute::Foreground(color)) => Some(*color),
            _ => None,
        }
    }

    /// Background color, if any.
    #[must_use]
    pub fn background(&self) -> Option<Rgba> {
        match self.entries.get(&AttributeKey::Background) {
            Some(Attribute::Background(color)) => Some(*color),
            _ => None,
        }
    }

    /// Typographic traits; empty when unset.
    #[must_use]
    pub fn traits(&self) -> TextAttributes {
        match self.entries.get(&AttributeKey::Traits) {
            Some(Attribute::Traits(traits)) => *traits,
            _ => TextAttributes::empty(),
        }
    }

    /// Paragraph style, if any.
    #[must_use]
    pub fn paragraph(&self) -> Option<&ParagraphStyle> {
        match self.entries.get(&AttributeKey::Paragraph) {
            Some(Attribute::Paragraph(style)) => Some(style),
            _ => None,
        }
    }

    /// Baseline nesting level; `0` when unset.
    #[must_use]
    pub fn baseline_level(&self) -> i32 {
        match self.entries.get(&AttributeKey::BaselineLevel) {
            Some(Attribute::BaselineLevel(level)) => *level,
            _ => 0,
        }
    }

    /// Font recorded before the first baseline shift.
    #[must_use]
    pub fn baseline_origin(&self) -> Option<&Font> {
        match self.entries.get(&AttributeKey::BaselineOrigin) {
            Some(Attribute::BaselineOrigin(font)) => Some(font),
            _ => None,
        }
    }

    /// Link target, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self.entries.get(&AttributeKey::Link) {
            Some(Attribute::Link(url)) => Some(url),
            _ => None,
        }
    }

    /// Value of a custom marker.
    #[must_use]
    pub fn custom(&self, key: &str) -> Option<&str> {
        match self.entries.get(&AttributeKey::Custom(key.to_string())) {
            Some(Attribute::Custom { value, .. }) => Some(value),
            _ => None,
        }
    }
}

impl From<Vec<Attribute>> for AttributeSet {
    fn from(attributes: Vec<Attribute>) -> Self {
        attributes.into_iter().collect()
    }
}

impl From<AttributeSet> for Vec<Attribute> {
    fn from(set: AttributeSet) -> Self {
        set.entries.into_values().collect()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

impl Extend<Attribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

/// Builder for creating attribute sets fluently.
#[derive(Clone, Debug, Default)]
pub struct AttributeSetBuilder {
    set: AttributeSet,
}

impl AttributeSetBuilder {
    /// Set the font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.set.insert(Attribute::Font(font));
        self
    }

    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgba) -> Self {
        self.set.insert(Attribute::Foreground(color));
        self
    }

    /// Set background color.
    #[must_use]
    pub fn bg(mut self, color: Rgba) -> Self {
        self.set.insert(Attribute::Background(color));
        self
    }

    /// Add traits to any already set.
    #[must_use]
    pub fn traits(mut self, traits: TextAttributes) -> Self {
        let merged = self.set.traits() | traits;
        self.set.insert(Attribute::Traits(merged));
        self
    }

    /// Add bold trait.
    #[must_use]
    pub fn bold(self) -> Self {
        self.traits(TextAttributes::BOLD)
    }

    /// Add italic trait.
    #[must_use]
    pub fn italic(self) -> Self {
        self.traits(TextAttributes::ITALIC)
    }

    /// Add underline trait.
    #[must_use]
    pub fn underline(self) -> Self {
        self.traits(TextAttributes::UNDERLINE)
    }

    /// Add strikethrough trait.
    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.traits(TextAttributes::STRIKETHROUGH)
    }

    /// Set paragraph style.
    #[must_use]
    pub fn paragraph(mut self, style: ParagraphStyle) -> Self {
        self.set.insert(Attribute::Paragraph(style));
        self
    }

    /// Set baseline nesting level.
    #[must_use]
    pub fn baseline_level(mut self, level: i32) -> Self {
        self.set.insert(Attribute::BaselineLevel(level));
        self
    }

    /// Set link target.
    #[must_use]
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.set.insert(Attribute::Link(url.into()));
        self
    }

    /// Set a custom marker.
    #[must_use]
    pub fn custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set.insert(Attribute::Custom {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Build the final set.
    #[must_use]
    pub fn build(self) -> AttributeSet {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let set = AttributeSet::builder()
            .fg(Rgba::RED)
            .bg(Rgba::BLACK)
            .bold()
            .underline()
            .link("https://example.com")
            .build();

        assert_eq!(set.foreground(), Some(Rgba::RED));
        assert_eq!(set.background(), Some(Rgba::BLACK));
        assert!(set.traits().contains(TextAttributes::BOLD));
        assert!(set.traits().contains(TextAttributes::UNDERLINE));
        assert_eq!(set.link(), Some("https://example.com"));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_one_attribute_per_key() {
        let mut set = AttributeSet::new();
        assert!(set.insert(Attribute::Foreground(Rgba::RED)).is_none());
        let previous = set.insert(Attribute::Foreground(Rgba::BLUE));
        assert_eq!(previous, Some(Attribute::Foreground(Rgba::RED)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.foreground(), Some(Rgba::BLUE));
    }

    #[test]
    fn test_neutral_values_not_stored() {
        let set = AttributeSet::builder()
            .baseline_level(0)
            .traits(TextAttributes::empty())
            .build();
        assert!(set.is_empty());
        assert_eq!(set, AttributeSet::new());

        let mut leveled = AttributeSet::builder().baseline_level(2).build();
        leveled.insert(Attribute::BaselineLevel(0));
        assert!(leveled.is_empty());
    }

    #[test]
    fn test_equality_is_order_independent() {
        let a = AttributeSet::builder().fg(Rgba::RED).italic().build();
        let b = AttributeSet::builder().italic().fg(Rgba::RED).build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_font_equality_uses_bits() {
        let a = Font::system(12.0).unwrap();
        let b = Font::system(12.0).unwrap();
        let c = Font::system(12.000_000_000_000_002).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Font::new("Serif", 12.0).unwrap());
    }

    #[test]
    fn test_paragraph_signed_zero_differs() {
        let a = ParagraphStyle::NATURAL;
        let b = ParagraphStyle {
            head_indent: -0.0,
            ..ParagraphStyle::NATURAL
        };
        assert_ne!(a, b);
        assert_eq!(a, ParagraphStyle::default());
        assert_ne!(a, ParagraphStyle::aligned(Alignment::Center));
    }

    #[test]
    fn test_font_rejects_bad_sizes() {
        assert_eq!(Font::system(0.0), Err(Error::InvalidFontSize(0.0)));
        assert!(Font::system(-3.0).is_err());
        assert!(Font::system(f64::NAN).is_err());
        assert!(Font::system(f64::INFINITY).is_err());
    }

    #[test]
    fn test_custom_markers_keyed_by_name() {
        let set = AttributeSet::builder()
            .custom("comment", "a")
            .custom("mention", "b")
            .build();
        assert_eq!(set.custom("comment"), Some("a"));
        assert_eq!(set.custom("mention"), Some("b"));
        assert_eq!(set.custom("other"), None);

        let other = AttributeSet::builder()
            .custom("comment", "a")
            .custom("mention", "c")
            .build();
        assert_ne!(set, other);
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = AttributeSet::builder().fg(Rgba::RED).bold().build();
        let overlay = AttributeSet::builder().fg(Rgba::BLUE).build();
        let merged = base.merge(&overlay);
        assert_eq!(merged.foreground(), Some(Rgba::BLUE));
        assert!(merged.traits().contains(TextAttributes::BOLD));
    }
}
