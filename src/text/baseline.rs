//! Nested superscript and subscript.
//!
//! Baseline shifts are tracked as a signed nesting level
//! ([`Attribute::BaselineLevel`]): superscript adds one, subscript subtracts
//! one, so the two cancel. A run at level `n` with an explicit font is drawn
//! at its origin size times [`BaselineOptions::shrink_ratio`] raised to
//! `|n|`. The origin font is recorded in [`Attribute::BaselineOrigin`] on
//! the first shift, and every later size is derived from it, so a run that
//! comes back to level zero gets its original font back bit for bit and
//! merges with its unshifted neighbours again.

use super::index::RichIndex;
use super::rich::RichText;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::style::{Attribute, AttributeKey, AttributeSet, Font};
use std::ops::Range;

/// Baseline transform configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineOptions {
    shrink_ratio: f64,
}

impl BaselineOptions {
    /// Standard ratio: each level is five sixths of the one below.
    pub const DEFAULT_SHRINK_RATIO: f64 = 5.0 / 6.0;

    /// Options with a custom shrink ratio.
    ///
    /// The ratio must lie in `(0, 1]`: zero, negative, NaN or growing
    /// ratios are rejected.
    pub fn new(shrink_ratio: f64) -> Result<Self> {
        if shrink_ratio > 0.0 && shrink_ratio <= 1.0 {
            Ok(Self { shrink_ratio })
        } else {
            Err(Error::InvalidShrinkRatio(shrink_ratio))
        }
    }

    /// Font size multiplier for each nesting step away from the baseline.
    #[must_use]
    pub fn shrink_ratio(&self) -> f64 {
        self.shrink_ratio
    }

    /// Size of a run at `level` whose origin size is `base`.
    fn size_at(&self, base: f64, level: i32) -> f64 {
        (0..level.unsigned_abs()).fold(base, |size, _| size * self.shrink_ratio)
    }
}

impl Default for BaselineOptions {
    fn default() -> Self {
        Self {
            shrink_ratio: Self::DEFAULT_SHRINK_RATIO,
        }
    }
}

/// The font `font` had at level zero, given that it now sits at `level`.
fn origin_font(
    attributes: &AttributeSet,
    font: &Font,
    level: i32,
    options: &BaselineOptions,
) -> Result<Font> {
    if level == 0 {
        return Ok(font.clone());
    }
    if let Some(origin) = attributes.baseline_origin() {
        let expected = options.size_at(origin.size(), level);
        if expected.to_bits() == font.size().to_bits() {
            return font.with_size(origin.size());
        }
    }
    // Font edited while shifted, or shifted with a different ratio.
    let size = (0..level.unsigned_abs()).fold(font.size(), |size, _| size / options.shrink_ratio);
    font.with_size(size)
}

/// Move a run from `level` to `next`, resizing any explicit font.
fn move_to_level(attributes: &mut AttributeSet, level: i32, next: i32, options: &BaselineOptions) {
    attributes.insert(Attribute::BaselineLevel(next));
    let Some(font) = attributes.font().cloned() else {
        attributes.remove(&AttributeKey::BaselineOrigin);
        return;
    };

    let resized = origin_font(attributes, &font, level, options).and_then(|origin| {
        let size = options.size_at(origin.size(), next);
        origin.with_size(size).map(|resized| (origin, resized))
    });
    match resized {
        Ok((origin, resized)) => {
            attributes.insert(Attribute::Font(resized));
            if next == 0 {
                attributes.remove(&AttributeKey::BaselineOrigin);
            } else {
                attributes.insert(Attribute::BaselineOrigin(origin));
            }
        }
        Err(err) => {
            emit_log_with(LogLevel::Warn, || {
                format!("baseline shift left font unchanged: {err}")
            });
            if next == 0 {
                attributes.remove(&AttributeKey::BaselineOrigin);
            }
        }
    }
}

/// Move a run's nesting level by `delta`, resizing its font.
pub(crate) fn shift_level(attributes: &mut AttributeSet, delta: i32, options: &BaselineOptions) {
    let level = attributes.baseline_level();
    let next = level.saturating_add(delta);
    if next != level {
        move_to_level(attributes, level, next, options);
    }
}

/// Undo all nesting on a run.
pub(crate) fn reset_level(attributes: &mut AttributeSet, options: &BaselineOptions) {
    let level = attributes.baseline_level();
    move_to_level(attributes, level, 0, options);
}

impl RichText {
    /// Raise `range` one superscript level.
    pub fn superscript(&mut self, range: Range<RichIndex>) {
        self.superscript_with(range, &BaselineOptions::default());
    }

    /// Lower `range` one level (subscript, or undo one superscript).
    pub fn subscript(&mut self, range: Range<RichIndex>) {
        self.subscript_with(range, &BaselineOptions::default());
    }

    /// Return `range` to the baseline, restoring its font.
    pub fn reset_baseline(&mut self, range: Range<RichIndex>) {
        self.reset_baseline_with(range, &BaselineOptions::default());
    }

    /// [`RichText::superscript`] with explicit options.
    pub fn superscript_with(&mut self, range: Range<RichIndex>, options: &BaselineOptions) {
        self.update_attributes(range, |attributes| shift_level(attributes, 1, options));
    }

    /// [`RichText::subscript`] with explicit options.
    pub fn subscript_with(&mut self, range: Range<RichIndex>, options: &BaselineOptions) {
        self.update_attributes(range, |attributes| shift_level(attributes, -1, options));
    }

    /// [`RichText::reset_baseline`] with explicit options.
    pub fn reset_baseline_with(&mut self, range: Range<RichIndex>, options: &BaselineOptions) {
        self.update_attributes(range, |attributes| reset_level(attributes, options));
    }
}
