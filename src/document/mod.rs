//! Rich-text helpers on top of the interval algebra.

use serde::Serialize;

use crate::{
    algebra::{decorate_text, fill_gaps, merge},
    error::IntervalResult,
    models::{DecoratedText, Interval},
};

pub mod ranges;
pub mod span;

use span::CharOffsets;

/// Split `text` into runs of identically labelled characters.
///
/// Fills the unlabelled stretches of the text, merges, and slices the
/// text, so every character lands in exactly one run. Runs without labels
/// have an empty `content_list`.
///
/// # Errors
///
/// Fails if merging fails; see [`merge`].
pub fn segment_text<T>(
    text: &str,
    intervals: &[Interval<T>],
) -> IntervalResult<Vec<DecoratedText<T>>>
where
    T: Serialize + Clone,
{
    let chars = CharOffsets::new(text).char_count();
    let last = i64::try_from(chars).unwrap_or(i64::MAX) - 1;
    let filled = fill_gaps(intervals, 0, last);
    let merged = merge(&filled)?;
    Ok(decorate_text(&merged, text))
}
