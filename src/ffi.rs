//! `UniFFI` bindings for the interval algebra
//!
//! Generic labels cannot cross the FFI boundary, so these bindings fix the
//! label type to `String`. Foreign callers that need structured labels can
//! encode them into strings; structurally equal labels must encode to equal
//! strings.

use crate::{
    algebra, document,
    error::IntervalError,
    models::{DecoratedText, Interval, MergedInterval},
};

/// A labelled interval with inclusive bounds. `content` is `None` for gaps.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiInterval {
    pub start: i64,
    pub end: i64,
    pub content: Option<String>,
}

impl From<FfiInterval> for Interval<String> {
    fn from(interval: FfiInterval) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
            content: interval.content,
        }
    }
}

impl From<Interval<String>> for FfiInterval {
    fn from(interval: Interval<String>) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
            content: interval.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiMergedInterval {
    pub start: i64,
    pub end: i64,
    pub content_list: Vec<String>,
}

impl From<FfiMergedInterval> for MergedInterval<String> {
    fn from(interval: FfiMergedInterval) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
            content_list: interval.content_list,
        }
    }
}

impl From<MergedInterval<String>> for FfiMergedInterval {
    fn from(interval: MergedInterval<String>) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
            content_list: interval.content_list,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiDecoratedText {
    pub text: String,
    pub content_list: Vec<String>,
}

impl From<DecoratedText<String>> for FfiDecoratedText {
    fn from(decorated: DecoratedText<String>) -> Self {
        Self {
            text: decorated.text,
            content_list: decorated.content_list,
        }
    }
}

fn to_intervals(intervals: Vec<FfiInterval>) -> Vec<Interval<String>> {
    intervals.into_iter().map(Interval::from).collect()
}

/// Fill the uncovered parts of `[start, end]` with unlabelled intervals
#[uniffi::export]
#[must_use]
pub fn fill_gaps(intervals: Vec<FfiInterval>, start: i64, end: i64) -> Vec<FfiInterval> {
    algebra::fill_gaps(&to_intervals(intervals), start, end)
        .into_iter()
        .map(FfiInterval::from)
        .collect()
}

/// Merge overlapping intervals into disjoint, attributed segments
///
/// # Errors
///
/// Returns an error if the intervals cannot be merged
#[uniffi::export]
pub fn merge_intervals(
    intervals: Vec<FfiInterval>,
) -> Result<Vec<FfiMergedInterval>, IntervalError> {
    let merged = algebra::merge(&to_intervals(intervals))?;
    Ok(merged.into_iter().map(FfiMergedInterval::from).collect())
}

/// Slice `text` under each merged interval
#[uniffi::export]
#[must_use]
pub fn decorate_text(intervals: Vec<FfiMergedInterval>, text: &str) -> Vec<FfiDecoratedText> {
    let intervals: Vec<MergedInterval<String>> =
        intervals.into_iter().map(MergedInterval::from).collect();
    algebra::decorate_text(&intervals, text)
        .into_iter()
        .map(FfiDecoratedText::from)
        .collect()
}

/// Split `text` into labelled runs that cover every character
///
/// # Errors
///
/// Returns an error if the intervals cannot be merged
#[uniffi::export]
pub fn segment_text(
    text: &str,
    intervals: Vec<FfiInterval>,
) -> Result<Vec<FfiDecoratedText>, IntervalError> {
    let runs = document::segment_text(text, &to_intervals(intervals))?;
    Ok(runs.into_iter().map(FfiDecoratedText::from).collect())
}
