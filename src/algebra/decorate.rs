use tracing::debug;

use crate::{
    document::span::{CharOffsets, TextSpan},
    models::{DecoratedText, MergedInterval},
};

/// Pair the text under each interval with its labels.
///
/// Offsets count characters, and bounds are inclusive. Intervals reaching
/// past the end of `text` yield truncated or empty text; nothing is merged
/// or dropped.
#[must_use]
pub fn decorate_text<T: Clone>(
    intervals: &[MergedInterval<T>],
    text: &str,
) -> Vec<DecoratedText<T>> {
    let offsets = CharOffsets::new(text);
    let decorated: Vec<DecoratedText<T>> = intervals
        .iter()
        .map(|interval| DecoratedText {
            text: offsets
                .slice(TextSpan::from_inclusive(interval.start, interval.end))
                .to_owned(),
            content_list: interval.content_list.clone(),
        })
        .collect();
    debug!(
        segments = decorated.len(),
        chars = offsets.char_count(),
        "decorated text"
    );
    decorated
}
