use tracing::debug;

use crate::models::Interval;

/// Densify `intervals` over the axis range `[start, end]`.
///
/// Every position of the range that no input interval covers ends up in an
/// unlabelled filler interval. Inputs are returned sorted by `(start, end)`
/// and otherwise untouched: overlapping inputs are not merged and inputs
/// reaching outside the range are not clipped.
///
/// Negative bounds are clamped to zero. With no input intervals the result
/// is the single filler `[start, end]`, even when `start > end`.
#[must_use]
pub fn fill_gaps<T: Clone>(
    intervals: &[Interval<T>],
    start: i64,
    end: i64,
) -> Vec<Interval<T>> {
    let start = start.max(0);
    let end = end.max(0);

    let mut sorted: Vec<&Interval<T>> = intervals.iter().collect();
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let Some(first) = sorted.first() else {
        return vec![Interval::unlabelled(start, end)];
    };

    let mut filled = Vec::with_capacity(sorted.len() * 2 + 1);
    if first.start > start {
        filled.push(Interval::unlabelled(start, first.start - 1));
    }

    // furthest position covered so far
    let mut reach: Option<i64> = None;
    for interval in sorted {
        if let Some(covered) = reach {
            if interval.start > covered.saturating_add(1) {
                filled.push(Interval::unlabelled(covered + 1, interval.start - 1));
            }
        }
        filled.push(interval.clone());
        reach = Some(reach.map_or(interval.end, |covered| covered.max(interval.end)));
    }

    if let Some(covered) = reach {
        if covered < end {
            filled.push(Interval::unlabelled(covered + 1, end));
        }
    }

    debug!(
        input = intervals.len(),
        output = filled.len(),
        start,
        end,
        "filled interval gaps"
    );
    filled
}
