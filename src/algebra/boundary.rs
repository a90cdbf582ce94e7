//! Normalization between inclusive intervals and the half-open spans the
//! sweep runs on.
//!
//! An inclusive `[s, e]` becomes `[s, e + 1)`. Label membership can only
//! change at an `s` or an `e + 1`, so those are the boundary points, and the
//! spans between consecutive boundary points are the probes of the sweep.

use crate::error::{IntervalError, IntervalResult};

/// A half-open span `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HalfOpen {
    pub start: i64,
    pub end: i64,
}

impl HalfOpen {
    /// Convert the inclusive bounds `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `start > end` or if `end` has no successor.
    pub fn from_inclusive(start: i64, end: i64) -> IntervalResult<Self> {
        if start > end {
            return Err(IntervalError::invalid_input(format!(
                "interval [{start}, {end}] ends before it starts"
            )));
        }
        let end = end.checked_add(1).ok_or_else(|| {
            IntervalError::invalid_input(format!("interval end {end} is out of range"))
        })?;
        Ok(Self { start, end })
    }

    /// The inclusive upper bound
    #[must_use]
    pub const fn last(self) -> i64 {
        self.end - 1
    }
}

/// Sorted, deduplicated positions at which membership may change.
pub(crate) fn boundary_points(spans: &[HalfOpen]) -> Vec<i64> {
    let mut points: Vec<i64> = spans
        .iter()
        .flat_map(|span| [span.start, span.end])
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}

/// Number of distinct cut positions seen on the inclusive axis: each
/// `start`, the position before it, and each inclusive end.
///
/// An input whose intervals all sit on position `0` has a single cut
/// position and nothing to sweep between.
pub(crate) fn inclusive_cut_count(spans: &[HalfOpen]) -> usize {
    let mut cuts: Vec<i64> = spans
        .iter()
        .flat_map(|span| {
            let before = (span.start > 0).then(|| span.start - 1);
            [Some(span.start), before, Some(span.last())]
        })
        .flatten()
        .collect();
    cuts.sort_unstable();
    cuts.dedup();
    cuts.len()
}

/// The elementary spans between consecutive boundary points.
pub(crate) fn elementary_spans(points: &[i64]) -> impl Iterator<Item = HalfOpen> + '_ {
    points.windows(2).map(|pair| HalfOpen {
        start: pair[0],
        end: pair[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_becomes_unit_span() {
        let span = HalfOpen::from_inclusive(4, 4).unwrap();
        assert_eq!(span, HalfOpen { start: 4, end: 5 });
        assert_eq!(span.last(), 4);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(matches!(
            HalfOpen::from_inclusive(5, 3),
            Err(IntervalError::InvalidInput(_))
        ));
    }

    #[test]
    fn maximal_end_is_rejected() {
        assert!(HalfOpen::from_inclusive(0, i64::MAX).is_err());
        assert!(HalfOpen::from_inclusive(0, i64::MAX - 1).is_ok());
    }

    #[test]
    fn points_are_sorted_and_unique() {
        let spans = [
            HalfOpen::from_inclusive(17, 38).unwrap(),
            HalfOpen::from_inclusive(22, 38).unwrap(),
            HalfOpen::from_inclusive(29, 38).unwrap(),
        ];
        assert_eq!(boundary_points(&spans), vec![17, 22, 29, 39]);
    }

    #[test]
    fn adjacent_intervals_share_a_point() {
        let spans = [
            HalfOpen::from_inclusive(0, 4).unwrap(),
            HalfOpen::from_inclusive(5, 9).unwrap(),
        ];
        assert_eq!(boundary_points(&spans), vec![0, 5, 10]);
    }

    #[test]
    fn cut_count_includes_position_before_start() {
        let spans = [HalfOpen::from_inclusive(5, 5).unwrap()];
        assert_eq!(inclusive_cut_count(&spans), 2);

        let spans = [
            HalfOpen::from_inclusive(2, 4).unwrap(),
            HalfOpen::from_inclusive(3, 4).unwrap(),
        ];
        assert_eq!(inclusive_cut_count(&spans), 4);
    }

    #[test]
    fn intervals_at_origin_have_one_cut() {
        let spans = [
            HalfOpen::from_inclusive(0, 0).unwrap(),
            HalfOpen::from_inclusive(0, 0).unwrap(),
        ];
        assert_eq!(inclusive_cut_count(&spans), 1);
        assert_eq!(inclusive_cut_count(&[]), 0);
    }

    #[test]
    fn elementary_spans_tile_the_points() {
        let points = [0, 3, 4, 10];
        let spans: Vec<_> = elementary_spans(&points)
            .map(|span| (span.start, span.last()))
            .collect();
        assert_eq!(spans, vec![(0, 2), (3, 3), (4, 9)]);
    }

    #[test]
    fn fewer_than_two_points_has_no_spans() {
        assert_eq!(elementary_spans(&[7]).count(), 0);
        assert_eq!(elementary_spans(&[]).count(), 0);
    }
}
