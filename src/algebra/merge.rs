//! Boundary sweep that flattens overlapping labelled intervals into
//! disjoint segments.
//!
//! Labels are identified by the CBOR encoding of their content, so two
//! structurally equal labels are one label no matter how many intervals
//! carry them. Each distinct label gets a slot in the order the sweep first
//! meets it, which fixes the order of every `content_list`.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use super::boundary::{HalfOpen, boundary_points, elementary_spans, inclusive_cut_count};
use crate::{
    error::{IntervalError, IntervalResult},
    models::{Interval, MergedInterval},
};

/// Identity of a label; `None` is the empty label
type LabelKey = Option<Vec<u8>>;

#[derive(Debug, Clone, Copy)]
enum SweepEvent {
    /// Index of an input interval
    Data(usize),
    Probe(HalfOpen),
}

impl SweepEvent {
    /// Data sorts before probes starting at the same position, so a probe
    /// sees every label that begins with it.
    fn order_key(self, spans: &[HalfOpen]) -> (i64, u8) {
        match self {
            Self::Data(index) => (spans[index].start, 0),
            Self::Probe(span) => (span.start, 1),
        }
    }
}

#[derive(Debug)]
struct ActiveLabel<'a, T> {
    content: Option<&'a T>,
    /// Furthest inclusive end seen for this label so far
    reach: i64,
}

/// Insertion-ordered label table
#[derive(Debug)]
struct LabelTable<'a, T> {
    slots: HashMap<LabelKey, usize>,
    labels: Vec<ActiveLabel<'a, T>>,
}

impl<'a, T> LabelTable<'a, T> {
    fn new() -> Self {
        Self {
            slots: HashMap::new(),
            labels: Vec::new(),
        }
    }

    fn extend(&mut self, key: &LabelKey, content: Option<&'a T>, reach: i64) {
        if let Some(&slot) = self.slots.get(key) {
            let label = &mut self.labels[slot];
            label.reach = label.reach.max(reach);
        } else {
            self.slots.insert(key.clone(), self.labels.len());
            self.labels.push(ActiveLabel { content, reach });
        }
    }

    /// Slots of the labels still active at `last`, or `None` if nothing is,
    /// not even the empty label. The empty label is left out of the slots.
    fn active_at(&self, last: i64) -> Option<Vec<usize>> {
        let mut covered = false;
        let mut slots = Vec::new();
        for (slot, label) in self.labels.iter().enumerate() {
            if label.reach < last {
                continue;
            }
            covered = true;
            if label.content.is_some() {
                slots.push(slot);
            }
        }
        covered.then_some(slots)
    }

    fn content(&self, slot: usize) -> Option<&'a T> {
        self.labels.get(slot).and_then(|label| label.content)
    }
}

/// A covered stretch of the axis with the slots of its labels.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    start: i64,
    end: i64,
    slots: Vec<usize>,
}

fn label_key<T: Serialize>(content: Option<&T>) -> IntervalResult<LabelKey> {
    content
        .map(serde_cbor::to_vec)
        .transpose()
        .map_err(IntervalError::from)
}

/// Query the label table at every probe.
///
/// Probes covered by no label at all are dropped, which is what leaves the
/// gaps between input intervals out of the result.
fn sweep<'a, T>(
    intervals: &'a [Interval<T>],
    spans: &[HalfOpen],
    keys: &[LabelKey],
    points: &[i64],
) -> (LabelTable<'a, T>, Vec<Segment>) {
    let mut events: Vec<SweepEvent> = (0..intervals.len())
        .map(SweepEvent::Data)
        .chain(elementary_spans(points).map(SweepEvent::Probe))
        .collect();
    events.sort_by_key(|event| event.order_key(spans));

    let mut table = LabelTable::new();
    let mut segments = Vec::new();
    for event in events {
        match event {
            SweepEvent::Data(index) => {
                table.extend(
                    &keys[index],
                    intervals[index].content.as_ref(),
                    spans[index].last(),
                );
            }
            SweepEvent::Probe(span) => {
                if let Some(slots) = table.active_at(span.last()) {
                    segments.push(Segment {
                        start: span.start,
                        end: span.last(),
                        slots,
                    });
                }
            }
        }
    }
    (table, segments)
}

/// Join touching or overlapping segments that carry the same labels.
fn coalesce(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(current)
                if segment.start <= current.end.saturating_add(1)
                    && segment.slots == current.slots =>
            {
                current.end = current.end.max(segment.end);
            }
            _ => merged.push(segment),
        }
    }
    merged
}

/// Flatten `intervals` into sorted, disjoint, maximal segments, each listing
/// every label that covers it.
///
/// Unlabelled intervals cover their range without contributing a label, so
/// they surface as segments with an empty `content_list`. Positions covered
/// by no input interval are absent from the result.
///
/// # Errors
///
/// Returns `InvalidInput` for an empty input, for several intervals that all
/// sit on position `0`, for an interval whose end lies before its start, or
/// for an end of `i64::MAX`. Returns `MalformedContent`
/// if a label cannot be serialized.
pub fn merge<T>(intervals: &[Interval<T>]) -> IntervalResult<Vec<MergedInterval<T>>>
where
    T: Serialize + Clone,
{
    // empty text
    if let [only] = intervals {
        if only.start == 0 && only.end == 0 {
            return Ok(vec![MergedInterval {
                start: 0,
                end: 0,
                content_list: only.content.iter().cloned().collect(),
            }]);
        }
    }

    let spans = intervals
        .iter()
        .map(|iv| HalfOpen::from_inclusive(iv.start, iv.end))
        .collect::<IntervalResult<Vec<_>>>()?;
    let cuts = inclusive_cut_count(&spans);
    if cuts < 2 {
        return Err(IntervalError::invalid_input(format!(
            "need at least two distinct boundary points to merge, found {cuts}"
        )));
    }
    let points = boundary_points(&spans);
    trace!(?points, "merge boundaries");

    let keys = intervals
        .iter()
        .map(|iv| label_key(iv.content.as_ref()))
        .collect::<IntervalResult<Vec<_>>>()?;

    let (table, segments) = sweep(intervals, &spans, &keys, &points);
    let unmerged = segments.len();
    let merged: Vec<MergedInterval<T>> = coalesce(segments)
        .into_iter()
        .map(|segment| MergedInterval {
            start: segment.start,
            end: segment.end,
            content_list: segment
                .slots
                .iter()
                .filter_map(|&slot| table.content(slot))
                .cloned()
                .collect(),
        })
        .collect();

    debug!(
        input = intervals.len(),
        boundaries = points.len(),
        unmerged,
        output = merged.len(),
        "merged intervals"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<T>(merged: &[MergedInterval<T>]) -> Vec<(i64, i64)> {
        merged.iter().map(|m| (m.start, m.end)).collect()
    }

    #[test]
    fn unions_unlabelled_ranges() {
        let input: Vec<Interval<String>> = vec![
            Interval::unlabelled(1, 4),
            Interval::unlabelled(20, 30),
            Interval::unlabelled(5, 7),
            Interval::unlabelled(3, 5),
        ];

        let merged = merge(&input).unwrap();

        assert_eq!(
            merged,
            vec![
                MergedInterval {
                    start: 1,
                    end: 7,
                    content_list: vec![],
                },
                MergedInterval {
                    start: 20,
                    end: 30,
                    content_list: vec![],
                },
            ]
        );
    }

    #[test]
    fn stacked_styles_accumulate() {
        let input = vec![
            Interval::new(17, 38, "BOLD"),
            Interval::new(22, 38, "ITALIC"),
            Interval::new(29, 38, "UNDERLINE"),
        ];

        let merged = merge(&input).unwrap();

        assert_eq!(bounds(&merged), vec![(17, 21), (22, 28), (29, 38)]);
        assert_eq!(merged[0].content_list, vec!["BOLD"]);
        assert_eq!(merged[1].content_list, vec!["BOLD", "ITALIC"]);
        assert_eq!(merged[2].content_list, vec!["BOLD", "ITALIC", "UNDERLINE"]);
    }

    #[test]
    fn nested_interval_is_attributed_to_its_last_position() {
        let input = vec![Interval::new(0, 10, 'x'), Interval::new(3, 5, 'y')];

        let merged = merge(&input).unwrap();

        assert_eq!(bounds(&merged), vec![(0, 2), (3, 5), (6, 10)]);
        assert_eq!(merged[0].content_list, vec!['x']);
        assert_eq!(merged[1].content_list, vec!['x', 'y']);
        assert_eq!(merged[2].content_list, vec!['x']);
    }

    #[test]
    fn nested_single_point() {
        let input = vec![Interval::new(0, 10, 'x'), Interval::new(5, 5, 'y')];

        let merged = merge(&input).unwrap();

        assert_eq!(bounds(&merged), vec![(0, 4), (5, 5), (6, 10)]);
        assert_eq!(merged[1].content_list, vec!['x', 'y']);
    }

    #[test]
    fn same_label_in_separate_intervals_is_one_label() {
        let input = vec![
            Interval::new(0, 4, "BOLD"),
            Interval::new(5, 9, "BOLD"),
            Interval::new(3, 6, "ITALIC"),
        ];

        let merged = merge(&input).unwrap();

        assert_eq!(bounds(&merged), vec![(0, 2), (3, 6), (7, 9)]);
        assert_eq!(merged[1].content_list, vec!["BOLD", "ITALIC"]);
        assert_eq!(merged[2].content_list, vec!["BOLD"]);
    }

    #[test]
    fn adjacent_equal_labels_coalesce() {
        let input = vec![Interval::new(0, 4, 1), Interval::new(5, 9, 1)];

        let merged = merge(&input).unwrap();

        assert_eq!(bounds(&merged), vec![(0, 9)]);
    }

    #[test]
    fn gaps_between_labels_are_dropped() {
        let input = vec![Interval::new(0, 2, 'a'), Interval::new(6, 8, 'a')];

        let merged = merge(&input).unwrap();

        assert_eq!(bounds(&merged), vec![(0, 2), (6, 8)]);
    }

    #[test]
    fn labels_are_listed_in_order_of_appearance() {
        let input = vec![Interval::new(5, 9, "late"), Interval::new(0, 9, "early")];

        let merged = merge(&input).unwrap();

        assert_eq!(merged[1].content_list, vec!["early", "late"]);
    }

    #[test]
    fn empty_label_does_not_split_a_styled_run() {
        let input = vec![Interval::unlabelled(0, 5), Interval::new(0, 9, "BOLD")];

        let merged = merge(&input).unwrap();

        assert_eq!(bounds(&merged), vec![(0, 9)]);
        assert_eq!(merged[0].content_list, vec!["BOLD"]);
    }

    #[test]
    fn structurally_equal_contents_are_deduplicated() {
        #[derive(Debug, Clone, PartialEq, Serialize)]
        struct Entity {
            key: u32,
            kind: String,
        }

        let entity = Entity {
            key: 7,
            kind: "LINK".into(),
        };
        let input = vec![
            Interval::new(0, 3, entity.clone()),
            Interval::new(2, 6, entity.clone()),
        ];

        let merged = merge(&input).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].content_list, vec![entity]);
    }

    #[test]
    fn zero_length_text_short_circuits() {
        let empty: Vec<Interval<String>> = vec![Interval::unlabelled(0, 0)];
        let merged = merge(&empty).unwrap();
        assert_eq!(bounds(&merged), vec![(0, 0)]);
        assert!(merged[0].content_list.is_empty());

        let labelled = vec![Interval::new(0, 0, "x")];
        assert_eq!(merge(&labelled).unwrap()[0].content_list, vec!["x"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: Vec<Interval<String>> = Vec::new();
        assert!(matches!(
            merge(&empty),
            Err(IntervalError::InvalidInput(_))
        ));
    }

    #[test]
    fn stacked_intervals_at_origin_are_rejected() {
        let input = vec![Interval::new(0, 0, 'a'), Interval::new(0, 0, 'b')];
        assert!(matches!(merge(&input), Err(IntervalError::InvalidInput(_))));
    }

    #[test]
    fn unserializable_content_is_malformed() {
        #[derive(Debug, Clone)]
        struct Opaque;

        impl Serialize for Opaque {
            fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                Err(serde::ser::Error::custom("opaque label"))
            }
        }

        let input = vec![Interval::new(1, 4, Opaque)];

        assert!(matches!(
            merge(&input),
            Err(IntervalError::MalformedContent(_))
        ));
    }

    #[test]
    fn inverted_interval_is_rejected() {
        let input = vec![Interval::new(1, 2, 'a'), Interval::new(9, 4, 'b')];
        assert!(matches!(merge(&input), Err(IntervalError::InvalidInput(_))));
    }

    #[test]
    fn does_not_mutate_input() {
        let input = vec![Interval::new(3, 5, 'a'), Interval::new(0, 9, 'b')];
        let before = input.clone();

        let _ = merge(&input).unwrap();

        assert_eq!(input, before);
    }

    #[test]
    fn coalesce_requires_contact() {
        let segments = vec![
            Segment {
                start: 0,
                end: 2,
                slots: vec![0],
            },
            Segment {
                start: 3,
                end: 4,
                slots: vec![0],
            },
            Segment {
                start: 6,
                end: 8,
                slots: vec![0],
            },
        ];

        let merged = coalesce(segments);

        assert_eq!(
            merged.iter().map(|s| (s.start, s.end)).collect::<Vec<_>>(),
            vec![(0, 4), (6, 8)]
        );
    }
}
