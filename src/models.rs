use serde::{Deserialize, Serialize};

/// A labelled range on a discrete axis.
///
/// Both bounds are inclusive, so `start == end` covers a single position.
/// A `None` content is the empty label: gap fillers carry it, and it never
/// shows up in a merged content list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: i64,
    pub end: i64,
    pub content: Option<T>,
}

impl<T> Interval<T> {
    #[must_use]
    pub const fn new(start: i64, end: i64, content: T) -> Self {
        Self {
            start,
            end,
            content: Some(content),
        }
    }

    /// An interval without a label
    #[must_use]
    pub const fn unlabelled(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            content: None,
        }
    }

    #[must_use]
    pub const fn is_unlabelled(&self) -> bool {
        self.content.is_none()
    }

    #[must_use]
    pub const fn contains(&self, pos: i64) -> bool {
        pos >= self.start && pos <= self.end
    }
}

/// One disjoint segment of a merge, with every label covering it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MergedInterval<T> {
    pub start: i64,
    pub end: i64,
    pub content_list: Vec<T>,
}

impl<T> MergedInterval<T> {
    #[must_use]
    pub const fn contains(&self, pos: i64) -> bool {
        pos >= self.start && pos <= self.end
    }
}

/// The slice of text under a merged interval
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DecoratedText<T> {
    pub text: String,
    pub content_list: Vec<T>,
}
