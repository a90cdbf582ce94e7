//! Editor-style `(offset, length)` annotations.
//!
//! Rich-text editors describe inline styles and entity references as a
//! character offset plus a length. These convert into inclusive intervals
//! labelled with a [`Decoration`], so styles and entities can be merged in
//! one pass.

use serde::{Deserialize, Serialize};

use crate::models::Interval;

/// A style or an entity reference applied to a run of text
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Decoration {
    pub style: Option<String>,
    pub entity_key: Option<u64>,
}

impl Decoration {
    #[must_use]
    pub fn style(style: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            entity_key: None,
        }
    }

    #[must_use]
    pub const fn entity(key: u64) -> Self {
        Self {
            style: None,
            entity_key: Some(key),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct InlineStyleRange {
    pub offset: i64,
    pub length: i64,
    pub style: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EntityRange {
    pub offset: i64,
    pub length: i64,
    pub key: u64,
}

/// Inclusive last offset of a range, `None` if it covers nothing
fn last_offset(offset: i64, length: i64) -> Option<i64> {
    if length <= 0 {
        return None;
    }
    offset.checked_add(length - 1)
}

impl InlineStyleRange {
    #[must_use]
    pub fn to_interval(&self) -> Option<Interval<Decoration>> {
        last_offset(self.offset, self.length)
            .map(|end| Interval::new(self.offset, end, Decoration::style(self.style.as_str())))
    }
}

impl EntityRange {
    #[must_use]
    pub fn to_interval(&self) -> Option<Interval<Decoration>> {
        last_offset(self.offset, self.length)
            .map(|end| Interval::new(self.offset, end, Decoration::entity(self.key)))
    }
}

/// Styles followed by entities, as intervals. Empty ranges are skipped.
#[must_use]
pub fn decoration_intervals(
    styles: &[InlineStyleRange],
    entities: &[EntityRange],
) -> Vec<Interval<Decoration>> {
    styles
        .iter()
        .filter_map(InlineStyleRange::to_interval)
        .chain(entities.iter().filter_map(EntityRange::to_interval))
        .collect()
}
