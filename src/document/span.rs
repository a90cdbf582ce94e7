use std::iter;

/// A half-open `[start, end)` range of character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan {
    pub start: u64,
    pub end: u64,
}

impl TextSpan {
    /// Span of the inclusive offsets `[start, end]`, clamped to the start of
    /// the text. Inverted bounds give an empty span.
    #[must_use]
    pub fn from_inclusive(start: i64, end: i64) -> Self {
        let start = u64::try_from(start).unwrap_or(0);
        let end = u64::try_from(end.saturating_add(1)).unwrap_or(0);
        Self {
            start,
            end: end.max(start),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Byte position of every character of a string, for slicing by
/// character offset.
#[derive(Debug, Clone)]
pub struct CharOffsets<'t> {
    text: &'t str,
    bytes: Vec<usize>,
}

impl<'t> CharOffsets<'t> {
    #[must_use]
    pub fn new(text: &'t str) -> Self {
        let bytes = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(iter::once(text.len()))
            .collect();
        Self { text, bytes }
    }

    /// Number of characters in the text
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.bytes.len() - 1
    }

    fn byte_at(&self, offset: u64) -> usize {
        usize::try_from(offset)
            .ok()
            .and_then(|offset| self.bytes.get(offset))
            .copied()
            .unwrap_or(self.text.len())
    }

    /// The characters under `span`, truncated at the end of the text.
    #[must_use]
    pub fn slice(&self, span: TextSpan) -> &'t str {
        if span.is_empty() {
            return "";
        }
        let from = self.byte_at(span.start);
        let to = self.byte_at(span.end);
        &self.text[from..to]
    }
}
