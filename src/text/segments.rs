use crate::words::filter::MatchIndices;

/// Byte range over a word, tagged with its emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
    /// Whether the range is a matched target letter.
    pub emphasized: bool,
}

impl Span {
    /// Whether the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A run of a word's original text, rendered either emphasized or plain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text of the run, with the word's original casing.
    pub text: &'a str,
    /// Whether the run is a matched target letter.
    pub emphasized: bool,
}

/// All candidate spans of `word`, empty ones included.
///
/// For `k` matched letters this yields `2k + 1` spans alternating plain and emphasized,
/// beginning and ending with a (possibly empty) plain run. Their concatenation covers
/// `word` exactly.
///
/// # Panics
///
/// Panics if `indices` was not produced for `word` (an offset past the end of `word` or
/// off a char boundary).
pub fn split_spans(word: &str, indices: &MatchIndices) -> Vec<Span> {
    let mut spans = Vec::with_capacity(2 * indices.as_slice().len() + 1);
    let mut cursor = 0;

    for &at in indices.as_slice() {
        let letter_len = word[at..].chars().next().map_or(0, char::len_utf8);
        spans.push(Span {
            start: cursor,
            end: at,
            emphasized: false,
        });
        spans.push(Span {
            start: at,
            end: at + letter_len,
            emphasized: true,
        });
        cursor = at + letter_len;
    }
    spans.push(Span {
        start: cursor,
        end: word.len(),
        emphasized: false,
    });
    spans
}

/// Non-empty segments of `word`, left to right.
///
/// # Panics
///
/// Same precondition as [`split_spans`].
pub fn segments<'a>(word: &'a str, indices: &MatchIndices) -> Vec<Segment<'a>> {
    split_spans(word, indices)
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| Segment {
            text: &word[s.start..s.end],
            emphasized: s.emphasized,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/segments.rs"]
mod tests;
