//! Sentence and paragraph tokenization

/// Split text into trimmed, non-empty sentences
///
/// A sentence ends at any run of `.`, `!`, or `?`. Document order is
/// preserved; empty input yields an empty vector.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(|c| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into trimmed, non-empty paragraphs
///
/// Paragraphs are separated by blank lines (two or more consecutive
/// newlines).
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
