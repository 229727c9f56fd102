/// Normalises raw sequence text: drops every non-alphabetic character and
/// uppercases the rest.
///
/// Whitespace, digits, line breaks and punctuation all disappear, so sequence
/// files laid out in numbered columns read as one continuous strand.
///
/// # Examples
///
/// ```rust
/// use ribos_core::sequence::clean_sequence;
///
/// assert_eq!(clean_sequence("  1 atgc\n 61 TTAA"), "ATGCTTAA");
/// ```
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Shortens `sequence` to at most `length` characters, marking the cut with `...`.
pub fn preview(sequence: &str, length: usize) -> String {
    match sequence.char_indices().nth(length) {
        Some((cut, _)) => format!("{}...", &sequence[..cut]),
        None => sequence.to_string(),
    }
}
