//! Small text utilities shared by the extractors.

/// Split `text` on `delimiter` into trimmed, non-empty entries.
/// Empty input yields an empty vector, never a vector of blanks.
pub fn safe_split(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
