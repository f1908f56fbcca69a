/// Split raw form input into trimmed, non-empty entries.
///
/// Any run of commas, newlines or whitespace separates two entries. Casing
/// inside an entry is left untouched.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}
