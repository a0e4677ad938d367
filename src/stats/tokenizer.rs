//! Splitting lines into tokens and deciding which tokens are words.
//!
//! A token is anything between single ASCII spaces. Tabs and other
//! whitespace do not split, so `"a\tb"` is one token.

/// Trailing punctuation removed (once) from a word before classification
const TRAILING_PUNCTUATION: [char; 6] = [',', '.', '?', '!', ':', ';'];

/// Lazily split a line into non-empty tokens on `' '`
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ').filter(|token| !token.is_empty())
}

/// Trim a token and decide whether it counts as a word.
///
/// Returns the trimmed word, or `None` when the token is a run of symbols
/// such as `***` or `--`. Single characters are always words, so a lone
/// `&` is counted.
pub fn classify(token: &str) -> Option<&str> {
    let trimmed = token.trim();
    if trimmed.chars().nth(1).is_none() {
        // Zero or one character left after trimming
        return (!trimmed.is_empty()).then_some(trimmed);
    }

    let word = trimmed
        .strip_suffix(TRAILING_PUNCTUATION)
        .unwrap_or(trimmed);

    let mut chars = word.chars();
    match (chars.next_back(), chars.next()) {
        (Some(last), _) if last.is_ascii_alphanumeric() => Some(word),
        (Some(_), None) => Some(word),
        _ => None,
    }
}

/// Iterate over the accepted words of a line, in order
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    tokens(line).filter_map(classify)
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tokenizer_tests;
