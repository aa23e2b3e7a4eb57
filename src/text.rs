//! String utilities
//!
//! Character-level transformations: sentence reversal and first-unique-char
//! lookup. Both operate on `char` boundaries, not bytes, so multi-byte
//! input stays intact.

use std::collections::HashMap;

/// Reverse `s` at both levels: word order and the characters inside each
/// word. For a single-spaced sentence this reverses the whole character
/// sequence while keeping the word boundaries where the spaces fall.
///
/// # Examples
///
/// ```
/// use puzzlr::text::reverse_words;
///
/// assert_eq!(
///     reverse_words("The quick brown fox"),
///     "xof nworb kciuq ehT",
/// );
/// assert_eq!(reverse_words("rotator"), "rotator");
/// ```
pub fn reverse_words(s: &str) -> String {
    s.split(' ')
        .rev()
        .map(|word| word.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character of `s` that occurs exactly once, or `None` when every
/// character repeats.
///
/// # Examples
///
/// ```
/// use puzzlr::text::first_unique_char;
///
/// assert_eq!(first_unique_char("abracadabra"), Some('c'));
/// assert_eq!(first_unique_char("entente"), None);
/// ```
pub fn first_unique_char(s: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    s.chars().find(|c| counts[c] == 1)
}
