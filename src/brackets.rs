//! Balanced-bracket validation
//!
//! Validates nested-structure well-formedness over four bracket families
//! (`{}`, `[]`, `()`, `<>`) with a single left-to-right pass and an explicit
//! stack. The close-to-open pairing is a fixed bijective table; there is no
//! mutable module state.

/// Returns the opening bracket paired with `close`, or `None` when `close`
/// is not one of the four closing symbols.
#[inline]
const fn opening_for(close: char) -> Option<char> {
    match close {
        '}' => Some('{'),
        ']' => Some('['),
        ')' => Some('('),
        '>' => Some('<'),
        _ => None,
    }
}

/// Returns true for the four opening bracket symbols.
#[inline]
const fn is_opening(c: char) -> bool {
    matches!(c, '{' | '[' | '(' | '<')
}

/// Returns true if `sequence` consists of correctly nested bracket pairs.
///
/// Characters outside the eight bracket symbols are passed over without
/// touching the stack, so the function can run over free text; only the
/// bracket subsequence decides the result.
///
/// # Algorithm
///
/// Scan left to right. An opening bracket is pushed. A closing bracket pops
/// the stack when the top is its matching opener; otherwise (wrong opener or
/// empty stack) the closing bracket itself is pushed as an unmatched marker.
/// The sequence is balanced iff the stack is empty at the end - a single
/// emptiness check instead of a separate mismatch flag, at the cost of the
/// stack holding a mix of openers and stray closers.
///
/// # Examples
///
/// ```
/// use puzzlr::brackets::is_balanced;
///
/// assert!(is_balanced(""));
/// assert!(is_balanced("{[(<{[]}>)]}"));
/// assert!(!is_balanced("[(])"));
/// assert!(!is_balanced("]["));
/// ```
pub fn is_balanced(sequence: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();

    for c in sequence.chars() {
        if is_opening(c) {
            stack.push(c);
        } else if let Some(open) = opening_for(c) {
            if stack.last() == Some(&open) {
                stack.pop();
            } else {
                // Wrong or missing opener: the closer stays on the stack as
                // an unmatched marker.
                stack.push(c);
            }
        }
    }

    stack.is_empty()
}
