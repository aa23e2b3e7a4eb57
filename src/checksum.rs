//! Luhn checksum validation
//!
//! Validates numeral sequences (credit card numbers, IMEIs, and similar
//! identifiers) with the Luhn algorithm. Input is textual; numeric callers
//! format their value first. Malformed input is never an error - the
//! checksum gate simply reports `false`.

/// Returns true if `raw` passes the Luhn checksum.
///
/// Digits may be interspersed with whitespace and dashes, which are
/// stripped before the check. Any other character makes the whole input
/// invalid. An input with no digits at all is invalid: the zero sum would
/// satisfy `0 % 10 == 0`, but there is nothing to verify, so the gate
/// fails closed.
///
/// # Algorithm
///
/// Scan the digits right to left with an alternating "double" flag that
/// starts false at the rightmost digit. A doubled digit above 9 has 9
/// subtracted (the same as summing its own digits, since a doubled digit is
/// at most 18). The sequence is valid iff the accumulated sum is a multiple
/// of 10.
///
/// # Examples
///
/// ```
/// use puzzlr::checksum::is_valid_luhn;
///
/// assert!(is_valid_luhn("79927398713"));
/// assert!(is_valid_luhn("7992-7398-713"));
/// assert!(!is_valid_luhn("4571234567890111"));
/// assert!(!is_valid_luhn(""));
/// ```
pub fn is_valid_luhn(raw: &str) -> bool {
    let mut sum: u64 = 0;
    let mut digits = 0usize;
    let mut double = false;

    for c in raw.chars().rev() {
        let Some(d) = c.to_digit(10) else {
            if c.is_whitespace() || c == '-' {
                continue;
            }
            // Anything besides digits and separators poisons the input.
            return false;
        };

        let d = if double {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            d
        };

        sum += u64::from(d);
        digits += 1;
        double = !double;
    }

    digits > 0 && sum % 10 == 0
}
