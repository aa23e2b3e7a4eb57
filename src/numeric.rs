//! Scalar numeric utilities
//!
//! Small deterministic transformations on integers: divisibility labeling,
//! factorials, range sums, digit manipulation, radix conversion, and
//! interval notation. All are single-pass or closed-form; none allocates
//! beyond its textual output.

use std::fmt;

use crate::error::{Error, Result};

/// Digit alphabet for radix conversion, indexed by digit value.
const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Result of the Fizz-Buzz labeling of one number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FizzBuzz {
    /// Multiple of 3 only
    Fizz,
    /// Multiple of 5 only
    Buzz,
    /// Multiple of both 3 and 5
    FizzBuzz,
    /// Multiple of neither; carries the number itself
    Number(u64),
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fizz => write!(f, "Fizz"),
            Self::Buzz => write!(f, "Buzz"),
            Self::FizzBuzz => write!(f, "FizzBuzz"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Classify `n` by divisibility: multiples of 3 are [`FizzBuzz::Fizz`],
/// multiples of 5 are [`FizzBuzz::Buzz`], multiples of both are
/// [`FizzBuzz::FizzBuzz`], everything else carries its own value.
///
/// # Examples
///
/// ```
/// use puzzlr::numeric::{fizz_buzz, FizzBuzz};
///
/// assert_eq!(fizz_buzz(15), FizzBuzz::FizzBuzz);
/// assert_eq!(fizz_buzz(2).to_string(), "2");
/// ```
pub fn fizz_buzz(n: u64) -> FizzBuzz {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => FizzBuzz::FizzBuzz,
        (true, false) => FizzBuzz::Fizz,
        (false, true) => FizzBuzz::Buzz,
        (false, false) => FizzBuzz::Number(n),
    }
}

/// Factorial of `n`, with `factorial(0) == 1`.
///
/// The result overflows `u64` for `n > 20`; callers stay within that range.
pub fn factorial(n: u64) -> u64 {
    debug_assert!(n <= 20, "factorial({n}) overflows u64");
    (2..=n).product()
}

/// Sum of the integers from `lo` through `hi` inclusive, by the closed-form
/// arithmetic series. `lo` must not exceed `hi`, and the sum must fit in
/// `i64`.
///
/// # Examples
///
/// ```
/// use puzzlr::numeric::sum_between;
///
/// assert_eq!(sum_between(5, 10), 45);
/// assert_eq!(sum_between(-1, 1), 0);
/// ```
pub fn sum_between(lo: i64, hi: i64) -> i64 {
    debug_assert!(lo <= hi, "empty range: {lo} > {hi}");
    let count = i128::from(hi) - i128::from(lo) + 1;
    let total = (i128::from(lo) + i128::from(hi)) * count / 2;
    debug_assert!(
        i64::try_from(total).is_ok(),
        "sum of {lo}..={hi} overflows i64"
    );
    total as i64
}

/// Digital root of `n`: digits are summed repeatedly until one digit is
/// left.
///
/// # Examples
///
/// ```
/// use puzzlr::numeric::digital_root;
///
/// assert_eq!(digital_root(12345), 6); // 1+2+3+4+5 = 15, 1+5 = 6
/// ```
pub fn digital_root(mut n: u64) -> u64 {
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

/// Decimal digit reversal: `12345` becomes `54321`. Trailing zeros vanish
/// (`1200` becomes `21`), and the reversed value must itself fit in `u64`.
pub fn reverse_digits(mut n: u64) -> u64 {
    let mut reversed = 0;
    while n > 0 {
        reversed = reversed * 10 + n % 10;
        n /= 10;
    }
    reversed
}

/// Textual representation of `n` in the given radix, using digits `0-9a-z`.
///
/// # Errors
///
/// [`Error::InvalidRadix`] unless `2 <= radix <= 36`.
///
/// # Examples
///
/// ```
/// use puzzlr::numeric::to_radix;
///
/// assert_eq!(to_radix(365, 2)?, "101101101");
/// assert_eq!(to_radix(365, 4)?, "11231");
/// # Ok::<(), puzzlr::error::Error>(())
/// ```
pub fn to_radix(mut n: u64, radix: u32) -> Result<String> {
    if !(2..=36).contains(&radix) {
        return Err(Error::InvalidRadix { radix });
    }
    if n == 0 {
        return Ok("0".to_string());
    }

    let base = u64::from(radix);
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(RADIX_DIGITS[(n % base) as usize] as char);
        n /= base;
    }

    Ok(digits.iter().rev().collect())
}

/// Mathematical interval notation for the endpoints `a` and `b`, the
/// smaller endpoint printed first, with square brackets for included
/// boundaries and parentheses for excluded ones.
///
/// # Examples
///
/// ```
/// use puzzlr::numeric::interval_notation;
///
/// assert_eq!(interval_notation(0.0, 1.0, true, false), "[0, 1)");
/// assert_eq!(interval_notation(5.0, 3.0, true, true), "[3, 5]");
/// ```
pub fn interval_notation(a: f64, b: f64, include_start: bool, include_end: bool) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let open = if include_start { '[' } else { '(' };
    let close = if include_end { ']' } else { ')' };
    format!("{open}{lo}, {hi}{close}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_digital_root_single_step_and_iterated() {
        assert_eq!(digital_root(0), 0);
        assert_eq!(digital_root(10000), 1);
        assert_eq!(digital_root(23456), 2);
        assert_eq!(digital_root(165536), 8); // 26 -> 8
    }

    #[test]
    fn test_reverse_digits_drops_trailing_zeros() {
        assert_eq!(reverse_digits(0), 0);
        assert_eq!(reverse_digits(1200), 21);
        assert_eq!(reverse_digits(34143), 34143);
    }

    #[test]
    fn test_to_radix_boundaries() {
        assert_eq!(to_radix(0, 2).unwrap(), "0");
        assert_eq!(to_radix(255, 16).unwrap(), "ff");
        assert_eq!(to_radix(35, 36).unwrap(), "z");
        assert!(matches!(to_radix(1, 1), Err(Error::InvalidRadix { radix: 1 })));
        assert!(matches!(to_radix(1, 37), Err(Error::InvalidRadix { radix: 37 })));
    }
}
