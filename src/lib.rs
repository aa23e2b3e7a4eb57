//! # puzzlr
//!
//! **Pure, deterministic algorithmic primitives for Rust.**
//!
//! puzzlr is a library of independent, stateless utilities over numbers,
//! strings, small 2-D arrays, and geometric records. Every operation is a
//! self-contained transformation from typed input to typed output (or a
//! well-defined error): no I/O, no shared state, no hidden caching, and
//! the same input always produces the same output.
//!
//! ## Components
//!
//! - **Brackets**: nested-bracket validation over four bracket families
//! - **Checksum**: Luhn validation of numeral sequences
//! - **Matrix**: rectangular matrices with the canonical dense product
//! - **Board**: 3x3 tic-tac-toe position evaluation
//! - **Path**: longest common directory prefix of a path collection
//! - **Numeric / Text / Geometry**: factorials, digit games, radix and
//!   interval notation, string reversal, containment and overlap checks
//!
//! ## Quick Start
//!
//! ```
//! use puzzlr::prelude::*;
//!
//! assert!(is_balanced("{[(<{[]}>)]}"));
//! assert!(is_valid_luhn("7992-7398-713"));
//!
//! let id = Matrix::<i64>::identity(3);
//! let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
//! assert_eq!(id.multiply(&m)?, m);
//!
//! assert_eq!(
//!     common_directory_path(&["/web/images/a.png", "/web/images/b.png"]),
//!     "/web/images/",
//! );
//! # Ok::<(), puzzlr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded matrix products. Only whole output
//!   rows are distributed; every cell keeps the sequential accumulation
//!   order, so results are bit-identical with the feature on or off.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod brackets;
pub mod checksum;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod numeric;
pub mod path;
pub mod text;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::board::{Board, Mark};
    pub use crate::brackets::is_balanced;
    pub use crate::checksum::is_valid_luhn;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Point, Rect};
    pub use crate::matrix::{Element, Matrix};
    pub use crate::numeric::{FizzBuzz, fizz_buzz};
    pub use crate::path::common_directory_path;
    pub use crate::text::{first_unique_char, reverse_words};
}
