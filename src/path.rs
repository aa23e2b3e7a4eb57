//! Common directory prefix
//!
//! Computes the longest common directory prefix of a path collection.
//! Paths are compared token by token, where a token is either a `/`
//! separator or a whole segment between separators - never part of a
//! segment, so `/web` and `/web-scripts` share only `/`.

/// Split `path` into segment and separator tokens, the separator kept as
/// its own token: `"/a/b"` becomes `["/", "a", "/", "b"]`. Keeping the
/// separators lets the result reproduce leading and trailing `/` exactly.
fn tokenize(path: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (idx, c) in path.char_indices() {
        if c == '/' {
            if start < idx {
                tokens.push(&path[start..idx]);
            }
            tokens.push(&path[idx..idx + 1]);
            start = idx + 1;
        }
    }
    if start < path.len() {
        tokens.push(&path[start..]);
    }

    tokens
}

/// The longest directory prefix shared by every path in `paths`.
///
/// The accumulator starts as the first path's token sequence and is
/// truncated at the first token where any later path disagrees; the
/// surviving tokens are concatenated back into a string. Consequences of
/// that fold: an empty collection yields `""`, a single path yields itself
/// verbatim, and paths with no shared structure yield `""` (or `"/"` when
/// they share only the leading separator).
///
/// # Examples
///
/// ```
/// use puzzlr::path::common_directory_path;
///
/// assert_eq!(
///     common_directory_path(&["/web/images/image1.png", "/web/images/image2.png"]),
///     "/web/images/",
/// );
/// assert_eq!(
///     common_directory_path(&["/web/assets/style.css", "/.bin/mocha", "/read.me"]),
///     "/",
/// );
/// ```
pub fn common_directory_path<S: AsRef<str>>(paths: &[S]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    let mut prefix = tokenize(first.as_ref());
    for path in rest {
        let tokens = tokenize(path.as_ref());
        let shared = prefix
            .iter()
            .zip(&tokens)
            .take_while(|(a, b)| a == b)
            .count();
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }

    prefix.concat()
}
