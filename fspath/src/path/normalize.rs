//! Lexical path joining and normalization.
//!
//! Nothing here touches the filesystem. Segments are concatenated with the
//! platform separator and then reduced component by component:
//! - repeated separators collapse
//! - `.` components are dropped
//! - `..` pops the preceding component, is dropped at the root, and is kept
//!   when a relative path has nothing left to pop

use std::borrow::Cow;
use std::path::{Component, Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// The current-directory indicator returned for empty paths.
pub const CURRENT_DIR: &str = ".";

/// The parent-directory indicator.
pub const PARENT_DIR: &str = "..";

/// Returns `true` if `c` separates path components on this platform.
///
/// # Examples
///
/// ```
/// use fspath::path::normalize::is_separator;
///
/// assert!(is_separator('/'));
/// assert!(!is_separator('a'));
/// ```
#[must_use]
pub fn is_separator(c: char) -> bool {
    std::path::is_separator(c)
}

/// Join segments positionally and normalize the result.
///
/// Empty segments are ignored. An absolute segment after the first does not
/// reset the join; it is appended like any other segment.
///
/// # Examples
///
/// ```
/// use fspath::path::normalize::join_segments;
///
/// # #[cfg(unix)] {
/// assert_eq!(join_segments(["/usr", "local", "..", "bin"]), "/usr/bin");
/// assert_eq!(join_segments(["a", "/b"]), "a/b");
/// # }
/// assert_eq!(join_segments(Vec::<&str>::new()), ".");
/// assert_eq!(join_segments(["", ""]), ".");
/// ```
pub fn join_segments<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = segments
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR);

    normalize(&joined)
}

/// Lexically normalize a single path string.
///
/// # Examples
///
/// ```
/// use fspath::path::normalize::normalize;
///
/// # #[cfg(unix)] {
/// assert_eq!(normalize("/a/./b/../c"), "/a/c");
/// assert_eq!(normalize("/.."), "/");
/// assert_eq!(normalize("a//b/"), "a/b");
/// assert_eq!(normalize("../../x"), "../../x");
/// # }
/// assert_eq!(normalize("a/.."), ".");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut prefix: Option<Cow<'_, str>> = None;
    let mut has_root = false;
    let mut parts: Vec<Cow<'_, str>> = Vec::new();

    for component in Path::new(raw).components() {
        match component {
            Component::Prefix(p) => prefix = Some(p.as_os_str().to_string_lossy()),
            Component::RootDir => has_root = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(last) if last != PARENT_DIR => {
                    parts.pop();
                }
                // The root has no parent; "/.." stays "/"
                _ if has_root => {}
                _ => parts.push(Cow::Borrowed(PARENT_DIR)),
            },
            Component::Normal(name) => parts.push(name.to_string_lossy()),
        }
    }

    let mut result = prefix.map(Cow::into_owned).unwrap_or_default();
    if has_root {
        result.push(MAIN_SEPARATOR);
    }
    result.push_str(&parts.join(MAIN_SEPARATOR_STR));

    if result.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        result
    }
}

/// The final component of an already-normalized path string.
///
/// Returns the empty string for the root.
#[must_use]
pub fn final_component(normalized: &str) -> &str {
    normalized.rsplit(is_separator).next().unwrap_or_default()
}
