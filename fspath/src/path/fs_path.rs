//! The [`FsPath`] value type and its pure, string-only queries.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::{self, final_component, join_segments, CURRENT_DIR, PARENT_DIR};
use super::segment::AsSegment;

/// An immutable, lexically normalized filesystem location.
///
/// The path need not exist. The normalized string is fixed at construction;
/// every derived value is recomputed on each call, and every filesystem query
/// hits the live filesystem.
///
/// # Examples
///
/// ```
/// use fspath::FsPath;
///
/// let path = FsPath::new(["src", "..", "lib", "mod.rs"]);
/// assert_eq!(path.extension(), ".rs");
/// assert_eq!(path.parent(), FsPath::from("lib"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FsPath {
    value: String,
}

impl FsPath {
    /// Join `segments` left to right and normalize the result.
    ///
    /// Accepts any iterator whose items implement [`AsSegment`]. To mix
    /// strings and paths in one call use the [`fspath!`](crate::fspath)
    /// macro. Never touches the filesystem and never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert_eq!(FsPath::new(["a", "b", ".."]).as_str(), "a");
    /// assert_eq!(FsPath::new([""]).as_str(), ".");
    /// ```
    pub fn new<I>(segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsSegment,
    {
        let segments: Vec<I::Item> = segments.into_iter().collect();
        let value = join_segments(segments.iter().map(|s| s.as_segment().as_str()));
        Self { value }
    }

    /// The current-directory path, `.`.
    #[must_use]
    pub fn current() -> Self {
        Self {
            value: CURRENT_DIR.to_string(),
        }
    }

    /// Wrap a string that is already normalized.
    pub(crate) fn from_normalized(value: String) -> Self {
        debug_assert_eq!(normalize::normalize(&value), value);
        Self { value }
    }

    /// Append one more segment, returning a new path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// let dir = FsPath::from("docs");
    /// assert_eq!(dir.join("guide.md"), FsPath::new(["docs", "guide.md"]));
    /// ```
    #[must_use]
    pub fn join(&self, segment: impl AsSegment) -> Self {
        Self::new([self.as_segment(), segment.as_segment()])
    }

    /// The normalized path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Borrow as a standard library path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.value)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Copy into an owned `PathBuf`.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.value)
    }

    /// The path with its final component removed.
    ///
    /// The root maps to itself and a bare name maps to `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert_eq!(FsPath::from("file.txt").directory_name(), ".");
    /// # #[cfg(unix)] {
    /// assert_eq!(FsPath::from("/").directory_name(), "/");
    /// assert_eq!(FsPath::new(["/usr", "local", "bin"]).directory_name(), "/usr/local");
    /// # }
    /// ```
    #[must_use]
    pub fn directory_name(&self) -> String {
        match self.as_path().parent() {
            // Root (or a bare Windows prefix) has no parent
            None => self.value.clone(),
            Some(parent) if parent.as_os_str().is_empty() => CURRENT_DIR.to_string(),
            Some(parent) => parent.to_string_lossy().into_owned(),
        }
    }

    /// The suffix of the final component starting at its last dot.
    ///
    /// Empty when the final component has no dot, when its only dot is the
    /// leading character of a hidden name, and for `.`, `..` and the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert_eq!(FsPath::from("file.min.js").extension(), ".js");
    /// assert_eq!(FsPath::from("README").extension(), "");
    /// assert_eq!(FsPath::from(".gitignore").extension(), "");
    /// assert_eq!(FsPath::from(".eslintrc.js").extension(), ".js");
    /// assert_eq!(FsPath::from("file.").extension(), ".");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        let name = final_component(&self.value);
        if name == PARENT_DIR {
            return "";
        }
        match name.rfind('.') {
            Some(0) | None => "",
            Some(dot) => &name[dot..],
        }
    }

    /// The containing directory as a new path.
    ///
    /// Repeated calls converge on the root or on `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// let nested = FsPath::new(["a", "b", "c.txt"]);
    /// assert_eq!(nested.parent().parent(), FsPath::from("a"));
    /// assert_eq!(FsPath::from("a").parent().parent(), FsPath::current());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        Self::from_normalized(self.directory_name())
    }
}

impl Default for FsPath {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<Path> for FsPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for FsPath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<&str> for FsPath {
    fn from(value: &str) -> Self {
        Self::new([value])
    }
}

impl From<String> for FsPath {
    fn from(value: String) -> Self {
        Self::new([value])
    }
}

impl From<FsPath> for String {
    fn from(path: FsPath) -> Self {
        path.value
    }
}

impl FromStr for FsPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::MAIN_SEPARATOR;

    #[test]
    fn test_new_joins_positionally() {
        let path = FsPath::new(["a", "b", "c"]);
        assert_eq!(
            path.as_str(),
            format!("a{MAIN_SEPARATOR}b{MAIN_SEPARATOR}c")
        );
    }

    #[test]
    fn test_new_with_path_segments() {
        let base = FsPath::from("base");
        let joined = FsPath::new([&base, &FsPath::from("leaf")]);
        assert_eq!(joined, FsPath::new(["base", "leaf"]));
    }

    #[test]
    fn test_empty_constructions_are_current_dir() {
        assert_eq!(FsPath::new(Vec::<&str>::new()).as_str(), ".");
        assert_eq!(FsPath::new(["", ""]).as_str(), ".");
        assert_eq!(FsPath::default(), FsPath::current());
    }

    #[test]
    fn test_reconstruction_is_idempotent() {
        let once = FsPath::new(["x", ".", "y", "..", "z"]);
        let twice = FsPath::new([once.as_str()]);
        assert_eq!(once, twice);
        assert_eq!(FsPath::new([&once]), once);
    }

    #[test]
    fn test_directory_name_bare_name() {
        assert_eq!(FsPath::from("file.txt").directory_name(), ".");
        assert_eq!(FsPath::from("..").directory_name(), ".");
        assert_eq!(FsPath::current().directory_name(), ".");
    }

    #[test]
    fn test_directory_name_relative() {
        let path = FsPath::new(["..", "src", "index.ts"]);
        assert_eq!(path.directory_name(), FsPath::new(["..", "src"]).as_str());
    }

    #[test]
    #[cfg(unix)]
    fn test_directory_name_root() {
        assert_eq!(FsPath::from("/").directory_name(), "/");
        assert_eq!(FsPath::from("/usr").directory_name(), "/");
    }

    #[test]
    fn test_extension_cases() {
        assert_eq!(FsPath::from("script.js").extension(), ".js");
        assert_eq!(FsPath::from("file.min.js").extension(), ".js");
        assert_eq!(FsPath::from("README").extension(), "");
        assert_eq!(FsPath::from(".gitignore").extension(), "");
        assert_eq!(FsPath::from(".eslintrc.js").extension(), ".js");
        assert_eq!(FsPath::from("file.").extension(), ".");
        assert_eq!(FsPath::from("..").extension(), "");
        assert_eq!(FsPath::current().extension(), "");
        assert_eq!(FsPath::from("..foo").extension(), ".foo");
    }

    #[test]
    fn test_extension_uses_final_component_only() {
        assert_eq!(FsPath::new(["dir.d", "file"]).extension(), "");
        assert_eq!(FsPath::new(["usr", "bin", "node.exe"]).extension(), ".exe");
    }

    #[test]
    #[cfg(unix)]
    fn test_extension_root() {
        assert_eq!(FsPath::from("/").extension(), "");
    }

    #[test]
    fn test_parent_chain_terminates() {
        let mut path = FsPath::new(["a", "b", "c", "d"]);
        for _ in 0..10 {
            path = path.parent();
        }
        assert_eq!(path, FsPath::current());
    }

    #[test]
    #[cfg(unix)]
    fn test_parent_chain_stops_at_root() {
        let mut path = FsPath::from("/usr/local/bin");
        for _ in 0..10 {
            path = path.parent();
        }
        assert_eq!(path.as_str(), "/");
    }

    #[test]
    fn test_parent_of_parent_dirs() {
        assert_eq!(
            FsPath::new(["..", ".."]).parent(),
            FsPath::from("..")
        );
    }

    #[test]
    fn test_join() {
        let dir = FsPath::from("a");
        assert_eq!(dir.join(".."), FsPath::current());
        assert_eq!(dir.join(&FsPath::from("b")), FsPath::new(["a", "b"]));
    }

    #[test]
    fn test_conversions() {
        let path: FsPath = "x/./y".parse().unwrap();
        assert_eq!(path, FsPath::new(["x", "y"]));
        assert_eq!(path.to_string(), path.as_str());
        assert_eq!(path.to_path_buf(), PathBuf::from(path.as_str()));
        let s: String = path.clone().into();
        assert_eq!(s, path.into_string());
    }

    #[test]
    fn test_serde_round_trip_normalizes() {
        let path: FsPath = serde_json::from_str("\"a//b/./c\"").unwrap();
        assert_eq!(path, FsPath::new(["a", "b", "c"]));
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, serde_json::to_string(path.as_str()).unwrap());
    }
}
