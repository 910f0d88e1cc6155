//! Segments accepted by the [`FsPath`] constructor.

use super::FsPath;

/// One piece of a path handed to [`FsPath::new`].
///
/// A segment is either raw text or an existing [`FsPath`]; path segments
/// contribute their normalized string.
///
/// # Examples
///
/// ```
/// use fspath::{FsPath, Segment};
///
/// let base = FsPath::from("project");
/// let path = FsPath::new([Segment::Path(&base), Segment::Text("src")]);
/// assert!(path.as_str().ends_with("src"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A raw string segment.
    Text(&'a str),
    /// An existing path value.
    Path(&'a FsPath),
}

impl<'a> Segment<'a> {
    /// The string this segment contributes to a join.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Text(text) => text,
            Self::Path(path) => path.as_str(),
        }
    }
}

/// Conversion into a borrowed [`Segment`].
///
/// Implemented for string types, [`FsPath`], [`Segment`] itself, and
/// references to any of them, so `FsPath::new` can take arrays, vectors and
/// iterators of each.
pub trait AsSegment {
    /// Borrow `self` as a segment.
    fn as_segment(&self) -> Segment<'_>;
}

impl AsSegment for str {
    fn as_segment(&self) -> Segment<'_> {
        Segment::Text(self)
    }
}

impl AsSegment for String {
    fn as_segment(&self) -> Segment<'_> {
        Segment::Text(self)
    }
}

impl AsSegment for FsPath {
    fn as_segment(&self) -> Segment<'_> {
        Segment::Path(self)
    }
}

impl AsSegment for Segment<'_> {
    fn as_segment(&self) -> Segment<'_> {
        *self
    }
}

impl<T: AsSegment + ?Sized> AsSegment for &T {
    fn as_segment(&self) -> Segment<'_> {
        (**self).as_segment()
    }
}

/// Build an [`FsPath`] from a mixed list of strings and paths.
///
/// Each argument may be anything implementing [`AsSegment`]; arguments are
/// borrowed, not moved.
///
/// # Examples
///
/// ```
/// use fspath::{fspath, FsPath};
///
/// let base = FsPath::from("/usr");
/// let bin = fspath!(base, "local", "bin");
/// # #[cfg(unix)]
/// assert_eq!(bin.as_str(), "/usr/local/bin");
///
/// assert_eq!(fspath!().as_str(), ".");
/// ```
#[macro_export]
macro_rules! fspath {
    () => {
        $crate::FsPath::current()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::FsPath::new([$($crate::AsSegment::as_segment(&$segment)),+])
    };
}
