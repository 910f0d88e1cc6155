//! Content retrieval: file text or directory listings.

use std::fmt;
use std::fs::{self, FileType};

use serde::Serialize;

use super::FsPath;
use crate::error::{Error, Result};

/// What a directory entry is, judged without following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link, whatever it points at.
    Symlink,
    /// Anything else: sockets, FIFOs, devices.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Symlink => write!(f, "symlink"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DirEntry {
    name: String,
    kind: EntryKind,
}

impl DirEntry {
    /// Create an entry from its name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The entry's file name (not a full path).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entry's own type.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Whether the entry itself is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Whether the entry itself is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Whether the entry itself is a symbolic link.
    #[must_use]
    pub fn is_symbolic_link(&self) -> bool {
        self.kind == EntryKind::Symlink
    }

    /// Whether the name starts with a dot.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// The result of [`FsPath::contents`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Contents {
    /// Full text of a regular file.
    Text(String),
    /// Entries of a directory, in the order the system returned them.
    Entries(Vec<DirEntry>),
}

impl Contents {
    /// The file text, if this came from a file.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Entries(_) => None,
        }
    }

    /// The directory entries, if this came from a directory.
    #[must_use]
    pub fn as_entries(&self) -> Option<&[DirEntry]> {
        match self {
            Self::Text(_) => None,
            Self::Entries(entries) => Some(entries),
        }
    }
}

impl FsPath {
    /// Read a file's text or a directory's entries.
    ///
    /// Symbolic links are followed. Directory entries come back in native
    /// enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist (`PathNotFound`)
    /// - Access is denied (`PermissionDenied`)
    /// - The path is neither a regular file nor a directory (`NotFileOrDirectory`)
    /// - A file's bytes are not valid UTF-8 (`InvalidUtf8`)
    /// - Any other I/O error occurs
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fspath::{Contents, FsPath};
    ///
    /// match FsPath::from("Cargo.toml").contents().unwrap() {
    ///     Contents::Text(text) => println!("{text}"),
    ///     Contents::Entries(entries) => println!("{} entries", entries.len()),
    /// }
    /// ```
    pub fn contents(&self) -> Result<Contents> {
        let metadata =
            fs::metadata(self.as_path()).map_err(|e| Error::from_io(self.as_path(), e))?;

        if metadata.is_file() {
            self.read_text().map(Contents::Text)
        } else if metadata.is_dir() {
            self.entries().map(Contents::Entries)
        } else {
            Err(Error::NotFileOrDirectory {
                path: self.to_path_buf(),
            })
        }
    }

    /// Read the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn read_text(&self) -> Result<String> {
        let bytes = fs::read(self.as_path()).map_err(|e| Error::from_io(self.as_path(), e))?;
        String::from_utf8(bytes).map_err(|e| Error::InvalidUtf8 {
            path: self.to_path_buf(),
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }

    /// List the directory's entries.
    ///
    /// Names that are not valid UTF-8 are converted lossily.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a readable directory.
    pub fn entries(&self) -> Result<Vec<DirEntry>> {
        let read_dir =
            fs::read_dir(self.as_path()).map_err(|e| Error::from_io(self.as_path(), e))?;

        read_dir
            .map(|entry| -> Result<DirEntry> {
                let entry = entry.map_err(|e| Error::from_io(self.as_path(), e))?;
                let file_type = entry
                    .file_type()
                    .map_err(|e| Error::from_io(&entry.path(), e))?;
                Ok(DirEntry::new(
                    entry.file_name().to_string_lossy(),
                    EntryKind::from(file_type),
                ))
            })
            .collect()
    }
}
