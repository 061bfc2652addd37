//! Library entries
//!
//! An entry is an opaque handle to a media file. The queue never opens the
//! file; it only stores, orders and hands the entry back to the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Media entry stored in the library
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// File path handed to the playback engine
    path: PathBuf,

    /// Name shown in the list and in "now playing"
    name: String,
}

impl LibraryEntry {
    /// Create an entry with an explicit display name
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Create an entry named after its file name
    ///
    /// Paths without a file name component (e.g. `/` or `..`) use the whole
    /// path as the display name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        );

        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for LibraryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_uses_file_name() {
        let entry = LibraryEntry::from_path("/music/album/01 - Intro.flac");
        assert_eq!(entry.name(), "01 - Intro.flac");
        assert_eq!(entry.path(), Path::new("/music/album/01 - Intro.flac"));
    }

    #[test]
    fn from_path_without_file_name_falls_back_to_path() {
        let entry = LibraryEntry::from_path("/");
        assert_eq!(entry.name(), "/");
    }

    #[test]
    fn display_prints_name() {
        let entry = LibraryEntry::new("/videos/clip.mkv", "Holiday clip");
        assert_eq!(entry.to_string(), "Holiday clip");
    }
}
