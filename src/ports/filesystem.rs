//! Filesystem port for reading plans and writing the rendered document.

use std::path::Path;

/// Boxed error returned by filesystem adapters.
pub type FsError = Box<dyn std::error::Error + Send + Sync>;

/// Provides filesystem access for reading and writing files.
///
/// Abstracting the filesystem lets the generator render into memory for
/// dry runs and tests without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    /// Writes `contents` to a file, creating or truncating it.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (missing directory, permissions, disk full).
    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Appends `contents` to a file, creating it if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending.
    fn append(&self, path: &Path, contents: &str) -> Result<(), FsError>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;
}
