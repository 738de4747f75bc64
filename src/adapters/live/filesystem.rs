//! Live filesystem adapter using `std::fs`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::ports::filesystem::{FileSystem, FsError};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        Ok(std::fs::write(path, contents)?)
    }

    fn append(&self, path: &Path, contents: &str) -> Result<(), FsError> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_extends_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presubmit.yml");
        let fs = LiveFileSystem;

        fs.write(&path, "tasks:\n").unwrap();
        fs.append(&path, "  a:\n").unwrap();

        assert_eq!(fs.read_to_string(&path).unwrap(), "tasks:\n  a:\n");
        assert!(fs.exists(&path));
    }

    #[test]
    fn write_fails_without_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("presubmit.yml");
        assert!(LiveFileSystem.write(&path, "tasks:\n").is_err());
        assert!(!LiveFileSystem.exists(&path));
    }
}
