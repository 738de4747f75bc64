//! Service context bundling the port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::memory::MemoryFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects the generator talks to.
pub struct ServiceContext {
    /// Filesystem for reading plans and writing the rendered document.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
        }
    }

    /// Creates a context backed by an empty in-memory filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_fs(MemoryFileSystem::new())
    }

    /// Creates a context around an arbitrary filesystem adapter.
    #[must_use]
    pub fn with_fs(fs: impl FileSystem + 'static) -> Self {
        Self { fs: Box::new(fs) }
    }
}
