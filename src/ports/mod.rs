//! Port traits defining external boundaries.
//!
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{FileSystem, FsError};
