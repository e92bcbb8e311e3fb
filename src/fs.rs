// fs.rs
//! Read-only filesystem access used by the concurrent finder.
//!
//! The walker only needs two operations: listing a directory with entry type
//! tags, and reading a small text file (`.gitignore`). Implement
//! [`FileSystem`] to run the finder over something other than the local disk.

use async_trait::async_trait;
use camino::Utf8Path;
use std::io;
use tokio::fs;
use tracing::warn;

/// A single entry returned by [`FileSystem::read_dir`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// File or directory name, not the full path
    pub name: String,
    /// True if the entry itself is a directory (symlinks are not followed)
    pub is_dir: bool,
}

impl DirEntry {
    /// A non-directory entry
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// A directory entry
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Minimal read-only filesystem abstraction for the finder
#[async_trait]
pub trait FileSystem: Send + Sync + 'static {
    /// Lists the entries of a directory
    async fn read_dir(&self, dir: &Utf8Path) -> io::Result<Vec<DirEntry>>;

    /// Reads a whole file as UTF-8 text
    async fn read_to_string(&self, path: &Utf8Path) -> io::Result<String>;
}

/// The local filesystem, accessed through `tokio::fs`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

#[async_trait]
impl FileSystem for LocalFs {
    async fn read_dir(&self, dir: &Utf8Path) -> io::Result<Vec<DirEntry>> {
        let mut rd = fs::read_dir(dir).await?;
        let mut entries = Vec::new();

        while let Some(entry) = rd.next_entry().await? {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Skipping non-UTF-8 entry {:?} in {}", raw, dir);
                    continue;
                }
            };

            // Entry vanished or became unreadable between listing and stat
            let file_type = match entry.file_type().await {
                Ok(ft) => ft,
                Err(e) => {
                    warn!("Failed to read type of {}/{}: {}", dir, name, e);
                    continue;
                }
            };

            entries.push(DirEntry {
                name,
                is_dir: file_type.is_dir(),
            });
        }

        Ok(entries)
    }

    async fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        fs::read_to_string(path).await
    }
}
