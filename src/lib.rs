// lib.rs
#![forbid(unsafe_code)]

//! Glob-style file finding with ignore lists and `.gitignore` support.
//!
//! Patterns use a deliberately small syntax: `*` (within one path segment),
//! `?` (one character, not `/`) and `**/` (any number of whole segments).
//! Every pattern is matched against the full base-relative path, always
//! written with `/` separators.

#[cfg(feature = "async")]
pub mod async_glob;
pub mod collector;
pub mod error;
#[cfg(feature = "async")]
pub mod fs;
pub mod options;
pub mod patterns;
pub mod predicates;
pub mod sync;
pub mod windows;

#[cfg(feature = "async")]
pub use crate::async_glob::find_with_fs;
pub use crate::error::GlobError;
#[cfg(feature = "async")]
pub use crate::fs::{DirEntry, FileSystem, LocalFs};
pub use crate::options::{GlobOptions, GlobOptionsBuilder};
pub use crate::patterns::{CompiledMatcher, IgnoreSet, Patterns};
pub use crate::predicates::{EntryKind, Predicates};
pub use crate::sync::find_blocking;

#[cfg(feature = "async")]
use std::sync::Arc;

/// Main facade for the globfind library
pub struct GlobFind;

impl GlobFind {
    /// Finds paths on the local filesystem matching any of the patterns
    ///
    /// Subdirectories are walked concurrently; the order of the returned
    /// paths is unspecified.
    ///
    /// # Arguments
    ///
    /// * `patterns` - One or more glob patterns
    /// * `opts` - Configuration options for the search
    ///
    /// # Returns
    ///
    /// `Ok(Vec<String>)` with matching paths, or `Err(GlobError)` if the base
    /// directory cannot be resolved
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use globfind::{GlobFind, GlobOptionsBuilder};
    ///
    /// # async fn run() -> Result<(), globfind::GlobError> {
    /// let opts = GlobOptionsBuilder::new()
    ///     .ignore("**/node_modules/**")
    ///     .build();
    /// let sources = GlobFind::find(["**/*.ts", "**/*.js"], &opts).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "async")]
    pub async fn find<I, S>(patterns: I, opts: &GlobOptions) -> Result<Vec<String>, GlobError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        find_with_fs(Arc::new(LocalFs), patterns, opts).await
    }

    /// Finds paths through a caller-supplied filesystem
    #[cfg(feature = "async")]
    pub async fn find_with_fs<F, I, S>(
        fs: Arc<F>,
        patterns: I,
        opts: &GlobOptions,
    ) -> Result<Vec<String>, GlobError>
    where
        F: FileSystem,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        find_with_fs(fs, patterns, opts).await
    }

    /// Performs the search sequentially, without an async runtime
    ///
    /// # Examples
    ///
    /// ```
    /// use globfind::{GlobFind, GlobOptions};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// std::fs::write(dir.path().join("notes.md"), "").unwrap();
    ///
    /// let opts = GlobOptions {
    ///     base_dir: Some(dir.path().to_path_buf()),
    ///     ..GlobOptions::default()
    /// };
    /// let found = GlobFind::blocking(["*.md"], &opts).unwrap();
    /// assert_eq!(found, vec!["notes.md"]);
    /// ```
    pub fn blocking<I, S>(patterns: I, opts: &GlobOptions) -> Result<Vec<String>, GlobError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        find_blocking(patterns, opts)
    }
}

/// Finds paths on the local filesystem matching any of the patterns
///
/// Shorthand for [`GlobFind::find`].
#[cfg(feature = "async")]
pub async fn find<I, S>(patterns: I, opts: &GlobOptions) -> Result<Vec<String>, GlobError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GlobFind::find(patterns, opts).await
}
