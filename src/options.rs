// options.rs
use crate::{
    collector::PathForm,
    error::GlobError,
    predicates::{EntryKind, Predicates},
};
use camino::{Utf8Path, Utf8PathBuf};
use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

/// Configuration options for find operations
///
/// Every field has a default matching a plain `find("**/*")` call: files
/// only, unbounded depth, relative results, no ignore rules.
#[derive(Clone, Debug)]
pub struct GlobOptions {
    /// Directory the search starts from and results are relative to
    /// (None for the process current directory)
    pub base_dir: Option<PathBuf>,

    /// Maximum directory depth to traverse (None for unlimited).
    /// Entries directly inside the base directory are at depth 0.
    pub max_depth: Option<usize>,

    /// Ignore patterns; entries starting with `!` force-include matching paths
    pub ignore: Vec<String>,

    /// Whether files without an extension may be collected
    pub match_extensionless: bool,

    /// Whether results are absolute paths instead of base-relative ones
    pub absolute: bool,

    /// Whether to read `.gitignore` from the base directory as extra ignore rules
    pub respect_gitignore: bool,

    /// Which kinds of entries are eligible for collection
    pub entry_kind: EntryKind,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            max_depth: None,
            ignore: Vec::new(),
            match_extensionless: true,
            absolute: false,
            respect_gitignore: false,
            entry_kind: EntryKind::Files,
        }
    }
}

impl GlobOptions {
    /// Resolves the base directory to an absolute UTF-8 path
    ///
    /// The process current directory is read here, once per call, and never
    /// deeper inside the walker. The directory itself is not touched: a
    /// missing base simply yields no results.
    pub fn resolve_base(&self) -> Result<Utf8PathBuf, GlobError> {
        let base = match &self.base_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => std::env::current_dir()?.join(dir),
            None => std::env::current_dir()?,
        };
        Utf8PathBuf::from_path_buf(normalize_lexically(&base)).map_err(GlobError::NonUtf8Path)
    }

    /// Entry filters derived from these options
    pub fn predicates(&self) -> Predicates {
        Predicates {
            entry_kind: self.entry_kind,
            match_extensionless: self.match_extensionless,
        }
    }

    /// Output form for results under the resolved base
    pub fn path_form(&self, base: &Utf8Path) -> PathForm {
        if self.absolute {
            PathForm::Absolute(Arc::new(base.to_path_buf()))
        } else {
            PathForm::Relative
        }
    }
}

/// Folds `.` and `..` components without touching the filesystem
///
/// `..` at the root stays at the root. Symlinks are not resolved, so a
/// missing directory normalizes just like an existing one.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Builder for GlobOptions for fluent configuration
pub struct GlobOptionsBuilder(GlobOptions);

impl Default for GlobOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobOptionsBuilder {
    /// Creates a new builder with default options
    pub fn new() -> Self {
        Self(GlobOptions::default())
    }

    /// Sets the base directory for the search
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.0.base_dir = Some(dir.into());
        self
    }

    /// Sets the maximum directory depth to traverse
    pub fn max_depth(mut self, d: usize) -> Self {
        self.0.max_depth = Some(d);
        self
    }

    /// Appends a single ignore pattern
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.0.ignore.push(pattern.into());
        self
    }

    /// Appends several ignore patterns, keeping their order
    pub fn ignore_all<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets whether extensionless files are eligible
    pub fn match_extensionless(mut self, v: bool) -> Self {
        self.0.match_extensionless = v;
        self
    }

    /// Sets whether results are returned as absolute paths
    pub fn absolute(mut self, v: bool) -> Self {
        self.0.absolute = v;
        self
    }

    /// Sets whether the base directory's `.gitignore` is honored
    pub fn respect_gitignore(mut self, v: bool) -> Self {
        self.0.respect_gitignore = v;
        self
    }

    /// Sets which kinds of entries are collected
    pub fn entry_kind(mut self, kind: EntryKind) -> Self {
        self.0.entry_kind = kind;
        self
    }

    /// Builds the final GlobOptions instance
    pub fn build(self) -> GlobOptions {
        self.0
    }
}
