// predicates.rs
use crate::patterns::{IgnoreSet, Patterns};
use camino::Utf8Path;

/// Kinds of entries eligible for collection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular files (and anything else that is not a directory)
    #[default]
    Files,
    /// Directories
    Folders,
    /// Both files and directories
    All,
}

impl EntryKind {
    /// Whether directories may be collected
    pub fn includes_folders(self) -> bool {
        matches!(self, EntryKind::Folders | EntryKind::All)
    }

    /// Whether files may be collected
    pub fn includes_files(self) -> bool {
        matches!(self, EntryKind::Files | EntryKind::All)
    }
}

/// Entry-level filters applied before pattern matching
#[derive(Clone, Copy, Debug)]
pub struct Predicates {
    /// Required entry kind
    pub entry_kind: EntryKind,

    /// Whether files without an extension are eligible
    pub match_extensionless: bool,
}

impl Default for Predicates {
    fn default() -> Self {
        Self {
            entry_kind: EntryKind::Files,
            match_extensionless: true,
        }
    }
}

impl Predicates {
    /// Checks whether an entry is eligible for collection
    ///
    /// Only the entry kind and the file name are considered; glob patterns
    /// are checked separately.
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        if is_dir {
            return self.entry_kind.includes_folders();
        }
        if !self.entry_kind.includes_files() {
            return false;
        }
        self.match_extensionless || Utf8Path::new(path).extension().is_some()
    }
}

/// Outcome of inspecting a single directory entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Add the entry to the results
    pub collect: bool,
    /// Walk into the entry (directories only, depth permitting)
    pub descend: bool,
}

/// Everything needed to judge an entry, shared read-only by all walk branches
#[derive(Clone, Debug)]
pub struct Selector {
    pub patterns: Patterns,
    pub ignore: IgnoreSet,
    pub predicates: Predicates,
}

impl Selector {
    /// Judges one entry by its base-relative POSIX path
    ///
    /// Ignore rules come first: an ignored entry is neither collected nor
    /// descended into.
    pub fn decide(&self, path: &str, is_dir: bool) -> Decision {
        if self.ignore.is_ignored(path) {
            return Decision {
                collect: false,
                descend: false,
            };
        }
        Decision {
            collect: self.predicates.matches(path, is_dir) && self.patterns.is_match(path),
            descend: is_dir,
        }
    }
}
