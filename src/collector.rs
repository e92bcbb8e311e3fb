// collector.rs
//! Accumulation of matched paths.
//!
//! Each walk branch owns its own [`Collector`]; branches are merged into their
//! parent after being joined, so no locking is needed.

use camino::Utf8PathBuf;
use std::sync::Arc;

/// Form of the returned paths, fixed once per call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathForm {
    /// Relative to the base directory, `/`-separated
    Relative,
    /// Base directory joined with the relative path
    Absolute(Arc<Utf8PathBuf>),
}

impl PathForm {
    /// Renders a base-relative POSIX path in this form
    pub fn render(&self, relative: &str) -> String {
        match self {
            PathForm::Relative => relative.to_string(),
            PathForm::Absolute(base) => base.join(relative).into_string(),
        }
    }
}

/// Matched paths gathered by one walk branch
#[derive(Clone, Debug)]
pub struct Collector {
    form: PathForm,
    matches: Vec<String>,
}

impl Collector {
    /// Creates an empty collector rendering paths in `form`
    pub fn new(form: PathForm) -> Self {
        Self {
            form,
            matches: Vec::new(),
        }
    }

    /// Records a base-relative POSIX path
    pub fn push(&mut self, relative: &str) {
        self.matches.push(self.form.render(relative));
    }

    /// Appends everything a child branch found
    pub fn merge(&mut self, other: Collector) {
        self.matches.extend(other.matches);
    }

    /// Number of paths collected so far
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Consumes the collector, returning the rendered paths
    pub fn into_vec(self) -> Vec<String> {
        self.matches
    }
}

/// Joins a directory's relative path with an entry name
pub fn join_relative(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
