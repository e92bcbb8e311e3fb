// patterns/mod.rs
pub mod compile;
pub mod ignore;

pub use compile::CompiledMatcher;
pub use ignore::IgnoreSet;

/// Compiled patterns for matching base-relative paths
///
/// A path matches the set when any single pattern matches it. Patterns are
/// compiled per call and never cached.
#[derive(Clone, Debug, Default)]
pub struct Patterns {
    matchers: Vec<CompiledMatcher>,
}

impl Patterns {
    /// Compiles multiple patterns into a Patterns instance
    ///
    /// Compilation cannot fail; see [`CompiledMatcher::new`].
    pub fn compile_many<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|p| CompiledMatcher::new(p.as_ref()))
            .collect();
        Self { matchers }
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// True when no patterns were supplied; such a set matches nothing
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Checks if a path matches any of the compiled patterns
    pub fn is_match(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_pattern_matches() {
        let pats = Patterns::compile_many(["*.rs", "**/*.toml"]);
        assert_eq!(pats.len(), 2);
        assert!(pats.is_match("lib.rs"));
        assert!(pats.is_match("crates/a/Cargo.toml"));
        assert!(!pats.is_match("src/lib.rs"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let pats = Patterns::compile_many(Vec::<&str>::new());
        assert!(pats.is_empty());
        assert!(!pats.is_match("a.txt"));
    }
}
