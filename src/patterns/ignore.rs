// patterns/ignore.rs
//! Ignore rules built from explicit patterns and a base-directory `.gitignore`.

use super::compile::CompiledMatcher;

/// Name of the ignore file read from the base directory
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Extracts ignore patterns from `.gitignore` text
///
/// Lines are trimmed; blank lines and `#` comments are dropped. No other
/// gitignore syntax is interpreted: anchoring, trailing `/` and escapes are
/// passed through as ordinary glob text.
pub fn parse_gitignore(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Deny and override matchers deciding whether a path is ignored
///
/// Overrides come from patterns prefixed with `!` and always win: a path
/// matched by any override is never ignored, whatever the deny list says and
/// wherever the override appeared in the input.
#[derive(Clone, Debug, Default)]
pub struct IgnoreSet {
    deny: Vec<CompiledMatcher>,
    allow: Vec<CompiledMatcher>,
}

impl IgnoreSet {
    /// Builds the rule set from explicit patterns followed by `.gitignore` content
    pub fn build<I, S>(explicit: I, gitignore: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for pattern in explicit {
            set.add(pattern.as_ref());
        }
        if let Some(content) = gitignore {
            for pattern in parse_gitignore(content) {
                set.add(&pattern);
            }
        }
        set
    }

    fn add(&mut self, pattern: &str) {
        match pattern.strip_prefix('!') {
            Some(negated) => self.allow.push(CompiledMatcher::new(negated)),
            None => self.deny.push(CompiledMatcher::new(pattern)),
        }
    }

    /// True when there are no rules at all
    pub fn is_empty(&self) -> bool {
        self.deny.is_empty() && self.allow.is_empty()
    }

    /// Decides whether a base-relative POSIX path is ignored
    pub fn is_ignored(&self, path: &str) -> bool {
        if self.allow.iter().any(|m| m.is_match(path)) {
            return false;
        }
        self.deny.iter().any(|m| m.is_match(path))
    }
}
