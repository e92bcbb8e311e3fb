// patterns/compile.rs
use crate::error::GlobError;
use regex::Regex;

/// Token types for glob translation
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(String),
    /// `?`
    Question,
    /// `**/`
    Globstar,
    /// `*`
    Star,
}

/// Splits a glob into wildcard tokens and runs of literal text
///
/// `**/` is recognized before `*`, so a globstar segment is never
/// re-read as two single stars followed by a separator.
fn tokenize(s: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut literal = String::new();
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        let token = if rest.starts_with("**/") {
            rest = &rest[3..];
            Some(Token::Globstar)
        } else if c == '*' {
            rest = &rest[1..];
            Some(Token::Star)
        } else if c == '?' {
            rest = &rest[1..];
            Some(Token::Question)
        } else {
            literal.push(c);
            rest = &rest[c.len_utf8()..];
            None
        };

        if let Some(token) = token {
            if !literal.is_empty() {
                out.push(Token::Literal(std::mem::take(&mut literal)));
            }
            out.push(token);
        }
    }

    if !literal.is_empty() {
        out.push(Token::Literal(literal));
    }
    out
}

/// Translates a glob pattern into an anchored regex string
///
/// Supported syntax is deliberately small: `?` is one non-separator
/// character, `**/` is zero or more whole path segments, `*` is zero or more
/// non-separator characters. Everything else matches itself. A bare `**`
/// without a trailing separator is just two stars.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut output = String::from("^");

    for token in tokenize(pattern) {
        match token {
            Token::Literal(text) => output.push_str(&regex::escape(&text)),
            Token::Question => output.push_str("[^/]"),
            Token::Globstar => output.push_str("(?:.*/)?"),
            Token::Star => output.push_str("[^/]*"),
        }
    }

    output.push('$');
    output
}

#[derive(Clone, Debug)]
enum Inner {
    Regex(Regex),
    Literal(String),
}

/// An immutable matcher compiled from one glob pattern
///
/// Matches a whole POSIX-style relative path, never a prefix or suffix of it.
#[derive(Clone, Debug)]
pub struct CompiledMatcher {
    pattern: String,
    inner: Inner,
}

impl CompiledMatcher {
    /// Compiles a glob pattern
    ///
    /// Never fails: if the translated regex is rejected (for example because
    /// it exceeds the engine's size limit) the matcher falls back to exact
    /// string comparison against the pattern text.
    pub fn new(pattern: &str) -> Self {
        match Self::try_new(pattern) {
            Ok(matcher) => matcher,
            Err(err) => {
                tracing::debug!("glob '{}' falls back to literal matching: {}", pattern, err);
                Self {
                    pattern: pattern.to_string(),
                    inner: Inner::Literal(pattern.to_string()),
                }
            }
        }
    }

    /// Compiles a glob pattern, reporting regex construction failures
    pub fn try_new(pattern: &str) -> Result<Self, GlobError> {
        let re = Regex::new(&glob_to_regex(pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            inner: Inner::Regex(re),
        })
    }

    /// The glob text this matcher was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Checks whether the whole path matches
    pub fn is_match(&self, path: &str) -> bool {
        match &self.inner {
            Inner::Regex(re) => re.is_match(path),
            Inner::Literal(text) => text == path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        CompiledMatcher::new(pattern).is_match(path)
    }

    #[test]
    fn test_translation() {
        assert_eq!(glob_to_regex("*.txt"), "^[^/]*\\.txt$");
        assert_eq!(glob_to_regex("file?.rs"), "^file[^/]\\.rs$");
        assert_eq!(glob_to_regex("**/*.ts"), "^(?:.*/)?[^/]*\\.ts$");
        assert_eq!(glob_to_regex(""), "^$");
    }

    #[test]
    fn test_star_stays_in_segment() {
        assert!(matches("*.ts", "a.ts"));
        assert!(matches("*.ts", ".ts"));
        assert!(!matches("*.ts", "sub/a.ts"));
        assert!(matches("src/*", "src/lib.rs"));
        assert!(!matches("src/*", "src/a/lib.rs"));
    }

    #[test]
    fn test_question_mark() {
        assert!(matches("file?.txt", "file1.txt"));
        assert!(!matches("file?.txt", "file.txt"));
        assert!(!matches("file?.txt", "file12.txt"));
        assert!(!matches("a?b", "a/b"));
    }

    #[test]
    fn test_globstar_zero_or_more_segments() {
        assert!(matches("**/foo", "foo"));
        assert!(matches("**/foo", "a/foo"));
        assert!(matches("**/foo", "a/b/c/foo"));
        assert!(!matches("**/foo", "afoo"));
        assert!(matches("a/**/b", "a/b"));
        assert!(matches("a/**/b", "a/x/y/b"));
    }

    #[test]
    fn test_globstar_directory_contents() {
        assert!(matches("**/node_modules/**", "node_modules/pkg"));
        assert!(matches("**/node_modules/**", "a/node_modules/pkg"));
        assert!(!matches("**/node_modules/**", "node_modules/pkg/index.js"));
        assert!(!matches("**/node_modules/**", "node_modules"));
    }

    #[test]
    fn test_bare_trailing_globstar_is_single_segment() {
        assert_eq!(glob_to_regex("src/**"), "^src/[^/]*[^/]*$");
        assert!(matches("src/**", "src/lib.rs"));
        assert!(!matches("src/**", "src/a/lib.rs"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert!(matches("a.b", "a.b"));
        assert!(!matches("a.b", "axb"));
        assert!(matches("(x)+[y]{z}|^$", "(x)+[y]{z}|^$"));
        assert!(matches("c\\d", "c\\d"));
        assert!(!matches("[ab].txt", "a.txt"));
    }

    #[test]
    fn test_full_string_anchoring() {
        assert!(!matches("a.ts", "xa.ts"));
        assert!(!matches("a.ts", "a.tsx"));
        assert!(!matches("sub", "sub/a.ts"));
    }

    #[test]
    fn test_empty_pattern_matches_only_empty_string() {
        assert!(matches("", ""));
        assert!(!matches("", "a"));
        assert!(!matches("", "a/b.txt"));
    }

    #[test]
    fn test_unicode_literals() {
        assert!(matches("doc/résumé?.md", "doc/résumé1.md"));
        assert!(matches("?.txt", "é.txt"));
    }

    #[test]
    fn test_pattern_accessor() {
        assert_eq!(CompiledMatcher::new("**/*.rs").pattern(), "**/*.rs");
    }
}
