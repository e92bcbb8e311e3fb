// windows.rs
use std::borrow::Cow;

/// Normalizes a path string to `/` separators
///
/// Glob patterns are always written with `/`, so paths coming from the host
/// are converted before matching.
#[cfg(windows)]
pub fn to_posix(p: &str) -> Cow<'_, str> {
    if p.contains('\\') {
        Cow::Owned(p.replace('\\', "/"))
    } else {
        Cow::Borrowed(p)
    }
}

/// No-op implementation for non-Windows platforms
#[cfg(not(windows))]
pub fn to_posix(p: &str) -> Cow<'_, str> {
    Cow::Borrowed(p)
}
