// sync.rs
use crate::{
    collector::Collector,
    error::GlobError,
    patterns::{ignore::GITIGNORE_FILE, IgnoreSet, Patterns},
    predicates::Selector,
    windows::to_posix,
    GlobOptions,
};
use camino::Utf8Path;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Base-relative, `/`-separated form of a walked path
fn relative_posix(path: &Path, base: &Utf8Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?.to_str()?;
    Some(to_posix(rel).into_owned())
}

fn load_gitignore(base: &Utf8Path) -> Option<String> {
    let path = base.join(GITIGNORE_FILE);
    match std::fs::read_to_string(&path) {
        Ok(content) => {
            debug!("Loaded {}", path);
            Some(content)
        }
        Err(e) => {
            debug!("No usable {}: {}", path, e);
            None
        }
    }
}

/// Finds matching paths without an async runtime
///
/// Same selection rules as the concurrent finder, walked sequentially with
/// WalkDir. Ignored directories are pruned before they are read, and
/// unreadable entries are logged and skipped.
///
/// # Errors
///
/// Fails only when the base directory cannot be resolved.
pub fn find_blocking<I, S>(patterns: I, opts: &GlobOptions) -> Result<Vec<String>, GlobError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let base = opts.resolve_base()?;
    let gitignore = if opts.respect_gitignore {
        load_gitignore(&base)
    } else {
        None
    };
    let selector = Selector {
        patterns: Patterns::compile_many(patterns),
        ignore: IgnoreSet::build(&opts.ignore, gitignore.as_deref()),
        predicates: opts.predicates(),
    };
    let mut found = Collector::new(opts.path_form(&base));

    // WalkDir counts the base itself as depth 0, so its children sit at 1
    let max_depth = opts.max_depth.map_or(usize::MAX, |d| d.saturating_add(1));

    let walker = WalkDir::new(&base)
        .follow_links(false)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|dent| {
            if dent.depth() == 0 || !dent.file_type().is_dir() {
                return true;
            }
            match relative_posix(dent.path(), &base) {
                Some(rel) => selector.decide(&rel, true).descend,
                None => false,
            }
        });

    for entry in walker {
        let dent = match entry {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let Some(rel) = relative_posix(dent.path(), &base) else {
            warn!("Skipping non-UTF-8 path {}", dent.path().display());
            continue;
        };

        if selector.decide(&rel, dent.file_type().is_dir()).collect {
            found.push(&rel);
        }
    }

    debug!("Found {} match(es) under {}", found.len(), base);
    Ok(found.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::EntryKind;
    use crate::GlobOptionsBuilder;
    use std::collections::BTreeSet;
    use std::fs;

    fn tree(files: &[&str]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for f in files {
            let path = tmp.path().join(f);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        tmp
    }

    fn run(patterns: &[&str], opts: GlobOptions) -> BTreeSet<String> {
        find_blocking(patterns, &opts).unwrap().into_iter().collect()
    }

    #[test]
    fn test_blocking_nested() {
        let tmp = tree(&["a.ts", "b.js", "sub/c.ts"]);
        let opts = GlobOptionsBuilder::new().base_dir(tmp.path()).build();
        let got = run(&["**/*.ts"], opts);
        assert_eq!(got, BTreeSet::from(["a.ts".to_string(), "sub/c.ts".to_string()]));
    }

    #[test]
    fn test_blocking_prunes_ignored_dirs() {
        let tmp = tree(&["node_modules/pkg/index.js", "src/index.js"]);
        let opts = GlobOptionsBuilder::new()
            .base_dir(tmp.path())
            .ignore("**/node_modules/**")
            .build();
        let got = run(&["**/*.js"], opts);
        assert_eq!(got, BTreeSet::from(["src/index.js".to_string()]));
    }

    #[test]
    fn test_blocking_max_depth_zero() {
        let tmp = tree(&["a.ts", "sub/c.ts"]);
        let opts = GlobOptionsBuilder::new()
            .base_dir(tmp.path())
            .max_depth(0)
            .entry_kind(EntryKind::All)
            .build();
        let got = run(&["**/*"], opts);
        assert_eq!(got, BTreeSet::from(["a.ts".to_string(), "sub".to_string()]));
    }

    #[test]
    fn test_blocking_gitignore() {
        let tmp = tree(&["app.log", "keep.log", "main.rs"]);
        fs::write(tmp.path().join(".gitignore"), "*.log\n!keep.log\n").unwrap();
        let opts = GlobOptionsBuilder::new()
            .base_dir(tmp.path())
            .respect_gitignore(true)
            .match_extensionless(false)
            .build();
        let got = run(&["*"], opts);
        assert_eq!(
            got,
            BTreeSet::from(["keep.log".to_string(), "main.rs".to_string()])
        );
    }

    #[test]
    fn test_blocking_missing_base() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = GlobOptionsBuilder::new()
            .base_dir(tmp.path().join("missing"))
            .build();
        assert!(run(&["**/*"], opts).is_empty());
    }

    #[test]
    fn test_blocking_folders_only() {
        let tmp = tree(&["src/lib.rs", "src/bin/main.rs", "README.md"]);
        let opts = GlobOptionsBuilder::new()
            .base_dir(tmp.path())
            .entry_kind(EntryKind::Folders)
            .build();
        let got = run(&["**/*"], opts);
        assert_eq!(got, BTreeSet::from(["src".to_string(), "src/bin".to_string()]));
    }

    #[test]
    fn test_blocking_extensionless_filter() {
        let tmp = tree(&["Makefile", "main.c", "sub/LICENSE"]);

        let opts = GlobOptionsBuilder::new().base_dir(tmp.path()).build();
        assert_eq!(
            run(&["**/*"], opts),
            BTreeSet::from([
                "Makefile".to_string(),
                "main.c".to_string(),
                "sub/LICENSE".to_string()
            ])
        );

        let opts = GlobOptionsBuilder::new()
            .base_dir(tmp.path())
            .match_extensionless(false)
            .build();
        assert_eq!(run(&["**/*"], opts), BTreeSet::from(["main.c".to_string()]));
    }

    #[cfg(unix)]
    #[test]
    fn test_blocking_survives_unreadable_subdirectory() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tree(&["pub/a.ts", "pub/nested/b.ts", "secret/c.ts", "e.ts"]);
        let secret = tmp.path().join("secret");
        fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users read through mode 000; only then does the subtree show up
        let enforced = fs::read_dir(&secret).is_err();

        let opts = GlobOptionsBuilder::new().base_dir(tmp.path()).build();
        let got = find_blocking(["**/*.ts"], &opts);
        fs::set_permissions(&secret, fs::Permissions::from_mode(0o755)).unwrap();

        let got: BTreeSet<String> = got.unwrap().into_iter().collect();
        for expected in ["pub/a.ts", "pub/nested/b.ts", "e.ts"] {
            assert!(got.contains(expected), "missing {expected}");
        }
        if enforced {
            assert_eq!(got.len(), 3);
        }
    }
}
