// async_glob.rs
use crate::{
    collector::{join_relative, Collector, PathForm},
    error::GlobError,
    fs::FileSystem,
    patterns::{ignore::GITIGNORE_FILE, IgnoreSet, Patterns},
    predicates::Selector,
    GlobOptions,
};
use camino::{Utf8Path, Utf8PathBuf};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Read-only state shared by every branch of one walk
struct WalkContext<F> {
    fs: Arc<F>,
    base: Utf8PathBuf,
    selector: Selector,
    max_depth: Option<usize>,
    form: PathForm,
}

impl<F> WalkContext<F> {
    /// A directory at `depth` is only read while `depth <= max_depth`
    fn may_visit(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }

    /// Subdirectories found at `depth` are only walked while `depth < max_depth`
    fn may_descend(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    fn absolute(&self, relative: &str) -> Utf8PathBuf {
        if relative.is_empty() {
            self.base.clone()
        } else {
            self.base.join(relative)
        }
    }
}

/// Loads ignore patterns from the base directory's `.gitignore`
///
/// A missing or unreadable file contributes nothing.
async fn load_gitignore<F: FileSystem>(fs: &F, base: &Utf8Path) -> Option<String> {
    let path = base.join(GITIGNORE_FILE);
    match fs.read_to_string(&path).await {
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

/// Walks one directory, given by its base-relative path, and everything below it
///
/// Each subdirectory gets its own task; the returned future resolves only
/// after all of them (and their descendants) have finished. Directories that
/// cannot be read are logged and contribute nothing.
fn walk<F: FileSystem>(
    ctx: Arc<WalkContext<F>>,
    dir: String,
    depth: usize,
) -> BoxFuture<'static, Collector> {
    async move {
        let mut found = Collector::new(ctx.form.clone());
        if !ctx.may_visit(depth) {
            return found;
        }

        let abs = ctx.absolute(&dir);
        let entries = match ctx.fs.read_dir(&abs).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", abs, e);
                return found;
            }
        };
        debug!("Scanning {} ({} entries, depth {})", abs, entries.len(), depth);

        let mut branches = JoinSet::new();
        for entry in entries {
            let relative = join_relative(&dir, &entry.name);
            let decision = ctx.selector.decide(&relative, entry.is_dir);

            if decision.collect {
                found.push(&relative);
            }
            if decision.descend && ctx.may_descend(depth) {
                branches.spawn(walk(ctx.clone(), relative, depth + 1));
            }
        }

        while let Some(joined) = branches.join_next().await {
            match joined {
                Ok(sub) => found.merge(sub),
                Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                Err(e) => warn!("Walk branch under {} was cancelled: {}", abs, e),
            }
        }

        found
    }
    .boxed()
}

/// Finds paths under the base directory matching any of the patterns
///
/// Sibling subdirectories are walked concurrently on the current tokio
/// runtime. The set of results is deterministic for an unchanged tree; their
/// order is not.
///
/// # Errors
///
/// Fails only when the base directory cannot be resolved (the current
/// directory is unavailable or the path is not UTF-8). Filesystem problems
/// met during the walk are logged and skipped.
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
    let base = opts.resolve_base()?;
    let patterns = Patterns::compile_many(patterns);

    let gitignore = if opts.respect_gitignore {
        load_gitignore(fs.as_ref(), &base).await
    } else {
        None
    };
    let ignore = IgnoreSet::build(&opts.ignore, gitignore.as_deref());

    debug!(
        "Finding {} pattern(s) under {} (max depth {:?})",
        patterns.len(),
        base,
        opts.max_depth
    );

    let ctx = Arc::new(WalkContext {
        fs,
        form: opts.path_form(&base),
        base,
        selector: Selector {
            patterns,
            ignore,
            predicates: opts.predicates(),
        },
        max_depth: opts.max_depth,
    });

    let found = walk(ctx, String::new(), 0).await;
    debug!("Found {} match(es)", found.len());
    Ok(found.into_vec())
}
