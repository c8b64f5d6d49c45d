use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use tracing::warn;

/// Ignore patterns match substring-style: each entry is wrapped in `*`
/// wildcards before compilation, so `*.env` excludes any path containing
/// a `.env` segment anywhere in the tree.
pub(crate) fn build_ignore_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(&format!("*{pattern}*")) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => warn!(pattern = %pattern, "skipping unparseable ignore pattern: {e}"),
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Expand COPY/ADD source tokens against the build context at `base`.
///
/// Regular files are kept verbatim, `http*` sources are remote fetches
/// and skipped, and anything else is treated as a directory whose
/// descendants (files and directories, the root itself excluded) are
/// enumerated, filtered against the ignore patterns, and sorted.
pub(crate) fn expand_sources(
    sources: &[String],
    base: &Path,
    ignore_patterns: &[String],
) -> Vec<String> {
    let ignore = build_ignore_set(ignore_patterns);
    let mut out = Vec::new();

    for source in sources {
        let candidate = base.join(source);
        if candidate.is_file() {
            out.push(source.clone());
            continue;
        }
        if source.starts_with("http") {
            continue;
        }
        collect_dir(&candidate, source.trim_end_matches('/'), &ignore, &mut out);
    }

    out.sort();
    out
}

fn collect_dir(dir: &Path, prefix: &str, ignore: &GlobSet, out: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let rel = format!("{prefix}/{name}");
        if !ignore.is_match(&rel) {
            out.push(rel.clone());
        }
        // An ignored directory may still contain non-ignored entries;
        // each descendant is matched on its own.
        if path.is_dir() {
            collect_dir(&path, &rel, ignore, out);
        }
    }
}
