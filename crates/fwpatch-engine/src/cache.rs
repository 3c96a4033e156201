//! Framework copy cache — a writable duplicate of the read-only package
//! tree, keyed by the platform-reported version.

use std::path::Path;

use fwpatch_core::constants::VERSION_MARKER_FILE;
use fwpatch_core::errors::PatchResult;
use tracing::{debug, info};

/// Whether [`ensure_copy`] reused the existing copy or rebuilt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Existing copy matched the current version; nothing was touched.
    Hit,
    /// The copy was (re)created and the marker rewritten.
    Refreshed,
}

/// Ensure `dest` holds a writable copy of `source` made from
/// `current_version`.
///
/// Cache hit iff `dest` exists and its version marker equals
/// `current_version`; otherwise the whole tree is torn down and recreated.
/// Any filesystem failure is fatal.
pub fn ensure_copy(
    source: &Path,
    dest: &Path,
    current_version: &str,
) -> PatchResult<CacheOutcome> {
    if dest.is_dir() && stored_version(dest) == current_version {
        debug!(
            dest = %dest.display(),
            version = current_version,
            "framework copy up to date"
        );
        return Ok(CacheOutcome::Hit);
    }

    if dest.exists() {
        std::fs::remove_dir_all(dest)?;
    }
    std::fs::create_dir_all(dest)?;
    copy_tree(source, dest)?;
    std::fs::write(dest.join(VERSION_MARKER_FILE), current_version)?;

    info!(
        source = %source.display(),
        dest = %dest.display(),
        version = current_version,
        "framework copy refreshed"
    );
    Ok(CacheOutcome::Refreshed)
}

/// Read the stored version marker. Absent or unreadable markers read as "".
fn stored_version(dest: &Path) -> String {
    std::fs::read_to_string(dest.join(VERSION_MARKER_FILE))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Copy every file and directory under `source` into `dest`.
///
/// The walk runs with standard filters disabled: the downstream build reads
/// arbitrary files out of the package tree, so gitignore semantics and
/// hidden-file filtering must not apply.
fn copy_tree(source: &Path, dest: &Path) -> PatchResult<()> {
    let walker = ignore::WalkBuilder::new(source)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let msg = err.to_string();
                let io = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other(msg));
                return Err(io.into());
            }
        };

        let rel = match entry.path().strip_prefix(source) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue, // the root itself
        };
        let target = dest.join(rel);

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
