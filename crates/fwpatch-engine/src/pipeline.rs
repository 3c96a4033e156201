//! The linear patch pipeline: cache → locate → patch → write-back →
//! mirror → override.
//!
//! Any fatal condition at any stage aborts the whole invocation; there is
//! no partial-success state.

use std::path::Path;

use fwpatch_core::config::PatchConfig;
use fwpatch_core::constants::{self, SECTION_END_LINES, SECTION_START_LINE};
use fwpatch_core::errors::{PatchError, PatchResult};
use fwpatch_core::traits::PackageResolver;
use regex::Regex;
use tracing::{debug, info};

use crate::cache;
use crate::patcher;
use crate::resolver::OverrideResolver;
use crate::section;

/// Run the full patch pipeline for one build invocation.
///
/// Derives the writable framework copy under `build_dir`, rewrites the USB
/// descriptor macros in the configured header, mirrors the patched header
/// next to the build outputs, and returns a resolver that makes the patched
/// copy visible wherever the build asks for the framework package.
pub fn prepare_framework<R: PackageResolver>(
    platform: R,
    build_dir: &Path,
    config: &PatchConfig,
) -> PatchResult<OverrideResolver<R>> {
    let package = config.effective_package();

    let framework_dir = platform
        .package_dir(package)
        .filter(|dir| dir.is_dir())
        .ok_or_else(|| PatchError::PackageNotFound {
            package: package.to_string(),
        })?;
    // Platforms may report no version at all; an empty string then keys the
    // cache until a real version appears.
    let framework_version = platform.package_version(package).unwrap_or_default();

    let patched_dir = build_dir.join(config.effective_patched_dir_name());
    if config.effective_force_refresh() && patched_dir.exists() {
        std::fs::remove_dir_all(&patched_dir)?;
    }
    cache::ensure_copy(&framework_dir, &patched_dir, &framework_version)?;

    let header_rel = config.effective_header_path();
    let header_path = patched_dir.join(header_rel);
    if !header_path.exists() {
        return Err(PatchError::HeaderMissing {
            path: header_path.display().to_string(),
        });
    }
    let header_name = header_rel.rsplit('/').next().unwrap_or(header_rel);

    let content = std::fs::read_to_string(&header_path)?;

    let start = Regex::new(SECTION_START_LINE).expect("section start pattern");
    let ends: Vec<Regex> = SECTION_END_LINES
        .iter()
        .map(|p| Regex::new(p).expect("section end pattern"))
        .collect();
    let span = section::find_section(&content, header_name, &start, &ends)?;

    let table = constants::replacement_table();
    let outcome = patcher::patch(&content[span.clone()], &table);
    if !outcome.missing.is_empty() {
        let mut names = outcome.missing;
        names.sort();
        return Err(PatchError::MacrosUnmatched {
            file: header_name.to_string(),
            names,
        });
    }

    let patched_content = format!(
        "{}{}{}",
        &content[..span.start],
        outcome.body,
        &content[span.end..]
    );
    if patched_content != content {
        std::fs::write(&header_path, &patched_content)?;
        info!(header = %header_path.display(), "descriptor header patched");
    } else {
        debug!(header = %header_path.display(), "descriptor header already patched");
    }

    // Keep a standalone copy for quick inspection alongside build outputs.
    std::fs::copy(&header_path, build_dir.join(config.effective_mirror_name()))?;

    Ok(OverrideResolver::new(platform, package, patched_dir))
}
