//! Path override — resolves one package name to the patched copy.

use std::path::{Path, PathBuf};

use fwpatch_core::traits::PackageResolver;

/// Decorator over a [`PackageResolver`] that redirects a single package
/// name to an override directory and forwards everything else to the
/// wrapped resolver.
///
/// This is the only redirection mechanism: no files outside the cache
/// directory are modified and no filesystem aliasing is involved. The
/// wrapper lives for one build invocation and is dropped with it.
#[derive(Debug)]
pub struct OverrideResolver<R> {
    inner: R,
    target: String,
    override_dir: PathBuf,
}

impl<R: PackageResolver> OverrideResolver<R> {
    /// Redirect lookups of `target` to `override_dir`.
    pub fn new(inner: R, target: impl Into<String>, override_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            target: target.into(),
            override_dir: override_dir.into(),
        }
    }

    /// The directory lookups of the target name resolve to.
    pub fn override_dir(&self) -> &Path {
        &self.override_dir
    }

    /// Unwrap the original resolver.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: PackageResolver> PackageResolver for OverrideResolver<R> {
    fn package_dir(&self, name: &str) -> Option<PathBuf> {
        if name == self.target {
            Some(self.override_dir.clone())
        } else {
            self.inner.package_dir(name)
        }
    }

    fn package_version(&self, name: &str) -> Option<String> {
        self.inner.package_version(name)
    }
}
