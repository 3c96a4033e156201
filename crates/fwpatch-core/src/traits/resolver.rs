//! `PackageResolver` trait — the seam to the build platform's package
//! registry.

use std::path::PathBuf;

/// Resolves named packages through the build platform.
///
/// A package either resolves to an installed directory or does not, and may
/// carry a version string. Both lookups are read-only from the engine's
/// perspective.
pub trait PackageResolver {
    /// Directory the named package is installed at, if any.
    fn package_dir(&self, name: &str) -> Option<PathBuf>;

    /// Version string recorded for the named package, if any.
    fn package_version(&self, name: &str) -> Option<String>;
}
