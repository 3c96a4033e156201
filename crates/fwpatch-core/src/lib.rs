//! # fwpatch-core
//!
//! Foundation crate for the fwpatch framework patching engine.
//! Defines errors, config, descriptor constants, the platform resolver trait,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PatchConfig;
pub use errors::{PatchError, PatchResult};
pub use traits::resolver::PackageResolver;
pub use types::collections::{FxHashMap, FxHashSet};
