//! # fwpatch-engine
//!
//! Prepares a vendored hardware-framework tree for a build: derives a
//! writable copy of the read-only framework package, rewrites the USB
//! descriptor macros inside one conditional-compilation section of one
//! header, and hands back a resolver that makes the patched copy visible
//! wherever the build asks for the original package.
//!
//! The pipeline is linear and fail-fast; any violated assumption aborts the
//! whole invocation. See [`pipeline::prepare_framework`].

pub mod cache;
pub mod patcher;
pub mod pipeline;
pub mod resolver;
pub mod section;

pub use cache::{ensure_copy, CacheOutcome};
pub use pipeline::prepare_framework;
pub use resolver::OverrideResolver;
