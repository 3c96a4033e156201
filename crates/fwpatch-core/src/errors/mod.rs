//! Error types for the patch pipeline.

pub mod patch_error;

pub use patch_error::{PatchError, PatchResult};
