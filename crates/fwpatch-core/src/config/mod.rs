//! Configuration types.

pub mod patch_config;

pub use patch_config::PatchConfig;
