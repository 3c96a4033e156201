//! Patch pipeline configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::PatchResult;

/// Configuration for the framework patch pipeline.
///
/// Every field is optional; defaults come from the descriptor constants, so
/// an empty config (or no config file at all) patches the stock Teensy
/// layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PatchConfig {
    /// Framework package name to patch. Default: "framework-arduinoteensy".
    pub package: Option<String>,
    /// Header path relative to the package root, '/'-separated.
    /// Default: "cores/teensy4/usb_desc.h".
    pub header_path: Option<String>,
    /// Cache directory name under the build dir.
    /// Default: "patched-framework-arduinoteensy".
    pub patched_dir_name: Option<String>,
    /// File name of the inspection copy written under the build dir.
    /// Default: "usb_desc_patched.h".
    pub mirror_name: Option<String>,
    /// Always recopy the framework, skipping the version check.
    /// Default: false.
    pub force_refresh: Option<bool>,
}

impl PatchConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> PatchResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Returns the effective framework package name.
    pub fn effective_package(&self) -> &str {
        self.package.as_deref().unwrap_or(constants::FRAMEWORK_PACKAGE)
    }

    /// Returns the effective header path relative to the package root.
    pub fn effective_header_path(&self) -> &str {
        self.header_path.as_deref().unwrap_or(constants::USB_DESC_HEADER)
    }

    /// Returns the effective cache directory name.
    pub fn effective_patched_dir_name(&self) -> &str {
        self.patched_dir_name
            .as_deref()
            .unwrap_or(constants::PATCHED_DIR_NAME)
    }

    /// Returns the effective inspection copy file name.
    pub fn effective_mirror_name(&self) -> &str {
        self.mirror_name.as_deref().unwrap_or(constants::MIRROR_FILE_NAME)
    }

    /// Returns whether the version check is skipped, defaulting to false.
    pub fn effective_force_refresh(&self) -> bool {
        self.force_refresh.unwrap_or(false)
    }
}
