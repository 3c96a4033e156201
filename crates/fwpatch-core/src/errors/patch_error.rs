//! Patch pipeline errors.
//! One error enum covering every fatal condition; nothing is retried,
//! degraded, or logged-and-continued.

/// Errors that abort a patch invocation.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    // Package resolution
    #[error("Cannot find framework package '{package}'. Is it installed?")]
    PackageNotFound { package: String },

    // Section location
    #[error("Section '{marker}' not found in {file}")]
    SectionNotFound { marker: String, file: String },

    #[error("Section '{marker}' matched {count} lines in {file}; expected exactly one")]
    SectionAmbiguous {
        marker: String,
        count: usize,
        file: String,
    },

    // Macro patching
    #[error("Failed to patch {} for macros: {}", .file, .names.join(", "))]
    MacrosUnmatched { file: String, names: Vec<String> },

    // Post-condition after cache ensure
    #[error("Patched header not found at {path}")]
    HeaderMissing { path: String },

    // IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // TOML
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PatchError {
    /// Stable error code for external reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PackageNotFound { .. } => "PACKAGE_NOT_FOUND",
            Self::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            Self::SectionAmbiguous { .. } => "SECTION_AMBIGUOUS",
            Self::MacrosUnmatched { .. } => "MACROS_UNMATCHED",
            Self::HeaderMissing { .. } => "HEADER_MISSING",
            Self::Io(_) => "IO_ERROR",
            Self::ConfigParse(_) => "CONFIG_PARSE_ERROR",
        }
    }
}

pub type PatchResult<T> = Result<T, PatchError>;
