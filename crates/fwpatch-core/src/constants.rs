//! Fixed descriptor data for the Teensy USB MIDI patch.
//!
//! The replacement lines are byte-exact, indentation and tabs included; they
//! land in the header verbatim.

use crate::types::collections::FxHashMap;

/// Framework package name resolved through the build platform.
pub const FRAMEWORK_PACKAGE: &str = "framework-arduinoteensy";

/// Directory under the build dir holding the writable framework copy.
pub const PATCHED_DIR_NAME: &str = "patched-framework-arduinoteensy";

/// Marker file recording which package version the copy was made from.
pub const VERSION_MARKER_FILE: &str = ".framework_version";

/// Header to patch, relative to the framework package root.
pub const USB_DESC_HEADER: &str = "cores/teensy4/usb_desc.h";

/// Inspection copy written next to the build outputs.
pub const MIRROR_FILE_NAME: &str = "usb_desc_patched.h";

/// Line pattern opening the USB descriptor section to rewrite.
pub const SECTION_START_LINE: &str = r"^#elif defined\(USB_MIDI16_AUDIO_SERIAL\)$";

/// Line patterns bounding the section from below. The first matching line
/// after the start line ends the section.
pub const SECTION_END_LINES: &[&str] = &[r"^#elif ", r"^#endif"];

/// Macro replacements applied inside the section: name → complete line.
pub const REPLACEMENTS: &[(&str, &str)] = &[
    (
        "MANUFACTURER_NAME",
        "  #define MANUFACTURER_NAME\t{'m','i','n','i','c','h','o','r','d'}",
    ),
    ("MANUFACTURER_NAME_LEN", "  #define MANUFACTURER_NAME_LEN\t9"),
    (
        "PRODUCT_NAME",
        "  #define PRODUCT_NAME\t\t{'m','i','n','i','c','h','o','r','d'}",
    ),
    ("PRODUCT_NAME_LEN", "  #define PRODUCT_NAME_LEN\t9"),
    ("MIDI_NUM_CABLES", "  #define MIDI_NUM_CABLES       2"),
];

/// Build the replacement table for the descriptor patch.
pub fn replacement_table() -> FxHashMap<String, String> {
    REPLACEMENTS
        .iter()
        .map(|(name, line)| ((*name).to_string(), (*line).to_string()))
        .collect()
}
