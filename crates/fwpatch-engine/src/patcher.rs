//! Macro patcher — rewrites `#define` lines inside a section body.

use fwpatch_core::types::collections::FxHashMap;
use regex::{NoExpand, Regex};

/// Replacement table: macro name → complete replacement line.
pub type ReplacementTable = FxHashMap<String, String>;

/// Result of a patch pass: the rewritten body plus the table entries that
/// never matched a definition line.
#[derive(Debug)]
pub struct PatchOutcome {
    pub body: String,
    pub missing: Vec<String>,
}

/// Rewrite every `#define <name> …` line in `body` with its table entry.
///
/// Matching lines are replaced wholesale, original indentation and value
/// included, which makes a second pass over already-patched text a no-op.
/// Names with no matching line are reported in `missing`; treating a
/// non-empty `missing` as fatal is the caller's job. Bytes outside matched
/// lines are never touched.
pub fn patch(body: &str, table: &ReplacementTable) -> PatchOutcome {
    let mut patched = body.to_string();
    let mut missing = Vec::new();

    for (name, replacement) in table {
        let re = define_line(name);
        if re.is_match(&patched) {
            patched = re.replace_all(&patched, NoExpand(replacement)).into_owned();
        } else {
            missing.push(name.clone());
        }
    }

    PatchOutcome { body: patched, missing }
}

/// Matcher for a whole `#define` line: optional indentation, the directive,
/// the exact macro name, then anything to end of line.
fn define_line(name: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^[ \t]*#define[ \t]+{}[ \t]+.*$",
        regex::escape(name)
    ))
    .expect("define-line pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> ReplacementTable {
        entries
            .iter()
            .map(|(n, l)| ((*n).to_string(), (*l).to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_whole_line_including_indentation() {
        let body = "  #define MIDI_NUM_CABLES       1\n";
        let t = table(&[("MIDI_NUM_CABLES", "  #define MIDI_NUM_CABLES       2")]);

        let out = patch(body, &t);

        assert_eq!(out.body, "  #define MIDI_NUM_CABLES       2\n");
        assert!(out.missing.is_empty());
    }

    #[test]
    fn test_missing_names_reported() {
        let body = "  #define A 1\n  #define B 2\n";
        let t = table(&[
            ("A", "  #define A 9"),
            ("B", "  #define B 9"),
            ("C", "  #define C 9"),
        ]);

        let out = patch(body, &t);

        assert_eq!(out.missing, vec!["C".to_string()]);
        assert!(out.body.contains("#define A 9"));
        assert!(out.body.contains("#define B 9"));
    }

    #[test]
    fn test_idempotent() {
        let body = "  #define A 1\nkeep this\n  #define B 2\n";
        let t = table(&[("A", "#define A 9"), ("B", "\t#define B\t9")]);

        let once = patch(body, &t);
        let twice = patch(&once.body, &t);

        assert!(once.missing.is_empty());
        assert!(twice.missing.is_empty());
        assert_eq!(once.body, twice.body);
    }

    #[test]
    fn test_name_must_match_exactly() {
        // A shorter name must not capture a longer macro's definition line.
        let body = "#define CABLES_MAX 4\n#define CABLES 1\n";
        let t = table(&[("CABLES", "#define CABLES 2")]);

        let out = patch(body, &t);

        assert_eq!(out.body, "#define CABLES_MAX 4\n#define CABLES 2\n");
    }

    #[test]
    fn test_every_matching_line_is_replaced() {
        let body = "#define A 1\nmiddle\n  #define A 2\n";
        let t = table(&[("A", "#define A 9")]);

        let out = patch(body, &t);

        assert_eq!(out.body, "#define A 9\nmiddle\n#define A 9\n");
    }

    #[test]
    fn test_untouched_outside_matched_lines() {
        let body = "// comment\n#define A 1\n#undef OTHER\n";
        let t = table(&[("A", "#define A 9")]);

        let out = patch(body, &t);

        assert_eq!(out.body, "// comment\n#define A 9\n#undef OTHER\n");
    }

    #[test]
    fn test_all_names_missing_on_empty_body() {
        let t = table(&[("A", "#define A 9"), ("B", "#define B 9")]);

        let mut out = patch("", &t);
        out.missing.sort();

        assert_eq!(out.missing, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(out.body, "");
    }
}
