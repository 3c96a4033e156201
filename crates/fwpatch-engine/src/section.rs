//! Section locator — finds one marker-delimited block inside a header.

use std::ops::Range;

use fwpatch_core::errors::{PatchError, PatchResult};
use regex::Regex;

/// Find the single section opened by a line matching `start` and bounded
/// below by the first subsequent line matching any of `ends`.
///
/// The returned range begins just past the start line's newline and stops
/// where the bounding line begins, so the body keeps the newline that
/// terminates its own last line. The range indexes into `text` for
/// byte-exact splicing.
///
/// The start marker must match exactly one line; zero matches, a missing
/// end bound, or multiple matches are all fatal.
pub fn find_section(
    text: &str,
    file: &str,
    start: &Regex,
    ends: &[Regex],
) -> PatchResult<Range<usize>> {
    let lines = line_spans(text);

    let mut start_idx = None;
    let mut start_count = 0usize;
    for (idx, (_, content)) in lines.iter().enumerate() {
        if start.is_match(content) {
            start_count += 1;
            if start_idx.is_none() {
                start_idx = Some(idx);
            }
        }
    }

    let start_idx = match (start_idx, start_count) {
        (Some(idx), 1) => idx,
        (Some(_), count) => {
            return Err(PatchError::SectionAmbiguous {
                marker: start.as_str().to_string(),
                count,
                file: file.to_string(),
            })
        }
        (None, _) => {
            return Err(PatchError::SectionNotFound {
                marker: start.as_str().to_string(),
                file: file.to_string(),
            })
        }
    };

    let body_start = {
        let (offset, _) = lines[start_idx];
        offset + raw_line_len(text, offset)
    };

    for (offset, content) in lines.iter().skip(start_idx + 1) {
        if ends.iter().any(|end| end.is_match(content)) {
            return Ok(body_start..*offset);
        }
    }

    Err(PatchError::SectionNotFound {
        marker: start.as_str().to_string(),
        file: file.to_string(),
    })
}

/// Byte offset and terminator-stripped content of every line.
fn line_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for raw in text.split_inclusive('\n') {
        let content = raw.strip_suffix('\n').unwrap_or(raw);
        let content = content.strip_suffix('\r').unwrap_or(content);
        spans.push((offset, content));
        offset += raw.len();
    }
    spans
}

/// Length of the line starting at `offset`, terminator included.
fn raw_line_len(text: &str, offset: usize) -> usize {
    match text[offset..].find('\n') {
        Some(pos) => pos + 1,
        None => text.len() - offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_x() -> Regex {
        Regex::new(r"^#elif defined\(X\)$").unwrap()
    }

    fn end_markers() -> Vec<Regex> {
        vec![Regex::new(r"^#elif ").unwrap(), Regex::new(r"^#endif").unwrap()]
    }

    #[test]
    fn test_body_excludes_next_elif() {
        let text = "#elif defined(X)\nA\nB\n#elif defined(Y)\nC\n#endif";
        let span = find_section(text, "t.h", &start_x(), &end_markers()).unwrap();
        assert_eq!(&text[span], "A\nB\n");
    }

    #[test]
    fn test_body_bounded_by_endif() {
        let text = "#if defined(W)\nW0\n#elif defined(X)\nA\n#endif\n";
        let span = find_section(text, "t.h", &start_x(), &end_markers()).unwrap();
        assert_eq!(&text[span], "A\n");
    }

    #[test]
    fn test_span_indexes_original_text() {
        let text = "#elif defined(X)\nA\nB\n#endif\n";
        let span = find_section(text, "t.h", &start_x(), &end_markers()).unwrap();
        let spliced = format!("{}PATCHED\n{}", &text[..span.start], &text[span.end..]);
        assert_eq!(spliced, "#elif defined(X)\nPATCHED\n#endif\n");
    }

    #[test]
    fn test_missing_start_marker() {
        let text = "#if defined(W)\nW0\n#endif\n";
        let err = find_section(text, "t.h", &start_x(), &end_markers()).unwrap_err();
        assert_eq!(err.error_code(), "SECTION_NOT_FOUND");
    }

    #[test]
    fn test_start_without_end_bound() {
        let text = "#elif defined(X)\nA\nB\n";
        let err = find_section(text, "t.h", &start_x(), &end_markers()).unwrap_err();
        assert_eq!(err.error_code(), "SECTION_NOT_FOUND");
    }

    #[test]
    fn test_duplicate_start_marker_rejected() {
        let text = "#elif defined(X)\nA\n#endif\n#elif defined(X)\nB\n#endif\n";
        let err = find_section(text, "t.h", &start_x(), &end_markers()).unwrap_err();
        assert_eq!(err.error_code(), "SECTION_AMBIGUOUS");
    }

    #[test]
    fn test_body_may_contain_blank_lines_and_comments() {
        let text = "#elif defined(X)\n\n// cables\nA\n\n#endif\n";
        let span = find_section(text, "t.h", &start_x(), &end_markers()).unwrap();
        assert_eq!(&text[span], "\n// cables\nA\n\n");
    }
}
