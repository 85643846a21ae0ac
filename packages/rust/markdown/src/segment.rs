//! Horizontal-rule segmentation of the document body.
//!
//! A delimiter is a standalone line whose trimmed content is three or more
//! hyphens and nothing else. Delimiter lines inside an open code fence are
//! part of the fence, not separators. The delimiter line itself is consumed
//! and never appears in any segment.

/// Split body text into ordered segments, borrowing from the input.
///
/// Consecutive delimiters produce empty segments; the classifier drops them
/// since they yield no cells.
pub fn split(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut seg_start = 0;
    let mut line_start = 0;
    let mut in_fence = false;

    for line in body.split_inclusive('\n') {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_fence = !in_fence;
        } else if !in_fence && is_delimiter(trimmed) {
            segments.push(&body[seg_start..line_start]);
            seg_start = line_start + line.len();
        }

        line_start += line.len();
    }

    segments.push(&body[seg_start..]);
    segments
}

/// A delimiter line is three-or-more hyphens, nothing else.
fn is_delimiter(trimmed: &str) -> bool {
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiter() {
        let segments = split("A\n---\nB");
        assert_eq!(segments, vec!["A\n", "B"]);
    }

    #[test]
    fn no_delimiter_yields_single_segment() {
        let segments = split("one body\nof text\n");
        assert_eq!(segments, vec!["one body\nof text\n"]);
    }

    #[test]
    fn longer_dash_runs_are_delimiters() {
        let segments = split("A\n-----\nB\n----------\nC");
        assert_eq!(segments, vec!["A\n", "B\n", "C"]);
    }

    #[test]
    fn two_dashes_is_not_a_delimiter() {
        let segments = split("A\n--\nB");
        assert_eq!(segments, vec!["A\n--\nB"]);
    }

    #[test]
    fn dashes_with_other_text_are_not_delimiters() {
        let segments = split("A\n--- not a rule\nB");
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn consecutive_delimiters_produce_empty_segment() {
        let segments = split("A\n---\n---\nB");
        assert_eq!(segments, vec!["A\n", "", "B"]);
    }

    #[test]
    fn delimiter_inside_fence_is_preserved() {
        let body = "intro\n```text\na: 1\n---\nb: 2\n```\noutro";
        let segments = split(body);
        assert_eq!(segments, vec![body]);
    }

    #[test]
    fn delimiter_after_closed_fence_splits() {
        let body = "```python\nx = 1\n```\n---\nafter";
        let segments = split(body);
        assert_eq!(segments, vec!["```python\nx = 1\n```\n", "after"]);
    }

    #[test]
    fn indented_delimiter_still_splits() {
        // Trimming rule: surrounding whitespace is ignored.
        let segments = split("A\n  ---  \nB");
        assert_eq!(segments, vec!["A\n", "B"]);
    }

    #[test]
    fn empty_body_is_one_empty_segment() {
        assert_eq!(split(""), vec![""]);
    }
}
