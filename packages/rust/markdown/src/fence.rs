//! Fenced code block scanning within a single segment.
//!
//! A fence opens with a line of three-or-more backticks at column zero,
//! optionally followed by a language tag, and closes with a line consisting
//! solely of at least as many backticks. An opened fence with no closer is
//! fail-open: everything from the opening marker onward stays narrative.

use std::sync::LazyLock;

use regex::Regex;

/// Opening fence line: backtick run, optional identifier tag, nothing else.
static FENCE_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(`{3,})([A-Za-z0-9_]*)\s*$").expect("valid regex"));

/// One run of a segment, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text outside any recognized fence.
    Narrative(&'a str),
    /// A complete fenced run.
    Fenced {
        /// Language tag as written (empty tag reported as `None`).
        tag: Option<&'a str>,
        /// Interior text, fence delimiter lines excluded.
        body: &'a str,
        /// Full fenced run including both delimiter lines, for verbatim
        /// restoration when the tag is not recognized.
        raw: &'a str,
    },
}

/// Scan a segment into alternating narrative and fenced pieces.
///
/// Pieces are contiguous slices of the input, so concatenating them in order
/// reproduces the segment byte-for-byte.
pub fn scan(segment: &str) -> Vec<Piece<'_>> {
    let mut lines: Vec<(usize, &str)> = Vec::new();
    let mut offset = 0;
    for line in segment.split_inclusive('\n') {
        lines.push((offset, line));
        offset += line.len();
    }

    let mut pieces = Vec::new();
    let mut flush_start = 0;
    let mut i = 0;

    while i < lines.len() {
        let (start, line) = lines[i];
        let stripped = line.trim_end_matches(['\n', '\r']);

        let Some(caps) = FENCE_OPEN_RE.captures(stripped) else {
            i += 1;
            continue;
        };
        let open_len = caps.get(1).map_or(0, |m| m.len());

        let Some(close_idx) = find_closer(&lines, i + 1, open_len) else {
            // Unterminated fence: the rest of the segment is narrative.
            break;
        };

        if flush_start < start {
            pieces.push(Piece::Narrative(&segment[flush_start..start]));
        }

        let (close_start, close_line) = lines[close_idx];
        let tag = caps.get(2).map(|m| m.as_str()).filter(|t| !t.is_empty());
        pieces.push(Piece::Fenced {
            tag,
            body: &segment[start + line.len()..close_start],
            raw: &segment[start..close_start + close_line.len()],
        });

        flush_start = close_start + close_line.len();
        i = close_idx + 1;
    }

    if flush_start < segment.len() {
        pieces.push(Piece::Narrative(&segment[flush_start..]));
    }

    pieces
}

/// Find the first closing fence line at or after `from`.
fn find_closer(lines: &[(usize, &str)], from: usize, open_len: usize) -> Option<usize> {
    lines[from..].iter().position(|(_, line)| {
        let t = line.trim();
        t.len() >= open_len && t.bytes().all(|b| b == b'`')
    }).map(|pos| from + pos)
}
