//! YAML front matter detection and stripping.
//!
//! A front matter block is an opening `---` line at the very start of the
//! document (leading blank lines tolerated) followed by a closing `---` line.
//! The payload between the markers is returned separately and never reaches
//! the notebook output.

/// Front matter markers must trim to exactly this.
const MARKER: &str = "---";

/// Split a document into `(front_matter_payload, body)`.
///
/// Returns `(None, text)` when no front matter is present. An opening marker
/// with no matching closer before end-of-input is fail-open: the whole text,
/// including the unmatched marker line, is treated as body.
pub fn split(text: &str) -> (Option<&str>, &str) {
    let mut offset = 0;
    let mut lines = text.split_inclusive('\n');

    // Skip leading blank lines.
    let opener_start = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => offset += line.len(),
            Some(line) if line.trim() == MARKER => break offset + line.len(),
            _ => return (None, text),
        }
    };

    // Scan for the closing marker.
    let mut line_start = opener_start;
    for line in text[opener_start..].split_inclusive('\n') {
        if line.trim() == MARKER {
            let payload = &text[opener_start..line_start];
            let body = &text[line_start + line.len()..];
            return (Some(payload), body);
        }
        line_start += line.len();
    }

    // Unmatched opener: pass everything through as body.
    (None, text)
}
