//! Markdown-to-cell parsing for nbweave.
//!
//! Turns a skill document (markdown with optional YAML front matter) into an
//! ordered sequence of typed cells:
//! 1. Strip front matter ([`front_matter::split`])
//! 2. Split the body on horizontal-rule delimiters ([`segment::split`])
//! 3. Scan each segment for fenced code blocks ([`fence::scan`])
//! 4. Classify fenced runs into executable cells when their language tag is
//!    recognized; everything else merges into narrative cells.
//!
//! All stages operate on borrowed spans of the original buffer and are
//! fail-open: malformed front matter and unterminated fences degrade to
//! narrative text, never errors.

pub mod fence;
pub mod front_matter;
pub mod segment;

use std::collections::BTreeSet;

use tracing::debug;

use crate::fence::Piece;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Language of an executable cell.
///
/// A closed enumeration: tags outside the built-in set are carried as
/// [`Language::Unrecognized`] so classification stays total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    Python,
    Sql,
    Unrecognized(String),
}

impl Language {
    /// Classify a fence tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "python" => Self::Python,
            "sql" => Self::Sql,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Python => "python",
            Self::Sql => "sql",
            Self::Unrecognized(tag) => tag,
        }
    }
}

/// One parsed cell, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCell {
    /// Free markdown text, possibly containing non-executed fenced blocks.
    Narrative(String),
    /// A recognized fenced code block.
    Executable { language: Language, source: String },
}

impl ParsedCell {
    /// Cell content as text.
    pub fn content(&self) -> &str {
        match self {
            Self::Narrative(text) => text,
            Self::Executable { source, .. } => source,
        }
    }
}

/// Parser options: which fence tags become executable cells.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    recognized: BTreeSet<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::from_tags(["python", "sql"])
    }
}

impl ParseOptions {
    /// Build from an iterator of language tags (compared case-insensitively).
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            recognized: tags
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Is this fence tag in the recognized set?
    pub fn is_recognized(&self, tag: &str) -> bool {
        self.recognized.contains(&tag.to_ascii_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a full document into ordered cells.
///
/// Front matter is discarded. Empty segments and whitespace-only cells yield
/// nothing.
pub fn parse_document(text: &str, opts: &ParseOptions) -> Vec<ParsedCell> {
    let (meta, body) = front_matter::split(text);
    if let Some(meta) = meta {
        debug!(meta_len = meta.len(), "stripped front matter");
    }

    let mut cells = Vec::new();
    for seg in segment::split(body) {
        classify_segment(seg, opts, &mut cells);
    }

    debug!(cell_count = cells.len(), "document parsed");
    cells
}

/// Classify one segment's pieces into cells, appending to `out`.
///
/// Narrative runs accumulate (with unrecognized fences restored verbatim,
/// delimiters included) and flush whenever a recognized fence is hit and at
/// segment end.
fn classify_segment(segment: &str, opts: &ParseOptions, out: &mut Vec<ParsedCell>) {
    let mut narrative = String::new();

    for piece in fence::scan(segment) {
        match piece {
            Piece::Narrative(text) => narrative.push_str(text),
            Piece::Fenced { tag, body, raw } => match tag {
                Some(tag) if opts.is_recognized(tag) => {
                    flush_narrative(&mut narrative, out);
                    let source = body.trim_end();
                    if !source.trim().is_empty() {
                        out.push(ParsedCell::Executable {
                            language: Language::from_tag(tag),
                            source: source.to_string(),
                        });
                    }
                }
                // Unrecognized or untagged fence: stays inline in narrative.
                _ => narrative.push_str(raw),
            },
        }
    }

    flush_narrative(&mut narrative, out);
}

fn flush_narrative(buf: &mut String, out: &mut Vec<ParsedCell>) {
    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        out.push(ParsedCell::Narrative(trimmed.to_string()));
    }
    buf.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<ParsedCell> {
        parse_document(text, &ParseOptions::default())
    }

    fn narrative(text: &str) -> ParsedCell {
        ParsedCell::Narrative(text.to_string())
    }

    fn executable(language: Language, source: &str) -> ParsedCell {
        ParsedCell::Executable {
            language,
            source: source.to_string(),
        }
    }

    #[test]
    fn segments_become_narrative_cells() {
        assert_eq!(parse("A\n---\nB"), vec![narrative("A"), narrative("B")]);
    }

    #[test]
    fn recognized_fence_becomes_executable() {
        let cells = parse("```python\nprint(1)\n```");
        assert_eq!(cells, vec![executable(Language::Python, "print(1)")]);
    }

    #[test]
    fn unrecognized_fence_stays_narrative_verbatim() {
        let cells = parse("```text\nprint(1)\n```");
        assert_eq!(cells, vec![narrative("```text\nprint(1)\n```")]);
    }

    #[test]
    fn mixed_segment_preserves_order() {
        let cells = parse("intro\n```sql\nSELECT 1\n```\noutro");
        assert_eq!(
            cells,
            vec![
                narrative("intro"),
                executable(Language::Sql, "SELECT 1"),
                narrative("outro"),
            ]
        );
    }

    #[test]
    fn front_matter_never_reaches_cells() {
        let with_meta = parse("---\nname: demo\ntags: [sql]\n---\nBody");
        let without = parse("Body");
        assert_eq!(with_meta, without);
        assert_eq!(with_meta, vec![narrative("Body")]);
    }

    #[test]
    fn empty_document_yields_no_cells() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n").is_empty());
        assert!(parse("---\nkey: value\n---\n").is_empty());
    }

    #[test]
    fn empty_segments_yield_no_cells() {
        assert_eq!(parse("---\n---\nA\n---\n"), vec![narrative("A")]);
    }

    #[test]
    fn unterminated_fence_is_never_executable() {
        let cells = parse("some text\n```python\nx = 1");
        assert_eq!(cells, vec![narrative("some text\n```python\nx = 1")]);
    }

    #[test]
    fn narrative_merges_across_unrecognized_fence() {
        let cells = parse("before\n```json\n{\"a\": 1}\n```\nafter");
        assert_eq!(
            cells,
            vec![narrative("before\n```json\n{\"a\": 1}\n```\nafter")]
        );
    }

    #[test]
    fn whitespace_only_code_block_dropped() {
        let cells = parse("intro\n```python\n\n\n```\noutro");
        // The empty executable disappears; narrative still flushes around it.
        assert_eq!(cells, vec![narrative("intro"), narrative("outro")]);
    }

    #[test]
    fn tag_matching_is_case_insensitive() {
        let cells = parse("```Python\nprint(1)\n```");
        assert_eq!(cells, vec![executable(Language::Python, "print(1)")]);
    }

    #[test]
    fn custom_language_set() {
        let opts = ParseOptions::from_tags(["r"]);
        let cells = parse_document("```r\nsummary(df)\n```\n```python\nx\n```", &opts);
        assert_eq!(
            cells,
            vec![
                executable(Language::Unrecognized("r".into()), "summary(df)"),
                narrative("```python\nx\n```"),
            ]
        );
    }

    #[test]
    fn parsing_is_idempotent_per_input() {
        let text = "---\nname: demo\n---\nintro\n```python\nx = 1\n```\n---\noutro\n";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn multiple_code_blocks_in_one_segment() {
        let cells = parse("a\n```python\n1\n```\nb\n```sql\nSELECT 2\n```\nc");
        assert_eq!(
            cells,
            vec![
                narrative("a"),
                executable(Language::Python, "1"),
                narrative("b"),
                executable(Language::Sql, "SELECT 2"),
                narrative("c"),
            ]
        );
    }

    #[test]
    fn language_classification() {
        assert_eq!(Language::from_tag("PYTHON"), Language::Python);
        assert_eq!(Language::from_tag("Sql"), Language::Sql);
        assert_eq!(
            Language::from_tag("Bash"),
            Language::Unrecognized("bash".into())
        );
        assert_eq!(Language::from_tag("sql").as_str(), "sql");
    }
}
