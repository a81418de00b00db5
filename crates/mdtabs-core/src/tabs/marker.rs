//! Marker scanning for tab comment directives.
//!
//! Locates `<!-- TAB_START: Label -->` and `<!-- TAB_END -->` comments in
//! the source text, recording their byte spans and leading indentation.

use std::sync::LazyLock;

use regex::Regex;

static START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\n?[ \t]*)<!--\s*TAB_START\s*:([^-]+?)\s*-->").unwrap());

static END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\n?[ \t]*)<!--\s*TAB_END\s*-->").unwrap());

/// Whether a marker opens or closes a tab region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    /// `<!-- TAB_START: Label -->`
    Start,
    /// `<!-- TAB_END -->`
    End,
}

/// A single tab marker occurrence in the source text.
///
/// Spans are byte offsets into the original text and cover the full matched
/// region, including the optional leading newline and indentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    /// Whether this is a start or end marker.
    pub kind: MarkerKind,
    /// Trimmed display label. Empty for end markers.
    pub name: String,
    /// Whitespace preceding the marker on its line (newline stripped,
    /// spaces and tabs kept verbatim).
    pub indent: String,
    /// Byte offset where the match begins.
    pub span_start: usize,
    /// Byte offset one past the end of the match.
    pub span_end: usize,
}

/// Scan `text` for all tab markers, sorted ascending by position.
///
/// Labels are trimmed but otherwise unvalidated: duplicates and empty labels
/// pass through. Matching is case-sensitive and tolerates arbitrary
/// whitespace inside the comment delimiters and around the label colon.
pub(crate) fn scan_markers(text: &str) -> Vec<Marker> {
    let mut markers = Vec::new();

    for caps in START_PATTERN.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        markers.push(Marker {
            kind: MarkerKind::Start,
            name: caps.get(2).unwrap().as_str().trim().to_owned(),
            indent: clean_indent(caps.get(1).unwrap().as_str()),
            span_start: whole.start(),
            span_end: whole.end(),
        });
    }

    for caps in END_PATTERN.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        markers.push(Marker {
            kind: MarkerKind::End,
            name: String::new(),
            indent: clean_indent(caps.get(1).unwrap().as_str()),
            span_start: whole.start(),
            span_end: whole.end(),
        });
    }

    markers.sort_by_key(|m| m.span_start);

    tracing::debug!(count = markers.len(), "Scanned tab markers");
    markers
}

/// Strip the captured leading newline, keeping spaces and tabs verbatim.
fn clean_indent(captured: &str) -> String {
    captured.trim_start_matches('\n').to_owned()
}
