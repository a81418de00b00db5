//! Stack-based pairing of start and end markers into tab blocks.

use super::marker::{Marker, MarkerKind};

/// A matched `TAB_START` / `TAB_END` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabBlock {
    /// The opening marker, carrying the tab label.
    pub start_marker: Marker,
    /// The closing marker.
    pub end_marker: Marker,
    /// Byte offset of the start marker's beginning.
    pub span_start: usize,
    /// Byte offset one past the end marker's end.
    pub span_end: usize,
    /// Canonical indentation for the block, taken from the start marker.
    ///
    /// The end marker's own indentation is deliberately ignored so that
    /// inconsistently indented `TAB_END` markers do not affect rendering.
    pub base_indent: String,
}

impl TabBlock {
    /// Byte range of the content between the two markers.
    pub(crate) fn content_span(&self) -> (usize, usize) {
        (self.start_marker.span_end, self.end_marker.span_start)
    }
}

/// Pair sorted markers into blocks using LIFO stack discipline.
///
/// The most recently opened, not-yet-closed start marker pairs with the next
/// end marker, matching bracket-nesting semantics. Unmatched markers of
/// either kind are silently dropped; their original text is never spliced
/// over and remains in the output untouched.
///
/// Blocks are returned in the order their end markers were encountered.
pub(crate) fn pair_markers(markers: Vec<Marker>) -> Vec<TabBlock> {
    let mut blocks = Vec::new();
    let mut start_stack: Vec<Marker> = Vec::new();

    for marker in markers {
        match marker.kind {
            MarkerKind::Start => start_stack.push(marker),
            MarkerKind::End => {
                let Some(start_marker) = start_stack.pop() else {
                    // Stray end marker with no open start
                    continue;
                };
                blocks.push(TabBlock {
                    span_start: start_marker.span_start,
                    span_end: marker.span_end,
                    base_indent: start_marker.indent.clone(),
                    start_marker,
                    end_marker: marker,
                });
            }
        }
    }

    // Anything left on the stack is an unterminated block
    tracing::debug!(
        blocks = blocks.len(),
        unterminated = start_stack.len(),
        "Paired tab markers"
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::super::marker::scan_markers;
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(text: &str) -> Vec<TabBlock> {
        pair_markers(scan_markers(text))
    }

    #[test]
    fn test_pair_simple() {
        let text = "<!-- TAB_START: A -->\nbody\n<!-- TAB_END -->";
        let blocks = pair(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start_marker.name, "A");
        assert_eq!(blocks[0].span_start, 0);
        assert_eq!(blocks[0].span_end, text.len());
        assert!(blocks[0].span_start < blocks[0].span_end);
    }

    #[test]
    fn test_pair_base_indent_from_start_marker() {
        // TAB_END indented differently from TAB_START
        let blocks = pair("    <!-- TAB_START: A -->\nbody\n  <!-- TAB_END -->");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].base_indent, "    ");
        assert_eq!(blocks[0].end_marker.indent, "  ");
    }

    #[test]
    fn test_pair_nested_lifo() {
        let text = "<!-- TAB_START: Outer -->\n<!-- TAB_START: Inner -->\n\
                    <!-- TAB_END -->\n<!-- TAB_END -->";
        let blocks = pair(text);

        assert_eq!(blocks.len(), 2);
        // Inner closes first
        assert_eq!(blocks[0].start_marker.name, "Inner");
        assert_eq!(blocks[1].start_marker.name, "Outer");
        assert!(blocks[0].span_end < blocks[1].span_end);
    }

    #[test]
    fn test_pair_stray_end_dropped() {
        assert!(pair("text\n<!-- TAB_END -->\nmore").is_empty());
    }

    #[test]
    fn test_pair_unterminated_start_dropped() {
        assert!(pair("<!-- TAB_START: Lost -->\nbody with no end").is_empty());
    }

    #[test]
    fn test_pair_mixed_matched_and_stray() {
        let text = "<!-- TAB_END -->\n<!-- TAB_START: A -->\nx\n<!-- TAB_END -->\n\
                    <!-- TAB_START: B -->";
        let blocks = pair(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start_marker.name, "A");
    }

    #[test]
    fn test_content_span() {
        let text = "<!-- TAB_START: A -->hello<!-- TAB_END -->";
        let blocks = pair(text);
        let (start, end) = blocks[0].content_span();

        assert_eq!(&text[start..end], "hello");
    }
}
