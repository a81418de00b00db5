//! Proximity-based clustering of tab blocks into tab groups.
//!
//! Adjacent blocks that are meant to render as one tab set (e.g. "Option A" /
//! "Option B" right next to each other) are merged into a single group, while
//! blocks separated by prose, list items, or headings stay independent. This
//! is a best-effort heuristic over free-form text, not a grammar.

use std::sync::LazyLock;

use regex::Regex;

use super::block::TabBlock;

/// Maximum trimmed between-text length for two blocks to count as adjacent.
const ADJACENCY_LIMIT: usize = 20;

static LIST_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s").unwrap());

static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n#{1,6}\s").unwrap());

/// An ordered, non-empty run of tab blocks rendered as one tab set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabGroup {
    /// Blocks in the group, in the order they were paired.
    pub blocks: Vec<TabBlock>,
}

impl TabGroup {
    /// Byte offset where the group's first block begins.
    pub(crate) fn span_start(&self) -> usize {
        self.blocks[0].span_start
    }

    /// Byte offset one past the group's last block.
    pub(crate) fn span_end(&self) -> usize {
        self.blocks[self.blocks.len() - 1].span_end
    }
}

/// Decide whether `curr` belongs to the same tab set as `prev`.
///
/// `between` is the literal text strictly between the two blocks. Blocks are
/// grouped only if all of the following hold:
///
/// 1. both base indents have exactly the same character count;
/// 2. the trimmed between-text is shorter than [`ADJACENCY_LIMIT`] chars;
/// 3. the trimmed between-text does not open a list item (`- ` / `* `);
/// 4. the between-text contains no heading line and does not start with `#`.
pub(crate) fn should_group(prev: &TabBlock, curr: &TabBlock, between: &str) -> bool {
    let between_stripped = between.trim();

    // Character counts, not semantic tab-width comparison
    let indent_matches = prev.base_indent.len() == curr.base_indent.len();
    let adjacent = between_stripped.chars().count() < ADJACENCY_LIMIT;
    let has_list_marker = LIST_MARKER_PATTERN.is_match(between_stripped);
    let has_heading = between_stripped.starts_with('#') || HEADING_PATTERN.is_match(between);

    indent_matches && adjacent && !has_list_marker && !has_heading
}

/// Partition blocks into groups with a greedy single-pass scan.
///
/// Each block is compared against the last block of the open group; on
/// predicate failure the group is closed and a new one opened. A group of
/// size one is a standalone tab.
pub(crate) fn group_blocks(text: &str, blocks: Vec<TabBlock>) -> Vec<TabGroup> {
    let mut groups: Vec<TabGroup> = Vec::new();
    let mut current: Vec<TabBlock> = Vec::new();

    for block in blocks {
        if let Some(prev) = current.last() {
            // With LIFO pairing of nested markers the previous block can end
            // after the current one starts; treat that inverted range as
            // empty between-text.
            let between = text.get(prev.span_end..block.span_start).unwrap_or("");
            if should_group(prev, &block, between) {
                current.push(block);
            } else {
                groups.push(TabGroup { blocks: current });
                current = vec![block];
            }
        } else {
            current = vec![block];
        }
    }

    if !current.is_empty() {
        groups.push(TabGroup { blocks: current });
    }

    tracing::debug!(
        groups = groups.len(),
        sizes = ?groups.iter().map(|g| g.blocks.len()).collect::<Vec<_>>(),
        "Grouped tab blocks"
    );
    groups
}
