//! Top-level rewrite pipeline: scan, pair, group, render, splice.

use super::block::pair_markers;
use super::group::{TabGroup, group_blocks};
use super::marker::scan_markers;
use super::render::render_group;

/// Configuration for the tab rewriter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabsConfig {
    /// Exact indentation that marks a block as sitting inside a list item.
    ///
    /// Groups whose base indent equals this string render at column zero,
    /// preceded by a blank line, because the content-tab syntax does not
    /// render correctly as a list continuation. The comparison is exact
    /// string equality, not a semantic indentation check.
    ///
    /// Default: two spaces.
    pub list_breakout_indent: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            list_breakout_indent: "  ".to_owned(),
        }
    }
}

impl TabsConfig {
    /// Set the list-breakout indentation sentinel.
    #[must_use]
    pub fn with_list_breakout_indent(mut self, indent: impl Into<String>) -> Self {
        self.list_breakout_indent = indent.into();
        self
    }
}

/// Rewrites `TAB_START` / `TAB_END` comment markers into content-tab syntax.
///
/// The rewrite is a pure function of its input: no state survives between
/// calls and the rewriter never fails. Malformed or unbalanced markers are
/// dropped and their original text passes through untouched.
///
/// # Example
///
/// ```
/// use mdtabs_core::TabsRewriter;
///
/// let rewriter = TabsRewriter::new();
/// let output = rewriter.rewrite(
///     "<!-- TAB_START: Linux -->\nInstall with apt.\n<!-- TAB_END -->",
/// );
///
/// assert_eq!(output, "=== \"Linux\"\n\n    Install with apt.\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TabsRewriter {
    config: TabsConfig,
}

impl TabsRewriter {
    /// Create a rewriter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rewriter with a custom configuration.
    #[must_use]
    pub fn with_config(config: TabsConfig) -> Self {
        Self { config }
    }

    /// Rewrite every matched tab-marker region in `text`.
    ///
    /// Non-marker text and unmatched markers pass through byte-for-byte.
    #[must_use]
    pub fn rewrite(&self, text: &str) -> String {
        let markers = scan_markers(text);
        if markers.is_empty() {
            return text.to_owned();
        }

        let blocks = pair_markers(markers);
        let mut groups = group_blocks(text, blocks);

        // Splice right-to-left so offsets of not-yet-processed groups stay
        // valid in the running buffer.
        groups.sort_by(|a, b| b.span_start().cmp(&a.span_start()));

        let mut output = text.to_owned();
        for group in &groups {
            self.splice_group(&mut output, group);
        }
        output
    }

    /// Render one group and replace its span in the running buffer.
    fn splice_group(&self, output: &mut String, group: &TabGroup) {
        let start = group.span_start();
        let end = group.span_end().min(output.len());

        // Overlapping groups from pathological marker nesting can leave a
        // stale span after an earlier splice; pass those through untouched.
        if start > end || !output.is_char_boundary(start) || !output.is_char_boundary(end) {
            tracing::warn!(start, end, "Skipping tab group with stale span");
            return;
        }

        let rendered = render_group(output, group, &self.config);
        tracing::debug!(
            start,
            end,
            tabs = group.blocks.len(),
            "Splicing tab group"
        );
        output.replace_range(start..end, &rendered);
    }
}

/// Rewrite tab markers in `text` using the default configuration.
///
/// Convenience wrapper around [`TabsRewriter`].
#[must_use]
pub fn content_tabs(text: &str) -> String {
    TabsRewriter::new().rewrite(text)
}
