//! Built-in filter wrapping the tab-marker rewrite.

use mdtabs_core::{TabsConfig, TabsRewriter};

use crate::registry::TextFilter;

/// Filter that rewrites `TAB_START` / `TAB_END` comment markers into
/// content-tab syntax. Registered under the name `content-tabs`.
#[derive(Clone, Debug, Default)]
pub struct ContentTabsFilter {
    rewriter: TabsRewriter,
}

impl ContentTabsFilter {
    /// Create the filter with the default rewrite configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the filter with a custom rewrite configuration.
    #[must_use]
    pub fn with_config(config: TabsConfig) -> Self {
        Self {
            rewriter: TabsRewriter::with_config(config),
        }
    }
}

impl TextFilter for ContentTabsFilter {
    fn name(&self) -> &str {
        "content-tabs"
    }

    fn apply(&self, text: &str) -> String {
        self.rewriter.rewrite(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_rewrites_markers() {
        let filter = ContentTabsFilter::new();
        let output = filter.apply("<!-- TAB_START: X -->\nhello\n<!-- TAB_END -->");

        assert_eq!(output, "=== \"X\"\n\n    hello\n");
    }

    #[test]
    fn test_filter_respects_config() {
        let filter =
            ContentTabsFilter::with_config(TabsConfig::default().with_list_breakout_indent("    "));
        let output = filter.apply("  <!-- TAB_START: A -->\n  a\n  <!-- TAB_END -->");

        assert_eq!(output, "  === \"A\"\n\n      a\n");
    }
}
