//! Rendering of tab groups into content-tab syntax.
//!
//! Produces `=== "Label"` headers with the tab body re-indented four spaces
//! deeper than the header. Grouped tabs are joined by a single blank line,
//! which is what the downstream renderer treats as "one tab set".

use super::group::TabGroup;
use super::rewriter::TabsConfig;

/// Render a single tab: header line, blank line, re-indented body.
///
/// Heading lines (`#`-prefixed after trimming) are dropped from the body on
/// the assumption that they duplicate the tab label. Leading and trailing
/// blank lines are trimmed; interior blank lines are kept. All remaining
/// lines collapse to one indentation level: `indent` plus four spaces.
pub(crate) fn render_tab(content: &str, label: &str, indent: &str) -> String {
    let content = content.trim();
    if content.is_empty() {
        return format!("{indent}=== \"{label}\"\n\n");
    }

    let mut lines: Vec<&str> = Vec::new();
    for line in content.split('\n') {
        let stripped = line.trim();
        if stripped.is_empty() {
            // Whitespace-only lines normalize to empty
            lines.push("");
        } else if !stripped.starts_with('#') {
            lines.push(line);
        }
    }

    let first = lines.iter().position(|line| !line.is_empty());
    let Some(first) = first else {
        return format!("{indent}=== \"{label}\"\n\n");
    };
    let last = lines.iter().rposition(|line| !line.is_empty()).unwrap();

    let body_indent = format!("{indent}    ");
    let body = lines[first..=last]
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{body_indent}{}", line.trim_start())
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{indent}=== \"{label}\"\n\n{body}\n")
}

/// Render a whole group against the current text buffer.
///
/// The first block's base indent is canonical for the group. If it equals
/// the configured list-breakout sentinel, the group renders with no indent
/// and a two-newline prefix, forcing the tabs out of the enclosing list's
/// rendering context.
pub(crate) fn render_group(text: &str, group: &TabGroup, config: &TabsConfig) -> String {
    let base_indent = &group.blocks[0].base_indent;
    let in_list_item = *base_indent == config.list_breakout_indent;
    let effective_indent = if in_list_item { "" } else { base_indent.as_str() };

    let tabs: Vec<String> = group
        .blocks
        .iter()
        .map(|block| {
            let (start, end) = block.content_span();
            let content = text.get(start..end).unwrap_or("");
            render_tab(content, &block.start_marker.name, effective_indent)
        })
        .collect();

    let mut rendered = if tabs.len() == 1 {
        tabs.into_iter().next().unwrap()
    } else {
        let joined = tabs
            .iter()
            .map(|tab| tab.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{joined}\n")
    };

    if in_list_item {
        rendered = format!("\n\n{rendered}");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::super::block::pair_markers;
    use super::super::marker::scan_markers;
    use super::*;
    use pretty_assertions::assert_eq;

    fn single_group(text: &str) -> TabGroup {
        TabGroup {
            blocks: pair_markers(scan_markers(text)),
        }
    }

    #[test]
    fn test_render_tab_basic() {
        assert_eq!(render_tab("hello", "X", ""), "=== \"X\"\n\n    hello\n");
    }

    #[test]
    fn test_render_tab_empty_body() {
        assert_eq!(render_tab("  \n\n ", "Empty", ""), "=== \"Empty\"\n\n");
    }

    #[test]
    fn test_render_tab_strips_headings() {
        let out = render_tab("### Foo\nbar", "X", "");
        assert_eq!(out, "=== \"X\"\n\n    bar\n");
    }

    #[test]
    fn test_render_tab_heading_only_body() {
        assert_eq!(render_tab("## Only Heading", "X", ""), "=== \"X\"\n\n");
    }

    #[test]
    fn test_render_tab_keeps_interior_blank_lines() {
        let out = render_tab("one\n\ntwo", "X", "");
        assert_eq!(out, "=== \"X\"\n\n    one\n\n    two\n");
    }

    #[test]
    fn test_render_tab_whitespace_only_line_becomes_empty() {
        let out = render_tab("one\n   \ntwo", "X", "");
        assert_eq!(out, "=== \"X\"\n\n    one\n\n    two\n");
    }

    #[test]
    fn test_render_tab_collapses_relative_indentation() {
        // All non-blank lines collapse to a single level
        let out = render_tab("  outer\n      inner", "X", "");
        assert_eq!(out, "=== \"X\"\n\n    outer\n    inner\n");
    }

    #[test]
    fn test_render_tab_with_base_indent() {
        let out = render_tab("body", "X", "    ");
        assert_eq!(out, "    === \"X\"\n\n        body\n");
    }

    #[test]
    fn test_render_group_single_tab() {
        let text = "<!-- TAB_START: A -->\nbody\n<!-- TAB_END -->";
        let group = single_group(text);
        let out = render_group(text, &group, &TabsConfig::default());

        assert_eq!(out, "=== \"A\"\n\n    body\n");
    }

    #[test]
    fn test_render_group_joins_with_blank_line() {
        let text = "<!-- TAB_START: A -->\na\n<!-- TAB_END -->\n\
                    <!-- TAB_START: B -->\nb\n<!-- TAB_END -->";
        let group = single_group(text);
        let out = render_group(text, &group, &TabsConfig::default());

        assert_eq!(out, "=== \"A\"\n\n    a\n\n=== \"B\"\n\n    b\n");
    }

    #[test]
    fn test_render_group_list_breakout() {
        let text = "  <!-- TAB_START: A -->\n  a\n  <!-- TAB_END -->";
        let group = single_group(text);
        let out = render_group(text, &group, &TabsConfig::default());

        // Header at column zero, preceded by two newlines
        assert_eq!(out, "\n\n=== \"A\"\n\n    a\n");
    }

    #[test]
    fn test_render_group_breakout_sentinel_configurable() {
        let text = "  <!-- TAB_START: A -->\n  a\n  <!-- TAB_END -->";
        let group = single_group(text);
        let config = TabsConfig::default().with_list_breakout_indent("    ");
        let out = render_group(text, &group, &config);

        // Two spaces no longer trigger the breakout
        assert_eq!(out, "  === \"A\"\n\n      a\n");
    }
}
