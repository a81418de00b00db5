//! External content inclusion.
//!
//! Placeholder only: no fetching or transformation is implemented yet.

/// Include external markdown content referenced by `url`.
///
/// Currently returns a fixed placeholder comment referencing the location.
/// `transform_tabs` is accepted for forward compatibility and has no effect.
#[must_use]
pub fn include_external_md(url: &str, transform_tabs: bool) -> String {
    tracing::debug!(url, transform_tabs, "Including external content (stub)");
    format!("<!-- Include content from {url} -->")
}
