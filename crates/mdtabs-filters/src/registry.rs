//! Trait-based filter registration and lookup.

use std::collections::HashMap;

/// A named, pure text transformation applied to page sources.
///
/// Filters must be side-effect free: applying the same filter to the same
/// input yields the same output, and filters hold no per-document state.
pub trait TextFilter {
    /// Name the filter is registered and invoked under.
    fn name(&self) -> &str;

    /// Apply the filter to `text`, returning the transformed text.
    fn apply(&self, text: &str) -> String;
}

/// Error returned when a filter lookup fails.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    /// No filter is registered under the requested name.
    #[error("no filter registered under name `{name}`")]
    Unknown {
        /// The name that failed to resolve.
        name: String,
    },
}

/// Registry resolving filter names to [`TextFilter`] implementations.
///
/// Filters are registered with builder-style [`with_filter`](Self::with_filter)
/// calls; registering a second filter under an existing name replaces the
/// first. [`FilterRegistry::default`] comes with the built-in `content-tabs`
/// filter already registered.
pub struct FilterRegistry {
    filters: HashMap<String, Box<dyn TextFilter>>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::empty().with_filter(crate::ContentTabsFilter::new())
    }
}

impl FilterRegistry {
    /// Create an empty registry with no filters registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Register a filter under its own [`TextFilter::name`].
    #[must_use]
    pub fn with_filter(mut self, filter: impl TextFilter + 'static) -> Self {
        let name = filter.name().to_owned();
        tracing::debug!(name = %name, "Registered text filter");
        self.filters.insert(name, Box::new(filter));
        self
    }

    /// Look up a filter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn TextFilter> {
        self.filters.get(name).map(Box::as_ref)
    }

    /// Apply the filter registered under `name` to `text`.
    pub fn apply(&self, name: &str, text: &str) -> Result<String, FilterError> {
        let filter = self.get(name).ok_or_else(|| FilterError::Unknown {
            name: name.to_owned(),
        })?;
        Ok(filter.apply(text))
    }

    /// Names of all registered filters, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}
