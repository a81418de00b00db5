//! Named text-filter registry for documentation build pipelines.
//!
//! A host build environment applies filters to page sources by name. This
//! crate provides the [`TextFilter`] trait for pluggable filters and a
//! [`FilterRegistry`] that resolves them, with the tab rewrite from
//! `mdtabs-core` registered out of the box.
//!
//! # Example
//!
//! ```
//! use mdtabs_filters::FilterRegistry;
//!
//! let registry = FilterRegistry::default();
//! let output = registry
//!     .apply(
//!         "content-tabs",
//!         "<!-- TAB_START: Linux -->\nInstall with apt.\n<!-- TAB_END -->",
//!     )
//!     .unwrap();
//!
//! assert_eq!(output, "=== \"Linux\"\n\n    Install with apt.\n");
//! ```

mod content_tabs;
mod registry;

pub use content_tabs::ContentTabsFilter;
pub use registry::{FilterError, FilterRegistry, TextFilter};
