//! Comment-marker to content-tab transform for markdown pipelines.
//!
//! This crate rewrites `<!-- TAB_START: Label -->` / `<!-- TAB_END -->`
//! comment markers embedded in documentation sources into the `=== "Label"`
//! content-tab syntax understood by downstream renderers.
//!
//! The transform is a pure function over the input string: it holds no state
//! across calls, never fails, and passes unrecognized text through
//! byte-for-byte. See the [`tabs`] module for the pipeline architecture.
//!
//! # Example
//!
//! ```
//! use mdtabs_core::content_tabs;
//!
//! let output = content_tabs(
//!     "<!-- TAB_START: Linux -->\nInstall with apt.\n<!-- TAB_END -->",
//! );
//! assert_eq!(output, "=== \"Linux\"\n\n    Install with apt.\n");
//! ```

mod include;
pub mod tabs;

pub use include::include_external_md;
pub use tabs::{Marker, MarkerKind, TabBlock, TabGroup, TabsConfig, TabsRewriter, content_tabs};
