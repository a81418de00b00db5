//! Tab-marker rewriting for markdown sources.
//!
//! Rewrites HTML-comment tab markers into content-tab syntax:
//!
//! ```markdown
//! <!-- TAB_START: macOS -->
//! Install with Homebrew.
//! <!-- TAB_END -->
//! <!-- TAB_START: Linux -->
//! Install with apt.
//! <!-- TAB_END -->
//! ```
//!
//! becomes
//!
//! ```markdown
//! === "macOS"
//!
//!     Install with Homebrew.
//!
//! === "Linux"
//!
//!     Install with apt.
//! ```
//!
//! # Architecture
//!
//! The rewrite runs four ordered stages over the raw text:
//!
//! 1. **Scan** (`marker`): locate every marker with its span and
//!    indentation.
//! 2. **Pair** (`block`): match starts to ends with LIFO stack discipline.
//! 3. **Group** (`group`): cluster adjacent blocks into tab sets using a
//!    proximity heuristic.
//! 4. **Render** (`render`): produce the replacement text per group and
//!    splice it in, rightmost group first so earlier offsets stay valid.
//!
//! There is no AST and no validation of the surrounding document: unmatched
//! or malformed markers pass through untouched and the rewrite never fails.

mod block;
mod group;
mod marker;
mod render;
mod rewriter;

pub use block::TabBlock;
pub use group::TabGroup;
pub use marker::{Marker, MarkerKind};
pub use rewriter::{TabsConfig, TabsRewriter, content_tabs};
