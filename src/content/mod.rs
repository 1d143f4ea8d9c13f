//! Content Resolution Module
//!
//! Turns store rows into fully populated page data.
//!
//! ## Pieces
//! 1. Catalog - tree summaries for the landing page, with a built-in fallback list
//! 2. Detail - base record + rich content, merged over per-tree defaults
//! 3. Derivations - video links, location line
//! 4. Presentation - view models and icon selection for templates

pub mod types;
pub mod icons;
pub mod defaults;
pub mod video;
pub mod location;
pub mod catalog;
pub mod detail;
pub mod view_models;
pub mod view_builder;

pub use types::{TreeSummary, TreeDetail, TreeRow, PartialContent};
pub use catalog::fallback_catalog;
pub use detail::ResolveError;

#[cfg(feature = "api")]
pub use catalog::resolve_catalog;
#[cfg(feature = "api")]
pub use detail::resolve_detail;
