//! Detail resolution for a single tree page.
//!
//! Flow:
//! 1. Base record and rich-content record are fetched concurrently
//! 2. Missing base record -> `ResolveError::NotFound`
//! 3. Rich content (possibly empty) is merged over the per-tree defaults
//! 4. Video links and the location line are derived from the merged content

use crate::content::defaults::{merge_content, ContentDefaults};
use crate::content::location::location_from_details;
use crate::content::types::{non_empty, PartialContent, TreeDetail, TreeRow};
use crate::content::video::VideoLinks;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Tree {0} not found")]
    NotFound(String),
}

impl TreeDetail {
    /// Build a detail page from a base record and whatever content exists for it.
    pub fn from_records(base: TreeRow, partial: Option<PartialContent>) -> Self {
        let defaults = ContentDefaults::for_tree(&base);
        let content = merge_content(partial.unwrap_or_default(), defaults);
        let video = VideoLinks::from_url(&content.video_url);
        let location = location_from_details(&content.details);

        Self {
            id: base.id,
            name: base.name,
            scientific_name: base.scientific_name.unwrap_or_default(),
            description: base.description.unwrap_or_default(),
            image_url: non_empty(base.image_url),
            content,
            video,
            location,
        }
    }
}

#[cfg(feature = "api")]
pub use resolve::resolve_detail;

#[cfg(feature = "api")]
mod resolve {
    use super::ResolveError;
    use crate::content::types::TreeDetail;
    use crate::store::TreeStore;

    /// Resolve one tree. Store failures count as absence; only a missing base
    /// record is reported.
    pub async fn resolve_detail(store: &dyn TreeStore, id: &str) -> Result<TreeDetail, ResolveError> {
        let (base, content) = tokio::join!(store.get_tree(id), store.get_content(id));

        let base = match base {
            Ok(Some(row)) => row,
            Ok(None) => return Err(ResolveError::NotFound(id.to_string())),
            Err(e) => {
                tracing::warn!("Base record query for '{}' failed: {}", id, e);
                return Err(ResolveError::NotFound(id.to_string()));
            }
        };

        let content = content.unwrap_or_else(|e| {
            tracing::warn!("Content query for '{}' failed, using defaults: {}", id, e);
            None
        });
        if content.is_none() {
            tracing::debug!("No rich content for '{}'", id);
        }

        Ok(TreeDetail::from_records(base, content))
    }
}
