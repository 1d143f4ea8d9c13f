//! Read-only access to the hosted tree database.
//!
//! Two collections are read: `trees` (base records) and `tree_content`
//! (rich content). Nothing in this crate writes to either.

pub mod memory;
pub mod supabase;

use async_trait::async_trait;

use crate::content::types::{PartialContent, TreeRow};

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

/// Columns fetched for catalog and base-record queries.
pub const TREE_COLUMNS: &str = "id,name,scientific_name,description,image_url,icon";
/// Columns fetched for rich-content queries.
pub const CONTENT_COLUMNS: &str = "id,video,hero,stats,details,impact";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Row-fetching service keyed by tree identifier.
#[async_trait]
pub trait TreeStore: Send + Sync {
    /// All base records, ordered by name.
    async fn list_trees(&self) -> Result<Vec<TreeRow>, StoreError>;

    /// Base record with exactly this id. `None` unless exactly one row matches.
    async fn get_tree(&self, id: &str) -> Result<Option<TreeRow>, StoreError>;

    /// Rich-content record for this id, if any.
    async fn get_content(&self, id: &str) -> Result<Option<PartialContent>, StoreError>;
}

/// Single-row expectation: zero or several matches both count as absent.
pub(crate) fn single_row<T>(table: &str, id: &str, mut rows: Vec<T>) -> Option<T> {
    match rows.len() {
        1 => rows.pop(),
        0 => None,
        n => {
            tracing::warn!("{} rows in '{}' share id '{}'; treating as absent", n, table, id);
            None
        }
    }
}
