//! In-process store. Serves when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{single_row, StoreError, TreeStore};
use crate::content::types::{PartialContent, TreeRow};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    trees: Vec<TreeRow>,
    content: HashMap<String, PartialContent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, row: TreeRow) -> Self {
        self.trees.push(row);
        self
    }

    pub fn with_content(mut self, id: impl Into<String>, content: PartialContent) -> Self {
        self.content.insert(id.into(), content);
        self
    }
}

#[async_trait]
impl TreeStore for MemoryStore {
    async fn list_trees(&self) -> Result<Vec<TreeRow>, StoreError> {
        let mut rows = self.trees.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn get_tree(&self, id: &str) -> Result<Option<TreeRow>, StoreError> {
        let rows: Vec<TreeRow> = self.trees.iter().filter(|t| t.id == id).cloned().collect();
        Ok(single_row("trees", id, rows))
    }

    async fn get_content(&self, id: &str) -> Result<Option<PartialContent>, StoreError> {
        Ok(self.content.get(id).cloned())
    }
}
