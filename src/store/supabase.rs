//! PostgREST client for the hosted database (Supabase REST API).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{single_row, StoreError, TreeStore, CONTENT_COLUMNS, TREE_COLUMNS};
use crate::content::types::{PartialContent, TreeRow};

#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// GET `/rest/v1/{table}` with PostgREST query parameters.
    ///
    /// Rows come back as raw JSON; callers convert them one by one so that a
    /// single malformed row cannot fail the whole response.
    async fn select(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<Value>, StoreError> {
        let url = self.table_url(table);
        tracing::debug!("Querying {} with {:?}", url, params);

        let resp = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Status { status: status.as_u16(), body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TreeStore for SupabaseStore {
    async fn list_trees(&self) -> Result<Vec<TreeRow>, StoreError> {
        let rows = self
            .select(
                "trees",
                &[
                    ("select", TREE_COLUMNS.to_string()),
                    ("order", "name.asc".to_string()),
                ],
            )
            .await?;
        Ok(TreeRow::from_json_rows(&rows))
    }

    async fn get_tree(&self, id: &str) -> Result<Option<TreeRow>, StoreError> {
        let rows = self
            .select(
                "trees",
                &[
                    ("select", TREE_COLUMNS.to_string()),
                    ("id", format!("eq.{}", id)),
                    ("limit", "2".to_string()),
                ],
            )
            .await?;
        Ok(single_row("trees", id, TreeRow::from_json_rows(&rows)))
    }

    async fn get_content(&self, id: &str) -> Result<Option<PartialContent>, StoreError> {
        let rows = self
            .select(
                "tree_content",
                &[
                    ("select", CONTENT_COLUMNS.to_string()),
                    ("id", format!("eq.{}", id)),
                    ("limit", "2".to_string()),
                ],
            )
            .await?;
        Ok(single_row("tree_content", id, rows).map(|row| PartialContent::from_json(&row)))
    }
}
