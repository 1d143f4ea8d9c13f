// Content Resolution Integration Tests
//
// Purpose: Catalog and detail resolution against healthy, empty and failing stores
// Run with: cargo test --test content_integration_tests

#[cfg(feature = "api")]
mod content_tests {
    use async_trait::async_trait;
    use ecotag_site::content::defaults::{COMING_SOON_TEXT, NOT_AVAILABLE, PLACEHOLDER_VIDEO_URL};
    use ecotag_site::content::icons::CatalogIcon;
    use ecotag_site::content::types::TreeRow;
    use ecotag_site::content::{resolve_catalog, resolve_detail, PartialContent, ResolveError};
    use ecotag_site::store::{MemoryStore, StoreError, TreeStore};
    use serde_json::{json, Value};

    /// Store whose every query fails.
    struct FailingStore;

    #[async_trait]
    impl TreeStore for FailingStore {
        async fn list_trees(&self) -> Result<Vec<TreeRow>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn get_tree(&self, _id: &str) -> Result<Option<TreeRow>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn get_content(&self, _id: &str) -> Result<Option<PartialContent>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    /// Base records resolve, content queries fail.
    struct FlakyContentStore(MemoryStore);

    #[async_trait]
    impl TreeStore for FlakyContentStore {
        async fn list_trees(&self) -> Result<Vec<TreeRow>, StoreError> {
            self.0.list_trees().await
        }

        async fn get_tree(&self, id: &str) -> Result<Option<TreeRow>, StoreError> {
            self.0.get_tree(id).await
        }

        async fn get_content(&self, _id: &str) -> Result<Option<PartialContent>, StoreError> {
            Err(StoreError::Status { status: 503, body: "busy".to_string() })
        }
    }

    /// Serves a raw `trees` response body, decoded the way the REST client does.
    struct JsonStore(&'static str);

    impl JsonStore {
        fn rows(&self) -> Result<Vec<TreeRow>, StoreError> {
            let rows: Vec<Value> = serde_json::from_str(self.0)?;
            Ok(TreeRow::from_json_rows(&rows))
        }
    }

    #[async_trait]
    impl TreeStore for JsonStore {
        async fn list_trees(&self) -> Result<Vec<TreeRow>, StoreError> {
            self.rows()
        }

        async fn get_tree(&self, id: &str) -> Result<Option<TreeRow>, StoreError> {
            Ok(self.rows()?.into_iter().find(|t| t.id == id))
        }

        async fn get_content(&self, _id: &str) -> Result<Option<PartialContent>, StoreError> {
            Ok(None)
        }
    }

    const MIXED_TREES_BODY: &str = r#"[
        {"id": "kalachuchi", "name": "Kalachuchi", "scientific_name": "Plumeria rubra", "icon": "sprout"},
        {"id": "draft", "name": null, "scientific_name": "Unknown"},
        {"id": "banaba", "name": "Banaba", "description": 3}
    ]"#;

    // =========================================================================
    // Catalog
    // =========================================================================

    #[tokio::test]
    async fn test_catalog_keeps_good_rows_when_one_row_is_malformed() {
        let trees = resolve_catalog(&JsonStore(MIXED_TREES_BODY)).await;

        let ids: Vec<&str> = trees.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["banaba", "kalachuchi"]);
        assert_eq!(trees[0].description, "3");
        assert_eq!(trees[1].icon, CatalogIcon::Sprout);
    }

    #[tokio::test]
    async fn test_detail_resolves_next_to_a_malformed_row() {
        let store = JsonStore(MIXED_TREES_BODY);
        let detail = resolve_detail(&store, "kalachuchi").await.unwrap();
        assert_eq!(detail.content.hero.title, "Meet the Kalachuchi");
        assert!(resolve_detail(&store, "draft").await.is_err());
    }

    #[tokio::test]
    async fn test_catalog_failure_serves_built_in_list() {
        let trees = resolve_catalog(&FailingStore).await;
        assert_eq!(trees.len(), 15);
        assert!(trees.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[tokio::test]
    async fn test_catalog_store_rows_replace_built_in_list() {
        let store = MemoryStore::new()
            .with_tree(TreeRow {
                icon: Some("palmtree".to_string()),
                ..TreeRow::new("coconut", "Coconut")
            })
            .with_tree(TreeRow {
                icon: Some("cactus".to_string()),
                image_url: Some("   ".to_string()),
                ..TreeRow::new("balete", "Balete")
            });

        let trees = resolve_catalog(&store).await;
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].id, "balete");
        assert_eq!(trees[0].icon, CatalogIcon::Leaf);
        assert_eq!(trees[0].image_url, None);
        assert_eq!(trees[0].scientific_name, "");
        assert_eq!(trees[1].icon, CatalogIcon::Palmtree);
    }

    // =========================================================================
    // Detail
    // =========================================================================

    #[tokio::test]
    async fn test_detail_missing_base_is_not_found_even_with_content() {
        let store = MemoryStore::new().with_content("orphan", PartialContent::default());
        let err = resolve_detail(&store, "orphan").await.unwrap_err();
        assert_eq!(err, ResolveError::NotFound("orphan".to_string()));
    }

    #[tokio::test]
    async fn test_detail_store_failure_is_not_found() {
        let err = resolve_detail(&FailingStore, "acacia").await.unwrap_err();
        assert_eq!(err.to_string(), "Tree acacia not found");
    }

    #[tokio::test]
    async fn test_detail_content_failure_falls_back_to_defaults() {
        let store = FlakyContentStore(MemoryStore::new().with_tree(TreeRow::new("mango", "Mango Tree")));
        let detail = resolve_detail(&store, "mango").await.unwrap();

        assert_eq!(detail.content.video_url, PLACEHOLDER_VIDEO_URL);
        assert_eq!(detail.content.hero.title, "Meet the Mango Tree");
        assert_eq!(detail.content.hero.intro, "");
        assert!(detail.content.stats.iter().all(|s| s.value == NOT_AVAILABLE));
        assert!(detail.content.details.iter().all(|d| d.text == COMING_SOON_TEXT));
        assert_eq!(detail.location, None);
    }

    #[tokio::test]
    async fn test_detail_partial_content_merges_per_field() {
        let content = PartialContent::from_json(&json!({
            "hero": { "title": "The Shade of CBAA" },
            "stats": "not a list",
            "impact": { "blurb": "Cools the quadrangle." },
            "details": [
                { "title": "Location", "text": "Coming soon" },
                { "title": "Sunlight", "text": "Full sun", "icon": "sun" }
            ]
        }));
        let store = MemoryStore::new()
            .with_tree(TreeRow {
                description: Some("Planted in 1985.".to_string()),
                ..TreeRow::new("narra-tree", "Narra Tree")
            })
            .with_content("narra-tree", content);

        let detail = resolve_detail(&store, "narra-tree").await.unwrap();
        let content = &detail.content;

        assert_eq!(content.hero.title, "The Shade of CBAA");
        assert_eq!(content.hero.intro, "Planted in 1985.");
        // Malformed stats are dropped and defaulted
        assert_eq!(content.stats.len(), 3);
        assert_eq!(content.impact.title, "Environmental Impact");
        assert_eq!(content.impact.blurb, "Cools the quadrangle.");
        assert_eq!(content.impact.items.len(), 3);
        assert_eq!(content.details.len(), 2);
        // Placeholder location text is not shown
        assert_eq!(detail.location, None);
        assert_eq!(detail.video.video_id.as_deref(), Some("ysz5S6PUM-U"));
    }
}
