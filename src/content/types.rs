//! Shared data types for content resolution.
//!
//! Data sources:
//! - Base records: `trees` collection (one row per tree)
//! - Rich content: `tree_content` collection (nested JSON per tree, every field optional)
//!
//! Store rows are kept separate from the resolved types so that defaulting
//! can be tested without a store.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::content::icons::CatalogIcon;
use crate::content::video::VideoLinks;

// ============================================================================
// Store Rows
// ============================================================================

/// Base record from the `trees` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRow {
    #[serde(deserialize_with = "required_text")]
    pub id: String,
    #[serde(deserialize_with = "required_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub scientific_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon: Option<String>,
}

impl TreeRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scientific_name: None,
            description: None,
            image_url: None,
            icon: None,
        }
    }

    /// Decode one `trees` row. Rows without a usable id or name are skipped.
    pub fn from_json(row: &Value) -> Option<Self> {
        match TreeRow::deserialize(row) {
            Ok(tree) if tree.id.trim().is_empty() || tree.name.trim().is_empty() => {
                tracing::warn!("Skipping tree row with blank id or name: {}", row);
                None
            }
            Ok(tree) => Some(tree),
            Err(e) => {
                tracing::warn!("Skipping malformed tree row {}: {}", row, e);
                None
            }
        }
    }

    /// Decode a whole response row by row, so one bad row leaves the rest intact.
    pub fn from_json_rows(rows: &[Value]) -> Vec<Self> {
        rows.iter().filter_map(TreeRow::from_json).collect()
    }
}

/// Rich-content record from `tree_content`, exactly as much of it as was present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialContent {
    pub video: Option<VideoField>,
    pub hero: Option<HeroField>,
    pub stats: Option<Vec<LabeledField>>,
    pub details: Option<Vec<CardField>>,
    pub impact: Option<ImpactField>,
}

impl PartialContent {
    /// Decode a `tree_content` row field by field.
    ///
    /// A malformed area is dropped on its own so the other areas survive.
    pub fn from_json(row: &Value) -> Self {
        fn area<T: DeserializeOwned>(row: &Value, key: &str) -> Option<T> {
            let value = row.get(key)?;
            if value.is_null() {
                return None;
            }
            match serde_json::from_value(value.clone()) {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::debug!("Dropping malformed content field '{}': {}", key, e);
                    None
                }
            }
        }

        Self {
            video: area(row, "video"),
            hero: area(row, "hero"),
            stats: row.get("stats").and_then(|v| list_elements(v, "stats")),
            details: row.get("details").and_then(|v| list_elements(v, "details")),
            impact: area(row, "impact"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoField {
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroField {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub intro: Option<String>,
}

/// Label/value pair as stored (stats and impact items). Values may be numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledField {
    #[serde(default, deserialize_with = "lenient_text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardField {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactField {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub blurb: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Option<Vec<LabeledField>>,
}

// ============================================================================
// Resolved Types
// ============================================================================

/// Catalog entry shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSummary {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub icon: CatalogIcon,
}

impl From<TreeRow> for TreeSummary {
    fn from(row: TreeRow) -> Self {
        let icon = CatalogIcon::from_tag(row.icon.as_deref());
        Self {
            id: row.id,
            name: row.name,
            scientific_name: row.scientific_name.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            image_url: non_empty(row.image_url),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Detail card with the icon tag still raw; glyph choice is positional and
/// happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailCard {
    pub title: String,
    pub text: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    pub title: String,
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactSummary {
    pub title: String,
    pub blurb: String,
    pub items: Vec<Stat>,
}

/// Rich content with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeContent {
    pub video_url: String,
    pub hero: HeroCopy,
    pub stats: Vec<Stat>,
    pub details: Vec<DetailCard>,
    pub impact: ImpactSummary,
}

/// Fully resolved tree page. Only built from an existing base record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeDetail {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub content: TreeContent,
    pub video: VideoLinks,
    pub location: Option<String>,
}

// ============================================================================
// Helpers
// ============================================================================

/// Treat blank strings the same as missing ones.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Identifier-like text: strings or numbers, nothing else.
fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected text, found {}", other))),
    }
}

/// Keep the elements of a JSON array that decode; a non-array is absent.
fn list_elements<T: DeserializeOwned>(value: &Value, key: &str) -> Option<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return None,
        other => {
            tracing::debug!("Dropping non-list content field '{}': {}", key, other);
            return None;
        }
    };

    Some(
        items
            .iter()
            .filter_map(|item| match T::deserialize(item) {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::debug!("Dropping malformed '{}' entry {}: {}", key, item, e);
                    None
                }
            })
            .collect(),
    )
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_elements(&value, "items"))
}

/// Accept strings, numbers and booleans for text fields; anything else is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tree_row_accepts_missing_optionals() {
        let row: TreeRow = serde_json::from_value(json!({"id": "mango", "name": "Mango Tree"})).unwrap();
        assert_eq!(row, TreeRow::new("mango", "Mango Tree"));
    }

    #[test]
    fn test_numeric_stat_values_become_text() {
        let field: LabeledField = serde_json::from_value(json!({"label": "Height", "value": 15})).unwrap();
        assert_eq!(field.value.as_deref(), Some("15"));
    }

    #[test]
    fn test_malformed_area_is_dropped_alone() {
        let row = json!({
            "id": "narra-tree",
            "hero": {"title": "Meet Narra", "intro": "National tree"},
            "stats": "not a list",
            "video": null
        });
        let partial = PartialContent::from_json(&row);
        assert_eq!(partial.hero.unwrap().title.as_deref(), Some("Meet Narra"));
        assert!(partial.stats.is_none());
        assert!(partial.video.is_none());
    }

    #[test]
    fn test_tree_rows_decode_one_by_one() {
        let rows = vec![
            json!({"id": "kalachuchi", "name": "Kalachuchi", "icon": "sprout"}),
            json!({"id": "draft", "name": null}),
            json!({"id": 42, "name": "Numbered Tree"}),
            json!({"id": "blank", "name": "  "}),
            json!("not a row"),
        ];
        let trees = TreeRow::from_json_rows(&rows);
        let ids: Vec<&str> = trees.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["kalachuchi", "42"]);
        assert_eq!(trees[0].icon.as_deref(), Some("sprout"));
    }

    #[test]
    fn test_bad_list_entries_are_dropped_individually() {
        let row = json!({
            "stats": [{"label": "Height", "value": "12 m"}, "oops", 7],
            "details": [null, {"title": "Sunlight", "text": "Full sun"}]
        });
        let partial = PartialContent::from_json(&row);
        assert_eq!(partial.stats.unwrap().len(), 1);
        let details = partial.details.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].title.as_deref(), Some("Sunlight"));
    }

    #[test]
    fn test_malformed_impact_items_keep_title_and_blurb() {
        let row = json!({
            "impact": {"title": "Why It Matters", "blurb": "Shades the oval.", "items": "lots"}
        });
        let impact = PartialContent::from_json(&row).impact.unwrap();
        assert_eq!(impact.title.as_deref(), Some("Why It Matters"));
        assert_eq!(impact.blurb.as_deref(), Some("Shades the oval."));
        assert_eq!(impact.items, None);
    }

    #[test]
    fn test_summary_from_row_normalizes_icon_and_image() {
        let mut row = TreeRow::new("balete", "Balete Tree");
        row.icon = Some("cactus".to_string());
        row.image_url = Some("  ".to_string());
        let summary = TreeSummary::from(row);
        assert_eq!(summary.icon, CatalogIcon::Leaf);
        assert_eq!(summary.image_url, None);
        assert_eq!(summary.scientific_name, "");
    }
}
