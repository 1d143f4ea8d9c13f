//! View models for page templates.
//!
//! Plain data handed to Askama; every decision (fallback images, icon
//! choice, truncation) is already made by `view_builder`.

use serde::Serialize;

use crate::content::icons::{CatalogIcon, DetailIcon};
use crate::content::types::Stat;

// ============================================================================
// Home Page
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TreeCardView {
    pub id: String,
    pub href: String,
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub image_src: String,
    pub icon: CatalogIcon,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct HomePageData {
    pub cards: Vec<TreeCardView>,
}

// ============================================================================
// Detail Page
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DetailCardView {
    pub title: String,
    pub text: String,
    pub icon: DetailIcon,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailPageData {
    pub id: String,
    pub name: String,
    /// Name as used mid-sentence ("... of acacia trees.")
    pub name_lower: String,
    pub scientific_name: String,
    pub image_src: String,

    // Video section
    pub embed_url: String,
    pub watch_url: String,

    // Hero section
    /// Hero title with the tree name taken out; the name is rendered after it, highlighted.
    pub hero_lead: String,
    pub hero_intro: String,
    pub stats: Vec<Stat>,
    pub location: Option<String>,

    pub cards: Vec<DetailCardView>,

    // Impact section
    pub impact_title: String,
    pub impact_blurb: String,
    pub impact_items: Vec<Stat>,
}

impl DetailPageData {
    pub fn video_title(&self) -> String {
        format!("{} Video", self.name)
    }
}
