//! Default table and layered merge for rich content.
//!
//! `merge_content` combines whatever part of a `tree_content` row exists with
//! a default table built from the base record. Each field falls back on its
//! own; a present hero title does not imply a present intro.

use crate::content::types::{
    non_empty, CardField, DetailCard, HeroCopy, ImpactSummary, LabeledField, PartialContent,
    Stat, TreeContent, TreeRow,
};

pub const PLACEHOLDER_VIDEO_URL: &str = "https://www.youtube.com/embed/ysz5S6PUM-U";
pub const COMING_SOON_TEXT: &str = "Information coming soon.";
pub const DEFAULT_IMPACT_TITLE: &str = "Environmental Impact";
pub const NOT_AVAILABLE: &str = "N/A";

/// Card and hero image when a tree has none. Shipped in `public/`.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

static DEFAULT_STAT_LABELS: &[&str] = &["Height", "Lifespan", "CO₂/Year"];

/// (title, icon tag)
static DEFAULT_CARDS: &[(&str, &str)] = &[
    ("Location", "map-pin"),
    ("Lifespan", "calendar"),
    ("Water Needs", "droplets"),
    ("Sunlight", "sun"),
];

static DEFAULT_IMPACT_ITEMS: &[(&str, &str)] = &[
    ("Carbon Storage", "High"),
    ("Biodiversity", "Supports Wildlife"),
    ("Ecosystem", "Key Species"),
];

/// Field-level fallbacks for one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDefaults {
    pub video_url: String,
    pub hero_title: String,
    pub hero_intro: String,
    pub stats: Vec<Stat>,
    pub details: Vec<DetailCard>,
    pub impact_title: String,
    pub impact_blurb: String,
    pub impact_items: Vec<Stat>,
}

impl ContentDefaults {
    /// Defaults parameterized by the tree's own name and description.
    pub fn for_tree(base: &TreeRow) -> Self {
        Self {
            video_url: PLACEHOLDER_VIDEO_URL.to_string(),
            hero_title: format!("Meet the {}", base.name),
            hero_intro: base.description.clone().unwrap_or_default(),
            stats: DEFAULT_STAT_LABELS
                .iter()
                .map(|label| Stat::new(*label, NOT_AVAILABLE))
                .collect(),
            details: DEFAULT_CARDS
                .iter()
                .map(|(title, icon)| DetailCard {
                    title: title.to_string(),
                    text: COMING_SOON_TEXT.to_string(),
                    icon: Some(icon.to_string()),
                })
                .collect(),
            impact_title: DEFAULT_IMPACT_TITLE.to_string(),
            impact_blurb: format!(
                "The {} contributes to the environment through carbon absorption, habitat provision, and ecological support.",
                base.name
            ),
            impact_items: DEFAULT_IMPACT_ITEMS
                .iter()
                .map(|(label, value)| Stat::new(*label, *value))
                .collect(),
        }
    }
}

/// Layer a partial content record over the defaults.
pub fn merge_content(partial: PartialContent, defaults: ContentDefaults) -> TreeContent {
    let PartialContent { video, hero, stats, details, impact } = partial;

    let video_url = video
        .and_then(|v| non_empty(v.url))
        .unwrap_or(defaults.video_url);

    let (hero_title, hero_intro) = hero.map(|h| (h.title, h.intro)).unwrap_or_default();
    let hero = HeroCopy {
        title: non_empty(hero_title).unwrap_or(defaults.hero_title),
        intro: non_empty(hero_intro).unwrap_or(defaults.hero_intro),
    };

    let stats = non_empty_list(stats)
        .map(|fields| fields.into_iter().map(|f| stat_from_field(f, NOT_AVAILABLE)).collect())
        .unwrap_or(defaults.stats);

    let details = non_empty_list(details)
        .map(|cards| cards.into_iter().map(card_from_field).collect())
        .unwrap_or(defaults.details);

    let (impact_title, impact_blurb, impact_items) = impact
        .map(|i| (i.title, i.blurb, i.items))
        .unwrap_or_default();
    let impact = ImpactSummary {
        title: non_empty(impact_title).unwrap_or(defaults.impact_title),
        blurb: non_empty(impact_blurb).unwrap_or(defaults.impact_blurb),
        items: non_empty_list(impact_items)
            .map(|fields| fields.into_iter().map(|f| stat_from_field(f, "")).collect())
            .unwrap_or(defaults.impact_items),
    };

    TreeContent { video_url, hero, stats, details, impact }
}

fn non_empty_list<T>(list: Option<Vec<T>>) -> Option<Vec<T>> {
    list.filter(|items| !items.is_empty())
}

fn stat_from_field(field: LabeledField, missing_value: &str) -> Stat {
    Stat {
        label: field.label.unwrap_or_default(),
        value: non_empty(field.value).unwrap_or_else(|| missing_value.to_string()),
    }
}

fn card_from_field(field: CardField) -> DetailCard {
    DetailCard {
        title: field.title.unwrap_or_default(),
        text: field.text.unwrap_or_default(),
        icon: non_empty(field.icon),
    }
}
