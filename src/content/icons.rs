//! Icon tags and their glyphs.
//!
//! Catalog cards and detail cards use two separate closed sets. Glyph paths are
//! lucide outlines (24x24 viewBox, stroke-based).

use serde::Serialize;

/// Icon shown on a catalog card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogIcon {
    #[default]
    Leaf,
    #[serde(rename = "pine")]
    TreePine,
    Sprout,
    Palmtree,
}

impl CatalogIcon {
    /// Map a stored tag to an icon. Missing or unknown tags fall back to `Leaf`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some("leaf") => CatalogIcon::Leaf,
            Some("pine") => CatalogIcon::TreePine,
            Some("sprout") => CatalogIcon::Sprout,
            Some("palmtree") => CatalogIcon::Palmtree,
            _ => CatalogIcon::default(),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CatalogIcon::Leaf => "leaf",
            CatalogIcon::TreePine => "pine",
            CatalogIcon::Sprout => "sprout",
            CatalogIcon::Palmtree => "palmtree",
        }
    }

    pub fn svg_path(&self) -> &'static str {
        match self {
            CatalogIcon::Leaf => LEAF_SVG,
            CatalogIcon::TreePine => TREE_PINE_SVG,
            CatalogIcon::Sprout => r#"<path d="M7 20h10"/><path d="M10 20c5.5-2.5.8-6.4 3-10"/><path d="M9.5 9.4c1.1.8 1.8 2.2 2.3 3.7-2 .4-3.5.4-4.8-.3-1.2-.6-2.3-1.9-3-4.2 2.8-.5 4.4 0 5.5.8z"/><path d="M14.1 6a7 7 0 0 0-1.1 4c1.9-.1 3.3-.6 4.3-1.4 1-1 1.6-2.3 1.7-4.6-2.7.1-4 1-4.9 2z"/>"#,
            CatalogIcon::Palmtree => r#"<path d="M13 8c0-2.76-2.46-5-5.5-5S2 5.24 2 8h2l1-1 1 1h4"/><path d="M13 7.14A5.82 5.82 0 0 1 16.5 6c3.04 0 5.5 2.24 5.5 5h-3l-1-1-1 1h-3"/><path d="M5.89 9.71c-2.15 2.15-2.3 5.47-.35 7.43l4.24-4.25.7-.7.71-.71 2.12-2.12c-1.95-1.96-5.27-1.8-7.42.35"/><path d="M11 15.5c.5 2.5-.17 4.5-1 6.5h4c2-5.5-.5-12-1-14"/>"#,
        }
    }
}

/// Icon shown on a detail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailIcon {
    MapPin,
    Calendar,
    Droplets,
    Sun,
}

/// Positional fallbacks for detail cards, in card order.
pub const POSITIONAL_DETAIL_ICONS: [DetailIcon; 4] = [
    DetailIcon::MapPin,
    DetailIcon::Calendar,
    DetailIcon::Droplets,
    DetailIcon::Sun,
];

impl DetailIcon {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "map-pin" => Some(DetailIcon::MapPin),
            "calendar" => Some(DetailIcon::Calendar),
            "droplets" => Some(DetailIcon::Droplets),
            "sun" => Some(DetailIcon::Sun),
            _ => None,
        }
    }

    /// Icon for the card at `index`: the tag if known, else the positional
    /// default, else `MapPin`.
    pub fn for_card(tag: Option<&str>, index: usize) -> Self {
        tag.and_then(DetailIcon::from_tag)
            .or_else(|| POSITIONAL_DETAIL_ICONS.get(index).copied())
            .unwrap_or(DetailIcon::MapPin)
    }

    pub fn svg_path(&self) -> &'static str {
        match self {
            DetailIcon::MapPin => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
            DetailIcon::Calendar => r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#,
            DetailIcon::Droplets => r#"<path d="M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z"/><path d="M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97"/>"#,
            DetailIcon::Sun => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
        }
    }
}

pub const LEAF_SVG: &str = r#"<path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"/><path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"/>"#;
pub const TREE_PINE_SVG: &str = r#"<path d="m17 14 3 3.3a1 1 0 0 1-.7 1.7H4.7a1 1 0 0 1-.7-1.7L7 14h-.3a1 1 0 0 1-.7-1.7L9 9h-.2A1 1 0 0 1 8 7.3L12 3l4 4.3a1 1 0 0 1-.8 1.7H15l3 3.3a1 1 0 0 1-.7 1.7H17Z"/><path d="M12 22v-3"/>"#;
pub const USERS_SVG: &str = r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_known_tags() {
        assert_eq!(CatalogIcon::from_tag(Some("pine")), CatalogIcon::TreePine);
        assert_eq!(CatalogIcon::from_tag(Some("sprout")), CatalogIcon::Sprout);
        assert_eq!(CatalogIcon::from_tag(Some("palmtree")), CatalogIcon::Palmtree);
    }

    #[test]
    fn test_catalog_unknown_tag_falls_back_to_leaf() {
        assert_eq!(CatalogIcon::from_tag(Some("baobab")), CatalogIcon::Leaf);
        assert_eq!(CatalogIcon::from_tag(None), CatalogIcon::Leaf);
    }

    #[test]
    fn test_detail_icon_positional_fallback() {
        assert_eq!(DetailIcon::for_card(Some("sun"), 0), DetailIcon::Sun);
        assert_eq!(DetailIcon::for_card(Some("unknown"), 2), DetailIcon::Droplets);
        assert_eq!(DetailIcon::for_card(None, 3), DetailIcon::Sun);
        assert_eq!(DetailIcon::for_card(Some("unknown"), 7), DetailIcon::MapPin);
    }

    #[test]
    fn test_catalog_tag_serializes_as_stored() {
        assert_eq!(serde_json::to_string(&CatalogIcon::TreePine).unwrap(), "\"pine\"");
        assert_eq!(CatalogIcon::TreePine.tag(), "pine");
    }
}
