//! View Builder - Converts resolved trees to view models

use crate::content::defaults::PLACEHOLDER_IMAGE;
use crate::content::icons::DetailIcon;
use crate::content::types::{TreeDetail, TreeSummary};
use crate::content::view_models::*;

/// Stats and impact items shown per section.
pub const MAX_GRID_ITEMS: usize = 3;

pub fn build_home_page(trees: &[TreeSummary]) -> HomePageData {
    HomePageData {
        cards: trees.iter().map(build_tree_card).collect(),
    }
}

fn build_tree_card(tree: &TreeSummary) -> TreeCardView {
    TreeCardView {
        id: tree.id.clone(),
        href: tree_href(&tree.id),
        name: tree.name.clone(),
        scientific_name: tree.scientific_name.clone(),
        description: tree.description.clone(),
        image_src: tree
            .image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        icon: tree.icon,
    }
}

/// Path of a tree's detail page.
pub fn tree_href(id: &str) -> String {
    format!("/tree/{}", urlencoding::encode(id))
}

pub fn build_detail_page(detail: &TreeDetail) -> DetailPageData {
    let content = &detail.content;

    let cards = content
        .details
        .iter()
        .enumerate()
        .map(|(idx, card)| DetailCardView {
            title: card.title.clone(),
            text: card.text.clone(),
            icon: DetailIcon::for_card(card.icon.as_deref(), idx),
        })
        .collect();

    DetailPageData {
        id: detail.id.clone(),
        name: detail.name.clone(),
        name_lower: detail.name.to_lowercase(),
        scientific_name: detail.scientific_name.clone(),
        image_src: detail
            .image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        embed_url: detail.video.embed_url.clone(),
        watch_url: detail.video.watch_url.clone(),
        hero_lead: hero_lead(&content.hero.title, &detail.name),
        hero_intro: content.hero.intro.clone(),
        stats: content.stats.iter().take(MAX_GRID_ITEMS).cloned().collect(),
        location: detail.location.clone(),
        cards,
        impact_title: content.impact.title.clone(),
        impact_blurb: content.impact.blurb.clone(),
        impact_items: content.impact.items.iter().take(MAX_GRID_ITEMS).cloned().collect(),
    }
}

/// Hero title minus the first occurrence of the tree name.
fn hero_lead(title: &str, name: &str) -> String {
    if !name.is_empty() && title.contains(name) {
        title.replacen(name, "", 1).trim().to_string()
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::fallback_catalog;
    use crate::content::types::{PartialContent, Stat, TreeRow, LabeledField, CardField};

    #[test]
    fn test_hero_lead_strips_name() {
        assert_eq!(hero_lead("Meet the Acacia Tree", "Acacia Tree"), "Meet the");
        assert_eq!(hero_lead("A Campus Giant", "Acacia Tree"), "A Campus Giant");
    }

    #[test]
    fn test_tree_href_encodes_id() {
        assert_eq!(tree_href("star-apple-tree"), "/tree/star-apple-tree");
        assert_eq!(tree_href("a b"), "/tree/a%20b");
    }

    #[test]
    fn test_home_cards_use_placeholder_image() {
        let page = build_home_page(&fallback_catalog());
        assert_eq!(page.cards.len(), 15);
        assert!(page.cards.iter().all(|c| c.image_src == PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_detail_grids_are_truncated() {
        let many = |n: usize| {
            (0..n)
                .map(|i| LabeledField { label: Some(format!("L{i}")), value: Some(format!("{i}")) })
                .collect::<Vec<_>>()
        };
        let partial = PartialContent {
            stats: Some(many(5)),
            details: Some(vec![
                CardField { title: Some("Soil".into()), text: Some("Loam".into()), icon: Some("shovel".into()) },
                CardField { title: Some("Shade".into()), text: Some("Wide".into()), icon: None },
            ]),
            ..Default::default()
        };
        let detail = TreeDetail::from_records(TreeRow::new("gmelina", "Gmelina Tree"), Some(partial));
        let page = build_detail_page(&detail);

        assert_eq!(page.stats.len(), 3);
        assert_eq!(page.stats[2], Stat::new("L2", "2"));
        assert_eq!(page.impact_items.len(), 3);
        assert_eq!(page.cards[0].icon, DetailIcon::MapPin);
        assert_eq!(page.cards[1].icon, DetailIcon::Calendar);
        assert_eq!(page.image_src, PLACEHOLDER_IMAGE);
        assert_eq!(page.name_lower, "gmelina tree");
        assert_eq!(page.hero_lead, "Meet the");
    }
}
