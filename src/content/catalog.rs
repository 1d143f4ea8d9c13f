//! Catalog resolution for the landing page.
//!
//! The store's `trees` collection is the source. When it yields no rows (or
//! cannot be reached) the built-in list of fifteen campus species is served
//! instead, so the landing page is never empty.

use crate::content::icons::CatalogIcon;
use crate::content::types::TreeSummary;

/// One built-in catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct FallbackTree {
    pub id: &'static str,
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub description: &'static str,
    pub icon: CatalogIcon,
}

// ============================================================================
// BUILT-IN CATALOG
// ============================================================================

pub static FALLBACK_TREES: &[FallbackTree] = &[
    FallbackTree { id: "acacia", name: "Acacia Tree", scientific_name: "Acacia auriculiformis", description: "Fast-growing tree that helps prevent soil erosion and provides excellent shade.", icon: CatalogIcon::TreePine },
    FallbackTree { id: "mahogany", name: "Mahogany Tree", scientific_name: "Swietenia macrophylla", description: "Valuable hardwood tree that supports biodiversity and carbon sequestration.", icon: CatalogIcon::Sprout },
    FallbackTree { id: "rubber-tree", name: "Rubber Tree", scientific_name: "Hevea brasiliensis", description: "Source of natural rubber and an important species in tropical plantations.", icon: CatalogIcon::Leaf },
    FallbackTree { id: "eucalyptus", name: "Eucalyptus Tree", scientific_name: "Eucalyptus globulus", description: "Fast-growing tree known for its aromatic leaves and essential oils.", icon: CatalogIcon::TreePine },
    FallbackTree { id: "flame-tree", name: "Flame Tree", scientific_name: "Delonix regia", description: "Ornamental palm with bushy fronds, often planted in tropical landscapes.", icon: CatalogIcon::Palmtree },
    FallbackTree { id: "umbrella-tree", name: "Umbrella Tree", scientific_name: "Schefflera actinophylla", description: "Popular ornamental tree with umbrella-like leaf clusters.", icon: CatalogIcon::Leaf },
    FallbackTree { id: "mango", name: "Mango Tree", scientific_name: "Mangifera indica", description: "Fruit-bearing tree cultivated widely for its sweet and nutritious mangoes.", icon: CatalogIcon::Sprout },
    FallbackTree { id: "tamarind", name: "Tamarind Tree", scientific_name: "Tamarindus indica", description: "Tropical tree producing tangy fruit used in cooking and traditional medicine.", icon: CatalogIcon::Leaf },
    FallbackTree { id: "indian-mast", name: "Indian Mast Tree", scientific_name: "Polyalthia longifolia", description: "Tall ornamental tree often used for avenue planting and windbreaks.", icon: CatalogIcon::TreePine },
    FallbackTree { id: "balete", name: "Balete Tree", scientific_name: "Ficus benjamina", description: "Large fig tree species considered sacred in many Filipino traditions.", icon: CatalogIcon::TreePine },
    FallbackTree { id: "narra-tree", name: "Narra Tree", scientific_name: "Pterocarpus indicus", description: "Native shade tree with spreading branches, often planted in parks.", icon: CatalogIcon::Leaf },
    FallbackTree { id: "star-apple-tree", name: "Star Apple Tree", scientific_name: "Chrysophyllum cainito", description: "Palm tree with fishtail-shaped leaves, commonly used for landscaping.", icon: CatalogIcon::Palmtree },
    FallbackTree { id: "gmelina", name: "Gmelina Tree", scientific_name: "Gmelina arborea", description: "Fast-growing hardwood tree widely used for timber and reforestation.", icon: CatalogIcon::TreePine },
    FallbackTree { id: "betel-palm", name: "Betel Palm", scientific_name: "Areca catechu", description: "Palm tree whose seeds (areca nuts) are commonly chewed with betel leaves.", icon: CatalogIcon::Palmtree },
    FallbackTree { id: "coconut-palm", name: "Coconut Palm", scientific_name: "Dypsis lutescens", description: "Elegant clustering palm often used indoors and outdoors for ornamental purposes.", icon: CatalogIcon::Palmtree },
];

impl From<&FallbackTree> for TreeSummary {
    fn from(tree: &FallbackTree) -> Self {
        Self {
            id: tree.id.to_string(),
            name: tree.name.to_string(),
            scientific_name: tree.scientific_name.to_string(),
            description: tree.description.to_string(),
            image_url: None,
            icon: tree.icon,
        }
    }
}

/// The built-in catalog, sorted by name.
pub fn fallback_catalog() -> Vec<TreeSummary> {
    let mut trees: Vec<TreeSummary> = FALLBACK_TREES.iter().map(TreeSummary::from).collect();
    sort_by_name(&mut trees);
    trees
}

pub fn sort_by_name(trees: &mut [TreeSummary]) {
    trees.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(feature = "api")]
pub use resolve::resolve_catalog;

#[cfg(feature = "api")]
mod resolve {
    use super::{fallback_catalog, sort_by_name};
    use crate::content::types::TreeSummary;
    use crate::store::TreeStore;

    /// Catalog for the landing page. Never fails: an empty or failed query
    /// both yield the built-in list.
    pub async fn resolve_catalog(store: &dyn TreeStore) -> Vec<TreeSummary> {
        let rows = match store.list_trees().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Catalog query failed, serving built-in list: {}", e);
                Vec::new()
            }
        };

        if rows.is_empty() {
            tracing::debug!("Catalog empty, serving {} built-in trees", super::FALLBACK_TREES.len());
            return fallback_catalog();
        }

        let mut trees: Vec<TreeSummary> = rows.into_iter().map(TreeSummary::from).collect();
        sort_by_name(&mut trees);
        trees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_fifteen_sorted_entries() {
        let trees = fallback_catalog();
        assert_eq!(trees.len(), 15);
        assert!(trees.windows(2).all(|w| w[0].name <= w[1].name));
        assert_eq!(trees[0].id, "acacia");
        assert_eq!(trees[14].id, "umbrella-tree");
    }

    #[test]
    fn test_fallback_entries_use_the_shipped_placeholder() {
        assert!(fallback_catalog().iter().all(|t| t.image_url.is_none()));
    }

    #[test]
    fn test_fallback_ids_are_unique() {
        let mut ids: Vec<&str> = FALLBACK_TREES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FALLBACK_TREES.len());
    }
}
