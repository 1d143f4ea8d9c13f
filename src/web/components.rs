//! Page components rendered by the `partials/` templates.
//!
//! The server renders the markup and its parameters (section anchors, scroll
//! threshold). Open/closed and shown/hidden state lives in the inline scripts
//! of the partials.

use crate::content::icons::{LEAF_SVG, TREE_PINE_SVG, USERS_SVG};

// ============================================================================
// Mobile Navigation Drawer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    /// In-page section id
    pub anchor: &'static str,
    pub icon_svg: &'static str,
}

pub static NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Home", anchor: "hero", icon_svg: LEAF_SVG },
    NavEntry { label: "Discover Trees", anchor: "trees", icon_svg: TREE_PINE_SVG },
    NavEntry { label: "About Us", anchor: "about", icon_svg: USERS_SVG },
];

/// Drawer contents. It always renders closed; the partial's script opens it
/// and closes it again when an entry is picked.
#[derive(Debug, Clone, Default)]
pub struct MobileNav;

impl MobileNav {
    pub fn new() -> Self {
        Self
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        NAV_ENTRIES
    }

    pub fn mission_href(&self) -> &'static str {
        "/about"
    }

    pub fn brand_svg(&self) -> &'static str {
        LEAF_SVG
    }
}

// ============================================================================
// Scroll-to-top Button
// ============================================================================

pub const SCROLL_THRESHOLD_PX: u32 = 300;

/// Rendered hidden; shown by the partial's script once the page has scrolled
/// strictly past `threshold` pixels.
#[derive(Debug, Clone)]
pub struct ScrollToTop {
    threshold: u32,
}

impl Default for ScrollToTop {
    fn default() -> Self {
        Self { threshold: SCROLL_THRESHOLD_PX }
    }
}

impl ScrollToTop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub badge: &'static str,
    pub year: i32,
}

impl Footer {
    pub const BADGE: &'static str = "UNP CBAA EcoTag";

    pub fn for_year(year: i32) -> Self {
        Self { badge: Self::BADGE, year }
    }

    pub fn current() -> Self {
        use chrono::Datelike;
        Self::for_year(chrono::Utc::now().year())
    }

    pub fn badge_svg(&self) -> &'static str {
        LEAF_SVG
    }

    pub fn copyright(&self) -> String {
        format!("© {} University of Northern Philippines. All rights reserved.", self.year)
    }
}
