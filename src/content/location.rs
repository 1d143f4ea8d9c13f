//! Location line for the hero card, read from the "Location" detail card.

use std::sync::LazyLock;

use regex::Regex;

use crate::content::types::DetailCard;

static COMING_SOON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)coming\s+soon").expect("placeholder pattern is valid"));

/// True for "information coming soon"-style placeholder text.
pub fn is_placeholder_text(text: &str) -> bool {
    COMING_SOON_RE.is_match(text)
}

/// Text of the first card titled "Location" (any case), unless it is blank or a placeholder.
pub fn location_from_details(details: &[DetailCard]) -> Option<String> {
    let card = details
        .iter()
        .find(|card| card.title.to_lowercase() == "location")?;

    let text = card.text.trim();
    if text.is_empty() || is_placeholder_text(text) {
        return None;
    }
    Some(card.text.clone())
}
