//! Video link derivation.
//!
//! Stored video references are YouTube URLs in one of three shapes
//! (`/embed/ID`, `watch?v=ID`, `youtu.be/ID`). The 11-character token is
//! pulled out and used to rebuild a mobile-friendly embed URL plus a plain
//! watch link. Anything else passes through untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:embed/|watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .expect("video id pattern is valid")
});

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";
const EMBED_PARAMS: &str = "autoplay=0&mute=0&controls=1&playsinline=1&showinfo=0&rel=0&iv_load_policy=3&modestbranding=1&enablejsapi=1";

/// Derived links for the video section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoLinks {
    pub video_id: Option<String>,
    /// `src` of the embedded player
    pub embed_url: String,
    /// "Open externally" link
    pub watch_url: String,
}

impl VideoLinks {
    pub fn from_url(raw: &str) -> Self {
        match extract_video_id(raw) {
            Some(id) => Self {
                video_id: Some(id.to_string()),
                embed_url: format!("{EMBED_BASE}{id}?{EMBED_PARAMS}"),
                watch_url: format!("{WATCH_BASE}{id}"),
            },
            None => Self {
                video_id: None,
                embed_url: raw.to_string(),
                watch_url: raw.replacen("/embed/", "/watch?v=", 1),
            },
        }
    }
}

/// First 11-character token following one of the recognized URL shapes.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
