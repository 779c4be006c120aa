//! Project stations
//!
//! A station is a static rectangle in the world tied to one portfolio
//! project. Walking into it and pressing interact opens the project's
//! detail modal. The metadata here is pure data; drawing it is the
//! presenter's job.

use std::fmt;
use serde::{Serialize, Deserialize};
use super::collision::Aabb;

/// Stable identifier of a station (e.g. "project-kaos")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        StationId(s.to_string())
    }
}

impl From<String> for StationId {
    fn from(s: String) -> Self {
        StationId(s)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// External link shown as a button in the detail modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: &str, href: &str) -> Self {
        Self { label: label.to_string(), href: href.to_string() }
    }
}

/// Optional media block in the detail modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Media {
    /// Screenshot, loaded as a texture from the assets folder
    Image { src: String },
    /// Video hosted elsewhere (YouTube); shown as a link to the embed URL
    Video { src: String },
}

impl Media {
    /// URL to open when the media block is clicked (None for local images)
    pub fn external_url(&self) -> Option<String> {
        match self {
            Media::Image { .. } => None,
            Media::Video { src } => Some(to_youtube_embed(src)),
        }
    }
}

/// Everything the detail modal shows for one project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StationDetail {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub media: Option<Media>,
}

#[cfg(test)]
impl StationDetail {
    /// Detail with only a title (tests)
    pub fn titled(title: &str) -> Self {
        Self { title: title.to_string(), ..Default::default() }
    }
}

/// A project station placed in the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub bounds: Aabb,
    pub detail: StationDetail,
}

/// Normalize a YouTube URL to its embeddable form.
///
/// `youtube.com/embed/...` URLs pass through, `youtu.be/<id>` short links
/// become `https://www.youtube.com/embed/<id>` (query string dropped).
/// Anything else is returned unchanged.
pub fn to_youtube_embed(url: &str) -> String {
    if url.contains("youtube.com/embed/") {
        return url.to_string();
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split(['?', '&']).next().unwrap_or_default();
        if !id.is_empty() {
            return format!("https://www.youtube.com/embed/{}", id);
        }
    }
    url.to_string()
}
