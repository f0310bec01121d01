//! Wire format of scraped tweets.
//!
//! Scraper dumps carry the post text as `rawContent` (newer releases) or
//! `content` (older ones), and the author under `user`. Search services wrap
//! the same records in a JSON array, an envelope object, or emit JSON lines.

use moodscan_core::{FetchError, Post};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedUser {
    pub username: String,
    #[serde(default)]
    pub displayname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPost {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "rawContent")]
    pub raw_content: Option<String>,
    pub user: ScrapedUser,
    #[serde(default)]
    pub lang: Option<String>,
}

impl ScrapedPost {
    pub fn text(&self) -> Option<&str> {
        self.raw_content.as_deref().or(self.content.as_deref())
    }
}

impl TryFrom<ScrapedPost> for Post {
    type Error = FetchError;

    fn try_from(record: ScrapedPost) -> Result<Self, Self::Error> {
        let text = record
            .text()
            .ok_or_else(|| FetchError::InvalidResponse {
                details: format!("post by @{} has no text", record.user.username),
            })?
            .to_string();
        let display_name = record
            .user
            .displayname
            .clone()
            .unwrap_or_else(|| record.user.username.clone());

        Ok(Post {
            author_display_name: display_name,
            author_handle: record.user.username,
            text,
        })
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(alias = "tweets", alias = "data")]
    posts: Vec<ScrapedPost>,
}

/// Parses a response body or dump file into records, preserving order.
pub fn parse_records(body: &str) -> Result<Vec<ScrapedPost>, FetchError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| FetchError::InvalidResponse {
            details: format!("malformed post array: {}", e),
        });
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope>(trimmed) {
        return Ok(envelope.posts);
    }

    trimmed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| FetchError::InvalidResponse {
                details: format!("line {}: {}", index + 1, e),
            })
        })
        .collect()
}
