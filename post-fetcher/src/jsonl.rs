use crate::records::parse_records;
use crate::PostFetcher;
use moodscan_core::{FetchError, Post};
use std::path::PathBuf;
use tracing::{debug, info};

/// Searches a scraper JSONL dump on disk.
///
/// A record matches when its text contains every query term, ignoring case.
/// Search operators such as `lang:en` are not terms; the language filter is
/// applied to the record's `lang` field when both are present.
#[derive(Debug, Clone)]
pub struct JsonlFileFetcher {
    path: PathBuf,
    language: Option<String>,
}

impl JsonlFileFetcher {
    pub fn new(path: PathBuf, language: Option<String>) -> Self {
        let language = language.filter(|lang| !lang.trim().is_empty());
        Self { path, language }
    }

    fn terms(query: &str) -> Vec<String> {
        query
            .split_whitespace()
            .filter(|term| !term.starts_with("lang:"))
            .map(str::to_lowercase)
            .collect()
    }
}

impl PostFetcher for JsonlFileFetcher {
    async fn fetch(&self, query: &str, max_count: usize) -> Result<Vec<Post>, FetchError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Source {
                path: self.path.display().to_string(),
                source,
            })?;

        let records = parse_records(&raw)?;
        debug!("Read {} records from {}", records.len(), self.path.display());

        let terms = Self::terms(query);
        let mut posts = Vec::new();
        for record in records {
            if posts.len() >= max_count {
                break;
            }
            if let (Some(wanted), Some(lang)) = (self.language.as_deref(), record.lang.as_deref()) {
                if wanted != lang {
                    continue;
                }
            }
            let text = record.text().unwrap_or_default().to_lowercase();
            if terms.iter().all(|term| text.contains(term.as_str())) {
                posts.push(Post::try_from(record)?);
            }
        }

        info!(
            "Matched {} posts for '{}' in {}",
            posts.len(),
            query,
            self.path.display()
        );
        Ok(posts)
    }
}
