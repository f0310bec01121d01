pub mod api;
pub mod jsonl;
pub mod records;


pub use api::HttpSearchFetcher;
pub use jsonl::JsonlFileFetcher;
pub use records::{parse_records, ScrapedPost, ScrapedUser};

use moodscan_core::{
    ConfigError, CoreError, FetchConfig, FetchError, FetchSourceKind, Post,
};

/// Source of raw posts for a search query.
///
/// Implementations return at most `max_count` posts in source order. An empty
/// result is not an error at this level.
pub trait PostFetcher {
    async fn fetch(&self, query: &str, max_count: usize) -> Result<Vec<Post>, FetchError>;
}

/// Builds the query sent to the search backend, appending the language
/// operator when one is configured.
pub fn build_search_query(query: &str, language: Option<&str>) -> String {
    match language {
        Some(lang) if !lang.trim().is_empty() => format!("{} lang:{}", query.trim(), lang.trim()),
        _ => query.trim().to_string(),
    }
}

/// The fetcher selected by configuration.
#[derive(Debug)]
pub enum FetchSource {
    Http(HttpSearchFetcher),
    Jsonl(JsonlFileFetcher),
}

impl FetchSource {
    pub fn from_config(config: &FetchConfig) -> Result<Self, CoreError> {
        match config.source {
            FetchSourceKind::Http => Ok(FetchSource::Http(HttpSearchFetcher::new(config)?)),
            FetchSourceKind::Jsonl => {
                let path = config
                    .dump_path
                    .clone()
                    .ok_or_else(|| ConfigError::MissingField {
                        field: "fetch.dump_path".to_string(),
                    })?;
                Ok(FetchSource::Jsonl(JsonlFileFetcher::new(
                    path,
                    config.language.clone(),
                )))
            }
        }
    }
}

impl PostFetcher for FetchSource {
    async fn fetch(&self, query: &str, max_count: usize) -> Result<Vec<Post>, FetchError> {
        match self {
            FetchSource::Http(fetcher) => fetcher.fetch(query, max_count).await,
            FetchSource::Jsonl(fetcher) => fetcher.fetch(query, max_count).await,
        }
    }
}
