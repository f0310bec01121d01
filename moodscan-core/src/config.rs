//! Application configuration.
//!
//! Settings come from an optional TOML file, then `MOODSCAN_*` environment
//! variables, then command line flags (applied by the binary). Every field
//! has a default so an empty file is a valid configuration.

use crate::error::{ConfigError, CoreError};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_PATH: &str = "moodscan.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "./output.csv";
pub const DEFAULT_MAX_POSTS: usize = 50;
pub const DEFAULT_CAP: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchSourceKind {
    Http,
    Jsonl,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub source: FetchSourceKind,
    pub endpoint: String,
    pub dump_path: Option<PathBuf>,
    pub max_posts: usize,
    /// Appended to the query as `lang:<code>`.
    pub language: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            source: FetchSourceKind::Http,
            endpoint: "http://127.0.0.1:8000/search".to_string(),
            dump_path: None,
            max_posts: DEFAULT_MAX_POSTS,
            language: Some("en".to_string()),
            timeout_secs: 30,
            user_agent: format!("moodscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum number of kept posts forwarded to classification and export.
    pub cap: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { cap: DEFAULT_CAP }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// VADER-format lexicon file; the built-in lexicon is used when unset.
    pub lexicon_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub fetch: FetchConfig,
    pub pipeline: PipelineConfig,
    pub export: ExportConfig,
    pub sentiment: SentimentConfig,
}

impl AppConfig {
    /// Reads the TOML file at `path`. Values are checked by
    /// [`AppConfig::validate`] once every override has been applied.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CoreError::Config(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }),
            ErrorKind::PermissionDenied => CoreError::Config(ConfigError::PermissionDenied {
                path: path.display().to_string(),
            }),
            _ => CoreError::Io(e),
        })?;

        let config = Self::from_toml_str(&raw)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, CoreError> {
        match Self::load(path) {
            Err(CoreError::Config(ConfigError::FileNotFound { .. })) => {
                debug!("No configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `MOODSCAN_*` overrides read through `lookup`.
    ///
    /// All values are parsed before any is applied, so on error `self` is
    /// left untouched.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("MOODSCAN_ENDPOINT");
        let dump = lookup("MOODSCAN_DUMP_PATH");
        if endpoint.is_some() && dump.is_some() {
            return Err(ConfigError::InvalidValue {
                field: "MOODSCAN_ENDPOINT".to_string(),
                value: "cannot be combined with MOODSCAN_DUMP_PATH".to_string(),
            });
        }
        let max_posts = lookup("MOODSCAN_MAX_POSTS")
            .map(|max| parse_count("MOODSCAN_MAX_POSTS", &max))
            .transpose()?;
        let cap = lookup("MOODSCAN_CAP")
            .map(|cap| parse_count("MOODSCAN_CAP", &cap))
            .transpose()?;
        let output = lookup("MOODSCAN_OUTPUT");

        if let Some(endpoint) = endpoint {
            self.fetch.endpoint = endpoint;
            self.fetch.source = FetchSourceKind::Http;
        }
        if let Some(dump) = dump {
            self.fetch.dump_path = Some(PathBuf::from(dump));
            self.fetch.source = FetchSourceKind::Jsonl;
        }
        if let Some(max_posts) = max_posts {
            self.fetch.max_posts = max_posts;
        }
        if let Some(cap) = cap {
            self.pipeline.cap = cap;
        }
        if let Some(output) = output {
            self.export.path = PathBuf::from(output);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.max_posts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.max_posts".to_string(),
                value: "0".to_string(),
            });
        }
        if self.pipeline.cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pipeline.cap".to_string(),
                value: "0".to_string(),
            });
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }
        match self.fetch.source {
            FetchSourceKind::Http => {
                url::Url::parse(&self.fetch.endpoint).map_err(|_| ConfigError::InvalidValue {
                    field: "fetch.endpoint".to_string(),
                    value: self.fetch.endpoint.clone(),
                })?;
            }
            FetchSourceKind::Jsonl => {
                if self.fetch.dump_path.is_none() {
                    return Err(ConfigError::MissingField {
                        field: "fetch.dump_path".to_string(),
                    });
                }
            }
        }
        if self.export.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "export.path".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_count(field: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}
