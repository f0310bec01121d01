use crate::error::*;
use tracing::{error, info, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Fetch(e) => {
                error!("Fetch error details: {:?}", e);
            }
            CoreError::Export(e) => {
                error!("Export error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            CoreError::Lexicon(e) => {
                error!("Lexicon error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::EmptyQuery => "Please enter a search keyword.".to_string(),
            CoreError::Fetch(e) => e.user_friendly_message(),
            CoreError::Export(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Lexicon(e) => e.user_friendly_message(),
            CoreError::Io(_) => "A file operation failed. Please try again.".to_string(),
            CoreError::Serialization(_) => {
                "The report could not be serialized.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::EmptyQuery => "EMPTY_QUERY".to_string(),
            CoreError::Fetch(_) => "FETCH".to_string(),
            CoreError::Export(_) => "EXPORT".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Lexicon(_) => "LEXICON".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
        }
    }
}

impl ErrorExt for FetchError {
    fn log_error(&self) -> &Self {
        error!("FetchError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("FetchError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            FetchError::NoResults { query } => {
                format!("No posts found for '{}' or fetching failed.", query)
            }
            FetchError::Timeout { .. } => {
                "The search service took too long to answer. Please try again.".to_string()
            }
            FetchError::Source { path, .. } => {
                format!("Could not read posts from {}.", path)
            }
            _ => "Fetching posts failed. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            FetchError::NoResults { .. } => "FETCH_NO_RESULTS".to_string(),
            FetchError::Network(_) => "FETCH_NETWORK".to_string(),
            FetchError::Timeout { .. } => "FETCH_TIMEOUT".to_string(),
            FetchError::Status { .. } => "FETCH_STATUS".to_string(),
            FetchError::InvalidResponse { .. } => "FETCH_INVALID_RESPONSE".to_string(),
            FetchError::Source { .. } => "FETCH_SOURCE".to_string(),
        }
    }
}

impl ErrorExt for ExportError {
    fn log_error(&self) -> &Self {
        error!("ExportError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ExportError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ExportError::Io { path, .. } => format!(
                "Could not write {}. Check the path and its permissions.",
                path
            ),
            ExportError::Csv(_) => "Writing the CSV export failed.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            ExportError::Io { .. } => "EXPORT_IO".to_string(),
            ExportError::Csv(_) => "EXPORT_CSV".to_string(),
        }
    }
}

impl ErrorExt for LexiconError {
    fn log_error(&self) -> &Self {
        error!("LexiconError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("LexiconError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            LexiconError::Io { path, .. } => format!("Could not read sentiment lexicon {}.", path),
            LexiconError::MalformedEntry { line, .. } => {
                format!("Sentiment lexicon is malformed at line {}.", line)
            }
            LexiconError::Empty { path } => format!("Sentiment lexicon {} is empty.", path),
        }
    }

    fn error_code(&self) -> String {
        match self {
            LexiconError::Io { .. } => "LEXICON_IO".to_string(),
            LexiconError::MalformedEntry { .. } => "LEXICON_MALFORMED".to_string(),
            LexiconError::Empty { .. } => "LEXICON_EMPTY".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file {} not found.", path)
            }
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
            ConfigError::MissingField { field } => {
                format!("Required configuration field '{}' is missing.", field)
            }
            ConfigError::PermissionDenied { .. } => {
                "Permission denied accessing configuration. Please check file permissions."
                    .to_string()
            }
            ConfigError::Parse(_) => {
                "Configuration file format is invalid. Please check the settings.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::MissingField { .. } => "CONFIG_MISSING_FIELD".to_string(),
            ConfigError::PermissionDenied { .. } => "CONFIG_PERMISSION_DENIED".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}

pub struct ErrorReporter {
    report_errors: bool,
    report_warnings: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            report_errors: true,
            report_warnings: true,
        }
    }

    pub fn with_error_reporting(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }

    pub fn with_warning_reporting(mut self, enabled: bool) -> Self {
        self.report_warnings = enabled;
        self
    }

    pub fn report_error(&self, error: &CoreError) {
        if self.report_errors {
            error.log_error();
            info!("Error code: {}", error.error_code());
            info!("User message: {}", error.user_friendly_message());
        }
    }

    pub fn report_warning(&self, error: &CoreError) {
        if self.report_warnings {
            error.log_warn();
            info!("Error code: {}", error.error_code());
        }
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
