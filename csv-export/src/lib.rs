use csv::Writer;
use moodscan_core::{ExportError, ScoredPost};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(test)]
mod tests;

pub const HEADER: [&str; 4] = ["User name", "Handle", "Tweets", "NLTK"];

/// Writes classified posts to a CSV file, replacing any previous export.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the header and one row per post. Returns the number of rows.
    pub fn export(&self, posts: &[ScoredPost]) -> Result<usize, ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        write_rows(file, posts)?;

        info!("Exported {} posts to {}", posts.len(), self.path.display());
        Ok(posts.len())
    }

    fn io_error(&self, source: std::io::Error) -> ExportError {
        ExportError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

/// Writes the export table to any writer.
pub fn write_rows<W: Write>(writer: W, posts: &[ScoredPost]) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(HEADER)?;

    for scored in posts {
        let label = scored.label_string();
        writer.write_record([
            scored.post.author_display_name.as_str(),
            scored.post.author_handle.as_str(),
            scored.post.text.as_str(),
            label.as_str(),
        ])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    debug!("Wrote {} export rows", posts.len());
    Ok(())
}
