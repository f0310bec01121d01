use chrono::{DateTime, Utc};
use moodscan_core::{Post, ScoredPost};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Counts for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub query: String,
    /// Posts returned by the fetcher.
    pub total_tweets: usize,
    /// Duplicates and hashtag spam.
    pub removed_list: usize,
    /// Posts that survived deduplication, before the cap.
    pub clear_tweets: usize,
    /// Posts classified and exported, after the cap.
    pub sentiment_input: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportOutcome {
    Written { path: String, rows: usize },
    Failed { message: String },
}

impl ExportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub positive: Vec<ScoredPost>,
    pub negative: Vec<ScoredPost>,
    pub neutral: Vec<ScoredPost>,
    pub removed: Vec<Post>,
    pub export: ExportOutcome,
}

impl SentimentReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Console rendering of a report.
pub fn render_text(report: &SentimentReport) -> String {
    report.to_string()
}

fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn write_group(f: &mut fmt::Formatter<'_>, title: &str, posts: &[ScoredPost]) -> fmt::Result {
    writeln!(f, "{} ({})", title, posts.len())?;
    if posts.is_empty() {
        return writeln!(f, "  (none)");
    }
    for scored in posts {
        writeln!(
            f,
            "  {:+.4}  @{} ({})  {}",
            scored.score,
            scored.post.author_handle,
            scored.post.author_display_name,
            one_line(&scored.post.text)
        )?;
    }
    Ok(())
}

impl fmt::Display for SentimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "Sentiment report for \"{}\"", s.query)?;
        writeln!(
            f,
            "  run {} at {}",
            self.run_id,
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            f,
            "  fetched: {}  removed: {}  clear: {}  classified: {}",
            s.total_tweets, s.removed_list, s.clear_tweets, s.sentiment_input
        )?;
        writeln!(
            f,
            "  positive: {}  negative: {}  neutral: {}",
            s.positive, s.negative, s.neutral
        )?;
        match &self.export {
            ExportOutcome::Written { path, rows } => {
                writeln!(f, "  export: wrote {} rows to {}", rows, path)?
            }
            ExportOutcome::Failed { message } => writeln!(f, "  export: FAILED ({})", message)?,
        }
        writeln!(f)?;

        write_group(f, "Positive", &self.positive)?;
        write_group(f, "Negative", &self.negative)?;
        write_group(f, "Neutral", &self.neutral)?;

        writeln!(f, "Removed ({})", self.removed.len())?;
        for post in &self.removed {
            writeln!(
                f,
                "  @{} ({})  {}",
                post.author_handle,
                post.author_display_name,
                one_line(&post.text)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(export: ExportOutcome) -> SentimentReport {
        SentimentReport {
            run_id: Uuid::nil(),
            generated_at: Utc::now(),
            summary: Summary {
                query: "test".to_string(),
                total_tweets: 3,
                removed_list: 1,
                clear_tweets: 2,
                sentiment_input: 2,
                positive: 1,
                negative: 1,
                neutral: 0,
            },
            positive: vec![ScoredPost::new(
                Post::new("Alice", "alice", "good\n#a"),
                0.4404,
            )],
            negative: vec![ScoredPost::new(Post::new("Carl", "carl", "bad"), -0.5423)],
            neutral: Vec::new(),
            removed: vec![Post::new("Bob", "bob", "good #a")],
            export,
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_report(ExportOutcome::Written {
            path: "./output.csv".to_string(),
            rows: 2,
        }));

        assert!(text.starts_with("Sentiment report for \"test\"\n"));
        assert!(text.contains("fetched: 3  removed: 1  clear: 2  classified: 2"));
        assert!(text.contains("export: wrote 2 rows to ./output.csv"));
        assert!(text.contains("Positive (1)\n  +0.4404  @alice (Alice)  good #a\n"));
        assert!(text.contains("Negative (1)\n  -0.5423  @carl (Carl)  bad\n"));
        assert!(text.contains("Neutral (0)\n  (none)\n"));
        assert!(text.contains("Removed (1)\n  @bob (Bob)  good #a\n"));
    }

    #[test]
    fn test_render_failed_export() {
        let text = render_text(&sample_report(ExportOutcome::Failed {
            message: "permission denied".to_string(),
        }));
        assert!(text.contains("export: FAILED (permission denied)"));
    }

    #[test]
    fn test_json_field_names() {
        let report = sample_report(ExportOutcome::Written {
            path: "./output.csv".to_string(),
            rows: 2,
        });
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        let summary = &value["summary"];
        for field in [
            "query",
            "total_tweets",
            "removed_list",
            "clear_tweets",
            "sentiment_input",
            "positive",
            "negative",
            "neutral",
        ] {
            assert!(summary.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["export"]["status"], "written");
        assert_eq!(value["positive"][0]["label"], "POSITIVE");
        assert_eq!(value["removed"][0]["author_handle"], "bob");
    }
}
