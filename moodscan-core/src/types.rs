use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// A fetched post. Read-only once the fetcher hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub author_display_name: String,
    pub author_handle: String,
    pub text: String,
}

impl Post {
    pub fn new(
        author_display_name: impl Into<String>,
        author_handle: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            author_display_name: author_display_name.into(),
            author_handle: author_handle.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// The only place score thresholds are applied.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Label::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "POSITIVE",
            Label::Negative => "NEGATIVE",
            Label::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post annotated with its compound score and the label derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    pub post: Post,
    pub score: f64,
    pub label: Label,
}

impl ScoredPost {
    pub fn new(post: Post, score: f64) -> Self {
        Self {
            post,
            score,
            label: Label::from_score(score),
        }
    }

    /// `"<LABEL> <score>"`, the form written to the export file.
    pub fn label_string(&self) -> String {
        format!("{} {}", self.label, self.score)
    }
}
