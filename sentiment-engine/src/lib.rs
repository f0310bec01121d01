pub mod lexicon;
pub mod vader;

pub use lexicon::Lexicon;
pub use vader::{PolarityScores, VaderScorer};

use moodscan_core::{Post, ScoredPost};

/// Scores text into a compound polarity in `[-1.0, 1.0]`.
///
/// Implementations must be deterministic for identical input.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> f64;
}

/// Annotates a post with its score and label. The post is moved into the
/// result unchanged.
pub fn classify<S: PolarityScorer + ?Sized>(scorer: &S, post: Post) -> ScoredPost {
    let score = scorer.polarity(&post.text).clamp(-1.0, 1.0);
    ScoredPost::new(post, score)
}

pub fn classify_all<S: PolarityScorer + ?Sized>(scorer: &S, posts: Vec<Post>) -> Vec<ScoredPost> {
    posts.into_iter().map(|post| classify(scorer, post)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodscan_core::Label;

    struct LengthScorer;

    impl PolarityScorer for LengthScorer {
        fn polarity(&self, text: &str) -> f64 {
            text.len() as f64 - 3.0
        }
    }

    #[test]
    fn test_classify_clamps_and_labels() {
        let scored = classify(&LengthScorer, Post::new("A", "a", "abcdef"));
        assert_eq!(scored.score, 1.0);
        assert_eq!(scored.label, Label::Positive);
        assert_eq!(scored.post.text, "abcdef");

        let scored = classify(&LengthScorer, Post::new("A", "a", "abc"));
        assert_eq!(scored.label, Label::Neutral);
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let posts = vec![
            Post::new("A", "a", "good"),
            Post::new("B", "b", "bad"),
            Post::new("C", "c", "meh"),
        ];
        let scorer = VaderScorer::new();
        let scored = classify_all(&scorer, posts);

        let labels: Vec<_> = scored.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Label::Positive, Label::Negative, Label::Neutral]);
    }
}
