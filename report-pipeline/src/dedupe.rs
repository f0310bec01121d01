//! Duplicate and hashtag-spam filtering.

use moodscan_core::Post;
use std::collections::HashSet;

/// Posts with more hashtags than this are treated as spam.
pub const MAX_HASHTAGS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub kept: Vec<Post>,
    pub removed: Vec<Post>,
}

pub fn hashtag_count(text: &str) -> usize {
    text.matches('#').count()
}

/// Splits posts into kept and removed, preserving input order in both.
///
/// A post is removed when its exact text was already kept, or when it carries
/// more than [`MAX_HASHTAGS`] hashtags. Spam texts are never recorded as seen,
/// so they cannot shadow a later post.
pub fn dedupe(posts: Vec<Post>) -> Partition {
    let mut seen: HashSet<String> = HashSet::with_capacity(posts.len());
    let mut partition = Partition::default();

    for post in posts {
        if seen.contains(&post.text) {
            partition.removed.push(post);
        } else if hashtag_count(&post.text) <= MAX_HASHTAGS {
            seen.insert(post.text.clone());
            partition.kept.push(post);
        } else {
            partition.removed.push(post);
        }
    }

    partition
}

/// Keeps the first `cap` posts. The rest are dropped, not removed.
pub fn cap_kept(mut kept: Vec<Post>, cap: usize) -> Vec<Post> {
    kept.truncate(cap);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(handle: &str, text: &str) -> Post {
        Post::new(handle.to_uppercase(), handle, text)
    }

    #[test]
    fn test_hashtag_count() {
        assert_eq!(hashtag_count("no tags"), 0);
        assert_eq!(hashtag_count("#a #b ##c"), 4);
    }

    #[test]
    fn test_first_occurrence_kept() {
        let partition = dedupe(vec![
            post("a", "good #a"),
            post("b", "good #a"),
            post("c", "bad"),
        ]);

        assert_eq!(partition.kept, vec![post("a", "good #a"), post("c", "bad")]);
        assert_eq!(partition.removed, vec![post("b", "good #a")]);
    }

    #[test]
    fn test_hashtag_threshold() {
        let five = "#1 #2 #3 #4 #5";
        let six = "#1 #2 #3 #4 #5 #6";
        let partition = dedupe(vec![post("a", five), post("b", six)]);

        assert_eq!(partition.kept, vec![post("a", five)]);
        assert_eq!(partition.removed, vec![post("b", six)]);
    }

    #[test]
    fn test_spam_always_removed_once() {
        let spam = "#a#b#c#d#e#f buy now";
        let partition = dedupe(vec![
            post("a", spam),
            post("b", spam),
            post("c", "hello"),
        ]);

        assert!(partition.kept.iter().all(|p| p.text != spam));
        assert_eq!(partition.removed.len(), 2);
        assert_eq!(partition.kept.len(), 1);
    }

    #[test]
    fn test_partition_preserves_every_post_in_order() {
        let input: Vec<Post> = (0..40)
            .map(|i| {
                let text = match i % 4 {
                    0 => format!("post {}", i / 8),
                    1 => "#x".repeat(i % 9),
                    2 => "same".to_string(),
                    _ => format!("unique {}", i),
                };
                post(&format!("u{}", i), &text)
            })
            .collect();

        let partition = dedupe(input.clone());
        assert_eq!(partition.kept.len() + partition.removed.len(), input.len());

        let mut kept = partition.kept.iter().peekable();
        let mut removed = partition.removed.iter().peekable();
        for original in &input {
            if kept.peek() == Some(&original) {
                kept.next();
            } else {
                assert_eq!(removed.next(), Some(original));
            }
        }
        assert!(kept.next().is_none());

        let texts: HashSet<&str> = partition.kept.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts.len(), partition.kept.len());
        assert!(partition
            .kept
            .iter()
            .all(|p| hashtag_count(&p.text) <= MAX_HASHTAGS));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(dedupe(Vec::new()), Partition::default());
    }

    #[test]
    fn test_cap_kept() {
        let kept: Vec<Post> = (0..150).map(|i| post("u", &format!("post {i}"))).collect();
        let forwarded = cap_kept(kept, 100);
        assert_eq!(forwarded.len(), 100);
        assert_eq!(forwarded[99].text, "post 99");

        let short = cap_kept(vec![post("u", "one")], 100);
        assert_eq!(short.len(), 1);
    }
}
