use moodscan_core::{Label, ScoredPost};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// Highest score first.
    pub positive: Vec<ScoredPost>,
    /// Most negative first.
    pub negative: Vec<ScoredPost>,
    /// Ascending by score.
    pub neutral: Vec<ScoredPost>,
}

/// Groups posts by label and orders each group. Sorting is stable, so posts
/// with equal scores keep their input order.
pub fn rank(scored: Vec<ScoredPost>) -> Ranking {
    let mut ranking = Ranking::default();

    for post in scored {
        match post.label {
            Label::Positive => ranking.positive.push(post),
            Label::Negative => ranking.negative.push(post),
            Label::Neutral => ranking.neutral.push(post),
        }
    }

    ranking
        .positive
        .sort_by(|a, b| b.score.total_cmp(&a.score));
    ranking
        .negative
        .sort_by(|a, b| a.score.total_cmp(&b.score));
    ranking
        .neutral
        .sort_by(|a, b| a.score.total_cmp(&b.score));

    ranking
}
