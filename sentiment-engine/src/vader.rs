//! Rule-based compound sentiment in the style of VADER.
//!
//! Each token gets a lexicon valence, adjusted by the words before it
//! (boosters, negations), capitalisation, a contrastive "but" and trailing
//! punctuation. The valences are summed and squashed into `[-1, 1]`.

use crate::lexicon::Lexicon;
use crate::PolarityScorer;
use moodscan_core::LexiconError;
use serde::Serialize;
use std::path::Path;

/// Added to a sentiment word written in caps when the rest of the text isn't.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a valence preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalisation constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
/// How far back boosters and negations reach.
const LOOKBACK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone, Default)]
pub struct VaderScorer {
    lexicon: Lexicon,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn from_lexicon_file(path: &Path) -> Result<Self, LexiconError> {
        Ok(Self::with_lexicon(Lexicon::from_file(path)?))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn scores(&self, text: &str) -> PolarityScores {
        let tokens: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps_differ = caps_differ(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let lower = lowered[i].as_str();
            let kind_of = lower == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of");
            if self.lexicon.booster(lower).is_some() || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(i, &tokens, &lowered, caps_differ));
        }
        apply_but_rule(&lowered, &mut sentiments);

        score_valence(&sentiments, text)
    }

    fn valence_at(&self, i: usize, tokens: &[&str], lowered: &[String], caps_differ: bool) -> f64 {
        let Some(mut valence) = self.lexicon.valence(&lowered[i]) else {
            return 0.0;
        };

        if caps_differ && is_upper(tokens[i]) {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 0..LOOKBACK.min(i) {
            let j = i - (distance + 1);
            if self.lexicon.contains(&lowered[j]) {
                continue;
            }
            let mut scalar = self.booster_scalar(tokens[j], &lowered[j], valence, caps_differ);
            match distance {
                1 => scalar *= 0.95,
                2 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            if self.lexicon.is_negation(&lowered[j]) {
                valence *= NEGATION_SCALAR;
            }
        }
        valence
    }

    fn booster_scalar(&self, token: &str, lower: &str, valence: f64, caps_differ: bool) -> f64 {
        let Some(mut scalar) = self.lexicon.booster(lower) else {
            return 0.0;
        };
        if valence < 0.0 {
            scalar = -scalar;
        }
        if caps_differ && is_upper(token) {
            scalar += if valence > 0.0 {
                CAPS_INCREMENT
            } else {
                -CAPS_INCREMENT
            };
        }
        scalar
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> f64 {
        self.scores(text).compound
    }
}

/// Strips surrounding punctuation unless that leaves two characters or
/// fewer, which keeps emoticons like `:)` intact.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

fn caps_differ(tokens: &[&str]) -> bool {
    let upper = tokens.iter().filter(|t| is_upper(t)).count();
    upper > 0 && upper < tokens.len()
}

/// Sentiment before "but" is halved, sentiment after it weighs 1.5x.
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    if let Some(but) = lowered.iter().position(|t| t == "but") {
        for (i, sentiment) in sentiments.iter_mut().enumerate() {
            if i < but {
                *sentiment *= 0.5;
            } else if i > but {
                *sentiment *= 1.5;
            }
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: 0.0,
        };
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = round_to(normalize(sum), 4);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return PolarityScores {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound,
        };
    }

    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        VaderScorer::new().polarity(text)
    }

    #[test]
    fn test_single_words() {
        assert_eq!(compound("good"), 0.4404);
        assert_eq!(compound("bad"), -0.5423);
        assert_eq!(compound("the table is brown"), 0.0);
        assert_eq!(compound(""), 0.0);
    }

    #[test]
    fn test_hashtag_tokens() {
        // "#a" keeps its punctuation and is not a lexicon word.
        assert_eq!(compound("good #a"), 0.4404);
        assert_eq!(compound("#good"), 0.4404);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound("not good") < -0.1);
        assert!(compound("isn't bad") > 0.1);
        assert!(compound("never really good") < 0.0);
    }

    #[test]
    fn test_boosters() {
        assert!(compound("very good") > compound("good"));
        assert!(compound("slightly good") < compound("good"));
        assert!(compound("very bad") < compound("bad"));
    }

    #[test]
    fn test_caps_emphasis() {
        assert!(compound("GOOD day") > compound("good day"));
        // All-caps text gets no extra emphasis.
        assert_eq!(compound("GOOD"), compound("good"));
    }

    #[test]
    fn test_but_rule() {
        assert!(compound("the food was good but the service was bad") < 0.0);
        assert!(compound("the food was bad but the service was good") > 0.0);
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert!(compound("good!!!") > compound("good"));
        assert_eq!(compound("good!!!!!!"), compound("good!!!!"));
        assert!(compound("bad??") < compound("bad"));
    }

    #[test]
    fn test_emoticons() {
        assert!(compound("see you :)") > 0.1);
        assert!(compound("see you :(") < -0.1);
    }

    #[test]
    fn test_compound_bounds() {
        let text = "great great great great great great great great!!!!";
        let score = compound(text);
        assert!(score <= 1.0 && score > 0.9);
    }

    #[test]
    fn test_deterministic() {
        let scorer = VaderScorer::new();
        let text = "Not sure this is GOOD, but it is really fun!";
        assert_eq!(scorer.polarity(text), scorer.polarity(text));
    }

    #[test]
    fn test_proportions() {
        let scores = VaderScorer::new().scores("good table");
        assert!(scores.pos > 0.0);
        assert!(scores.neu > 0.0);
        assert_eq!(scores.neg, 0.0);
        assert!((scores.pos + scores.neu + scores.neg - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::parse("splendid\t2.8\t0.4\t[3]").unwrap();
        let scorer = VaderScorer::with_lexicon(lexicon);
        assert_eq!(scorer.lexicon().len(), 1);
        assert_eq!(scorer.lexicon().valence("splendid"), Some(2.8));
        assert!(scorer.polarity("splendid") > 0.1);
        assert_eq!(scorer.polarity("good"), 0.0);
    }
}
