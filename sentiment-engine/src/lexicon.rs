//! Sentiment lexicon.
//!
//! Word valences use the VADER scale (roughly -4.0 to 4.0). The built-in
//! table covers common English social-media vocabulary; a full VADER lexicon
//! file can be loaded in its place.

use moodscan_core::LexiconError;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const BUILTIN_VALENCES: &[(&str, f64)] = &[
    // positive
    ("good", 1.9),
    ("great", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("loving", 2.9),
    ("like", 2.0),
    ("liked", 1.8),
    ("happy", 2.7),
    ("glad", 2.0),
    ("awesome", 3.1),
    ("excellent", 3.2),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("nice", 1.8),
    ("cool", 1.3),
    ("fun", 2.3),
    ("funny", 1.9),
    ("beautiful", 2.9),
    ("lovely", 2.8),
    ("win", 2.8),
    ("won", 2.7),
    ("winning", 2.4),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("hope", 1.9),
    ("excited", 2.2),
    ("exciting", 2.2),
    ("safe", 1.9),
    ("perfect", 2.7),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("proud", 2.1),
    ("strong", 2.3),
    ("support", 1.7),
    ("helpful", 1.8),
    ("free", 2.3),
    ("easy", 1.9),
    ("fast", 1.0),
    ("yes", 1.7),
    ("lol", 2.9),
    ("haha", 2.0),
    ("wow", 2.8),
    ("favorite", 2.0),
    ("recommend", 1.5),
    ("impressive", 2.5),
    ("brilliant", 2.8),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("welcome", 2.0),
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    ("<3", 1.9),
    // negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("sad", -2.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("poor", -2.1),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("lose", -1.7),
    ("lost", -1.3),
    ("losing", -1.6),
    ("kill", -3.7),
    ("killed", -3.5),
    ("dead", -3.3),
    ("death", -2.9),
    ("war", -2.9),
    ("crisis", -3.1),
    ("disaster", -3.1),
    ("crash", -1.7),
    ("scam", -2.5),
    ("fraud", -2.8),
    ("ugly", -2.3),
    ("boring", -1.3),
    ("stupid", -2.4),
    ("fear", -2.2),
    ("scared", -1.9),
    ("worried", -1.2),
    ("problem", -1.7),
    ("problems", -1.7),
    ("wrong", -2.1),
    ("broken", -2.0),
    ("bug", -1.4),
    ("slow", -1.0),
    ("sorry", -0.3),
    ("no", -1.2),
    ("pain", -2.3),
    ("hurt", -2.4),
    ("sick", -2.3),
    ("useless", -1.8),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("ridiculous", -1.5),
    ("trash", -1.6),
    ("rip", -1.2),
    ("wtf", -2.8),
    (":(", -1.9),
    (":-(", -1.5),
];

/// Intensity modifiers: positive values boost, negative values dampen.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("super", 0.293),
    ("totally", 0.293),
    ("very", 0.293),
    ("most", 0.293),
    ("more", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("little", -0.293),
    ("marginally", -0.293),
    ("partly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "shant", "shouldnt", "wasnt", "werent", "without", "wont",
    "wouldnt",
];

#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        let valences = BUILTIN_VALENCES
            .iter()
            .map(|(word, valence)| (word.to_string(), *valence))
            .collect();
        Self::with_valences(valences)
    }

    /// Parses a VADER-format lexicon: `token<TAB>mean<TAB>...` per line.
    pub fn parse(raw: &str) -> Result<Self, LexiconError> {
        let mut valences = HashMap::new();
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next().map(str::trim).filter(|t| !t.is_empty());
            let valence = fields
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite());
            match (token, valence) {
                (Some(token), Some(valence)) => {
                    valences.insert(token.to_lowercase(), valence);
                }
                _ => {
                    return Err(LexiconError::MalformedEntry {
                        line: index + 1,
                        content: line.to_string(),
                    })
                }
            }
        }
        Ok(Self::with_valences(valences))
    }

    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let lexicon = Self::parse(&raw)?;
        if lexicon.is_empty() {
            return Err(LexiconError::Empty {
                path: path.display().to_string(),
            });
        }
        info!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    fn with_valences(valences: HashMap<String, f64>) -> Self {
        Self {
            valences,
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Valence of a lowercased token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    pub fn booster(&self, token: &str) -> Option<f64> {
        self.boosters.get(token).copied()
    }

    pub fn is_negation(&self, token: &str) -> bool {
        let bare: String = token.chars().filter(|c| *c != '\'').collect();
        NEGATIONS.contains(&bare.as_str()) || token.contains("n't")
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
