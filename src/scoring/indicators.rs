/*!
 * Multi-dimensional indicator scorer ("allsides").
 *
 * Evaluates a fixed set of independent bias indicators and folds them into
 * one directional score via an internal weight table:
 * - source diversity: distinct attributed sources; more voices pull the
 *   sub-score toward 0
 * - loaded language: density of emotionally charged terms
 * - opinion markers: opinion-flagging constructions in nominally factual copy
 *
 * Indicators never read each other's results. Each derives its direction
 * from the shared read-only partisan lexicon and its magnitude from its own
 * signal; a missing signal maps to a neutral 0.0, never an error.
 */

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ScorerError;
use crate::lexicon::PhraseLexicon;
use crate::scoring::weights::IndicatorWeights;
use crate::scoring::{Methodology, MethodologyScore, ScoreDetail};
use crate::segmenter::TextUnit;

/// Attributed source following a reporting verb, e.g. `said Senator Hale`
static SOURCE_AFTER_VERB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?i:said|says|stated|declared|claimed|told|according to)\s+((?:[A-Z][A-Za-z'’.-]*)(?:\s+[A-Z][A-Za-z'’.-]*){0,2})",
    )
    .expect("Invalid source-after-verb regex")
});

/// Attributed source preceding a reporting verb, e.g. `Senator Hale said`
static SOURCE_BEFORE_VERB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"((?:[A-Z][A-Za-z'’.-]*)(?:\s+[A-Z][A-Za-z'’.-]*){0,2})\s+(?i:said|says|stated|declared|claimed|argued|noted|added|told)\b",
    )
    .expect("Invalid source-before-verb regex")
});

/// Capitalized words that are not source names
const SOURCE_STOPWORDS: &[&str] = &["he", "she", "they", "it", "we", "i", "who", "the", "a", "an"];

/// Emotionally charged terms counted by the loaded-language indicator
const LOADED_TERMS: &[&str] = &[
    "shocking", "stunning", "outrageous", "devastating", "disaster", "catastrophe", "chaos",
    "scandal", "corrupt", "radical", "extremist", "slams", "blasts", "destroys", "fury",
    "outrage", "horrific", "explosive", "disgraceful", "bombshell", "shameful", "reckless",
    "betrayal", "disgrace",
];

/// Opinion-marking constructions counted by the opinion indicator
const OPINION_MARKERS: &[&str] = &[
    "i believe",
    "in my opinion",
    "without question",
    "it is clear",
    "everyone knows",
    "no doubt",
    "of course",
    "clearly",
    "obviously",
    "undoubtedly",
    "certainly",
    "frankly",
];

static OPINION_MARKER_TOKENS: Lazy<Vec<Vec<&'static str>>> = Lazy::new(|| {
    OPINION_MARKERS
        .iter()
        .map(|m| m.split_whitespace().collect())
        .collect()
});

/// Multi-dimensional indicator methodology scorer
#[derive(Debug, Clone, Default)]
pub struct IndicatorScorer {
    weights: IndicatorWeights,
}

impl IndicatorScorer {
    /// Create a scorer with the canonical indicator weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with a custom indicator weight table
    pub fn with_weights(weights: IndicatorWeights) -> Self {
        IndicatorScorer { weights }
    }

    /// Score a text unit across the indicator set.
    pub fn score(
        &self,
        unit: &TextUnit,
        lexicon: &PhraseLexicon,
    ) -> Result<MethodologyScore, ScorerError> {
        self.weights.validate()?;

        let sources = distinct_sources(unit);
        let source_diversity = source_diversity_score(unit, lexicon, sources.len());
        let loaded_language = loaded_language_score(unit, lexicon);
        let opinion_markers = opinion_marker_score(unit, lexicon);

        let score = self.weights.source_diversity * source_diversity
            + self.weights.loaded_language * loaded_language
            + self.weights.opinion_markers * opinion_markers;

        Ok(MethodologyScore::new(
            Methodology::AllSides,
            score,
            ScoreDetail::Indicators {
                source_diversity,
                loaded_language,
                opinion_markers,
                distinct_sources: sources.len(),
            },
        ))
    }
}

/// Distinct attributed source names across all sentences, normalized to
/// lowercase with trailing punctuation stripped.
fn distinct_sources(unit: &TextUnit) -> BTreeSet<String> {
    let mut sources = BTreeSet::new();
    for sentence in unit.sentences() {
        for regex in [&*SOURCE_AFTER_VERB_REGEX, &*SOURCE_BEFORE_VERB_REGEX] {
            for captures in regex.captures_iter(&sentence.text) {
                if let Some(name) = captures.get(1) {
                    let normalized = name
                        .as_str()
                        .trim_end_matches(['.', ',', ':', ';', '\'', '"'])
                        .to_lowercase();
                    if !normalized.is_empty() && !SOURCE_STOPWORDS.contains(&normalized.as_str()) {
                        sources.insert(normalized);
                    }
                }
            }
        }
    }
    sources
}

/// Direction of the quoted material, damped by how many voices carry it.
/// No attributed sources at all is a missing signal and scores 0.0.
fn source_diversity_score(unit: &TextUnit, lexicon: &PhraseLexicon, source_count: usize) -> f64 {
    if source_count == 0 {
        return 0.0;
    }
    let direction = lexicon.direction(&unit.quoted_tokens());
    direction / (1.0 + source_count as f64)
}

/// Loaded-term density per 100 tokens, capped, signed by the whole-text lean.
fn loaded_language_score(unit: &TextUnit, lexicon: &PhraseLexicon) -> f64 {
    let tokens = unit.flat_tokens();
    if tokens.is_empty() {
        return 0.0;
    }
    let count = tokens
        .iter()
        .filter(|t| LOADED_TERMS.contains(&t.as_str()))
        .count();
    if count == 0 {
        return 0.0;
    }
    let density = 100.0 * count as f64 / tokens.len() as f64;
    let magnitude = (density / 10.0).min(1.0);
    lexicon.direction(&tokens) * magnitude
}

/// Opinion-marker frequency, capped, signed by the whole-text lean.
fn opinion_marker_score(unit: &TextUnit, lexicon: &PhraseLexicon) -> f64 {
    let tokens = unit.flat_tokens();
    let count = count_marker_hits(&tokens);
    if count == 0 {
        return 0.0;
    }
    let magnitude = (0.2 * count as f64).min(1.0);
    lexicon.direction(&tokens) * magnitude
}

/// Count non-overlapping opinion-marker occurrences in a token stream
fn count_marker_hits(tokens: &[String]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < tokens.len() {
        let matched = OPINION_MARKER_TOKENS.iter().find(|marker| {
            i + marker.len() <= tokens.len()
                && marker.iter().zip(&tokens[i..]).all(|(a, b)| *a == b)
        });
        match matched {
            Some(marker) => {
                count += 1;
                i += marker.len();
            }
            None => i += 1,
        }
    }
    count
}
