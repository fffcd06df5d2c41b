/*!
 * Methodology scorers and the composite combiner.
 *
 * Four independent scorers each turn a `TextUnit` into a directional
 * methodology score on the -1.000..+1.000 scale:
 * - `position`: where partisan language sits (headline/lead/body) and how it
 *   is sourced (quoted vs unattributed)
 * - `phrases`: partisan phrase frequency ratio
 * - `indicators`: multi-dimensional bias indicators (source diversity,
 *   loaded language, opinion markers)
 * - `sentiment`: lexicon polarity/subjectivity mapped onto the scale
 *
 * `combiner` folds the four scores into the final weighted, banded
 * composite; `weights` holds every constant table the scorers read.
 *
 * Scorers never read each other's output, so any evaluation order produces
 * identical results.
 */

pub mod combiner;
pub mod indicators;
pub mod phrases;
pub mod position;
pub mod sentiment;
pub mod weights;

// Re-export main types
pub use combiner::{Combiner, CompositeResult, MethodologyScores};
pub use indicators::IndicatorScorer;
pub use phrases::PhraseScorer;
pub use position::PositionScorer;
pub use sentiment::SentimentScorer;
pub use weights::{
    AttributionWeights, BandTable, BiasBand, BiasLabel, EngineWeights, IndicatorWeights,
    MethodologyWeights, PositionWeights,
};

use serde::Serialize;

/// The four scoring methodologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Methodology {
    /// Position and attribution weighting
    Harvard,
    /// Partisan phrase frequency
    Columbia,
    /// Multi-dimensional indicators
    AllSides,
    /// Sentiment polarity
    Sentiment,
}

impl Methodology {
    /// Lowercase methodology identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Methodology::Harvard => "harvard",
            Methodology::Columbia => "columbia",
            Methodology::AllSides => "allsides",
            Methodology::Sentiment => "sentiment",
        }
    }
}

/// One methodology's directional output, immutable once produced
#[derive(Debug, Clone, Serialize)]
pub struct MethodologyScore {
    /// Which methodology produced the score
    pub methodology: Methodology,
    /// Directional score in [-1.000, +1.000], rounded to 3 decimals
    pub score: f64,
    /// Per-methodology breakdown
    pub detail: ScoreDetail,
}

impl MethodologyScore {
    /// Create a score, clamping to [-1, +1] and rounding to 3 decimals
    pub fn new(methodology: Methodology, score: f64, detail: ScoreDetail) -> Self {
        MethodologyScore {
            methodology,
            score: round_to_3dp(score.clamp(-1.0, 1.0)),
            detail,
        }
    }
}

/// Breakdown detail attached to a methodology score
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDetail {
    /// Position/attribution weighting breakdown
    Position {
        /// Sentences carrying at least one phrase hit
        partisan_sentences: usize,
        /// Sentences scored in total
        scored_sentences: usize,
        /// Sum of position × attribution weights
        total_weight: f64,
    },
    /// Phrase frequency breakdown
    Phrases {
        /// Left-tagged phrase hits
        left_hits: usize,
        /// Right-tagged phrase hits
        right_hits: usize,
    },
    /// Indicator sub-scores
    Indicators {
        /// Source diversity sub-score
        source_diversity: f64,
        /// Loaded language sub-score
        loaded_language: f64,
        /// Opinion marker sub-score
        opinion_markers: f64,
        /// Distinct attributed sources found
        distinct_sources: usize,
    },
    /// Sentiment aggregates
    Sentiment {
        /// Mean polarity of matched terms
        polarity: f64,
        /// Mean subjectivity of matched terms
        subjectivity: f64,
        /// Number of matched sentiment terms
        matched_terms: usize,
    },
}

/// Round half away from zero to 3 decimal places
pub(crate) fn round_to_3dp(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
