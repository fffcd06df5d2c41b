/*!
 * Composite combiner.
 *
 * Folds exactly four methodology scores into the final bias score:
 * weighted sum, clamp to [-1.000, +1.000], round to 3 decimals, band lookup.
 *
 * Rounding mode is round-half-away-from-zero (`f64::round` semantics); the
 * choice is fixed here because it decides which band a boundary-exact score
 * lands in.
 */

use crate::errors::ScorerError;
use crate::scoring::weights::{BandTable, BiasLabel, MethodologyWeights};
use crate::scoring::{round_to_3dp, Methodology, MethodologyScore};

/// The four methodology scores, one per slot.
///
/// The struct shape guarantees the combiner always receives exactly four
/// scores; slot/methodology agreement is still checked so a misrouted score
/// fails loudly instead of skewing the composite.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MethodologyScores {
    /// Position/attribution score
    pub harvard: MethodologyScore,
    /// Phrase frequency score
    pub columbia: MethodologyScore,
    /// Indicator score
    pub allsides: MethodologyScore,
    /// Sentiment score
    pub sentiment: MethodologyScore,
}

impl MethodologyScores {
    fn check_slots(&self) -> Result<(), ScorerError> {
        let slots = [
            (Methodology::Harvard, &self.harvard),
            (Methodology::Columbia, &self.columbia),
            (Methodology::AllSides, &self.allsides),
            (Methodology::Sentiment, &self.sentiment),
        ];
        for (expected, score) in slots {
            if score.methodology != expected {
                return Err(ScorerError::MethodologyMismatch {
                    expected: expected.as_str(),
                    actual: score.methodology.as_str(),
                });
            }
        }
        Ok(())
    }
}

/// The terminal analysis artifact: weighted, rounded, banded
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompositeResult {
    /// Composite bias score in [-1.000, +1.000], 3 decimals
    pub bias_score: f64,
    /// Band label for the composite score
    pub bias_label: BiasLabel,
    /// The four methodology scores that produced it
    pub scores: MethodologyScores,
}

/// Composite score combiner
#[derive(Debug, Clone, Default)]
pub struct Combiner {
    weights: MethodologyWeights,
    bands: BandTable,
}

impl Combiner {
    /// Create a combiner with the canonical weights and band table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a combiner with custom tables
    pub fn with_tables(weights: MethodologyWeights, bands: BandTable) -> Self {
        Combiner { weights, bands }
    }

    /// Combine four methodology scores into the composite result.
    ///
    /// The methodology scores arrive already rounded to 3 decimals, so the
    /// published composite is exactly the weighted sum of the published
    /// per-methodology values.
    pub fn combine(&self, scores: MethodologyScores) -> Result<CompositeResult, ScorerError> {
        self.weights.validate()?;
        scores.check_slots()?;

        let raw = self.weights.harvard * scores.harvard.score
            + self.weights.columbia * scores.columbia.score
            + self.weights.allsides * scores.allsides.score
            + self.weights.sentiment * scores.sentiment.score;

        let bias_score = round_to_3dp(raw.clamp(-1.0, 1.0));
        let bias_label = self.bands.classify(bias_score);

        Ok(CompositeResult {
            bias_score,
            bias_label,
            scores,
        })
    }
}
