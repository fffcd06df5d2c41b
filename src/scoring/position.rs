/*!
 * Position and attribution weighted scorer ("harvard").
 *
 * Scores a text unit by where partisan language appears and how it is
 * sourced. Each sentence's lexicon lean is multiplied by a position weight
 * (headline > lead > body) and an attribution weight (quoted >
 * unattributed); the unit score is the weighted mean over every sentence.
 * Phrase-free sentences lean 0.0 but still contribute their weight to the
 * denominator, so a lone hit in a long neutral text is not over-amplified.
 */

use log::debug;

use crate::errors::ScorerError;
use crate::lexicon::PhraseLexicon;
use crate::scoring::weights::{AttributionWeights, PositionWeights};
use crate::scoring::{Methodology, MethodologyScore, ScoreDetail};
use crate::segmenter::TextUnit;

/// Position/attribution weighted methodology scorer
#[derive(Debug, Clone, Default)]
pub struct PositionScorer {
    position: PositionWeights,
    attribution: AttributionWeights,
}

impl PositionScorer {
    /// Create a scorer with the canonical weight ratios (3:2:1 and 2:1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom weight tables
    pub fn with_weights(position: PositionWeights, attribution: AttributionWeights) -> Self {
        PositionScorer {
            position,
            attribution,
        }
    }

    /// Score a text unit.
    ///
    /// An empty unit scores a neutral 0.000. Invalid weight tables are a
    /// scorer failure, never silently ignored.
    pub fn score(
        &self,
        unit: &TextUnit,
        lexicon: &PhraseLexicon,
    ) -> Result<MethodologyScore, ScorerError> {
        self.position.validate()?;
        self.attribution.validate()?;

        let mut weighted_lean = 0.0;
        let mut total_weight = 0.0;
        let mut partisan_sentences = 0;

        for sentence in unit.sentences() {
            let weight = self.position.weight_for(sentence.position)
                * self.attribution.weight_for(sentence.attribution);
            let lean = lexicon.lean(&sentence.tokens);

            if lean != 0.0 {
                partisan_sentences += 1;
            }
            weighted_lean += lean * weight;
            total_weight += weight;
        }

        let score = if total_weight > 0.0 {
            weighted_lean / total_weight
        } else {
            0.0
        };

        debug!(
            "Position score {:.3} over {} sentences ({} partisan)",
            score,
            unit.sentences().len(),
            partisan_sentences
        );

        Ok(MethodologyScore::new(
            Methodology::Harvard,
            score,
            ScoreDetail::Position {
                partisan_sentences,
                scored_sentences: unit.sentences().len(),
                total_weight,
            },
        ))
    }
}
