/*!
 * Partisan phrase frequency scorer ("columbia").
 *
 * A pure frequency/ratio measure over the lexicon: count left-tagged and
 * right-tagged phrase hits across the whole unit and take
 * `(right - left) / max(1, right + left)`. Position and attribution play no
 * role here; that dimension belongs to the position scorer.
 */

use crate::errors::ScorerError;
use crate::lexicon::{Lean, PhraseLexicon};
use crate::scoring::{Methodology, MethodologyScore, ScoreDetail};
use crate::segmenter::TextUnit;

/// Phrase frequency methodology scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseScorer;

impl PhraseScorer {
    /// Create a phrase scorer
    pub fn new() -> Self {
        PhraseScorer
    }

    /// Score a text unit by partisan phrase counts.
    ///
    /// Hits are collected per sentence so phrases never span a sentence
    /// boundary; the lexicon scan already guarantees longest-match and
    /// no overlap double-counting. Zero hits yield a neutral 0.000.
    pub fn score(
        &self,
        unit: &TextUnit,
        lexicon: &PhraseLexicon,
    ) -> Result<MethodologyScore, ScorerError> {
        let mut left_hits = 0;
        let mut right_hits = 0;

        for sentence in unit.sentences() {
            for hit in lexicon.scan(&sentence.tokens) {
                match hit.lean {
                    Lean::Left => left_hits += 1,
                    Lean::Right => right_hits += 1,
                }
            }
        }

        let total = left_hits + right_hits;
        let score = (right_hits as f64 - left_hits as f64) / (total.max(1) as f64);

        Ok(MethodologyScore::new(
            Methodology::Columbia,
            score,
            ScoreDetail::Phrases {
                left_hits,
                right_hits,
            },
        ))
    }
}
