/*!
 * Lexicon-based sentiment scorer ("sentiment").
 *
 * Aggregates polarity and subjectivity over the full text from a static
 * sentiment lexicon, then maps the result onto the directional bias scale
 * with the fixed linear transform `0.5 × polarity × subjectivity`.
 *
 * Sign convention: positive polarity maps toward the right pole (+1.000),
 * negative polarity toward the left pole. Polarity is a weak proxy for
 * political direction, which is why this methodology carries the smallest
 * composite weight.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::ScorerError;
use crate::scoring::{Methodology, MethodologyScore, ScoreDetail};
use crate::segmenter::TextUnit;

/// Tokens that invert the polarity of the following sentiment term
const NEGATORS: &[&str] = &[
    "not", "never", "no", "hardly", "barely", "without", "cannot", "can't", "won't", "don't",
    "didn't", "doesn't", "isn't", "wasn't", "aren't", "weren't", "couldn't", "wouldn't",
    "shouldn't",
];

/// Sentiment terms as `(word, polarity, subjectivity)`
const SENTIMENT_TERMS: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.70, 0.60),
    ("great", 0.80, 0.75),
    ("excellent", 1.00, 1.00),
    ("outstanding", 1.00, 1.00),
    ("wonderful", 1.00, 1.00),
    ("amazing", 0.60, 0.90),
    ("remarkable", 0.75, 0.75),
    ("happy", 0.80, 1.00),
    ("hopeful", 0.50, 0.80),
    ("optimistic", 0.60, 0.80),
    ("triumph", 0.80, 0.70),
    ("thriving", 0.70, 0.70),
    ("prosperity", 0.65, 0.55),
    ("praise", 0.55, 0.60),
    ("praised", 0.55, 0.60),
    ("celebrate", 0.60, 0.65),
    ("celebrated", 0.60, 0.65),
    ("victory", 0.60, 0.50),
    ("benefit", 0.45, 0.45),
    ("beneficial", 0.55, 0.70),
    ("improve", 0.45, 0.50),
    ("improved", 0.45, 0.50),
    ("improvement", 0.45, 0.50),
    ("robust", 0.50, 0.60),
    ("relief", 0.45, 0.55),
    ("safe", 0.50, 0.55),
    ("safer", 0.55, 0.60),
    // Negative
    ("bad", -0.70, 0.65),
    ("terrible", -1.00, 1.00),
    ("awful", -1.00, 1.00),
    ("horrible", -1.00, 1.00),
    ("poor", -0.40, 0.60),
    ("worst", -1.00, 0.90),
    ("sad", -0.50, 1.00),
    ("angry", -0.55, 0.90),
    ("anger", -0.55, 0.80),
    ("fear", -0.60, 0.80),
    ("afraid", -0.60, 0.85),
    ("crisis", -0.60, 0.70),
    ("failure", -0.60, 0.65),
    ("failed", -0.60, 0.65),
    ("fail", -0.60, 0.65),
    ("threat", -0.60, 0.70),
    ("danger", -0.60, 0.70),
    ("dangerous", -0.60, 0.90),
    ("damage", -0.50, 0.60),
    ("harm", -0.60, 0.70),
    ("harmful", -0.65, 0.90),
    ("corrupt", -0.80, 0.90),
    ("scandal", -0.70, 0.80),
    ("disaster", -0.90, 0.90),
    ("devastating", -0.90, 0.95),
    ("chaos", -0.70, 0.80),
    ("violence", -0.70, 0.80),
    ("violent", -0.70, 0.90),
    ("cruel", -0.80, 0.90),
    ("toxic", -0.70, 0.80),
    ("collapse", -0.60, 0.60),
    ("decline", -0.40, 0.50),
    ("weak", -0.50, 0.70),
    ("struggling", -0.50, 0.70),
    ("suffering", -0.70, 0.80),
    ("grim", -0.60, 0.80),
    ("bleak", -0.70, 0.90),
    ("dire", -0.70, 0.90),
];

static SENTIMENT_LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    SENTIMENT_TERMS
        .iter()
        .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
        .collect()
});

/// Sentiment methodology scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentScorer;

impl SentimentScorer {
    /// Create a sentiment scorer
    pub fn new() -> Self {
        SentimentScorer
    }

    /// Score a text unit by aggregate sentiment.
    ///
    /// Polarity and subjectivity are means over matched terms; a term
    /// directly preceded by a negator contributes inverted polarity. A text
    /// with no matched terms scores a neutral 0.000.
    pub fn score(&self, unit: &TextUnit) -> Result<MethodologyScore, ScorerError> {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matched_terms = 0;

        for sentence in unit.sentences() {
            for (i, token) in sentence.tokens.iter().enumerate() {
                if let Some(&(polarity, subjectivity)) =
                    SENTIMENT_LEXICON.get(token.as_str())
                {
                    let negated = i > 0 && NEGATORS.contains(&sentence.tokens[i - 1].as_str());
                    polarity_sum += if negated { -polarity } else { polarity };
                    subjectivity_sum += subjectivity;
                    matched_terms += 1;
                }
            }
        }

        let (polarity, subjectivity) = if matched_terms > 0 {
            (
                polarity_sum / matched_terms as f64,
                subjectivity_sum / matched_terms as f64,
            )
        } else {
            (0.0, 0.0)
        };

        // Fixed transform: positive polarity maps toward the right pole
        let score = 0.5 * polarity * subjectivity;

        Ok(MethodologyScore::new(
            Methodology::Sentiment,
            score,
            ScoreDetail::Sentiment {
                polarity,
                subjectivity,
                matched_terms,
            },
        ))
    }
}
