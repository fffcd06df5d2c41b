/*!
 * Integrated bias analysis engine.
 *
 * The engine owns the phrase lexicon and weight tables, fans an immutable
 * `TextUnit` out to the four methodology scorers and joins all four results
 * before invoking the combiner. It is stateless per call: no I/O, no
 * persistence, no hidden time or randomness, so identical input always
 * yields an identical report.
 *
 * Worked example: analyzing the title "Budget plan leans on free market
 * principles" with the content `Officials unveiled the budget proposal on
 * Tuesday. "Fiscal responsibility is the only path forward," said Senator
 * Hale. The plan drew muted reactions across the chamber.` produces
 * harvard 0.318, columbia 1.000, allsides 0.200, sentiment 0.000 and the
 * composite 0.517 ("High Right Bias").
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;
use crate::lexicon::PhraseLexicon;
use crate::scoring::{
    BiasLabel, Combiner, CompositeResult, EngineWeights, IndicatorScorer, MethodologyScores,
    PhraseScorer, PositionScorer, SentimentScorer,
};
use crate::segmenter::Segmenter;

/// One analysis request: raw content plus optional title and URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Raw article text
    pub content: String,
    /// Optional article title, scored as the headline
    #[serde(default)]
    pub title: Option<String>,
    /// Optional source URL, informational only and never scored
    #[serde(default)]
    pub url: Option<String>,
}

impl AnalysisRequest {
    /// Create a request from raw content
    pub fn new<S: Into<String>>(content: S) -> Self {
        AnalysisRequest {
            content: content.into(),
            title: None,
            url: None,
        }
    }

    /// Attach a title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach a source URL
    pub fn with_url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Per-methodology scores as plain decimals
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MethodologySummary {
    /// Position/attribution score
    pub harvard: f64,
    /// Phrase frequency score
    pub columbia: f64,
    /// Indicator score
    pub allsides: f64,
    /// Sentiment score
    pub sentiment: f64,
}

/// The analysis result returned to callers, serialized to JSON unchanged
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Composite bias score in [-1.000, +1.000], 3 decimals
    pub bias_score: f64,
    /// Band label for the composite score
    pub bias_label: BiasLabel,
    /// The four methodology scores as decimals
    pub methodology_scores: MethodologySummary,
    /// Full per-methodology breakdowns
    pub details: MethodologyScores,
    /// Source URL echoed from the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AnalysisReport {
    fn from_composite(composite: CompositeResult, url: Option<String>) -> Self {
        AnalysisReport {
            bias_score: composite.bias_score,
            bias_label: composite.bias_label,
            methodology_scores: MethodologySummary {
                harvard: composite.scores.harvard.score,
                columbia: composite.scores.columbia.score,
                allsides: composite.scores.allsides.score,
                sentiment: composite.scores.sentiment.score,
            },
            details: composite.scores,
            url,
        }
    }
}

/// Integrated bias analysis engine
#[derive(Debug, Clone)]
pub struct BiasEngine {
    segmenter: Segmenter,
    lexicon: PhraseLexicon,
    position_scorer: PositionScorer,
    phrase_scorer: PhraseScorer,
    indicator_scorer: IndicatorScorer,
    sentiment_scorer: SentimentScorer,
    combiner: Combiner,
}

impl BiasEngine {
    /// Create an engine with the built-in lexicon and canonical tables
    pub fn new() -> Result<Self, AnalysisError> {
        Self::with_parts(PhraseLexicon::builtin().clone(), EngineWeights::default(), 3)
    }

    /// Create an engine with custom weight tables
    pub fn with_weights(weights: EngineWeights) -> Result<Self, AnalysisError> {
        Self::with_parts(PhraseLexicon::builtin().clone(), weights, 3)
    }

    /// Create an engine from explicit parts.
    ///
    /// The weight tables are validated here: an engine is never built over a
    /// bad table, so a misconfigured process fails at startup instead of
    /// serving skewed analyses.
    pub fn with_parts(
        lexicon: PhraseLexicon,
        weights: EngineWeights,
        lead_sentences: usize,
    ) -> Result<Self, AnalysisError> {
        weights.validate()?;

        Ok(BiasEngine {
            segmenter: Segmenter::with_lead_sentences(lead_sentences),
            lexicon,
            position_scorer: PositionScorer::with_weights(weights.position, weights.attribution),
            phrase_scorer: PhraseScorer::new(),
            indicator_scorer: IndicatorScorer::with_weights(weights.indicators),
            sentiment_scorer: SentimentScorer::new(),
            combiner: Combiner::with_tables(weights.methodology, weights.bands),
        })
    }

    /// Analyze a request and return the composite report.
    ///
    /// Empty or whitespace-only content is not an error: it segments to an
    /// empty unit, every scorer returns its neutral 0.000, and the report is
    /// "Minimal Bias". A scorer failure, by contrast, propagates — it is
    /// never replaced by a silent default.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        let unit = self
            .segmenter
            .segment(&request.content, request.title.as_deref());

        // Fan out to the four independent scorers; all must succeed before
        // the combiner runs.
        let harvard = self.position_scorer.score(&unit, &self.lexicon)?;
        let columbia = self.phrase_scorer.score(&unit, &self.lexicon)?;
        let allsides = self.indicator_scorer.score(&unit, &self.lexicon)?;
        let sentiment = self.sentiment_scorer.score(&unit)?;

        let composite = self.combiner.combine(MethodologyScores {
            harvard,
            columbia,
            allsides,
            sentiment,
        })?;

        debug!(
            "Analysis complete: {:+.3} ({})",
            composite.bias_score, composite.bias_label
        );

        Ok(AnalysisReport::from_composite(composite, request.url.clone()))
    }
}
