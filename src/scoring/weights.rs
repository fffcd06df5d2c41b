/*!
 * Versioned constant tables for the scoring engine.
 *
 * Methodology weights, position/attribution ratios, indicator weights and
 * the bias band table all live here as plain data with canonical defaults,
 * so a recalibration changes one table instead of scorer logic. Tables are
 * validated once when an engine is constructed and are read-only afterwards.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ScorerError;
use crate::segmenter::{Attribution, SentencePosition};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Fixed weights of the four methodologies in the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodologyWeights {
    /// Position/attribution weighting methodology
    pub harvard: f64,
    /// Partisan phrase frequency methodology
    pub columbia: f64,
    /// Multi-dimensional indicator methodology
    pub allsides: f64,
    /// Sentiment polarity methodology
    pub sentiment: f64,
}

impl Default for MethodologyWeights {
    fn default() -> Self {
        MethodologyWeights {
            harvard: 0.40,
            columbia: 0.35,
            allsides: 0.20,
            sentiment: 0.05,
        }
    }
}

impl MethodologyWeights {
    /// Check the table sums to 1.0 with non-negative entries
    pub fn validate(&self) -> Result<(), ScorerError> {
        for value in [self.harvard, self.columbia, self.allsides, self.sentiment] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScorerError::InvalidWeight {
                    table: "methodology",
                    value,
                });
            }
        }
        let sum = self.harvard + self.columbia + self.allsides + self.sentiment;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScorerError::UnnormalizedWeights {
                table: "methodology",
                sum,
            });
        }
        Ok(())
    }
}

/// Position weight ratios: headline > lead > body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionWeights {
    /// Weight of the headline sentence
    pub headline: f64,
    /// Weight of lead sentences
    pub lead: f64,
    /// Weight of body sentences
    pub body: f64,
}

impl Default for PositionWeights {
    fn default() -> Self {
        PositionWeights {
            headline: 3.0,
            lead: 2.0,
            body: 1.0,
        }
    }
}

impl PositionWeights {
    /// Weight for a sentence position class
    pub fn weight_for(&self, position: SentencePosition) -> f64 {
        match position {
            SentencePosition::Headline => self.headline,
            SentencePosition::Lead => self.lead,
            SentencePosition::Body => self.body,
        }
    }

    /// Check all weights are positive and finite
    pub fn validate(&self) -> Result<(), ScorerError> {
        for value in [self.headline, self.lead, self.body] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScorerError::InvalidWeight {
                    table: "position",
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Attribution weight ratio: quoted speech over background narration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributionWeights {
    /// Weight of quoted sentences
    pub quoted: f64,
    /// Weight of unattributed sentences
    pub unattributed: f64,
}

impl Default for AttributionWeights {
    fn default() -> Self {
        AttributionWeights {
            quoted: 2.0,
            unattributed: 1.0,
        }
    }
}

impl AttributionWeights {
    /// Weight for an attribution class
    pub fn weight_for(&self, attribution: Attribution) -> f64 {
        match attribution {
            Attribution::Quoted => self.quoted,
            Attribution::Unattributed => self.unattributed,
        }
    }

    /// Check all weights are positive and finite
    pub fn validate(&self) -> Result<(), ScorerError> {
        for value in [self.quoted, self.unattributed] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScorerError::InvalidWeight {
                    table: "attribution",
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Internal weights of the multi-dimensional indicator scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorWeights {
    /// Attributed-source diversity indicator
    pub source_diversity: f64,
    /// Loaded/emotionally charged language indicator
    pub loaded_language: f64,
    /// Opinion-marking construction indicator
    pub opinion_markers: f64,
}

impl Default for IndicatorWeights {
    fn default() -> Self {
        IndicatorWeights {
            source_diversity: 0.40,
            loaded_language: 0.35,
            opinion_markers: 0.25,
        }
    }
}

impl IndicatorWeights {
    /// Check the table sums to 1.0 with non-negative entries
    pub fn validate(&self) -> Result<(), ScorerError> {
        for value in [
            self.source_diversity,
            self.loaded_language,
            self.opinion_markers,
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScorerError::InvalidWeight {
                    table: "indicator",
                    value,
                });
            }
        }
        let sum = self.source_diversity + self.loaded_language + self.opinion_markers;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScorerError::UnnormalizedWeights {
                table: "indicator",
                sum,
            });
        }
        Ok(())
    }
}

/// One of the seven bias bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLabel {
    #[serde(rename = "Very High Left Bias")]
    VeryHighLeft,
    #[serde(rename = "High Left Bias")]
    HighLeft,
    #[serde(rename = "Low Left Bias")]
    LowLeft,
    #[serde(rename = "Minimal Bias")]
    Minimal,
    #[serde(rename = "Low Right Bias")]
    LowRight,
    #[serde(rename = "High Right Bias")]
    HighRight,
    #[serde(rename = "Very High Right Bias")]
    VeryHighRight,
}

impl BiasLabel {
    /// Human-readable band name
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasLabel::VeryHighLeft => "Very High Left Bias",
            BiasLabel::HighLeft => "High Left Bias",
            BiasLabel::LowLeft => "Low Left Bias",
            BiasLabel::Minimal => "Minimal Bias",
            BiasLabel::LowRight => "Low Right Bias",
            BiasLabel::HighRight => "High Right Bias",
            BiasLabel::VeryHighRight => "Very High Right Bias",
        }
    }
}

impl std::fmt::Display for BiasLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A labeled score range with inclusive bounds on the 0.001 grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasBand {
    /// Inclusive lower bound
    pub lower: f64,
    /// Inclusive upper bound
    pub upper: f64,
    /// Band label
    pub label: BiasLabel,
}

/// Ordered table of the seven bias bands.
///
/// Bounds are inclusive on both sides; because composite scores are rounded
/// to the 0.001 grid before lookup, the bands are exhaustive and
/// non-overlapping, and a boundary value such as -0.300 falls in the
/// higher-magnitude band by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    bands: Vec<BiasBand>,
}

impl Default for BandTable {
    fn default() -> Self {
        BandTable {
            bands: vec![
                BiasBand {
                    lower: -1.000,
                    upper: -0.600,
                    label: BiasLabel::VeryHighLeft,
                },
                BiasBand {
                    lower: -0.599,
                    upper: -0.300,
                    label: BiasLabel::HighLeft,
                },
                BiasBand {
                    lower: -0.299,
                    upper: -0.100,
                    label: BiasLabel::LowLeft,
                },
                BiasBand {
                    lower: -0.099,
                    upper: 0.099,
                    label: BiasLabel::Minimal,
                },
                BiasBand {
                    lower: 0.100,
                    upper: 0.299,
                    label: BiasLabel::LowRight,
                },
                BiasBand {
                    lower: 0.300,
                    upper: 0.599,
                    label: BiasLabel::HighRight,
                },
                BiasBand {
                    lower: 0.600,
                    upper: 1.000,
                    label: BiasLabel::VeryHighRight,
                },
            ],
        }
    }
}

impl BandTable {
    /// The bands in ascending score order
    pub fn bands(&self) -> &[BiasBand] {
        &self.bands
    }

    /// Map a rounded composite score to its band via an ordered range scan.
    pub fn classify(&self, score: f64) -> BiasLabel {
        const EPS: f64 = 1e-9;
        for band in &self.bands {
            if score >= band.lower - EPS && score <= band.upper + EPS {
                return band.label;
            }
        }
        // validate() guarantees the table covers [-1.000, +1.000]
        BiasLabel::Minimal
    }

    /// Check the table is ordered and covers [-1.000, +1.000] on the grid
    pub fn validate(&self) -> Result<(), String> {
        if self.bands.is_empty() {
            return Err("band table is empty".to_string());
        }
        let first = &self.bands[0];
        let last = &self.bands[self.bands.len() - 1];
        if (first.lower + 1.0).abs() > 1e-9 || (last.upper - 1.0).abs() > 1e-9 {
            return Err("band table does not span [-1.000, +1.000]".to_string());
        }
        for pair in self.bands.windows(2) {
            let gap = pair[1].lower - pair[0].upper;
            if !(0.0..=0.0011).contains(&gap) {
                return Err(format!(
                    "bands {} and {} leave a gap or overlap",
                    pair[0].label, pair[1].label
                ));
            }
        }
        Ok(())
    }
}

/// The full set of tables an engine scores with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineWeights {
    /// Composite methodology weights
    #[serde(default)]
    pub methodology: MethodologyWeights,
    /// Position weight ratios
    #[serde(default)]
    pub position: PositionWeights,
    /// Attribution weight ratios
    #[serde(default)]
    pub attribution: AttributionWeights,
    /// Indicator weight table
    #[serde(default)]
    pub indicators: IndicatorWeights,
    /// Bias band table
    #[serde(default)]
    pub bands: BandTable,
}

impl EngineWeights {
    /// Validate every table; an engine must not be built from a bad set
    pub fn validate(&self) -> Result<(), crate::errors::AnalysisError> {
        self.methodology.validate()?;
        self.position.validate()?;
        self.attribution.validate()?;
        self.indicators.validate()?;
        self.bands
            .validate()
            .map_err(crate::errors::AnalysisError::BandTable)?;
        Ok(())
    }
}
