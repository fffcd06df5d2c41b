/*!
 * # biaslens - Integrated News Bias Analysis
 *
 * A Rust library that assigns a directional bias score in [-1.000, +1.000]
 * to a piece of text by combining four independent scoring methodologies
 * into one weighted composite.
 *
 * ## Features
 *
 * - Sentence segmentation with position (headline/lead/body) and
 *   attribution (quoted/unattributed) tagging
 * - Position/attribution weighted scoring ("harvard", 40%)
 * - Partisan phrase frequency scoring ("columbia", 35%)
 * - Multi-dimensional indicator scoring ("allsides", 20%)
 * - Lexicon-based sentiment scoring ("sentiment", 5%)
 * - Weighted composite with seven-band classification
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `segmenter`: Sentence segmentation and tagging
 * - `lexicon`: Partisan phrase dictionaries with longest-match scanning
 * - `scoring`: The four methodology scorers and the composite combiner:
 *   - `scoring::position`: Position/attribution weighting
 *   - `scoring::phrases`: Partisan phrase frequency
 *   - `scoring::indicators`: Multi-dimensional indicators
 *   - `scoring::sentiment`: Sentiment polarity
 *   - `scoring::combiner`: Weighted composite and banding
 *   - `scoring::weights`: Versioned constant weight tables
 * - `engine`: The analysis engine facade
 * - `errors`: Custom error types for the library
 *
 * The engine is stateless and side-effect-free per call: no I/O, no
 * persistence, no network. All four scorers read the same immutable
 * `TextUnit` and never each other's output, so sequential and parallel
 * evaluations produce identical results.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod engine;
pub mod errors;
pub mod lexicon;
pub mod scoring;
pub mod segmenter;

// Re-export main types for easier usage
pub use app_config::Config;
pub use engine::{AnalysisReport, AnalysisRequest, BiasEngine, MethodologySummary};
pub use errors::{AnalysisError, AppError, LexiconError, ScorerError};
pub use lexicon::{Intensity, Lean, PhraseLexicon};
pub use scoring::{BiasLabel, EngineWeights, Methodology, MethodologyScore};
pub use segmenter::{Attribution, Segmenter, Sentence, SentencePosition, TextUnit};
