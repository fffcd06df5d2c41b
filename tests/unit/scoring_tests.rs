/*!
 * Tests for the four methodology scorers
 */

use biaslens::lexicon::PhraseLexicon;
use biaslens::scoring::{
    IndicatorScorer, Methodology, PhraseScorer, PositionScorer, SentimentScorer,
};
use biaslens::segmenter::{Segmenter, TextUnit};

use crate::common;

fn segment(content: &str, title: Option<&str>) -> TextUnit {
    Segmenter::new().segment(content, title)
}

// --- Position scorer ---

#[test]
fn test_positionScorer_headlinePlacement_shouldProduceGreaterMagnitude() {
    let scorer = PositionScorer::new();
    let lexicon = PhraseLexicon::builtin();
    let filler = "Delegates arrived early. Talks continued all day. A closing statement \
                  is expected. The hall empties at night.";

    // Same sentences; the partisan phrase swaps between headline and a deep
    // body sentence.
    let headline_variant = segment(
        &format!("{} The group met again later.", filler),
        Some("Champions of the free market gather"),
    );
    let body_variant = segment(
        &format!("{} The group embraced the free market later.", filler),
        Some("Champions of economic policy gather"),
    );

    let headline_score = scorer.score(&headline_variant, lexicon).unwrap();
    let body_score = scorer.score(&body_variant, lexicon).unwrap();

    assert!(headline_score.score.abs() > body_score.score.abs());
}

#[test]
fn test_positionScorer_neutralSentences_shouldStillWeighDenominator() {
    let scorer = PositionScorer::new();
    let lexicon = PhraseLexicon::builtin();

    let bare = segment("The free market prevailed.", None);
    let padded = segment(
        "The free market prevailed. Nothing else happened. The hall emptied. \
         Janitors arrived. Lights went out.",
        None,
    );

    let bare_score = scorer.score(&bare, lexicon).unwrap();
    let padded_score = scorer.score(&padded, lexicon).unwrap();

    // Phrase-free sentences lean 0.0 but keep their weight, diluting the hit
    assert!(padded_score.score < bare_score.score);
    assert!(padded_score.score > 0.0);
}

#[test]
fn test_positionScorer_onEmptyUnit_shouldReturnNeutral() {
    let scorer = PositionScorer::new();
    let unit = segment("", None);
    let score = scorer.score(&unit, PhraseLexicon::builtin()).unwrap();
    assert_eq!(score.score, 0.0);
    assert_eq!(score.methodology, Methodology::Harvard);
}

// --- Phrase scorer ---

#[test]
fn test_phraseScorer_onlyLeft_shouldScoreMinusOne() {
    let scorer = PhraseScorer::new();
    let unit = segment(&common::left_article(), None);
    let score = scorer.score(&unit, PhraseLexicon::builtin()).unwrap();
    assert_eq!(score.score, -1.0);
}

#[test]
fn test_phraseScorer_onlyRight_shouldScorePlusOne() {
    let scorer = PhraseScorer::new();
    let unit = segment(&common::right_article(), None);
    let score = scorer.score(&unit, PhraseLexicon::builtin()).unwrap();
    assert_eq!(score.score, 1.0);
}

#[test]
fn test_phraseScorer_equalCounts_shouldScoreZero() {
    let scorer = PhraseScorer::new();
    let unit = segment(
        "Working families met supporters of the free market. Corporate greed and \
         fiscal responsibility shared the stage.",
        None,
    );
    let score = scorer.score(&unit, PhraseLexicon::builtin()).unwrap();
    assert_eq!(score.score, 0.0);
}

#[test]
fn test_phraseScorer_intensityDoesNotChangeCounts() {
    let scorer = PhraseScorer::new();
    let lexicon = PhraseLexicon::builtin();

    // One strong left hit vs one moderate right hit still balances to zero
    let unit = segment("Corporate greed met economic growth.", None);
    let score = scorer.score(&unit, lexicon).unwrap();
    assert_eq!(score.score, 0.0);
}

// --- Indicator scorer ---

#[test]
fn test_indicatorScorer_neutralText_shouldScoreZero() {
    let scorer = IndicatorScorer::new();
    let unit = segment(&common::neutral_article(), None);
    let score = scorer.score(&unit, PhraseLexicon::builtin()).unwrap();
    assert_eq!(score.score, 0.0);
}

#[test]
fn test_indicatorScorer_opinionMarkersWithLean_shouldBeDirectional() {
    let scorer = IndicatorScorer::new();
    let unit = segment(
        "Clearly the free market is the answer. Obviously no alternative exists.",
        None,
    );
    let score = scorer.score(&unit, PhraseLexicon::builtin()).unwrap();
    assert!(score.score > 0.0);
}

#[test]
fn test_indicatorScorer_opinionMarkersWithoutLean_shouldStayNeutral() {
    let scorer = IndicatorScorer::new();
    let unit = segment("Clearly the bridge needs repairs. Obviously the paint is old.", None);
    let score = scorer.score(&unit, PhraseLexicon::builtin()).unwrap();
    assert_eq!(score.score, 0.0);
}

#[test]
fn test_indicatorScorer_moreSources_shouldPullTowardZero() {
    let scorer = IndicatorScorer::new();
    let lexicon = PhraseLexicon::builtin();

    let single_source = segment(
        "\"Fiscal responsibility guides us,\" said Senator Hale.",
        None,
    );
    let many_sources = segment(
        "\"Fiscal responsibility guides us,\" said Senator Hale. \
         \"A fair point,\" Governor Ruiz noted. \
         \"We concur,\" stated Mayor Chen. \
         \"Broadly sensible,\" Professor Adeyemi added.",
        None,
    );

    let single = scorer.score(&single_source, lexicon).unwrap();
    let many = scorer.score(&many_sources, lexicon).unwrap();

    assert!(single.score > many.score);
    assert!(many.score > 0.0);
}

// --- Sentiment scorer ---

#[test]
fn test_sentimentScorer_neutralText_shouldScoreZero() {
    let scorer = SentimentScorer::new();
    let unit = segment(&common::neutral_article(), None);
    let score = scorer.score(&unit).unwrap();
    assert_eq!(score.score, 0.0);
}

#[test]
fn test_sentimentScorer_signConvention_positiveMapsRight() {
    let scorer = SentimentScorer::new();

    let positive = scorer
        .score(&segment("A wonderful, excellent outcome.", None))
        .unwrap();
    let negative = scorer
        .score(&segment("A terrible, devastating outcome.", None))
        .unwrap();

    assert!(positive.score > 0.0);
    assert!(negative.score < 0.0);
}

#[test]
fn test_sentimentScorer_transformBound_shouldNotExceedHalf() {
    let scorer = SentimentScorer::new();
    let unit = segment("Excellent excellent excellent. Wonderful wonderful wonderful.", None);
    let score = scorer.score(&unit).unwrap();
    // |0.5 × polarity × subjectivity| ≤ 0.5 by construction
    assert!(score.score <= 0.5);
    assert!(score.score > 0.0);
}
