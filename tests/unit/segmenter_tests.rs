/*!
 * Tests for sentence segmentation and tagging
 */

use biaslens::segmenter::{tokenize, Attribution, Segmenter, SentencePosition};

#[test]
fn test_segment_withTitleAndBody_shouldTagPositions() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment(
        "First body sentence. Second body sentence. Third body sentence. Fourth body sentence.",
        Some("The Headline"),
    );

    let positions: Vec<SentencePosition> =
        unit.sentences().iter().map(|s| s.position).collect();
    assert_eq!(
        positions,
        vec![
            SentencePosition::Headline,
            SentencePosition::Lead,
            SentencePosition::Lead,
            SentencePosition::Lead,
            SentencePosition::Body,
        ]
    );
}

#[test]
fn test_segment_withCustomLeadLength_shouldShiftBoundary() {
    let segmenter = Segmenter::with_lead_sentences(1);
    let unit = segmenter.segment("One is first. Two is second. Three is third.", None);

    assert_eq!(unit.sentences()[0].position, SentencePosition::Lead);
    assert_eq!(unit.sentences()[1].position, SentencePosition::Body);
    assert_eq!(unit.sentences()[2].position, SentencePosition::Body);
}

#[test]
fn test_segment_withoutTitle_shouldHaveNoHeadline() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment("Only body text here.", None);

    assert!(unit
        .sentences()
        .iter()
        .all(|s| s.position != SentencePosition::Headline));
}

#[test]
fn test_segment_everySentence_shouldHaveExactlyOneTagPair() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment(
        "\"We disagree,\" said the mayor. The vote was close. Counting continues.",
        Some("City hall split on budget"),
    );

    // Position and attribution are enums, so each sentence carries exactly
    // one of each; verify indices are dense and ordered as well.
    for (i, sentence) in unit.sentences().iter().enumerate() {
        assert_eq!(sentence.index, i);
    }
    assert_eq!(unit.sentences()[1].attribution, Attribution::Quoted);
    assert_eq!(unit.sentences()[2].attribution, Attribution::Unattributed);
}

#[test]
fn test_segment_withEmptyContent_shouldYieldZeroSentences() {
    let segmenter = Segmenter::new();
    assert!(segmenter.segment("", None).is_empty());
    assert!(segmenter.segment("   \t\n", None).is_empty());
}

#[test]
fn test_segment_withExclamationsAndQuestions_shouldSplit() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment("Is this the end? It is! Nobody objected.", None);
    assert_eq!(unit.sentences().len(), 3);
}

#[test]
fn test_segment_withAbbreviations_shouldNotOverSplit() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment(
        "Sen. Ruiz met Gov. Chen at 9 a.m. on Tuesday. The U.S. delegation followed.",
        None,
    );
    assert_eq!(unit.sentences().len(), 2);
}

#[test]
fn test_attribution_requiresBothQuoteAndVerb() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment(
        "\"Quoted claim,\" said the chair. The chair said nothing else. \
         The \"scare quotes\" stood alone.",
        None,
    );

    assert_eq!(unit.sentences()[0].attribution, Attribution::Quoted);
    // Reporting verb without quotation marks
    assert_eq!(unit.sentences()[1].attribution, Attribution::Unattributed);
    // Quotation marks without a reporting verb
    assert_eq!(unit.sentences()[2].attribution, Attribution::Unattributed);
}

#[test]
fn test_tokenize_shouldStripPunctuationAndLowercase() {
    assert_eq!(
        tokenize("The (quick) brown-ish fox, it said: \"jump!\""),
        vec!["the", "quick", "brown-ish", "fox", "it", "said", "jump"]
    );
}

#[test]
fn test_tokenCount_shouldSumAcrossSentences() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment("Alpha beta gamma. Delta epsilon.", None);
    assert_eq!(unit.token_count(), 5);
}

#[test]
fn test_quotedTokens_shouldOnlyCoverQuotedSentences() {
    let segmenter = Segmenter::new();
    let unit = segmenter.segment(
        "\"Alpha beta,\" said the clerk. Gamma delta here.",
        None,
    );
    let quoted = unit.quoted_tokens();
    assert!(quoted.contains(&"alpha".to_string()));
    assert!(!quoted.contains(&"gamma".to_string()));
}
