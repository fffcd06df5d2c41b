/*!
 * Tests for the partisan phrase lexicon
 */

use biaslens::lexicon::{Intensity, Lean, PhraseLexicon};
use biaslens::segmenter::tokenize;
use biaslens::LexiconError;

#[test]
fn test_builtin_shouldContainBothLeans() {
    let lexicon = PhraseLexicon::builtin();
    let left = lexicon.scan(&tokenize("working families"));
    let right = lexicon.scan(&tokenize("free market"));

    assert_eq!(left.len(), 1);
    assert_eq!(left[0].lean, Lean::Left);
    assert_eq!(right.len(), 1);
    assert_eq!(right[0].lean, Lean::Right);
}

#[test]
fn test_fromEntries_shouldNormalizeCase() {
    let lexicon = PhraseLexicon::from_entries(vec![(
        "Free Market",
        Lean::Right,
        Intensity::Strong,
    )])
    .unwrap();

    let hits = lexicon.scan(&tokenize("the free market rallied"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].phrase, "free market");
}

#[test]
fn test_fromEntries_withPhraseUnderBothLeans_shouldBeRejected() {
    let result = PhraseLexicon::from_entries(vec![
        ("family values", Lean::Right, Intensity::Moderate),
        ("family values", Lean::Left, Intensity::Moderate),
    ]);
    assert!(matches!(result, Err(LexiconError::ConflictingPhrase(p)) if p == "family values"));
}

#[test]
fn test_scan_shouldNotDoubleCountOverlaps() {
    let lexicon = PhraseLexicon::from_entries(vec![
        ("free market", Lean::Right, Intensity::Strong),
        ("market forces", Lean::Right, Intensity::Moderate),
    ])
    .unwrap();

    // "free market forces": the scanner consumes "free market" and moves
    // past it, so "market forces" cannot also match.
    let hits = lexicon.scan(&tokenize("free market forces prevailed"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].phrase, "free market");
}

#[test]
fn test_scan_caseInsensitivity_comesFromTokenization() {
    let lexicon = PhraseLexicon::builtin();
    let hits = lexicon.scan(&tokenize("FISCAL RESPONSIBILITY NOW"));
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_lean_strongVersusModerate_shouldDiffer() {
    let lexicon = PhraseLexicon::builtin();
    // strong phrase: 0.25 × 2.0
    let strong = lexicon.lean(&tokenize("fiscal responsibility"));
    // moderate phrase: 0.25 × 1.0
    let moderate = lexicon.lean(&tokenize("economic growth"));

    assert!((strong - 0.5).abs() < 1e-9);
    assert!((moderate - 0.25).abs() < 1e-9);
}

#[test]
fn test_lean_withOpposingHits_shouldOffset() {
    let lexicon = PhraseLexicon::builtin();
    let lean = lexicon.lean(&tokenize("corporate greed meets the free market"));
    assert_eq!(lean, 0.0);
}

#[test]
fn test_direction_shouldCollapseToSign() {
    let lexicon = PhraseLexicon::builtin();
    assert_eq!(lexicon.direction(&tokenize("social justice now")), -1.0);
    assert_eq!(lexicon.direction(&tokenize("law and order now")), 1.0);
    assert_eq!(lexicon.direction(&tokenize("nothing partisan here")), 0.0);
}
