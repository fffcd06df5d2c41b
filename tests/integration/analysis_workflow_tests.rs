/*!
 * End-to-end analysis tests
 */

use biaslens::engine::{AnalysisRequest, BiasEngine};
use biaslens::scoring::{BiasLabel, EngineWeights};

use crate::common;

fn engine() -> BiasEngine {
    BiasEngine::new().unwrap()
}

#[test]
fn test_workedExample_shouldReproduceDocumentedFixture() {
    let request = AnalysisRequest::new(common::WORKED_EXAMPLE_CONTENT)
        .with_title(common::WORKED_EXAMPLE_TITLE);

    let report = engine().analyze(&request).unwrap();

    assert_eq!(report.methodology_scores.harvard, 0.318);
    assert_eq!(report.methodology_scores.columbia, 1.000);
    assert_eq!(report.methodology_scores.allsides, 0.200);
    assert_eq!(report.methodology_scores.sentiment, 0.000);
    assert_eq!(report.bias_score, 0.517);
    assert_eq!(report.bias_label, BiasLabel::HighRight);
}

#[test]
fn test_emptyContent_shouldReturnNeutralMinimalReport() {
    for content in ["", "   ", "\n\t  \n"] {
        let report = engine().analyze(&AnalysisRequest::new(content)).unwrap();
        assert_eq!(report.bias_score, 0.000);
        assert_eq!(report.bias_label, BiasLabel::Minimal);
    }
}

#[test]
fn test_leftOnlyArticle_shouldScoreLeft() {
    let report = engine()
        .analyze(&AnalysisRequest::new(common::left_article()))
        .unwrap();

    assert_eq!(report.methodology_scores.columbia, -1.000);
    assert!(report.bias_score < 0.0);
}

#[test]
fn test_rightOnlyArticle_shouldScoreRight() {
    let report = engine()
        .analyze(&AnalysisRequest::new(common::right_article()))
        .unwrap();

    assert_eq!(report.methodology_scores.columbia, 1.000);
    assert!(report.bias_score > 0.0);
}

#[test]
fn test_neutralArticle_shouldStayMinimal() {
    let report = engine()
        .analyze(&AnalysisRequest::new(common::neutral_article()))
        .unwrap();

    assert_eq!(report.bias_score, 0.000);
    assert_eq!(report.bias_label, BiasLabel::Minimal);
}

#[test]
fn test_headlinePlacement_shouldProduceStrongerScoreThanBodyPlacement() {
    let filler = "Delegates arrived early. Talks continued all day. A closing statement \
                  is expected. The hall empties at night.";

    let headline_variant = AnalysisRequest::new(format!("{} The group met again later.", filler))
        .with_title("Champions of the free market gather");
    let body_variant =
        AnalysisRequest::new(format!("{} The group embraced the free market later.", filler))
            .with_title("Champions of economic policy gather");

    let headline_report = engine().analyze(&headline_variant).unwrap();
    let body_report = engine().analyze(&body_variant).unwrap();

    assert!(
        headline_report.methodology_scores.harvard.abs()
            > body_report.methodology_scores.harvard.abs()
    );
}

#[test]
fn test_analysis_isIdempotentAcrossEngines() {
    let request = AnalysisRequest::new(common::left_article()).with_title("A long week");

    let first = engine().analyze(&request).unwrap();
    let second = engine().analyze(&request).unwrap();

    assert_eq!(first.bias_score, second.bias_score);
    assert_eq!(first.bias_label, second.bias_label);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_scoreRange_andPrecision_holdAcrossVariedInputs() {
    let inputs = [
        common::left_article(),
        common::right_article(),
        common::neutral_article(),
        "Clearly the climate crisis demands action! \"We must act,\" said Dr. Okafor. \
         The devastating floods were a disaster."
            .to_string(),
        "Punctuation... everywhere?! (Even here.) And 3.5 numbers.".to_string(),
    ];

    for content in inputs {
        let report = engine().analyze(&AnalysisRequest::new(content)).unwrap();
        assert!(report.bias_score >= -1.0 && report.bias_score <= 1.0);

        for score in [
            report.bias_score,
            report.methodology_scores.harvard,
            report.methodology_scores.columbia,
            report.methodology_scores.allsides,
            report.methodology_scores.sentiment,
        ] {
            let scaled = score * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }
}

#[test]
fn test_report_serializesToExpectedJsonShape() {
    let request = AnalysisRequest::new(common::WORKED_EXAMPLE_CONTENT)
        .with_title(common::WORKED_EXAMPLE_TITLE)
        .with_url("https://example.com/budget");

    let report = engine().analyze(&request).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["bias_label"], "High Right Bias");
    assert_eq!(json["url"], "https://example.com/budget");
    for methodology in ["harvard", "columbia", "allsides", "sentiment"] {
        assert!(json["methodology_scores"][methodology].is_number());
    }
    assert!(json["details"]["harvard"]["detail"].is_object());
}

#[test]
fn test_urlIsInformationalOnly() {
    let plain = AnalysisRequest::new(common::right_article());
    let with_url = AnalysisRequest::new(common::right_article())
        .with_url("https://example.com/working-families-on-the-free-market");

    let plain_report = engine().analyze(&plain).unwrap();
    let url_report = engine().analyze(&with_url).unwrap();

    // A partisan-looking URL must not move any score
    assert_eq!(plain_report.bias_score, url_report.bias_score);
    assert_eq!(
        plain_report.methodology_scores.columbia,
        url_report.methodology_scores.columbia
    );
}

#[test]
fn test_engineConstruction_withBrokenTables_shouldFailAtStartup() {
    let mut weights = EngineWeights::default();
    weights.indicators.source_diversity = 0.9;
    assert!(BiasEngine::with_weights(weights).is_err());

    let mut weights = EngineWeights::default();
    weights.position.body = -1.0;
    assert!(BiasEngine::with_weights(weights).is_err());
}
