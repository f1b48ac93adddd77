use crate::board::{
    Classifier, MARKER_IMPORTANT, MARKER_RESUME, Severity, classify_markers, classify_phrase,
};
use crate::translate::{NORMAL, SUSPENDED};

#[test]
fn phrase_strategy_maps_the_two_fixed_phrases() {
    assert_eq!(classify_phrase(SUSPENDED), Severity::Suspended);
    assert_eq!(classify_phrase(NORMAL), Severity::Normal);
}

#[test]
fn phrase_strategy_treats_everything_else_as_degraded() {
    for status in ["列車遅延", "運転状況", "運転再開", "", " 平常運転", "Normal operations"] {
        assert_eq!(classify_phrase(status), Severity::Degraded, "status {status:?}");
    }
}

#[test]
fn marker_strategy() {
    assert_eq!(classify_markers(&[MARKER_IMPORTANT]), Severity::Suspended);
    assert_eq!(classify_markers(&["colTrouble", MARKER_RESUME]), Severity::Degraded);
    assert_eq!(classify_markers(&[MARKER_RESUME, MARKER_IMPORTANT]), Severity::Suspended);
    assert_eq!(classify_markers::<&str>(&[]), Severity::Normal);
    assert_eq!(classify_markers(&["colTrouble"]), Severity::Normal);
}

#[test]
fn strategies_are_not_merged() {
    let markers = vec![MARKER_IMPORTANT.to_string()];

    assert_eq!(Classifier::Lexical.classify(NORMAL, &markers), Severity::Normal);
    assert_eq!(Classifier::Markers.classify(NORMAL, &markers), Severity::Suspended);
    assert_eq!(Classifier::Markers.classify(SUSPENDED, &[]), Severity::Normal);
}

#[test]
fn severity_serializes_as_integer() {
    assert_eq!(serde_json::to_string(&Severity::Suspended).unwrap(), "2");
    assert_eq!(serde_json::from_str::<Severity>("1").unwrap(), Severity::Degraded);
    assert!(serde_json::from_str::<Severity>("3").is_err());
    assert!(Severity::Suspended > Severity::Degraded && Severity::Degraded > Severity::Normal);
}
