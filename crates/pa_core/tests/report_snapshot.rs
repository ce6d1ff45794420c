//! End-to-end run over a recorded match fixture

use std::path::PathBuf;

use pa_core::{analyze, load_events, AnalysisConfig, AnalysisFilter, ChanceType, TimeInterval, ZoneKey};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_match.json")
}

#[test]
fn sample_match_chance_summary() {
    let report = load_events(&fixture_path()).expect("fixture loads");
    assert_eq!(report.events.len(), 10);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 4);

    let analysis = analyze(&report.events, &AnalysisFilter::new(), &AnalysisConfig::default());
    insta::assert_json_snapshot!("sample_match_chance_summary", analysis.chances.summary);
}

#[test]
fn sample_match_zones_and_tags() {
    let report = load_events(&fixture_path()).expect("fixture loads");
    let analysis = analyze(&report.events, &AnalysisFilter::new(), &AnalysisConfig::default());

    let zones = &analysis.chances.zones;
    assert_eq!(zones.get(ZoneKey::CenterInsideBox).count, 1);
    assert_eq!(zones.get(ZoneKey::CenterInsideBox).led_to_goal, 1);
    assert_eq!(zones.get(ZoneKey::CornerLeft).count, 1);
    assert_eq!(zones.get(ZoneKey::RightWingEdgeOfBox).led_to_shot, 1);
    assert_eq!(analysis.chances.max_count, 1);

    let chances: Vec<Option<ChanceType>> = analysis.pass_tags.iter().map(|p| p.chance).collect();
    assert_eq!(
        chances,
        vec![None, Some(ChanceType::BoxEntry), Some(ChanceType::CornerZone), Some(ChanceType::FinalThirdChance), None]
    );

    assert_eq!(analysis.passes.total, 5);
    assert_eq!(analysis.passes.accuracy, 80);
    assert_eq!(analysis.shots.total, 2);
    assert_eq!(analysis.shots.on_target, 2);
    assert_eq!(analysis.shots.conversion_rate, 50);
    assert_eq!(analysis.heatmap.direct_total(), 10);
    assert_eq!(analysis.network.links.len(), 4);
}

#[test]
fn sample_match_second_half_has_no_chances() {
    let report = load_events(&fixture_path()).expect("fixture loads");
    let filter = AnalysisFilter::new().with_interval(TimeInterval::second_half());
    let analysis = analyze(&report.events, &filter, &AnalysisConfig::default());

    assert_eq!(analysis.event_count, 3);
    assert_eq!(analysis.chances.summary.total, 0);
    assert_eq!(analysis.chances.summary.conversion_rate, 0);
    assert_eq!(analysis.chances.max_count, 1);
}
