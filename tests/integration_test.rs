/// End-to-end tests of extraction, clustering, index building and cursor matching
mod common;

use std::collections::HashSet;
use std::time::{Duration, Instant};

use common::realistic_sources;
use timecode_markers::{
    ClusterThreshold, MarkerConfig, MarkerError, MarkerSession, ProgressBar, SourceRef,
    TextSource, build_index, cluster, cluster_records, extract, extract_report, find_nearest,
    parse_timecodes,
};

#[test]
fn test_parse_example_sentence() {
    let tokens = parse_timecodes("Check 00:05:30 and 1:02");
    let normalized: Vec<&str> = tokens.iter().map(|t| t.normalized_text()).collect();
    let offsets: Vec<u32> = tokens.iter().map(|t| t.offset_seconds()).collect();
    assert_eq!(normalized, vec!["05:30", "1:02"]);
    assert_eq!(offsets, vec![330, 62]);
}

#[test]
fn test_pipeline_on_realistic_sources() {
    let sources = realistic_sources();
    let report = extract_report(&sources);
    assert_eq!(report.records.len(), 8);
    assert!(report.malformed.is_empty());

    // 15 minute video: 9s threshold
    let groups = cluster_records(&report.records, ClusterThreshold::Fraction(0.01), Some(900.0))
        .unwrap();
    let anchors: Vec<u32> = groups.iter().map(|g| g.anchor_offset_seconds()).collect();
    assert_eq!(anchors, vec![0, 90, 300, 500, 765]);

    let sizes: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    assert_eq!(sizes, vec![1, 2, 2, 1, 2]);
}

#[test]
fn test_cluster_preserves_every_record() {
    let records = extract(&realistic_sources());
    let groups = cluster(&records, 5.0);

    let anchors: Vec<u32> = groups.iter().map(|g| g.anchor_offset_seconds()).collect();
    let mut sorted = anchors.clone();
    sorted.sort_unstable();
    assert_eq!(anchors, sorted);

    let total: usize = groups.iter().map(|g| g.len()).sum();
    assert_eq!(total, records.len());

    let input: HashSet<(u32, SourceRef, String)> =
        records.iter().map(|r| (r.offset_seconds(), r.source_ref, r.line_text.clone())).collect();
    let output: HashSet<(u32, SourceRef, String)> = groups
        .iter()
        .flat_map(|g| g.members().iter())
        .map(|r| (r.offset_seconds(), r.source_ref, r.line_text.clone()))
        .collect();
    assert_eq!(input, output);
}

#[test]
fn test_cluster_twice_is_identical() {
    let records = extract(&realistic_sources());
    assert_eq!(cluster(&records, 9.0), cluster(&records, 9.0));
}

#[test]
fn test_threshold_boundary() {
    let records = extract(&[TextSource::comment("0:10 0:13 0:20", SourceRef(1))]);
    let groups = cluster(&records, 3.0);
    let offsets: Vec<Vec<u32>> = groups
        .iter()
        .map(|g| g.members().iter().map(|r| r.offset_seconds()).collect())
        .collect();
    assert_eq!(offsets, vec![vec![10, 13], vec![20]]);
}

#[test]
fn test_tie_break_returns_earliest_marker() {
    let records = extract(&[TextSource::comment("0:11 then 0:10", SourceRef(1))]);
    let index = build_index(cluster(&records, 0.0), Some(100.0)).unwrap();

    let marker = find_nearest(&index, 0.105, 0.02).unwrap();
    assert!((marker.position_fraction - 0.10).abs() < 1e-12);
    assert_eq!(marker.anchor_offset_seconds(), 10);
}

#[test]
fn test_deferred_clear_cancelled_by_requery() {
    let mut session = MarkerSession::new(MarkerConfig::default());
    session.rebuild(&realistic_sources(), Some(900.0)).unwrap();
    let bar = ProgressBar::new(900.0);

    let t = Instant::now();
    let active = session.pointer_moved(bar, 300.0, t).unwrap().current.unwrap();
    session.pointer_left(t);

    // Back on the same marker one second later
    assert!(session.pointer_moved(bar, 301.0, t + Duration::from_millis(1000)).is_none());

    assert!(session.tick(t + Duration::from_millis(3000)).is_none());
    assert_eq!(session.selection().active(), Some(&active));
}

#[test]
fn test_deferred_clear_fires_after_delay() {
    let mut session = MarkerSession::new(MarkerConfig::default());
    session.rebuild(&realistic_sources(), Some(900.0)).unwrap();
    let bar = ProgressBar::new(900.0);

    let t = Instant::now();
    session.pointer_moved(bar, 90.0, t).unwrap();
    // Moving off every marker schedules the clear instead of dropping the selection
    assert!(session.pointer_moved(bar, 200.0, t).is_none());
    assert!(session.selection().active().is_some());

    let change = session.tick(t + Duration::from_millis(3000)).unwrap();
    assert_eq!(change.previous.unwrap().anchor_offset_seconds(), 90);
    assert!(change.current.is_none());
}

#[test]
fn test_custom_hide_delay() {
    let config = MarkerConfig { hide_delay_ms: 300, ..Default::default() };
    let mut session = MarkerSession::new(config);
    session.rebuild(&realistic_sources(), Some(900.0)).unwrap();

    let t = Instant::now();
    session.pointer_moved(ProgressBar::new(900.0), 0.0, t).unwrap();
    session.pointer_left(t);
    assert!(session.tick(t + Duration::from_millis(300)).is_some());
}

#[test]
fn test_unknown_duration_gives_no_index() {
    let groups = cluster(&extract(&realistic_sources()), 3.0);
    assert!(matches!(build_index(groups, None), Err(MarkerError::NoDuration { .. })));

    let mut session = MarkerSession::new(MarkerConfig::default());
    let result = session.rebuild(&realistic_sources(), Some(-1.0));
    assert_eq!(result.unwrap_err(), MarkerError::NoDuration { duration: Some(-1.0) });
    assert!(session.index().is_none());
}

#[test]
fn test_independent_sessions() {
    let mut first = MarkerSession::new(MarkerConfig::default());
    let mut second = MarkerSession::new(MarkerConfig::default());
    first.rebuild(&realistic_sources(), Some(900.0)).unwrap();
    second.rebuild(&[TextSource::comment("0:45", SourceRef(1))], Some(90.0)).unwrap();

    first.pointer_moved(ProgressBar::new(900.0), 0.0, Instant::now()).unwrap();
    assert!(first.selection().active().is_some());
    assert!(second.selection().active().is_none());
    assert_eq!(second.index().unwrap().len(), 1);
}
