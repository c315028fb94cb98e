//! Engine session lifetime across extraction outcomes.

use std::path::Path;

use hull_engine::{EngineRequest, FacetMode, PointSet, ScriptedEngine};
use hull_extract::{extract, ExtractError};

fn triangle() -> PointSet {
    PointSet::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])
}

fn triangle_engine() -> ScriptedEngine {
    ScriptedEngine::new(2)
        .with_facet(&[1, 2])
        .with_facet(&[2, 3])
        .with_facet(&[3, 1])
}

#[test]
fn test_success_defers_release_to_bundle_drop() {
    let engine = triangle_engine();
    let probe = engine.probe();
    let points = triangle();
    let request = EngineRequest::new(&points, "Tv", Path::new("/tmp"), FacetMode::Triangulated);

    let bundle = extract(&engine, &request).unwrap();
    assert_eq!(probe.releases(), 0);

    drop(bundle);
    assert_eq!(probe.releases(), 1);
}

#[test]
fn test_failure_releases_before_the_error_returns() {
    let engine = ScriptedEngine::new(2).with_fault(1, "qhull error: no points\n", "");
    let probe = engine.probe();
    let no_points = PointSet::from_rows::<[f64; 0]>(&[]);
    let request = EngineRequest::new(&no_points, "Tv", Path::new("/tmp"), FacetMode::Triangulated);

    let error = extract(&engine, &request).unwrap_err();

    assert!(matches!(error, ExtractError::Engine { code: 1, .. }));
    assert_eq!(probe.releases(), 1);
}

#[test]
fn test_exhaustion_mid_extraction_still_releases() {
    let mut engine = ScriptedEngine::new(3);
    for _ in 0..3_000 {
        engine = engine.with_facet(&[1, 2, 3]);
    }
    let wide: Vec<u32> = (1..=4_000).collect();
    engine = engine.with_facet(&wide);
    let probe = engine.probe();

    let points = PointSet::from_flat(3, vec![0.0; 12_000]);
    let request = EngineRequest::new(&points, "Tv", Path::new("/tmp"), FacetMode::Polygonal);

    let error = extract(&engine, &request).unwrap_err();

    assert!(matches!(error, ExtractError::Exhausted { what: "facet index", .. }));
    assert_eq!(probe.releases(), 1);
}

#[test]
fn test_cloned_engine_ref_keeps_the_session_alive() {
    let engine = triangle_engine().with_area(2.0 + 2.0_f64.sqrt());
    let probe = engine.probe();
    let points = triangle();
    let request = EngineRequest::new(&points, "Tv FA", Path::new("/tmp"), FacetMode::Triangulated);

    let bundle = extract(&engine, &request).unwrap();
    let kept = bundle.engine().clone();

    drop(bundle);
    assert_eq!(probe.releases(), 0);
    assert_eq!(kept.session().facet_count(), 3);
    assert!(kept.session().total_area() > 3.0);

    drop(kept);
    assert_eq!(probe.releases(), 1);
}

#[test]
fn test_into_table_releases_the_session() {
    let engine = triangle_engine();
    let probe = engine.probe();
    let points = triangle();
    let request =
        EngineRequest::with_default_options(&points, Path::new("/tmp"), FacetMode::Triangulated);

    let bundle = extract(&engine, &request).unwrap();
    let table = bundle.into_table();

    assert_eq!(probe.releases(), 1);
    assert_eq!(table.rows(), 3);
}

#[test]
fn test_session_stays_queryable_through_the_bundle() {
    let engine = triangle_engine().with_volume(0.5);
    let points = triangle();
    let request = EngineRequest::new(&points, "Tv FA", Path::new("/tmp"), FacetMode::Triangulated);

    let bundle = extract(&engine, &request).unwrap();
    let session = bundle.engine().session();

    assert_eq!(session.dimension(), 2);
    assert_eq!(session.point_count(), 3);
    assert_eq!(session.facet_count(), 3);
    assert_eq!(session.total_volume(), 0.5);
}

#[test]
fn test_every_run_releases_exactly_once() {
    let good = triangle_engine();
    let bad = ScriptedEngine::new(2).with_fault(2, "qhull error\n", "");
    let good_probe = good.probe();
    let bad_probe = bad.probe();
    let points = triangle();
    let request = EngineRequest::new(&points, "Tv", Path::new("/tmp"), FacetMode::Triangulated);

    for _ in 0..5 {
        let bundle = extract(&good, &request).unwrap();
        drop(bundle);
        let _ = extract(&bad, &request).unwrap_err();
    }

    assert_eq!(good_probe.releases(), 5);
    assert_eq!(bad_probe.releases(), 5);
}
