//! Session loading, failure, and discard behaviour.

use census_core::{
    DiscardReason, LoadError, LoadOutcome, LoadStatus, Session, SessionError, load_engine,
};
use census_ingest::{CsvTextSource, DatasetSource, IngestError, MemorySource, RawRow};
use census_model::{EstimateYears, JurisdictionType};

fn places() -> MemorySource {
    MemorySource::new(
        JurisdictionType::Place,
        vec![RawRow::from_pairs([
            ("SUMLEV", "162"),
            ("STATE", "06"),
            ("PLACE", "00002"),
            ("NAME", "Alpine"),
            ("STNAME", "California"),
            ("POPESTIMATE2024", "5000"),
        ])],
    )
}

fn counties() -> MemorySource {
    MemorySource::new(
        JurisdictionType::County,
        vec![RawRow::from_pairs([
            ("SUMLEV", "050"),
            ("STATE", "06"),
            ("COUNTY", "001"),
            ("CTYNAME", "Alameda County"),
            ("STNAME", "California"),
        ])],
    )
}

fn broken_counties() -> CsvTextSource {
    CsvTextSource::new(
        JurisdictionType::County,
        "broken",
        "STATE,NAME\n06,Alameda\n",
        EstimateYears::default(),
    )
}

#[tokio::test]
async fn session_starts_unloaded() {
    let session = Session::new();
    assert!(matches!(session.status(), LoadStatus::NotLoaded));
    assert!(matches!(session.engine(), Err(SessionError::NotLoaded)));
}

#[tokio::test]
async fn load_publishes_engine() {
    let session = Session::new();

    let outcome = session
        .load(places(), counties(), EstimateYears::default())
        .await;

    match outcome {
        LoadOutcome::Published {
            places: place_stats,
            counties: county_stats,
        } => {
            assert_eq!(place_stats.retained, 1);
            assert_eq!(county_stats.retained, 1);
        }
        other => panic!("expected published outcome, got {other:?}"),
    }

    let engine = session.engine().unwrap();
    assert_eq!(engine.states().len(), 1);
    assert_eq!(engine.options_for("06", JurisdictionType::County).len(), 1);
}

#[tokio::test]
async fn failed_dataset_fails_whole_load() {
    let session = Session::new();

    let outcome = session
        .load(places(), broken_counties(), EstimateYears::default())
        .await;

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    match session.engine() {
        Err(SessionError::Failed(error)) => assert!(matches!(
            error.as_ref(),
            LoadError::Dataset {
                dataset: JurisdictionType::County,
                source: IngestError::MissingColumn { .. },
            }
        )),
        other => panic!("expected failed session, got {other:?}"),
    }
}

#[tokio::test]
async fn swapped_sources_are_rejected() {
    let result = load_engine(counties(), places(), EstimateYears::default()).await;

    assert!(matches!(
        result,
        Err(LoadError::WrongDataset {
            expected: JurisdictionType::Place,
            found: JurisdictionType::County,
        })
    ));
}

#[tokio::test]
async fn superseded_load_is_discarded() {
    let session = Session::new();

    let stale = session.begin_load();
    let current = session.begin_load();
    let stale_result = load_engine(places(), counties(), EstimateYears::default()).await;
    let current_result = load_engine(places(), counties(), EstimateYears::default()).await;

    assert!(matches!(
        session.commit(&stale, stale_result),
        LoadOutcome::Discarded(DiscardReason::Superseded)
    ));
    assert!(matches!(session.status(), LoadStatus::Loading));

    assert!(matches!(
        session.commit(&current, current_result),
        LoadOutcome::Published { .. }
    ));
    assert!(session.status().is_ready());
}

#[tokio::test]
async fn cancelled_load_keeps_previous_engine() {
    let session = Session::new();
    session
        .load(places(), counties(), EstimateYears::default())
        .await;
    let before = session.engine().unwrap();

    let handle = session.begin_load();
    // Previous engine remains readable while the reload is in flight.
    assert!(session.status().is_ready());
    let result = load_engine(places(), broken_counties(), EstimateYears::default()).await;
    handle.cancel();

    assert!(matches!(
        session.commit(&handle, result),
        LoadOutcome::Discarded(DiscardReason::Cancelled)
    ));
    let after = session.engine().unwrap();
    assert!(std::sync::Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn cancelled_first_load_returns_to_not_loaded() {
    let session = Session::new();
    let handle = session.begin_load();
    assert!(matches!(session.status(), LoadStatus::Loading));
    let result = load_engine(places(), counties(), EstimateYears::default()).await;
    handle.cancel();

    assert!(matches!(
        session.commit(&handle, result),
        LoadOutcome::Discarded(DiscardReason::Cancelled)
    ));
    assert!(matches!(session.status(), LoadStatus::NotLoaded));
    assert!(matches!(session.engine(), Err(SessionError::NotLoaded)));
}

#[tokio::test]
async fn cancelled_retry_keeps_earlier_failure() {
    let session = Session::new();
    session
        .load(places(), broken_counties(), EstimateYears::default())
        .await;

    let handle = session.begin_load();
    let result = load_engine(places(), counties(), EstimateYears::default()).await;
    handle.cancel();
    session.commit(&handle, result);

    assert!(matches!(session.engine(), Err(SessionError::Failed(_))));
}

#[tokio::test]
async fn cancelled_stale_load_leaves_newer_load_running() {
    let session = Session::new();
    let stale = session.begin_load();
    let _current = session.begin_load();
    let result = load_engine(places(), counties(), EstimateYears::default()).await;
    stale.cancel();

    assert!(matches!(
        session.commit(&stale, result),
        LoadOutcome::Discarded(DiscardReason::Cancelled)
    ));
    assert!(matches!(session.status(), LoadStatus::Loading));
}

#[tokio::test]
async fn closed_session_ignores_late_results() {
    let session = Session::new();
    let handle = session.begin_load();
    let result = load_engine(places(), counties(), EstimateYears::default()).await;

    session.shutdown();

    assert!(matches!(
        session.commit(&handle, result),
        LoadOutcome::Discarded(DiscardReason::SessionClosed)
    ));
    assert!(matches!(session.engine(), Err(SessionError::Loading)));
}

#[test]
fn memory_source_reports_kind() {
    assert_eq!(places().kind(), JurisdictionType::Place);
}
