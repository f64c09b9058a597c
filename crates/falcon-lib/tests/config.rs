use std::fs;

use falcon_lib::{load_routes_db, EmpireConfig, Error, FalconConfig, Navigator, Route};
use tempfile::TempDir;

mod common;

#[test]
fn loads_classic_falcon_fixture() {
    let config = FalconConfig::from_path(&common::fixtures_dir().join("millennium-falcon.json"))
        .expect("fixture loads");

    assert_eq!(config.autonomy, 6);
    assert_eq!(config.departure, "Tatooine");
    assert_eq!(config.arrival, "Endor");
    assert_eq!(config.routes, common::classic_routes());
}

#[test]
fn loads_empire_fixture() {
    let config = EmpireConfig::from_path(&common::fixtures_dir().join("empire-countdown-8.json"))
        .expect("fixture loads");

    assert_eq!(config.countdown, 8);
    assert_eq!(config.bounty_hunters, common::classic_hunters());
    assert_eq!(config.hazards().expect("valid hunters").len(), 3);
}

#[test]
fn invalid_hunter_fixture_fails_schedule_construction() {
    let config =
        EmpireConfig::from_path(&common::fixtures_dir().join("invalid-hunter-empire.json"))
            .expect("document shape is valid");
    let err = config.hazards().expect_err("negative day");
    assert!(matches!(err, Error::InvalidHazardRecord { index: 0, .. }));
}

#[test]
fn missing_document_is_an_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    let err = FalconConfig::from_path(&dir.path().join("absent.json")).expect_err("missing");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn routes_database_rows_are_read_in_order() {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("universe.db");
    common::write_routes_db(&db_path, &common::classic_routes());

    let routes = load_routes_db(&db_path).expect("database loads");
    assert_eq!(routes, common::classic_routes());
}

#[test]
fn routes_database_is_resolved_next_to_the_document() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_routes_db(&dir.path().join("universe.db"), &common::classic_routes());
    let falcon_path = dir.path().join("millennium-falcon.json");
    fs::write(
        &falcon_path,
        r#"{"autonomy": 6, "departure": "Tatooine", "arrival": "Endor", "routes_db": "universe.db"}"#,
    )
    .expect("write falcon document");

    let config = FalconConfig::from_path(&falcon_path).expect("document loads");
    assert_eq!(config.routes_db, Some(dir.path().join("universe.db")));
    assert_eq!(config.all_routes().expect("routes load").len(), 5);
}

#[test]
fn database_and_inline_routes_are_combined() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_routes_db(
        &dir.path().join("universe.db"),
        &[Route::new("Tatooine", "Hoth", 6)],
    );
    let falcon_path = dir.path().join("falcon.json");
    fs::write(
        &falcon_path,
        r#"{
            "autonomy": 6,
            "routes": [{"origin": "Hoth", "destination": "Endor", "travelTime": 1}],
            "routes_db": "universe.db"
        }"#,
    )
    .expect("write falcon document");

    let config = FalconConfig::from_path(&falcon_path).expect("document loads");
    let routes = config.all_routes().expect("routes load");
    assert_eq!(
        routes,
        vec![Route::new("Hoth", "Endor", 1), Route::new("Tatooine", "Hoth", 6)]
    );
}

#[test]
fn database_routes_answer_like_inline_routes() {
    let dir = TempDir::new().expect("create temp dir");
    common::write_routes_db(&dir.path().join("universe.db"), &common::classic_routes());
    let falcon_path = dir.path().join("falcon.json");
    fs::write(&falcon_path, r#"{"autonomy": 6, "routes_db": "universe.db"}"#)
        .expect("write falcon document");

    let from_db = Navigator::from_path(&falcon_path).expect("navigator builds");
    let inline = Navigator::from_path(&common::fixtures_dir().join("millennium-falcon.json"))
        .expect("navigator builds");

    for countdown in [7, 8, 9, 10] {
        let empire = EmpireConfig {
            countdown,
            bounty_hunters: common::classic_hunters(),
        };
        assert_eq!(
            from_db.odds(&empire).expect("odds").captures,
            inline.odds(&empire).expect("odds").captures,
        );
    }
}

#[test]
fn missing_routes_database_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    let err = load_routes_db(&dir.path().join("nowhere.db")).expect_err("missing database");
    assert!(format!("{err}").contains("routes database not found"));
}

#[test]
fn database_without_routes_table_is_a_sqlite_error() {
    let dir = TempDir::new().expect("create temp dir");
    let db_path = dir.path().join("empty.db");
    rusqlite::Connection::open(&db_path)
        .and_then(|conn| conn.execute("CREATE TABLE OTHER (X INTEGER)", []))
        .expect("create database");

    let err = load_routes_db(&db_path).expect_err("no ROUTES table");
    assert!(matches!(err, Error::Sqlite(_)));
}
