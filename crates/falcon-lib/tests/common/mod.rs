//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests,
//! including the classic four-planet universe and SQLite route fixtures.

use std::path::{Path, PathBuf};

use falcon_lib::{BountyHunter, Route};
use rusqlite::Connection;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Routes between Tatooine, Dagobah, Hoth and Endor.
#[allow(dead_code)]
pub fn classic_routes() -> Vec<Route> {
    vec![
        Route::new("Tatooine", "Dagobah", 6),
        Route::new("Dagobah", "Endor", 4),
        Route::new("Dagobah", "Hoth", 1),
        Route::new("Hoth", "Endor", 1),
        Route::new("Tatooine", "Hoth", 6),
    ]
}

/// Bounty hunters on Hoth for days 6, 7 and 8.
#[allow(dead_code)]
pub fn classic_hunters() -> Vec<BountyHunter> {
    (6..=8).map(|day| BountyHunter::new("Hoth", day)).collect()
}

/// Write `routes` into a `ROUTES` table at `path`.
#[allow(dead_code)]
pub fn write_routes_db(path: &Path, routes: &[Route]) {
    let connection = Connection::open(path).expect("create routes database");
    connection
        .execute(
            "CREATE TABLE ROUTES (ORIGIN TEXT, DESTINATION TEXT, TRAVEL_TIME INTEGER)",
            [],
        )
        .expect("create ROUTES table");
    for route in routes {
        connection
            .execute(
                "INSERT INTO ROUTES (ORIGIN, DESTINATION, TRAVEL_TIME) VALUES (?1, ?2, ?3)",
                rusqlite::params![route.origin, route.destination, route.travel_time],
            )
            .expect("insert route");
    }
}
