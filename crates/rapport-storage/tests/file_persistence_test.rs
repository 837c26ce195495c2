//! File-backed databases: restart survival, read-pool visibility, and
//! concurrent writers on the same pair.

use std::sync::Arc;
use std::thread;

use chrono::{TimeZone, Utc};
use rapport_core::config::StorageConfig;
use rapport_core::models::RelationshipState;
use rapport_core::traits::IRelationshipStorage;
use rapport_storage::migrations::{current_version, LATEST_VERSION};
use rapport_storage::pool::pragmas::verify_wal_mode;
use rapport_storage::StorageEngine;

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rapport.db");
    let now = Utc.with_ymd_and_hms(2025, 5, 4, 8, 30, 0).unwrap();

    {
        let engine = StorageEngine::open(&path).unwrap();
        engine
            .create(&RelationshipState::new("u1", "c1", 50.0, 0.0, now))
            .unwrap();
        engine.apply_delta("u1", "c1", 2.0, 1.0, now).unwrap();
    }

    let engine = StorageEngine::open(&path).unwrap();
    let state = engine.get_by_pair("u1", "c1").unwrap().unwrap();
    assert_eq!(state.mood_score.value(), 52.0);
    assert_eq!(state.relationship_score.value(), 1.0);
}

#[test]
fn migrations_are_recorded_and_wal_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("rapport.db")).unwrap();

    engine
        .pool()
        .writer
        .with_conn(|conn| {
            assert_eq!(current_version(conn)?, LATEST_VERSION);
            assert!(verify_wal_mode(conn)?);
            Ok(())
        })
        .unwrap();
}

#[test]
fn read_pool_honours_configured_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        read_pool_size: 2,
        ..StorageConfig::default()
    };
    let engine = StorageEngine::open_with_config(&dir.path().join("rapport.db"), &config).unwrap();
    assert_eq!(engine.pool().readers.as_ref().map(|r| r.size()), Some(2));
}

#[test]
fn in_memory_engine_has_no_read_pool() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.pool().readers.is_none());
    engine
        .create(&RelationshipState::new("u1", "c1", 50.0, 0.0, Utc::now()))
        .unwrap();
    assert!(engine.get_by_pair("u1", "c1").unwrap().is_some());
}

#[test]
fn concurrent_events_never_lose_increments() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(StorageEngine::open(&dir.path().join("rapport.db")).unwrap());
    let now = Utc.with_ymd_and_hms(2025, 5, 4, 8, 30, 0).unwrap();
    engine
        .create(&RelationshipState::new("u1", "c1", 50.0, 0.0, now))
        .unwrap();

    let threads = 8;
    let per_thread = 5;
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..per_thread {
                    engine.apply_delta("u1", "c1", 2.0, 1.0, now).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let n = f64::from(threads * per_thread);
    let state = engine.get_by_pair("u1", "c1").unwrap().unwrap();
    assert_eq!(state.mood_score.value(), (50.0 + 2.0 * n).min(100.0));
    assert_eq!(state.relationship_score.value(), n);
}
