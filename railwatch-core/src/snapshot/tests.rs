use crate::board::{Classifier, RawTriple, RecordBuilder, SortOrder};
use crate::snapshot::{Snapshot, SnapshotStore};
use chrono::TimeZone;
use chrono_tz::Asia::Tokyo;
use std::sync::Arc;
use std::thread;

fn at(h: u32, m: u32, s: u32) -> chrono::DateTime<chrono_tz::Tz> {
    Tokyo.with_ymd_and_hms(2026, 1, 15, h, m, s).unwrap()
}

fn lines(n: usize) -> Vec<crate::board::LineStatus> {
    let builder = RecordBuilder::canonical(Classifier::Lexical, SortOrder::Line);
    (0..n)
        .map(|i| {
            builder
                .build(&RawTriple::new(format!("テスト{i}線"), "平常運転", ""))
                .unwrap()
        })
        .collect()
}

#[test]
fn placeholder_encodes_as_not_live() {
    let store = SnapshotStore::new(Snapshot::placeholder(at(9, 5, 0))).unwrap();

    let frame = store.frame();
    assert_eq!(frame.epoch, 0);

    let json: serde_json::Value = serde_json::from_str(&frame.json).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "lines": [], "updated": "09:05:00 2026-01-15", "live": false })
    );
}

#[test]
fn record_fields_are_serialized() {
    let snapshot = Snapshot::live(lines(1), at(12, 0, 0));
    let json = serde_json::to_value(&snapshot).unwrap();
    let line = &json["lines"][0];

    for key in [
        "id", "line", "line_en", "status", "status_en", "reason", "detail", "severity",
        "is_severe",
    ] {
        assert!(line.get(key).is_some(), "missing {key}");
    }
    assert_eq!(line["severity"], 0);
    assert_eq!(json["live"], true);
}

#[test]
fn replace_bumps_epoch_and_swaps_whole_frame() {
    let store = SnapshotStore::new(Snapshot::placeholder(at(9, 0, 0))).unwrap();
    let before = store.current();

    let frame = store.replace(Snapshot::live(lines(2), at(9, 0, 30))).unwrap();

    assert_eq!(frame.epoch, 1);
    assert!(store.current().live);
    assert_eq!(store.current().lines.len(), 2);
    assert!(Arc::ptr_eq(&store.current(), &frame.snapshot));
    assert!(!before.live, "readers holding the old snapshot keep it intact");
}

#[test]
fn current_is_the_same_object_until_replaced() {
    let store = SnapshotStore::new(Snapshot::placeholder(at(9, 0, 0))).unwrap();
    store.replace(Snapshot::live(lines(3), at(9, 0, 30))).unwrap();

    let a = store.current();
    let b = store.current();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn concurrent_readers_never_see_a_mixed_frame() {
    let store = Arc::new(SnapshotStore::new(Snapshot::placeholder(at(9, 0, 0))).unwrap());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let frame = store.frame();
                    // Commit `k` carries exactly `k` lines.
                    assert_eq!(frame.snapshot.lines.len() as u64, frame.epoch);
                    let decoded: serde_json::Value = serde_json::from_str(&frame.json).unwrap();
                    assert_eq!(decoded["lines"].as_array().unwrap().len() as u64, frame.epoch);
                }
            })
        })
        .collect();

    for k in 1..=20 {
        store
            .replace(Snapshot::live(lines(k), at(9, 1, k as u32)))
            .unwrap();
    }

    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(store.frame().epoch, 20);
}
