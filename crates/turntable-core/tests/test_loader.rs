mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use common::build_sequence;
use turntable_core::loader::{load_frame, preload_rest};
use turntable_core::sequence::SequenceSpec;

#[test]
fn test_load_frame_decodes_rgba() {
    let (_dir, spec) = build_sequence("male", 2, 6, 4);
    let frame = load_frame(&spec, 0).unwrap();
    assert_eq!(frame.width(), 6);
    assert_eq!(frame.height(), 4);
}

#[test]
fn test_load_frame_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let spec = SequenceSpec::new(dir.path(), "male", 3);
    assert!(load_frame(&spec, 1).is_err());
}

#[test]
fn test_preload_rest_settles_every_frame_once() {
    let (_dir, spec) = build_sequence("male", 8, 4, 4);
    let settled = AtomicUsize::new(0);
    let seen = Mutex::new(Vec::new());

    let report = preload_rest(&spec, |index, outcome| {
        settled.fetch_add(1, Ordering::Relaxed);
        assert!(outcome.is_ok());
        seen.lock().unwrap().push(index);
    });

    assert_eq!(settled.load(Ordering::Relaxed), 7);
    assert_eq!(report.attempted, 7);
    assert_eq!(report.loaded(), 7);
    assert!(report.failed.is_empty());

    let mut seen = seen.into_inner().unwrap();
    seen.sort_unstable();
    assert_eq!(seen, (1..8).collect::<Vec<_>>());
}

#[test]
fn test_preload_rest_continues_past_failures() {
    let (dir, spec) = build_sequence("male", 6, 4, 4);
    // Break two frames; the batch must still settle all of them.
    std::fs::remove_file(dir.path().join("male0003.png")).unwrap();
    std::fs::remove_file(dir.path().join("male0005.png")).unwrap();

    let settled = AtomicUsize::new(0);
    let report = preload_rest(&spec, |_, _| {
        settled.fetch_add(1, Ordering::Relaxed);
    });

    assert_eq!(settled.load(Ordering::Relaxed), 5);
    assert_eq!(report.attempted, 5);
    assert_eq!(report.failed, vec![2, 4]);
    assert_eq!(report.loaded(), 3);
}

#[test]
fn test_preload_rest_single_frame_sequence() {
    let (_dir, spec) = build_sequence("male", 1, 4, 4);
    let report = preload_rest(&spec, |_, _| panic!("nothing to preload"));
    assert_eq!(report.attempted, 0);
    assert!(report.failed.is_empty());
}
