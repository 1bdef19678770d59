mod common;

use std::sync::Arc;

use common::make_frame;
use turntable_core::cache::FrameCache;
use turntable_core::error::TurntableError;
use turntable_core::frame::FrameSlot;

fn io_failure() -> TurntableError {
    TurntableError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "no such frame",
    ))
}

#[test]
fn test_new_cache_is_unsettled() {
    let cache = FrameCache::new(10);
    assert_eq!(cache.len(), 10);
    assert_eq!(cache.settled_count(), 0);
    assert_eq!(cache.progress_percent(), 0);
    assert!(!cache.is_complete());
}

#[test]
fn test_outcomes_arrive_in_arbitrary_order() {
    let mut cache = FrameCache::new(5);
    for index in [3, 0, 4, 1, 2] {
        cache
            .insert_outcome(index, Ok(make_frame(2, 2, [index as u8, 0, 0, 255])))
            .unwrap();
    }
    assert_eq!(cache.loaded_count(), 5);
    assert!(cache.is_complete());
    assert_eq!(cache.progress_percent(), 100);
}

#[test]
fn test_failures_count_as_settled() {
    let mut cache = FrameCache::new(4);
    cache.insert_outcome(0, Ok(make_frame(2, 2, [1, 2, 3, 255]))).unwrap();
    cache.insert_outcome(1, Err(io_failure())).unwrap();
    cache.insert_outcome(2, Err(io_failure())).unwrap();
    assert_eq!(cache.settled_count(), 3);
    assert_eq!(cache.loaded_count(), 1);
    assert_eq!(cache.failed_count(), 2);
    assert_eq!(cache.progress_percent(), 75);

    cache.insert_outcome(3, Ok(make_frame(2, 2, [0, 0, 0, 255]))).unwrap();
    // Progress reaches 100% even though some loads failed.
    assert_eq!(cache.progress_percent(), 100);
    assert!(cache.is_complete());
}

#[test]
fn test_get_only_returns_loaded_frames() {
    let mut cache = FrameCache::new(3);
    cache.insert_outcome(1, Err(io_failure())).unwrap();
    cache.insert(2, Arc::new(make_frame(2, 2, [9, 9, 9, 255]))).unwrap();

    assert!(cache.get(0).is_none());
    assert!(cache.get(1).is_none());
    assert!(cache.get(2).is_some());
}

#[test]
fn test_mark_loading_only_from_unloaded() {
    let mut cache = FrameCache::new(2);
    cache.mark_loading(0).unwrap();
    assert!(matches!(cache.slot(0), Some(FrameSlot::Loading)));

    cache.insert_outcome(0, Ok(make_frame(2, 2, [0, 0, 0, 255]))).unwrap();
    cache.mark_loading(0).unwrap();
    // A settled slot does not regress to Loading.
    assert!(matches!(cache.slot(0), Some(FrameSlot::Loaded(_))));
}

#[test]
fn test_out_of_range_insert_is_error() {
    let mut cache = FrameCache::new(2);
    match cache.insert_outcome(2, Err(io_failure())) {
        Err(TurntableError::FrameIndexOutOfRange { index: 2, total: 2 }) => {}
        other => panic!("expected FrameIndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn test_empty_cache_reports_complete() {
    let cache = FrameCache::new(0);
    assert!(cache.is_empty());
    assert_eq!(cache.progress_percent(), 100);
    assert!(cache.is_complete());
}
