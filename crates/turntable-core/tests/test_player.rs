mod common;

use common::make_frame;
use turntable_core::error::TurntableError;
use turntable_core::frame::Frame;
use turntable_core::player::Player;
use turntable_core::scrub::ScrollMetrics;
use turntable_core::sequence::SequenceSpec;

const N: usize = 300;

fn spec(count: usize) -> SequenceSpec {
    SequenceSpec::new("/assets/images", "male", count)
}

fn new_player(count: usize) -> Player {
    Player::new(spec(count), 40, 40).unwrap()
}

fn ok_frame() -> Result<Frame, TurntableError> {
    Ok(make_frame(20, 10, [220, 40, 40, 255]))
}

fn failed_frame() -> Result<Frame, TurntableError> {
    Err(TurntableError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing frame",
    )))
}

#[test]
fn test_new_rejects_empty_sequence_and_bad_surface() {
    assert!(matches!(
        Player::new(spec(0), 40, 40),
        Err(TurntableError::EmptySequence(_))
    ));
    assert!(matches!(
        Player::new(spec(N), 0, 40),
        Err(TurntableError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_set_frame_clamps() {
    let mut player = new_player(N);
    player.set_frame(-5);
    assert_eq!(player.current_frame(), 0);
    player.set_frame(N as i64 + 10);
    assert_eq!(player.current_frame(), N - 1);
    player.set_frame(150);
    assert_eq!(player.current_frame(), 150);
}

#[test]
fn test_step_clamps_at_both_ends() {
    let mut player = new_player(N);
    player.step(-1);
    assert_eq!(player.current_frame(), 0);
    player.set_frame(N as i64 - 1);
    player.step(10);
    assert_eq!(player.current_frame(), N - 1);
    player.step(-10);
    assert_eq!(player.current_frame(), N - 11);
}

#[test]
fn test_render_skips_unloaded_frame_without_touching_surface() {
    let mut player = new_player(N);
    player.apply_load(0, ok_frame()).unwrap();
    let before = player.surface().as_raw().to_vec();

    // Frame 5 never loaded: the surface keeps frame 0's pixels.
    player.set_frame(5);
    assert_eq!(player.surface().as_raw(), &before[..]);
    assert!(!player.render());
}

#[test]
fn test_apply_load_renders_current_frame() {
    let mut player = new_player(N);
    assert!(player.surface().as_raw().iter().all(|&b| b == 0));
    let drew = player.apply_load(0, ok_frame()).unwrap();
    assert!(drew);
    assert!(player.surface().as_raw().iter().any(|&b| b != 0));
}

#[test]
fn test_apply_load_for_other_frame_does_not_render() {
    let mut player = new_player(N);
    let drew = player.apply_load(7, ok_frame()).unwrap();
    assert!(!drew);
    assert!(player.surface().as_raw().iter().all(|&b| b == 0));
}

#[test]
fn test_first_frame_failure_is_surfaced_and_nonfatal() {
    let mut player = new_player(N);
    player.apply_load(0, failed_frame()).unwrap();
    assert!(player.first_frame_error().is_some());

    // Background preload still proceeds and settles.
    for i in 1..N {
        player.apply_load(i, ok_frame()).unwrap();
    }
    assert_eq!(player.progress_percent(), 100);
    assert!(player.is_ready());

    // Frame 0 stays failed; scrubbing away still works.
    assert!(!player.render());
    player.set_frame(1);
    assert!(player.render());
}

#[test]
fn test_failed_frames_still_reach_full_progress() {
    let mut player = new_player(10);
    for i in 0..10 {
        let outcome = if i % 3 == 0 { failed_frame() } else { ok_frame() };
        player.apply_load(i, outcome).unwrap();
    }
    assert_eq!(player.progress_percent(), 100);
    assert!(player.is_ready());
    assert_eq!(player.cache().failed_count(), 4);
}

#[test]
fn test_on_scroll_maps_and_renders() {
    let mut player = new_player(N);
    for i in 0..N {
        player.apply_load(i, ok_frame()).unwrap();
    }

    let metrics = |offset: f64| ScrollMetrics {
        offset,
        content_height: 1800.0,
        viewport_height: 800.0,
    };

    // scrollable = 1000; 85% boundary pins the last frame.
    assert!(player.on_scroll(metrics(425.0)));
    assert_eq!(player.current_frame(), 149);
    assert!(player.on_scroll(metrics(850.0)));
    assert_eq!(player.current_frame(), N - 1);
    // Unchanged mapping does not re-render.
    assert!(!player.on_scroll(metrics(900.0)));
}

#[test]
fn test_on_scroll_ignores_unscrollable_page() {
    let mut player = new_player(N);
    player.set_frame(42);
    let changed = player.on_scroll(ScrollMetrics {
        offset: 100.0,
        content_height: 400.0,
        viewport_height: 800.0,
    });
    assert!(!changed);
    assert_eq!(player.current_frame(), 42);
}

#[test]
fn test_resize_repaints_current_frame() {
    let mut player = new_player(N);
    player.apply_load(0, ok_frame()).unwrap();
    player.resize(64, 32).unwrap();
    assert_eq!(player.surface().width(), 64);
    assert_eq!(player.surface().height(), 32);
    assert!(player.surface().as_raw().iter().any(|&b| b != 0));
}

#[test]
fn test_playback_advances_and_wraps() {
    let mut player = new_player(4);
    for i in 0..4 {
        player.apply_load(i, ok_frame()).unwrap();
    }

    assert!(!player.advance(1.0), "paused player must not advance");
    assert!(player.toggle_play());

    // 30 fps: one frame every 1/30 s.
    assert!(player.advance(0.034));
    assert_eq!(player.current_frame(), 1);
    assert!(!player.advance(0.001));

    // Advancing past the end wraps to the start.
    player.advance(0.1);
    assert_eq!(player.current_frame(), 0);

    assert!(!player.toggle_play());
    assert!(!player.advance(1.0));
}

#[test]
fn test_teardown_is_idempotent_and_discards_late_loads() {
    let mut player = new_player(N);
    player.apply_load(0, ok_frame()).unwrap();
    player.toggle_play();

    player.teardown();
    player.teardown();
    assert!(player.is_closed());
    assert!(!player.is_playing());

    // In-flight completions after teardown must not touch shared state.
    let drew = player.apply_load(1, ok_frame()).unwrap();
    assert!(!drew);
    assert_eq!(player.cache().settled_count(), 1);
    assert!(!player.toggle_play());
}
