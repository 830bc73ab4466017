// Host-side tests for the pure scroll signal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/scroll.rs"]
mod scroll;

use scroll::*;

#[test]
fn progress_is_ratio_of_scroll_range() {
    assert!((normalized_progress(500.0, 2000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert!((normalized_progress(0.0, 2000.0, 1000.0)).abs() < 1e-6);
    assert!((normalized_progress(1000.0, 2000.0, 1000.0) - 1.0).abs() < 1e-6);
}

#[test]
fn progress_clamps_out_of_range_offsets() {
    // Overscroll (rubber-banding) can report offsets outside the range
    assert_eq!(normalized_progress(-50.0, 2000.0, 1000.0), 0.0);
    assert_eq!(normalized_progress(5000.0, 2000.0, 1000.0), 1.0);
}

#[test]
fn degenerate_scroll_range_maps_to_zero() {
    // Document no taller than the viewport: no division by zero, no NaN
    assert_eq!(normalized_progress(0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(normalized_progress(100.0, 800.0, 1000.0), 0.0);
    assert!(normalized_progress(100.0, 1000.0, 1000.0).is_finite());
}

#[test]
fn signal_tracks_latest_event() {
    let mut signal = ScrollSignal::new();
    assert_eq!(signal.progress(), 0.0);
    signal.on_scroll(250.0, 2000.0, 1000.0, 1.0);
    assert!((signal.progress() - 0.25).abs() < 1e-6);
    signal.on_scroll(750.0, 2000.0, 1000.0, 2.0);
    assert!((signal.progress() - 0.75).abs() < 1e-6);
}

#[test]
fn activity_window_spans_quiescence_after_last_event() {
    let mut signal = ScrollSignal::new();
    assert!(!signal.is_actively_scrolling(0.0));

    signal.on_scroll(100.0, 2000.0, 1000.0, 1.0);
    assert!(signal.is_actively_scrolling(1.0));
    assert!(signal.is_actively_scrolling(1.1));
    assert!(signal.is_actively_scrolling(1.0 + constants::SCROLL_QUIESCENCE_SEC));
    assert!(!signal.is_actively_scrolling(1.0 + constants::SCROLL_QUIESCENCE_SEC + 0.001));

    // A new event reopens the window
    signal.on_scroll(120.0, 2000.0, 1000.0, 2.0);
    assert!(signal.is_actively_scrolling(2.1));
}
