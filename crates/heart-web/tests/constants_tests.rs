// Host-side tests for web constants.
// The web crate is wasm-only, so the constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn instance_layout_matches_three_floats() {
    assert_eq!(INSTANCE_STRIDE, 3 * std::mem::size_of::<f32>() as u64);
    assert_eq!(QUAD_VERTICES, 6);
    assert!(MAX_FRAME_LATENCY >= 1);
}

#[test]
fn clear_color_is_fully_transparent() {
    assert_eq!(CLEAR_COLOR[3], 0.0);
    assert!(CLEAR_COLOR.iter().all(|&c| c == 0.0));
}

#[test]
fn canvas_overlays_without_catching_input() {
    assert!(!CANVAS_ID.is_empty());
    assert!(CANVAS_STYLE.contains("pointer-events:none"));
    assert!(CANVAS_STYLE.contains("position:absolute"));
}

#[test]
fn inert_mount_id_is_never_a_generation() {
    // generations start counting at 1
    assert_eq!(INERT_MOUNT_ID, 0);
}
