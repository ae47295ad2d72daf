// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use bubble_core::{
    CAMERA_SMOOTH_TIME_SEC, IDLE_SCALE_MAX, INNER_RING_SPACING, LOGO_SIZE, PARALLAX_FACTOR,
    PARALLAX_SMOOTH_TIME_SEC, WORLD_SIZE,
};
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_is_a_fraction_of_a_second() {
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC < CAMERA_SMOOTH_TIME_SEC);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [VIEWPORT_ID, CAMERA_LAYER_ID, LOGO_ID];
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            assert_ne!(ids[i], ids[j]);
        }
    }
    assert_ne!(ITEM_CLASS, RING_CLASS);
    assert_ne!(ITEM_CLASS, ITEM_IMAGE_CLASS);
}

#[test]
fn cursors_differ_between_idle_and_drag() {
    assert_ne!(CURSOR_IDLE, CURSOR_DRAGGING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn logo_and_parallax_have_logical_relationships() {
    // logo fits inside the empty middle of the inner ring
    assert!(LOGO_SIZE < WORLD_SIZE);
    assert!(LOGO_SIZE / 2.0 * IDLE_SCALE_MAX < INNER_RING_SPACING);

    // background lags the foreground in both distance and time
    assert!(PARALLAX_FACTOR > 0.0 && PARALLAX_FACTOR < 1.0);
    assert!(PARALLAX_SMOOTH_TIME_SEC > CAMERA_SMOOTH_TIME_SEC);
}
