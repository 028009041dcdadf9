// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    let eye = glam::Vec3::from(CAMERA_EYE);
    let dist = (eye - glam::Vec3::from(CAMERA_TARGET)).length();
    // the starting view sits inside the orbit limits
    assert!(dist >= ORBIT_MIN_DISTANCE && dist <= ORBIT_MAX_DISTANCE);
    assert!(ORBIT_MAX_DISTANCE < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_tuning_is_within_bounds() {
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(ORBIT_ZOOM_BASE > 0.0 && ORBIT_ZOOM_BASE < 1.0);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_POLAR_EPS > 0.0 && ORBIT_POLAR_EPS < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_constants_are_positive() {
    assert!(LINE_COUNT > 1);
    assert!(POINTS_PER_LINE > 1);
    assert!(GRID_WIDTH > 0.0);
    assert!(DEPTH_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn beat_breakpoints_fall_inside_one_beat() {
    assert!(PULSE_ATTACK > 0.0 && PULSE_ATTACK < 1.0);
    assert!(EASE_ATTACK > 0.0 && EASE_ATTACK < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glitch_schedule_leaves_room_for_idle_frames() {
    assert!(GLITCH_INTERVAL_MIN > 0);
    assert!(GLITCH_INTERVAL_MIN < GLITCH_INTERVAL_MAX);
    assert!(GLITCH_WEAK_FRACTION > 1);
    assert!(GLITCH_INTERVAL_MIN / GLITCH_WEAK_FRACTION > 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn random_speeds_are_positive() {
    assert!(RANDOM_SPEED_MIN > 0.0);
    assert!(RANDOM_SPEED_SPAN > 0.0);
}
