// Host-side tests for the glitch schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod glitch {
        include!("../src/core/glitch.rs");
    }
}

use crate::core::constants::*;
use crate::core::glitch::*;

#[test]
fn first_frame_fires_a_strong_glitch() {
    let mut g = GlitchSchedule::new(1);
    let f = g.step();
    assert!(!f.bypass);
    assert!(f.amount < 1.0 / 30.0);
    assert_eq!(f.col_s, GLITCH_COL_S);
}

#[test]
fn interval_is_drawn_from_range() {
    for seed in 0..50 {
        let mut g = GlitchSchedule::new(seed);
        for _ in 0..600 {
            assert!(g.interval() >= GLITCH_INTERVAL_MIN && g.interval() < GLITCH_INTERVAL_MAX);
            g.step();
        }
    }
}

#[test]
fn schedule_has_strong_weak_and_idle_phases() {
    let mut g = GlitchSchedule::new(42);
    g.step();
    let interval = g.interval();
    let weak_frames = interval / GLITCH_WEAK_FRACTION;

    // frames 1..weak_frames are weak glitches
    for _ in 1..weak_frames {
        let f = g.step();
        assert!(!f.bypass);
        assert!(f.amount < 1.0 / 90.0);
        assert!(f.seed_x.abs() <= 0.3 && f.seed_y.abs() <= 0.3);
    }
    // then the pass idles until the next trigger
    for _ in weak_frames..interval {
        assert!(g.step().bypass);
    }
    // and the counter wraps into the next strong glitch
    let strong = g.step();
    assert!(!strong.bypass);
    assert!(strong.seed_x.abs() <= 1.0 && strong.seed_y.abs() <= 1.0);
}

#[test]
fn every_cycle_ends_in_an_idle_stretch_before_the_next_trigger() {
    let mut g = GlitchSchedule::new(9);
    assert!(!g.step().bypass);
    for _ in 0..8 {
        let interval = g.interval();
        let weak_frames = interval / GLITCH_WEAK_FRACTION;
        let frames: Vec<GlitchFrame> = (1..interval).map(|_| g.step()).collect();
        let active = frames.iter().filter(|f| !f.bypass).count() as u32;
        assert_eq!(active, weak_frames - 1);
        assert!(frames.last().map_or(false, |f| f.bypass));
        // the frame after a full interval is the next strong glitch
        assert!(!g.step().bypass);
    }
}

#[test]
fn same_seed_same_schedule() {
    let mut a = GlitchSchedule::new(77);
    let mut b = GlitchSchedule::new(77);
    for _ in 0..500 {
        assert_eq!(a.step(), b.step());
    }
}

#[test]
fn idle_frame_bypasses() {
    let f = GlitchFrame::idle();
    assert!(f.bypass);
    assert_eq!(f.amount, 0.0);
}
