// Host-side tests for the wave height, phase and beat functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod wave {
        include!("../src/core/wave.rs");
    }
}

use crate::core::constants::*;
use crate::core::params::*;
use crate::core::wave::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// Full per-point evaluation, the way one frame computes it.
fn wave_height(i: usize, j: usize, t: f64, params: &Params, tables: &mut MotionTables) -> f64 {
    let b = beat(beat_phase(t, params.bpm), params.beat_strength, params.beat_type);
    let p = phase(j, i, t, params, tables);
    height(i, j, t, p, b, params)
}

#[test]
fn beat_phase_wraps_once_per_beat() {
    // 120 bpm -> one beat every 0.5 s
    assert!(approx(beat_phase(0.0, 120.0), 0.0));
    assert!(approx(beat_phase(0.25, 120.0), 0.5));
    assert!(approx(beat_phase(0.5, 120.0), 0.0));
    assert!(approx(beat_phase(1.125, 120.0), 0.25));
    for k in 0..200 {
        let p = beat_phase(k as f64 * 0.037, 97.0);
        assert!((0.0..1.0).contains(&p));
    }
}

#[test]
fn sin_beat_rests_on_the_beat_and_peaks_mid_beat() {
    assert_eq!(beat(0.0, 0.7, BeatType::Sin), 1.0);
    assert!(approx(beat(0.5, 0.7, BeatType::Sin), 1.7));
    assert!(approx(beat(0.25, 1.0, BeatType::Sin), 1.5));
}

#[test]
fn pulse_beat_hits_full_strength_and_decays_to_rest() {
    assert!(approx(beat(0.0, 0.7, BeatType::Pulse), 1.7));
    assert!(approx(beat(PULSE_ATTACK / 2.0, 1.0, BeatType::Pulse), 1.5));
    assert_eq!(beat(PULSE_ATTACK, 0.7, BeatType::Pulse), 1.0);
    assert_eq!(beat(0.9, 0.7, BeatType::Pulse), 1.0);
}

#[test]
fn pulse_beat_is_continuous_at_its_breakpoint() {
    let s = 1.3;
    let below = beat(PULSE_ATTACK - 1e-9, s, BeatType::Pulse);
    let at = beat(PULSE_ATTACK, s, BeatType::Pulse);
    assert!((below - at).abs() < 1e-6);
}

#[test]
fn ease_beat_rises_over_the_attack_then_rests() {
    assert_eq!(beat(0.0, 0.7, BeatType::Ease), 1.0);
    assert!(approx(beat(EASE_ATTACK / 2.0, 1.0, BeatType::Ease), 1.5));
    // The cosine rise reaches full strength right at the breakpoint, after
    // which the envelope returns straight to rest.
    assert!(beat(EASE_ATTACK - 1e-9, 1.0, BeatType::Ease) > 1.999);
    assert_eq!(beat(EASE_ATTACK, 1.0, BeatType::Ease), 1.0);
}

#[test]
fn zero_strength_beat_is_identity_for_every_shape() {
    for kind in [BeatType::Sin, BeatType::Pulse, BeatType::Ease] {
        for k in 0..20 {
            assert_eq!(beat(k as f64 / 20.0, 0.0, kind), 1.0);
        }
    }
}

#[test]
fn directional_modes_mirror_each_other() {
    let mut tables = MotionTables::new(1);
    let mut p = Params::default();
    p.move_mode = MoveMode::LeftToRight;
    let ltr = phase(10, 3, 2.5, &p, &mut tables);
    p.move_mode = MoveMode::RightToLeft;
    let rtl = phase(10, 3, 2.5, &p, &mut tables);
    assert!(approx(ltr, 2.5 * p.speed));
    assert!(approx(rtl, -ltr));
    assert!(!tables.is_generated());
}

#[test]
fn center_modes_depend_on_distance_from_center() {
    let mut tables = MotionTables::new(1);
    let p = Params {
        move_mode: MoveMode::CenterToEdge,
        ..Params::default()
    };
    let center = (POINTS_PER_LINE - 1) as f64 / 2.0;
    let edge = phase(0, 0, 1.0, &p, &mut tables);
    let mid = phase(60, 0, 1.0, &p, &mut tables);
    assert!(approx(edge, p.speed + center * CENTER_PHASE_STEP));
    assert!(approx(mid, p.speed + 0.5 * CENTER_PHASE_STEP));
    // symmetric about the center
    let left = phase(5, 0, 1.0, &p, &mut tables);
    let right = phase(POINTS_PER_LINE - 1 - 5, 0, 1.0, &p, &mut tables);
    assert!(approx(left, right));

    let q = Params {
        move_mode: MoveMode::EdgeToCenter,
        ..Params::default()
    };
    let edge = phase(0, 0, 1.0, &q, &mut tables);
    assert!(approx(edge, q.speed));
}

#[test]
fn random_tables_are_drawn_once_and_stay_fixed() {
    let mut tables = MotionTables::new(7);
    let p = Params {
        move_mode: MoveMode::Random,
        ..Params::default()
    };
    assert!(!tables.is_generated());
    let first: Vec<LineMotion> = (0..LINE_COUNT).map(|i| tables.line(i)).collect();
    assert!(tables.is_generated());
    for t in [0.0, 0.5, 10.0] {
        for i in 0..LINE_COUNT {
            let m = first[i];
            assert!(approx(phase(3, i, t, &p, &mut tables), t * m.speed + m.offset));
        }
    }
    let again: Vec<LineMotion> = (0..LINE_COUNT).map(|i| tables.line(i)).collect();
    assert_eq!(first, again);
}

#[test]
fn random_tables_stay_in_range() {
    let mut tables = MotionTables::new(99);
    for i in 0..LINE_COUNT {
        let m = tables.line(i);
        assert!((0.0..std::f64::consts::TAU).contains(&m.offset));
        assert!(m.speed >= RANDOM_SPEED_MIN && m.speed < RANDOM_SPEED_MIN + RANDOM_SPEED_SPAN);
    }
}

#[test]
fn random_mode_ignores_global_speed() {
    let mut a = MotionTables::new(5);
    let mut b = MotionTables::new(5);
    let slow = Params {
        move_mode: MoveMode::Random,
        speed: 0.1,
        ..Params::default()
    };
    let fast = Params {
        speed: 4.0,
        ..slow.clone()
    };
    assert_eq!(phase(0, 2, 3.0, &slow, &mut a), phase(0, 2, 3.0, &fast, &mut b));
}

#[test]
fn regenerate_draws_a_fresh_table() {
    let mut tables = MotionTables::new(11);
    let before = tables.line(0);
    tables.regenerate();
    assert!(!tables.is_generated());
    let after = tables.line(0);
    assert!(tables.is_generated());
    assert_ne!(before, after);
}

#[test]
fn same_seed_gives_same_tables() {
    let mut a = MotionTables::new(3);
    let mut b = MotionTables::new(3);
    for i in 0..LINE_COUNT {
        assert_eq!(a.line(i), b.line(i));
    }
}

#[test]
fn height_matches_formula() {
    let p = Params::default();
    let (i, j, t) = (4usize, 17usize, 1.75);
    let ph = 0.3;
    let b = 1.2;
    let expected = ((j as f64) * p.frequency + (i as f64) * p.phase_step + ph).sin()
        * p.amplitude
        * b
        + ((j as f64) * p.noise_frequency + t * p.noise_speed + i as f64).sin() * p.noise_strength
        + p.y_offset;
    assert!(approx(height(i, j, t, ph, b, &p), expected));
}

#[test]
fn flat_params_give_flat_lines_at_y_offset() {
    let mut tables = MotionTables::new(0);
    let p = Params {
        amplitude: 0.0,
        noise_strength: 0.0,
        y_offset: 2.5,
        ..Params::default()
    };
    for i in [0, 13, LINE_COUNT - 1] {
        for j in [0, 60, POINTS_PER_LINE - 1] {
            assert_eq!(wave_height(i, j, 3.3, &p, &mut tables), 2.5);
        }
    }
}

#[test]
fn height_is_reproducible_for_fixed_modes() {
    let p = Params {
        move_mode: MoveMode::EdgeToCenter,
        beat_type: BeatType::Pulse,
        ..Params::default()
    };
    let mut a = MotionTables::new(1);
    let mut b = MotionTables::new(2);
    for k in 0..50 {
        let t = k as f64 * 0.173;
        let (i, j) = (k % LINE_COUNT, (k * 7) % POINTS_PER_LINE);
        let ya = wave_height(i, j, t, &p, &mut a);
        let yb = wave_height(i, j, t, &p, &mut b);
        assert_eq!(ya.to_bits(), yb.to_bits());
    }
}

#[test]
fn height_stays_within_amplitude_envelope() {
    let p = Params::default();
    let mut tables = MotionTables::new(0);
    let bound = p.amplitude * (1.0 + p.beat_strength) + p.noise_strength + p.y_offset.abs();
    for k in 0..400 {
        let t = k as f64 * 0.05;
        let y = wave_height(k % LINE_COUNT, (k * 13) % POINTS_PER_LINE, t, &p, &mut tables);
        assert!(y.abs() <= bound + 1e-9, "y={} bound={}", y, bound);
    }
}
