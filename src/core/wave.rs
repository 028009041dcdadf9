use super::constants::{
    CENTER_PHASE_STEP, EASE_ATTACK, LINE_COUNT, POINTS_PER_LINE, PULSE_ATTACK, RANDOM_SPEED_MIN,
    RANDOM_SPEED_SPAN,
};
use super::params::{BeatType, MoveMode, Params};
use rand::prelude::*;
use std::f64::consts::PI;

/// Per-line phase offset and speed used by [`MoveMode::Random`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMotion {
    pub offset: f64,
    pub speed: f64,
}

/// Lazily generated random motion for every line.
///
/// The table is drawn on the first phase lookup in random mode and then stays
/// fixed for the rest of the session, so lines keep their individual drift
/// from frame to frame. [`MotionTables::regenerate`] drops the table; the next
/// random-mode lookup draws a fresh one.
pub struct MotionTables {
    rng: StdRng,
    lines: Option<Vec<LineMotion>>,
}

impl MotionTables {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            lines: None,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            lines: None,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.lines.is_some()
    }

    pub fn regenerate(&mut self) {
        self.lines = None;
    }

    /// Motion for `line`, drawing the whole table on first use.
    pub fn line(&mut self, line: usize) -> LineMotion {
        let rng = &mut self.rng;
        let lines = self.lines.get_or_insert_with(|| {
            let offsets: Vec<f64> = (0..LINE_COUNT)
                .map(|_| rng.gen::<f64>() * PI * 2.0)
                .collect();
            offsets
                .into_iter()
                .map(|offset| LineMotion {
                    offset,
                    speed: RANDOM_SPEED_MIN + rng.gen::<f64>() * RANDOM_SPEED_SPAN,
                })
                .collect()
        });
        lines[line % LINE_COUNT]
    }
}

/// Position within the current beat, in `[0, 1)`.
#[inline]
pub fn beat_phase(t: f64, bpm: f64) -> f64 {
    let beat_interval = 60.0 / bpm;
    (t / beat_interval) % 1.0
}

/// Multiplicative amplitude envelope for a point in the beat.
///
/// - `Sin`: smooth swell peaking mid-beat
/// - `Pulse`: jumps to `1 + strength` on the beat and decays linearly over the first 15%
/// - `Ease`: cosine rise over the first 20% then snaps back to rest
pub fn beat(phase: f64, strength: f64, kind: BeatType) -> f64 {
    match kind {
        BeatType::Sin => 1.0 + strength * (PI * phase).sin().powi(2).max(0.0),
        BeatType::Pulse => {
            1.0 + strength
                * if phase < PULSE_ATTACK {
                    1.0 - phase / PULSE_ATTACK
                } else {
                    0.0
                }
        }
        BeatType::Ease => {
            1.0 + strength
                * if phase < EASE_ATTACK {
                    (1.0 - (PI * phase / EASE_ATTACK).cos()) / 2.0
                } else {
                    0.0
                }
        }
    }
}

/// Phase driving the travel of point `j` on line `i` at time `t`.
pub fn phase(j: usize, i: usize, t: f64, params: &Params, tables: &mut MotionTables) -> f64 {
    let center = (POINTS_PER_LINE - 1) as f64 / 2.0;
    let from_center = (j as f64 - center).abs();
    match params.move_mode {
        MoveMode::LeftToRight => t * params.speed,
        MoveMode::RightToLeft => -t * params.speed,
        MoveMode::CenterToEdge => t * params.speed + from_center * CENTER_PHASE_STEP,
        MoveMode::EdgeToCenter => t * params.speed + (center - from_center) * CENTER_PHASE_STEP,
        MoveMode::Random => {
            let m = tables.line(i);
            t * m.speed + m.offset
        }
    }
}

/// Height of point `j` on line `i` given this frame's phase and beat envelope.
#[inline]
pub fn height(i: usize, j: usize, t: f64, phase: f64, beat: f64, params: &Params) -> f64 {
    let (i, j) = (i as f64, j as f64);
    let base = (j * params.frequency + i * params.phase_step + phase).sin()
        * params.amplitude
        * beat;
    let noise = (j * params.noise_frequency + t * params.noise_speed + i).sin()
        * params.noise_strength;
    base + noise + params.y_offset
}
