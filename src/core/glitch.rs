use super::constants::{GLITCH_INTERVAL_MAX, GLITCH_INTERVAL_MIN, GLITCH_WEAK_FRACTION};
use rand::prelude::*;
use std::f32::consts::PI;

/// Column shift strength the glitch shader uses for every active frame.
pub const GLITCH_COL_S: f32 = 0.05;

/// Shader inputs for one frame of the glitch pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GlitchFrame {
    /// When set the pass copies its input unchanged.
    pub bypass: bool,
    pub amount: f32,
    pub angle: f32,
    pub seed: f32,
    pub seed_x: f32,
    pub seed_y: f32,
    pub distortion_x: f32,
    pub distortion_y: f32,
    pub col_s: f32,
}

impl GlitchFrame {
    pub fn idle() -> Self {
        Self {
            bypass: true,
            ..Default::default()
        }
    }
}

/// Frame-counted random glitch schedule.
///
/// A strong glitch fires whenever the counter reaches the current trigger
/// interval (drawn from `[120, 240)` frames), which also restarts the count
/// and draws the next interval. During the first fifth of each interval a
/// weaker glitch runs; the rest of the time the pass is bypassed.
pub struct GlitchSchedule {
    rng: StdRng,
    frame: u32,
    interval: u32,
}

impl GlitchSchedule {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let interval = rng.gen_range(GLITCH_INTERVAL_MIN..GLITCH_INTERVAL_MAX);
        Self {
            rng,
            frame: 0,
            interval,
        }
    }

    #[cfg(test)]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Advance one frame and return the uniforms for it.
    pub fn step(&mut self) -> GlitchFrame {
        let rng = &mut self.rng;
        let seed = rng.gen::<f32>();
        let out = if self.frame % self.interval == 0 {
            let f = GlitchFrame {
                bypass: false,
                amount: rng.gen::<f32>() / 30.0,
                angle: rng.gen_range(-PI..PI),
                seed,
                seed_x: rng.gen_range(-1.0..1.0),
                seed_y: rng.gen_range(-1.0..1.0),
                distortion_x: rng.gen_range(0.0..1.0),
                distortion_y: rng.gen_range(0.0..1.0),
                col_s: GLITCH_COL_S,
            };
            self.frame = 0;
            self.interval = rng.gen_range(GLITCH_INTERVAL_MIN..GLITCH_INTERVAL_MAX);
            f
        } else if self.frame % self.interval < self.interval / GLITCH_WEAK_FRACTION {
            GlitchFrame {
                bypass: false,
                amount: rng.gen::<f32>() / 90.0,
                angle: rng.gen_range(-PI..PI),
                seed,
                seed_x: rng.gen_range(-0.3..0.3),
                seed_y: rng.gen_range(-0.3..0.3),
                distortion_x: rng.gen_range(0.0..1.0),
                distortion_y: rng.gen_range(0.0..1.0),
                col_s: GLITCH_COL_S,
            }
        } else {
            GlitchFrame {
                seed,
                ..GlitchFrame::idle()
            }
        };
        self.frame += 1;
        out
    }
}
