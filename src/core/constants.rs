/// Grid layout and waveform tuning constants.
///
/// These describe the fixed shape of the scene (line/point counts and
/// spacing) and the handful of magic numbers baked into the motion and beat
/// formulas, so the evaluation code reads as the formulas themselves.
// Grid layout
pub const LINE_COUNT: usize = 40;
pub const POINTS_PER_LINE: usize = 120;
pub const GRID_WIDTH: f32 = 20.0;
pub const DEPTH_STEP: f32 = 0.6; // spacing between lines along Z

// Motion modes
pub const CENTER_PHASE_STEP: f64 = 0.12; // phase added per point away from (or toward) the center

// Random motion tables
pub const RANDOM_SPEED_MIN: f64 = 0.5;
pub const RANDOM_SPEED_SPAN: f64 = 1.5; // speeds land in [0.5, 2.0)

// Beat envelope breakpoints (fraction of one beat)
pub const PULSE_ATTACK: f64 = 0.15;
pub const EASE_ATTACK: f64 = 0.2;

// Glitch schedule (frames)
pub const GLITCH_INTERVAL_MIN: u32 = 120;
pub const GLITCH_INTERVAL_MAX: u32 = 240;
pub const GLITCH_WEAK_FRACTION: u32 = 5; // weak glitch during the first 1/N of an interval
