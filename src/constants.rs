// Camera, orbit-control and presentation tuning.
// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: [f32; 3] = [0.0, 10.0, 30.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.08; // fraction of pending motion applied per update
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // distance scale per wheel notch
pub const ORBIT_POLAR_EPS: f32 = 1e-6; // keeps the polar angle off the poles

// Presentation
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
pub const BLUR_MAX_TAPS_SCALE: f32 = 4.0; // bloom radius 1.0 spreads the kernel over this many texels
