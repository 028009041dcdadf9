use super::constants::*;
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Perspective camera orbiting a target point, with damped rotation and zoom.
///
/// Pointer drags and wheel notches only queue motion; [`OrbitCamera::update`]
/// applies a damped share of it once per frame, so the view keeps gliding
/// briefly after input stops. Distance to the target stays within
/// `[ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE]`.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    /// Azimuth around +Y, measured from +Z.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
    aspect: f32,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let mut cam = Self {
            target,
            radius,
            theta,
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
            aspect: aspect.max(f32::EPSILON),
        };
        cam.clamp();
        cam
    }

    pub fn default_view(aspect: f32) -> Self {
        Self::new(Vec3::from(CAMERA_EYE), Vec3::from(CAMERA_TARGET), aspect)
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Queue rotation for a pointer drag of `(dx, dy)` pixels on a viewport `height` pixels tall.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, height: f32) {
        let h = height.max(1.0);
        self.delta_theta -= 2.0 * PI * dx / h * ORBIT_ROTATE_SPEED;
        self.delta_phi -= 2.0 * PI * dy / h * ORBIT_ROTATE_SPEED;
    }

    /// Queue zoom for a wheel event; negative `delta_y` moves closer.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.zoom_scale *= ORBIT_ZOOM_BASE;
        } else if delta_y > 0.0 {
            self.zoom_scale /= ORBIT_ZOOM_BASE;
        }
    }

    /// Apply a damped step of the queued motion.
    pub fn update(&mut self) {
        self.theta += self.delta_theta * ORBIT_DAMPING;
        self.phi += self.delta_phi * ORBIT_DAMPING;
        self.radius *= self.zoom_scale;
        self.clamp();
        self.delta_theta *= 1.0 - ORBIT_DAMPING;
        self.delta_phi *= 1.0 - ORBIT_DAMPING;
        self.zoom_scale = 1.0;
    }

    fn clamp(&mut self) {
        self.phi = self.phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
        self.radius = self.radius.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    pub fn eye(&self) -> Vec3 {
        let r = self.distance();
        let sin_phi = self.phi.sin();
        self.target()
            + Vec3::new(
                r * sin_phi * self.theta.sin(),
                r * self.phi.cos(),
                r * sin_phi * self.theta.cos(),
            )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOV_Y_DEG.to_radians(),
            self.aspect(),
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
