use crate::render::pick::Ray;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::{PI, TAU};

const MIN_POLAR_EPS: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            fov_y_deg: 60.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.05,
            min_distance: 5.0,
            max_distance: 20.0,
            max_polar: PI / 1.8,
            auto_rotate: true,
            auto_rotate_speed: 0.8,
        }
    }
}

/// Perspective camera orbiting a target, with damped drag rotation, dolly
/// and optional auto-rotation.
///
/// Spherical coordinates match the usual Y-up convention: `theta` is the
/// azimuth measured from +Z towards +X, `phi` the polar angle from +Y.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    theta_delta: f32,
    phi_delta: f32,
    aspect: f32,
    settings: OrbitSettings,
}

impl OrbitCamera {
    pub fn new(position: Vec3, target: Vec3, aspect: f32, settings: OrbitSettings) -> Self {
        let offset = position - target;
        let radius = offset.length().max(1e-4);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let mut camera = Self {
            target,
            radius,
            theta,
            phi,
            theta_delta: 0.0,
            phi_delta: 0.0,
            aspect: aspect.max(1e-4),
            settings,
        };
        camera.clamp();
        camera
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    pub fn auto_rotate(&self) -> bool {
        self.settings.auto_rotate
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.settings.auto_rotate = enabled;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    /// Queue a drag rotation; `delta` is in pixels, `viewport_height` scales
    /// it so a full-height drag is one turn.
    pub fn rotate_by_pixels(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.theta_delta -= TAU * delta.x / height;
        self.phi_delta -= TAU * delta.y / height;
    }

    /// Positive `steps` zoom in.
    pub fn dolly(&mut self, steps: f32) {
        self.radius *= 0.95f32.powf(steps);
        self.clamp();
    }

    /// Advance one frame: auto-rotation, damped rotation and clamping.
    pub fn update(&mut self, dt: f32) {
        if self.settings.auto_rotate {
            self.theta_delta -= TAU / 60.0 * self.settings.auto_rotate_speed * dt;
        }

        let damping = self.settings.damping.clamp(0.0, 1.0);
        if damping > 0.0 {
            self.theta += self.theta_delta * damping;
            self.phi += self.phi_delta * damping;
            self.theta_delta *= 1.0 - damping;
            self.phi_delta *= 1.0 - damping;
        } else {
            self.theta += self.theta_delta;
            self.phi += self.phi_delta;
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
        }
        self.theta = (self.theta + PI).rem_euclid(TAU) - PI;
        self.clamp();
    }

    fn clamp(&mut self) {
        let max_polar = self.settings.max_polar.min(PI - MIN_POLAR_EPS);
        self.phi = self.phi.clamp(MIN_POLAR_EPS, max_polar);
        self.radius = self
            .radius
            .clamp(self.settings.min_distance, self.settings.max_distance);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.settings.fov_y_deg.to_radians(),
            self.aspect,
            self.settings.near,
            self.settings.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Ray from the camera through a point in normalized device coordinates.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let origin = self.position();
        Ray::new(origin, far - near)
    }
}

#[cfg(test)]
impl OrbitCamera {
    fn distance(&self) -> f32 {
        self.radius
    }

    fn polar_angle(&self) -> f32 {
        self.phi
    }

    fn azimuth(&self) -> f32 {
        self.theta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(
            Vec3::new(8.0, 6.0, 8.0),
            Vec3::ZERO,
            16.0 / 9.0,
            OrbitSettings::default(),
        )
    }

    #[test]
    fn spherical_round_trip_keeps_initial_position() {
        let camera = camera();
        assert!((camera.position() - Vec3::new(8.0, 6.0, 8.0)).length() < 1e-4);
    }

    #[test]
    fn distance_is_clamped() {
        let mut camera = camera();
        camera.dolly(200.0);
        assert!((camera.distance() - 5.0).abs() < 1e-5);
        camera.dolly(-200.0);
        assert!((camera.distance() - 20.0).abs() < 1e-5);
    }

    #[test]
    fn polar_angle_never_passes_limit() {
        let mut camera = camera();
        camera.set_auto_rotate(false);
        camera.rotate_by_pixels(Vec2::new(0.0, -5000.0), 720.0);
        for _ in 0..600 {
            camera.update(1.0 / 60.0);
        }
        assert!(camera.polar_angle() <= PI / 1.8 + 1e-5);
        assert!(camera.position().is_finite());
    }

    #[test]
    fn auto_rotate_moves_azimuth_only_when_enabled() {
        let mut camera = camera();
        let start = camera.azimuth();
        camera.update(1.0);
        assert!(camera.azimuth() < start);

        let mut still = self::camera();
        still.set_auto_rotate(false);
        still.update(1.0);
        assert!((still.azimuth() - start).abs() < 1e-6);
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = camera();
        let ray = camera.ray_through(Vec2::ZERO);
        let expected = (Vec3::ZERO - camera.position()).normalize();
        assert!(ray.dir.dot(expected) > 0.9999);
        assert!((ray.origin - camera.position()).length() < 1e-5);
    }

    #[test]
    fn ndc_up_ray_tilts_up() {
        let camera = camera();
        let center = camera.ray_through(Vec2::ZERO);
        let up = camera.ray_through(Vec2::new(0.0, 1.0));
        assert!(up.dir.y > center.dir.y);
    }
}
