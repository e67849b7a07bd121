use crate::config::CameraConfig;
use crate::math::{Mat4, Vec3};

/// Camera circling the target at a fixed elevation
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Horizontal distance from the target
    pub ground_distance: f32,
    /// Height above the target
    pub height: f32,
    pub target: Vec3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let elevation = config.elevation_deg.to_radians();
        Self {
            ground_distance: config.radius * elevation.cos(),
            height: config.radius * elevation.sin(),
            target: config.target,
            fov: config.fov_deg.to_radians(),
            near: config.near,
            far: config.far,
        }
    }

    /// Eye position for a rotation angle in radians
    pub fn eye(&self, angle: f32) -> Vec3 {
        self.target
            + Vec3::new(
                self.ground_distance * angle.cos(),
                self.height,
                self.ground_distance * angle.sin(),
            )
    }

    pub fn view(&self, angle: f32) -> Mat4 {
        Mat4::look_at(self.eye(angle), self.target, Vec3::UP)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.fov, aspect, self.near, self.far)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_eye_at_zero_angle() {
        let camera = OrbitCamera::default();
        let eye = camera.eye(0.0);
        let ground = 10.0 * FRAC_PI_4.cos();
        let height = 10.0 * FRAC_PI_4.sin();
        assert!((eye.x - ground).abs() < 1e-5);
        assert!((eye.y - height).abs() < 1e-5);
        assert!(eye.z.abs() < 1e-5);
    }

    #[test]
    fn test_eye_stays_on_orbit() {
        let camera = OrbitCamera::default();
        for step in 0..16 {
            let eye = camera.eye(step as f32 * 0.4);
            assert!((eye.length() - 10.0).abs() < 1e-4);
            assert!((eye.y - camera.height).abs() < 1e-5);
        }
    }

    #[test]
    fn test_quarter_turn_moves_eye_to_z() {
        let eye = OrbitCamera::default().eye(FRAC_PI_2);
        assert!(eye.x.abs() < 1e-4);
        assert!((eye.z - 10.0 * FRAC_PI_4.cos()).abs() < 1e-4);
    }

    #[test]
    fn test_view_centers_target() {
        let camera = OrbitCamera::default();
        let p = camera.view(1.3).transform_point(Vec3::ZERO);
        assert!(p.x.abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
        assert!((p.z + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_uses_fov() {
        let camera = OrbitCamera::default();
        let proj = camera.projection(1.0);
        let expected = Mat4::perspective(FRAC_PI_4, 1.0, 0.1, 100.0);
        assert!(proj.approx_eq(&expected, 1e-6));
    }
}
