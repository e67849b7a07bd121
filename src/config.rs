use serde::Deserialize;
use crate::error::RenderError;
use crate::math::Vec3;
use crate::mesh::PyramidMode;

/// Orbiting camera parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the target along the line of sight
    pub radius: f32,
    /// Elevation above the ground plane, in degrees
    pub elevation_deg: f32,
    pub target: Vec3,
    /// Vertical field of view, in degrees
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            elevation_deg: 45.0,
            target: Vec3::ZERO,
            fov_deg: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Placement of the pyramid relative to the cube
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PyramidConfig {
    pub mode: PyramidMode,
    pub offset: Vec3,
    pub scale: f32,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            mode: PyramidMode::BaseOnly,
            offset: Vec3::new(1.5, 0.0, 0.0),
            scale: 0.5,
        }
    }
}

/// Scene settings, all optional in YAML
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub pyramid: PyramidConfig,
    pub clear_color: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            pyramid: PyramidConfig::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SceneConfig = serde_yaml::from_str(yaml)
            .map_err(|e| RenderError::Config(format!("YAML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), RenderError> {
        let cam = &self.camera;
        if !(cam.radius > 0.0) {
            return Err(RenderError::Config(format!("camera radius must be positive, got {}", cam.radius)));
        }
        if !(cam.fov_deg > 0.0 && cam.fov_deg < 180.0) {
            return Err(RenderError::Config(format!("fov_deg must be in (0, 180), got {}", cam.fov_deg)));
        }
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(RenderError::Config(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                cam.near, cam.far
            )));
        }
        Ok(())
    }
}
