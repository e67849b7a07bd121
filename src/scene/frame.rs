use std::f64::consts::TAU;

use crate::config::PyramidConfig;
use crate::math::{Mat4, Vec3};
use super::OrbitCamera;

/// Mutable state carried from one frame to the next
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderState {
    /// Orbit angle in radians; grows by elapsed seconds, never wrapped
    pub rotation: f64,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f64) {
        self.rotation += dt;
    }

    /// Angle reduced to one turn, for the single-precision camera maths
    pub fn orbit_angle(&self) -> f32 {
        self.rotation.rem_euclid(TAU) as f32
    }
}

/// Converts animation-frame timestamps (ms) into per-frame deltas (s)
///
/// The first tick measures from timestamp 0, matching the browser's
/// `requestAnimationFrame` origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    then: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let now = now_ms * 0.001;
        let dt = now - self.then;
        self.then = now;
        dt
    }
}

/// Matrices uploaded for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameTransforms {
    pub projection: Mat4,
    /// Base view matrix, used as the cube's model-view
    pub view: Mat4,
    pub pyramid_model_view: Mat4,
}

impl FrameTransforms {
    pub fn compute(camera: &OrbitCamera, pyramid: &PyramidConfig, state: &RenderState, aspect: f32) -> Self {
        let view = camera.view(state.orbit_angle());
        let scale = pyramid.scale;
        Self {
            projection: camera.projection(aspect),
            view,
            pyramid_model_view: view
                .translate(pyramid.offset)
                .scaled(Vec3::new(scale, scale, scale)),
        }
    }
}
