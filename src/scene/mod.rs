//! Camera and per-frame state for the orbiting view
//!
//! Everything here is plain math so it runs without a GPU.

mod camera;
mod frame;

pub use camera::OrbitCamera;
pub use frame::{FrameClock, FrameTransforms, RenderState};
