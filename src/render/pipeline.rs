use crate::config::{PyramidConfig, SceneConfig};
use crate::error::RenderError;
use crate::mesh::Mesh;
use crate::scene::{FrameTransforms, OrbitCamera, RenderState};
use super::buffers::GeometryBuffers;
use super::program::ShaderProgram;
use super::shaders::{SOLID_FRAGMENT_SHADER, SOLID_VERTEX_SHADER};
use super::webgl::WebGLContext;

/// Draws the cube and the pyramid once per frame
pub struct FrameRenderer {
    program: ShaderProgram,
    cube: GeometryBuffers,
    pyramid: GeometryBuffers,
    camera: OrbitCamera,
    pyramid_config: PyramidConfig,
    clear_color: [f32; 4],
}

impl FrameRenderer {
    pub fn new(ctx: &WebGLContext, config: &SceneConfig) -> Result<Self, RenderError> {
        let program = ShaderProgram::new(ctx, SOLID_VERTEX_SHADER, SOLID_FRAGMENT_SHADER)?;

        let cube_mesh = Mesh::cube();
        let pyramid_mesh = Mesh::pyramid(config.pyramid.mode);
        if pyramid_mesh.overdraws() {
            log::warn!(
                "Pyramid draw requests {} vertices from a {}-vertex buffer; the context either rejects it (INVALID_OPERATION) or clamps the out-of-range fetches",
                pyramid_mesh.draw_count,
                pyramid_mesh.vertex_count()
            );
        }

        let cube = GeometryBuffers::upload(ctx, &cube_mesh, program.vertex_position)?;
        let pyramid = GeometryBuffers::upload(ctx, &pyramid_mesh, program.vertex_position)?;

        Ok(Self {
            program,
            cube,
            pyramid,
            camera: OrbitCamera::from_config(&config.camera),
            pyramid_config: config.pyramid,
            clear_color: config.clear_color,
        })
    }

    /// Render a frame at the current angle, then advance it by `dt` seconds
    pub fn render(&self, ctx: &WebGLContext, state: &mut RenderState, aspect: f32, dt: f64) {
        ctx.clear(self.clear_color);
        ctx.disable_culling();
        ctx.enable_depth_test();

        let frame = FrameTransforms::compute(&self.camera, &self.pyramid_config, state, aspect);

        self.program.bind(ctx);
        ctx.uniform_matrix4fv(Some(&self.program.projection), frame.projection.as_slice());

        ctx.uniform_matrix4fv(Some(&self.program.model_view), frame.view.as_slice());
        self.cube.draw(ctx);

        ctx.uniform_matrix4fv(Some(&self.program.model_view), frame.pyramid_model_view.as_slice());
        self.pyramid.draw(ctx);

        state.advance(dt);
    }
}
