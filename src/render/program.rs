use web_sys::{WebGlProgram, WebGlUniformLocation};
use crate::error::RenderError;
use super::shaders::{MODEL_VIEW_UNIFORM, POSITION_ATTRIBUTE, PROJECTION_UNIFORM};
use super::webgl::WebGLContext;

/// Linked program with its resolved attribute and uniform slots
pub struct ShaderProgram {
    program: WebGlProgram,
    pub vertex_position: u32,
    pub model_view: WebGlUniformLocation,
    pub projection: WebGlUniformLocation,
}

impl ShaderProgram {
    /// Compile, link and resolve slots; any failure leaves nothing behind
    pub fn new(ctx: &WebGLContext, vertex_src: &str, fragment_src: &str) -> Result<Self, RenderError> {
        let program = ctx.create_program(vertex_src, fragment_src)?;

        let slots = Self::resolve_slots(ctx, &program);
        let (vertex_position, model_view, projection) = match slots {
            Ok(slots) => slots,
            Err(err) => {
                ctx.gl.delete_program(Some(&program));
                return Err(err);
            }
        };

        log::debug!("Shader program linked, {} at location {}", POSITION_ATTRIBUTE, vertex_position);

        Ok(Self {
            program,
            vertex_position,
            model_view,
            projection,
        })
    }

    fn resolve_slots(
        ctx: &WebGLContext,
        program: &WebGlProgram,
    ) -> Result<(u32, WebGlUniformLocation, WebGlUniformLocation), RenderError> {
        let missing = |name: &str| RenderError::MissingSlot(name.to_string());

        let position = ctx.get_attrib_location(program, POSITION_ATTRIBUTE)
            .ok_or_else(|| missing(POSITION_ATTRIBUTE))?;
        let model_view = ctx.get_uniform_location(program, MODEL_VIEW_UNIFORM)
            .ok_or_else(|| missing(MODEL_VIEW_UNIFORM))?;
        let projection = ctx.get_uniform_location(program, PROJECTION_UNIFORM)
            .ok_or_else(|| missing(PROJECTION_UNIFORM))?;

        Ok((position, model_view, projection))
    }

    pub fn program(&self) -> &WebGlProgram {
        &self.program
    }

    pub fn bind(&self, ctx: &WebGLContext) {
        ctx.gl.use_program(Some(&self.program));
    }
}
