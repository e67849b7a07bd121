use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};
use crate::error::{RenderError, ShaderStage};

/// Wrapper around WebGL2 context with helper methods
pub struct WebGLContext {
    pub gl: WebGl2RenderingContext,
}

impl WebGLContext {
    pub fn new(gl: WebGl2RenderingContext) -> Self {
        Self { gl }
    }

    /// Acquire a WebGL2 context from a canvas
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, RenderError> {
        let gl = canvas
            .get_context("webgl2")?
            .ok_or(RenderError::ContextUnavailable)?
            .dyn_into::<WebGl2RenderingContext>()
            .map_err(|_| RenderError::ContextUnavailable)?;
        Ok(Self::new(gl))
    }

    /// Compile a shader from source
    pub fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader, RenderError> {
        let gl = &self.gl;
        let shader_type = match stage {
            ShaderStage::Vertex => WebGl2RenderingContext::VERTEX_SHADER,
            ShaderStage::Fragment => WebGl2RenderingContext::FRAGMENT_SHADER,
        };

        let shader = gl.create_shader(shader_type)
            .ok_or(RenderError::Resource("shader"))?;

        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        if gl.get_shader_parameter(&shader, WebGl2RenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(shader)
        } else {
            let log = gl.get_shader_info_log(&shader).unwrap_or_default();
            gl.delete_shader(Some(&shader));
            Err(RenderError::ShaderCompile { stage, log })
        }
    }

    /// Create a shader program from vertex and fragment shaders
    pub fn create_program(&self, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, RenderError> {
        let gl = &self.gl;

        let program = gl.create_program().ok_or(RenderError::Resource("program"))?;

        let shaders = self.compile_shader(ShaderStage::Vertex, vert_src).and_then(|vert| {
            match self.compile_shader(ShaderStage::Fragment, frag_src) {
                Ok(frag) => Ok((vert, frag)),
                Err(err) => {
                    gl.delete_shader(Some(&vert));
                    Err(err)
                }
            }
        });
        let (vert_shader, frag_shader) = match shaders {
            Ok(shaders) => shaders,
            Err(err) => {
                gl.delete_program(Some(&program));
                return Err(err);
            }
        };

        gl.attach_shader(&program, &vert_shader);
        gl.attach_shader(&program, &frag_shader);
        gl.link_program(&program);

        // Shaders stay alive while attached; flag them for deletion with the program
        gl.delete_shader(Some(&vert_shader));
        gl.delete_shader(Some(&frag_shader));

        if gl.get_program_parameter(&program, WebGl2RenderingContext::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(program)
        } else {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            Err(RenderError::ProgramLink(log))
        }
    }

    /// Create a vertex buffer and upload data
    pub fn create_buffer_f32(&self, data: &[f32], usage: u32) -> Result<WebGlBuffer, RenderError> {
        let gl = &self.gl;

        let buffer = gl.create_buffer().ok_or(RenderError::Resource("vertex buffer"))?;
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&buffer));

        // Safety: the view is consumed by buffer_data before any allocation can move `data`
        unsafe {
            let array = js_sys::Float32Array::view(data);
            gl.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ARRAY_BUFFER,
                &array,
                usage,
            );
        }

        Ok(buffer)
    }

    /// Create an index buffer of 16-bit indices
    ///
    /// Left bound to ELEMENT_ARRAY_BUFFER so a bound VAO records it.
    pub fn create_index_buffer(&self, data: &[u16], usage: u32) -> Result<WebGlBuffer, RenderError> {
        let gl = &self.gl;

        let buffer = gl.create_buffer().ok_or(RenderError::Resource("index buffer"))?;
        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&buffer));

        unsafe {
            let array = js_sys::Uint16Array::view(data);
            gl.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER,
                &array,
                usage,
            );
        }

        Ok(buffer)
    }

    /// Create a Vertex Array Object
    pub fn create_vao(&self) -> Result<WebGlVertexArrayObject, RenderError> {
        self.gl.create_vertex_array().ok_or(RenderError::Resource("vertex array"))
    }

    /// Get attribute location, `None` when the linked program has no such input
    pub fn get_attrib_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    /// Get uniform location
    pub fn get_uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    /// Set mat4 uniform
    pub fn uniform_matrix4fv(&self, location: Option<&WebGlUniformLocation>, data: &[f32; 16]) {
        self.gl.uniform_matrix4fv_with_f32_array(location, false, data);
    }

    /// Clear colour and depth
    pub fn clear(&self, [r, g, b, a]: [f32; 4]) {
        self.gl.clear_color(r, g, b, a);
        self.gl.clear_depth(1.0);
        self.gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT | WebGl2RenderingContext::DEPTH_BUFFER_BIT);
    }

    /// Depth test with LEQUAL so coplanar fragments drawn later still pass
    pub fn enable_depth_test(&self) {
        self.gl.enable(WebGl2RenderingContext::DEPTH_TEST);
        self.gl.depth_func(WebGl2RenderingContext::LEQUAL);
    }

    pub fn disable_culling(&self) {
        self.gl.disable(WebGl2RenderingContext::CULL_FACE);
    }
}
