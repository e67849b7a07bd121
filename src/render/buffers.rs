use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlVertexArrayObject};
use crate::error::RenderError;
use crate::mesh::Mesh;
use super::webgl::WebGLContext;

/// GPU-resident copy of one mesh, uploaded once and never written again
pub struct GeometryBuffers {
    vao: WebGlVertexArrayObject,
    // Held so the buffers live as long as the VAO referencing them
    _vertex_buffer: WebGlBuffer,
    _index_buffer: Option<WebGlBuffer>,
    draw_count: i32,
    indexed: bool,
}

impl GeometryBuffers {
    /// Upload positions (3 floats per vertex) and, if present, 16-bit indices
    pub fn upload(ctx: &WebGLContext, mesh: &Mesh, position_location: u32) -> Result<Self, RenderError> {
        let gl = &ctx.gl;

        let vao = ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        let vertex_buffer = ctx.create_buffer_f32(&mesh.vertex_data(), WebGl2RenderingContext::STATIC_DRAW)?;
        gl.enable_vertex_attrib_array(position_location);
        gl.vertex_attrib_pointer_with_i32(position_location, 3, WebGl2RenderingContext::FLOAT, false, 0, 0);

        let index_buffer = if mesh.is_indexed() {
            Some(ctx.create_index_buffer(mesh.index_data(), WebGl2RenderingContext::STATIC_DRAW)?)
        } else {
            None
        };

        gl.bind_vertex_array(None);
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, None);

        log::debug!(
            "Uploaded mesh: {} vertices, {} indices",
            mesh.vertex_count(),
            mesh.index_data().len()
        );

        Ok(Self {
            vao,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            draw_count: mesh.draw_count,
            indexed: mesh.is_indexed(),
        })
    }

    /// Bind and issue the triangle-list draw. Errors raised by the context are not checked.
    pub fn draw(&self, ctx: &WebGLContext) {
        let gl = &ctx.gl;
        gl.bind_vertex_array(Some(&self.vao));

        if self.indexed {
            gl.draw_elements_with_i32(
                WebGl2RenderingContext::TRIANGLES,
                self.draw_count,
                WebGl2RenderingContext::UNSIGNED_SHORT,
                0,
            );
        } else {
            gl.draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, self.draw_count);
        }

        gl.bind_vertex_array(None);
    }

    pub fn draw_count(&self) -> i32 {
        self.draw_count
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed
    }
}
