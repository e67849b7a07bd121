/// Attribute carrying per-vertex positions
pub const POSITION_ATTRIBUTE: &str = "a_vertex_position";
/// Model-view matrix uniform
pub const MODEL_VIEW_UNIFORM: &str = "u_model_view";
/// Projection matrix uniform
pub const PROJECTION_UNIFORM: &str = "u_projection";

/// Vertex shader: position through model-view and projection, nothing else
pub const SOLID_VERTEX_SHADER: &str = r#"#version 300 es
in vec4 a_vertex_position;

uniform mat4 u_model_view;
uniform mat4 u_projection;

void main() {
    gl_Position = u_projection * u_model_view * a_vertex_position;
}
"#;

/// Fragment shader: flat opaque white
pub const SOLID_FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

out vec4 fragColor;

void main() {
    fragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_version() {
        assert!(SOLID_VERTEX_SHADER.starts_with("#version 300 es"));
        assert!(SOLID_FRAGMENT_SHADER.starts_with("#version 300 es"));
    }

    #[test]
    fn test_slot_names_declared() {
        assert!(SOLID_VERTEX_SHADER.contains(&format!("in vec4 {};", POSITION_ATTRIBUTE)));
        assert!(SOLID_VERTEX_SHADER.contains(&format!("uniform mat4 {};", MODEL_VIEW_UNIFORM)));
        assert!(SOLID_VERTEX_SHADER.contains(&format!("uniform mat4 {};", PROJECTION_UNIFORM)));
    }
}
