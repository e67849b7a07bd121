use serde::{Deserialize, Serialize};
use crate::math::Vec3;
use super::Mesh;

/// Vertices requested by the base-only draw (4 triangles x 3)
pub const BASE_ONLY_DRAW_COUNT: i32 = 12;

const APEX: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Which geometry backs the pyramid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PyramidMode {
    /// Four coplanar base points drawn as a 12-vertex triangle list.
    /// The draw reads past the end of the buffer; WebGL rejects it.
    #[default]
    BaseOnly,
    /// Square base plus apex, 6 indexed triangles
    Solid,
}

fn base() -> [Vec3; 4] {
    [
        Vec3::new(-0.5, 0.0, -0.5),
        Vec3::new(0.5, 0.0, -0.5),
        Vec3::new(0.5, 0.0, 0.5),
        Vec3::new(-0.5, 0.0, 0.5),
    ]
}

impl Mesh {
    pub fn pyramid(mode: PyramidMode) -> Self {
        let mut mesh = Mesh::new();
        let b = mesh.add_vertices(base());

        match mode {
            PyramidMode::BaseOnly => {
                mesh.draw_count = BASE_ONLY_DRAW_COUNT;
            }
            PyramidMode::Solid => {
                let apex = mesh.add_vertices([APEX]);
                mesh.add_quad(b, b + 1, b + 2, b + 3);
                for i in 0..4 {
                    mesh.add_triangle(b + i, b + (i + 1) % 4, apex);
                }
            }
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only_keeps_overdraw() {
        let pyramid = Mesh::pyramid(PyramidMode::BaseOnly);
        assert_eq!(pyramid.vertex_count(), 4);
        assert!(!pyramid.is_indexed());
        assert_eq!(pyramid.draw_count, 12);
        assert!(pyramid.overdraws());
        assert!(pyramid.vertices.iter().all(|v| v.y == 0.0));
    }

    #[test]
    fn test_solid_pyramid() {
        let pyramid = Mesh::pyramid(PyramidMode::Solid);
        assert_eq!(pyramid.vertex_count(), 5);
        assert_eq!(pyramid.index_data().len(), 18);
        assert_eq!(pyramid.triangle_count(), 6);
        assert!(!pyramid.overdraws());
        assert!(pyramid.index_data().iter().all(|&i| i < 5));

        // every side triangle ends at the apex
        let sides = &pyramid.index_data()[6..];
        assert!(sides.chunks(3).all(|tri| tri[2] == 4));
        assert_eq!(pyramid.vertices[4], APEX);
    }

    #[test]
    fn test_default_mode_is_base_only() {
        assert_eq!(PyramidMode::default(), PyramidMode::BaseOnly);
    }
}
