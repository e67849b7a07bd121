use crate::math::Vec3;
use super::Mesh;

/// Corner positions of each face, wound so indices `a, a+1, a+2, a+3` form the quad
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    // Front
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // Back
    [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
    // Top
    [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
    // Bottom
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
    // Right
    [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
    // Left
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
];

impl Mesh {
    /// Cube spanning [-1, 1] on every axis: 24 vertices, 36 indices
    pub fn cube() -> Self {
        let mut mesh = Mesh::new();
        for face in CUBE_FACES {
            let a = mesh.add_vertices(face.iter().map(|&[x, y, z]| Vec3::new(x, y, z)));
            mesh.add_quad(a, a + 1, a + 2, a + 3);
        }
        mesh
    }
}
