use crate::math::Vec3;

/// Static position-only geometry for one solid
///
/// Vertices are flattened to 3 floats each for upload. An empty index list
/// means the solid is drawn non-indexed with `draw_count` vertices.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u16>,
    /// Vertex count passed to the draw call
    pub draw_count: i32,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vec3>) -> u16 {
        let start = self.vertices.len() as u16;
        self.vertices.extend(verts);
        start
    }

    pub fn add_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
        self.draw_count = self.indices.len() as i32;
    }

    /// Add a quad as two triangles: (a, b, c) and (a, c, d)
    pub fn add_quad(&mut self, a: u16, b: u16, c: u16, d: u16) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Get vertex buffer data as flat f32 array
    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    pub fn index_data(&self) -> &[u16] {
        &self.indices
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.draw_count.max(0) as usize / 3
    }

    /// True when a non-indexed draw requests more vertices than the buffer holds
    pub fn overdraws(&self) -> bool {
        !self.is_indexed() && self.draw_count.max(0) as usize > self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_quad_tracks_draw_count() {
        let mut mesh = Mesh::new();
        let start = mesh.add_vertices([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]);
        mesh.add_quad(start, start + 1, start + 2, start + 3);

        assert_eq!(mesh.index_data(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.draw_count, 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.is_indexed());
        assert!(!mesh.overdraws());
    }

    #[test]
    fn test_vertex_data_is_flat() {
        let mut mesh = Mesh::new();
        mesh.add_vertices([Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(mesh.vertex_data(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_overdraw_detection() {
        let mut mesh = Mesh::new();
        mesh.add_vertices([Vec3::ZERO; 4]);
        mesh.draw_count = 12;
        assert!(mesh.overdraws());
        mesh.draw_count = 3;
        assert!(!mesh.overdraws());
    }
}
