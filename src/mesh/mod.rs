pub mod solid;
pub mod cube;
pub mod pyramid;

pub use solid::Mesh;
pub use pyramid::PyramidMode;
