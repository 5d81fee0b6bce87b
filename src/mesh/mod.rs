pub mod vertex;

pub use vertex::{pack_vertices, AttributeLayout, Vertex, VertexLayout, TRIANGLE};
