use serde::{Deserialize, Serialize};

/// Number of f32 values in one packed vertex record
pub const FLOATS_PER_VERTEX: usize = 5;

const F32_SIZE: usize = std::mem::size_of::<f32>();

/// A single vertex: position in normalized device coordinates, then RGB color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 2], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Decode vertex `index` from raw buffer bytes through the declared layout.
    /// Returns `None` when the buffer is too short or the offset overflows.
    pub fn read(bytes: &[u8], index: usize) -> Option<Self> {
        let base = index.checked_mul(VertexLayout::STRIDE as usize)?;
        let position = VertexLayout::POSITION.read(bytes, base)?;
        let color = VertexLayout::COLOR.read(bytes, base)?;

        Some(Self {
            position: [position[0], position[1]],
            color: [color[0], color[1], color[2]],
        })
    }
}

/// Read pattern for one named shader input within a vertex record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    /// Attribute name as declared in the vertex shader
    pub name: &'static str,
    /// Number of f32 components
    pub components: i32,
    /// Byte offset from the start of the vertex record
    pub offset: i32,
}

impl AttributeLayout {
    fn read(&self, bytes: &[u8], base: usize) -> Option<Vec<f32>> {
        let start = base.checked_add(self.offset as usize)?;
        let end = start.checked_add(self.components as usize * F32_SIZE)?;
        let slice = bytes.get(start..end)?;

        Some(
            slice
                .chunks_exact(F32_SIZE)
                .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        )
    }
}

/// Interleaved layout: position(2) + color(3) = 5 floats per vertex
pub struct VertexLayout;

impl VertexLayout {
    pub const STRIDE: i32 = (FLOATS_PER_VERTEX * F32_SIZE) as i32;

    pub const POSITION: AttributeLayout = AttributeLayout {
        name: "vertPosition",
        components: 2,
        offset: 0,
    };

    pub const COLOR: AttributeLayout = AttributeLayout {
        name: "vertColor",
        components: 3,
        offset: 2 * F32_SIZE as i32,
    };

    pub const ATTRIBUTES: [AttributeLayout; 2] = [Self::POSITION, Self::COLOR];
}

/// The default triangle: top-center yellow, bottom-left purple, bottom-right teal
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new([0.0, 0.5], [1.0, 1.0, 0.0]),
    Vertex::new([-0.5, -0.5], [0.7, 0.0, 1.0]),
    Vertex::new([0.5, -0.5], [0.1, 1.0, 0.6]),
];

/// Flatten vertices into contiguous upload data
pub fn pack_vertices(vertices: &[Vertex]) -> Vec<f32> {
    let mut data = Vec::with_capacity(vertices.len() * FLOATS_PER_VERTEX);
    for v in vertices {
        data.extend_from_slice(&v.position);
        data.extend_from_slice(&v.color);
    }
    data
}
